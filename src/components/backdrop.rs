use web_sys::window;
use yew::prelude::*;

const PARTICLE_COUNT: usize = 28;
const MOBILE_PARTICLE_COUNT: usize = 16;
const MOBILE_BREAKPOINT: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Percent of viewport width.
    pub x: u32,
    /// Percent of viewport height.
    pub y: u32,
    pub size_px: u32,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// Positions derive from the index alone so re-renders never move a dot.
pub fn particle(i: usize) -> Particle {
    let i = i as u32;
    Particle {
        x: (i * 37) % 100,
        y: (i * 53) % 100,
        size_px: 10 + (i % 6) * 4,
        duration_s: 6.0 + f64::from(i % 5) * 1.2,
        delay_s: f64::from(i % 7) * 0.6,
    }
}

pub fn particle_count(reduced_motion: bool, viewport_width: f64) -> usize {
    if reduced_motion {
        0
    } else if viewport_width < MOBILE_BREAKPOINT {
        MOBILE_PARTICLE_COUNT
    } else {
        PARTICLE_COUNT
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT)
}

#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    let count = use_state(|| particle_count(prefers_reduced_motion(), viewport_width()));

    html! {
        <>
            <style>
                {r#"
                    .backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 0;
                    }
                    .backdrop-gradient {
                        position: absolute;
                        inset: 0;
                        opacity: 0.9;
                        background: linear-gradient(135deg, #0f172a, #581c87, #0f172a);
                    }
                    .backdrop-image {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background: url('/images/hero-bg.jpg') center / cover;
                    }
                    .particles {
                        position: fixed;
                        inset: 0;
                        z-index: 10;
                        pointer-events: none;
                        mix-blend-mode: screen;
                    }
                    .dot {
                        position: absolute;
                        border-radius: 9999px;
                        background: radial-gradient(circle, rgba(251, 191, 36, 0.55), rgba(251, 191, 36, 0));
                    }
                    @keyframes floatY {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 0.4; }
                        50% { opacity: 1; }
                    }
                "#}
            </style>
            <div class="backdrop" aria-hidden="true">
                <div class="backdrop-gradient"></div>
                <div class="backdrop-image"></div>
            </div>
            <div class="particles" aria-hidden="true">
                {
                    (0..*count).map(|i| {
                        let p = particle(i);
                        let style = format!(
                            "left: {}%; top: {}%; width: {}px; height: {}px; \
                             animation: floatY {:.1}s ease-in-out {:.1}s infinite, pulse {:.2}s ease-in-out {:.1}s infinite;",
                            p.x, p.y, p.size_px, p.size_px, p.duration_s, p.delay_s, p.duration_s * 0.8, p.delay_s
                        );
                        html! { <span key={i} class="dot" {style}></span> }
                    }).collect::<Html>()
                }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_in_bounds() {
        for i in 0..PARTICLE_COUNT {
            let p = particle(i);
            assert!(p.x < 100 && p.y < 100);
            assert!((10..=30).contains(&p.size_px));
            assert!(p.duration_s >= 6.0 && p.duration_s <= 10.8 + 1e-9);
            assert!(p.delay_s >= 0.0 && p.delay_s <= 3.6 + 1e-9);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        assert_eq!(particle(5), particle(5));
        assert_eq!(particle(1).x, 37);
        assert_eq!(particle(1).y, 53);
    }

    #[test]
    fn reduced_motion_disables_particles() {
        assert_eq!(particle_count(true, 1920.0), 0);
        assert_eq!(particle_count(false, 375.0), MOBILE_PARTICLE_COUNT);
        assert_eq!(particle_count(false, 1920.0), PARTICLE_COUNT);
    }
}
