use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{whatsapp_link, BRAND, LOGO_SRC};

const STATS: [(&str, &str, &str); 3] = [
    ("🏆", "500+", "Drinks Criados"),
    ("👥", "1000+", "Clientes Felizes"),
    ("✨", "15+", "Anos de Experiência"),
];

/// Content fades out over the first 300px of scroll.
fn content_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / 300.0).clamp(0.0, 1.0)
}

/// Background video drifts down 150px over the first 500px.
fn parallax_offset(scroll_y: f64) -> f64 {
    (scroll_y.max(0.0) / 500.0).min(1.0) * 150.0
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let video_style = format!("transform: translateY({:.1}px);", parallax_offset(scroll_y));
    let content_style = format!("opacity: {:.3};", content_opacity(scroll_y));

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-video-wrap {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .hero-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-video-dim {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.85);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 20;
                        text-align: center;
                        padding: 0 1.5rem;
                        max-width: 72rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .hero-logo {
                        display: block;
                        height: 300px;
                        width: auto;
                        user-select: none;
                    }
                    .hero-slogan {
                        font-size: 1.125rem;
                        color: #d1d5db;
                        margin: -64px 0 0.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        margin-top: 0.25rem;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin: 2rem 0 2.5rem;
                        width: 100%;
                    }
                    .stat-card {
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(251, 191, 36, 0.2);
                        backdrop-filter: blur(4px);
                    }
                    .stat-icon { font-size: 2rem; margin-bottom: 1rem; }
                    .stat-card h3 { font-size: 1.875rem; color: #fff; margin: 0 0 0.25rem; }
                    .stat-card p { color: #9ca3af; margin: 0; }
                    .scroll-hint {
                        color: #fbbf24;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    @media (min-width: 640px) {
                        .hero-cta-group { flex-direction: row; }
                    }
                    @media (min-width: 768px) {
                        .hero-logo { height: 360px; }
                        .hero-slogan { font-size: 1.5rem; margin-top: -84px; }
                        .hero-stats { grid-template-columns: repeat(3, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .hero-logo { height: 420px; }
                        .hero-slogan { margin-top: -96px; }
                    }
                "#}
            </style>
            <div class="hero-video-wrap" style={video_style}>
                <video
                    class="hero-video"
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                    poster="/media/hero-poster.jpg"
                    aria-hidden="true"
                >
                    <source src="/media/VideoFundo.mp4" type="video/mp4" />
                </video>
                <div class="hero-video-dim"></div>
            </div>

            <div class="hero-content" style={content_style}>
                <img src={LOGO_SRC} alt={BRAND.name} decoding="async" loading="eager" class="hero-logo" />
                <p class="hero-slogan">{ BRAND.slogan }</p>

                <div class="hero-cta-group">
                    <a href={whatsapp_link("Olá! Gostaria de solicitar um orçamento.")} target="_blank" rel="noopener noreferrer" class="cta-primary">
                        {"Solicitar Orçamento"}
                    </a>
                    <a href="#gallery" class="cta-secondary">
                        {"Ver Portfólio"}
                    </a>
                </div>

                <div class="hero-stats">
                    {
                        STATS.iter().map(|(icon, number, label)| html! {
                            <div key={*label} class="stat-card">
                                <div class="stat-icon">{ *icon }</div>
                                <h3>{ *number }</h3>
                                <p>{ *label }</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <p class="scroll-hint">{"Role para descobrir mais"}</p>
                <span class="scroll-chevron" aria-hidden="true">{"⌄"}</span>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_fades_over_first_300px() {
        assert_eq!(content_opacity(0.0), 1.0);
        assert!((content_opacity(150.0) - 0.5).abs() < 1e-9);
        assert_eq!(content_opacity(300.0), 0.0);
        assert_eq!(content_opacity(5000.0), 0.0);
    }

    #[test]
    fn parallax_caps_at_150px() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert!((parallax_offset(250.0) - 75.0).abs() < 1e-9);
        assert_eq!(parallax_offset(1000.0), 150.0);
        assert_eq!(parallax_offset(-20.0), 0.0);
    }
}
