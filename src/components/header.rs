use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{BRAND, LOGO_SRC, NAV_ITEMS};

const SCROLLED_THRESHOLD: f64 = 50.0;

fn contact_icons() -> Html {
    html! {
        <>
            <a href={BRAND.phone_link} class="icon-link icon-solid" aria-label={format!("Ligar para {}", BRAND.phone_display)}>
                {"☎"}
            </a>
            <a href={BRAND.instagram} target="_blank" rel="noopener noreferrer" class="icon-link" aria-label="Instagram">
                {"IG"}
            </a>
            <a href={BRAND.facebook} target="_blank" rel="noopener noreferrer" class="icon-link" aria-label="Facebook">
                {"f"}
            </a>
        </>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_THRESHOLD;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens; only the menu state changes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s;
                        background: transparent;
                    }
                    .site-header.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(16px);
                        border-bottom: 1px solid rgba(245, 158, 11, 0.2);
                    }
                    .header-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 0;
                    }
                    .brand-link {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        text-decoration: none;
                    }
                    .brand-logo {
                        height: 3.5rem;
                        width: auto;
                        transition: height 0.3s;
                    }
                    .site-header.scrolled .brand-logo {
                        height: 2.5rem;
                    }
                    .brand-slogan {
                        font-size: 0.75rem;
                        color: #d1d5db;
                    }
                    .desktop-nav,
                    .desktop-icons {
                        display: none;
                        align-items: center;
                        gap: 2rem;
                    }
                    .desktop-icons { gap: 1rem; }
                    .nav-link {
                        position: relative;
                        color: #fff;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover { color: #fbbf24; }
                    .icon-link {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(251, 191, 36, 0.3);
                        color: #fbbf24;
                        text-decoration: none;
                        font-size: 0.8rem;
                        font-weight: 700;
                        transition: all 0.3s;
                    }
                    .icon-link:hover { background: #fbbf24; color: #000; }
                    .icon-link.icon-solid {
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        color: #000;
                        border: none;
                    }
                    .burger-menu {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        margin-top: 1rem;
                        padding: 1rem 0;
                        border-top: 1px solid rgba(245, 158, 11, 0.2);
                    }
                    .mobile-icons { display: flex; gap: 1rem; padding-top: 1rem; }
                    @media (min-width: 768px) {
                        .desktop-nav, .desktop-icons { display: flex; }
                        .burger-menu, .mobile-menu { display: none; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="header-row">
                    <a href="#home" class="brand-link" aria-label={BRAND.name}>
                        <img src={LOGO_SRC} alt={BRAND.name} class="brand-logo" />
                        <span class="brand-slogan">{ BRAND.slogan }</span>
                    </a>

                    <nav class="desktop-nav">
                        {
                            NAV_ITEMS.iter().map(|(name, href)| html! {
                                <a key={*name} href={*href} class="nav-link">{ *name }</a>
                            }).collect::<Html>()
                        }
                    </nav>

                    <div class="desktop-icons">
                        { contact_icons() }
                    </div>

                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label={if *menu_open { "Fechar menu" } else { "Abrir menu" }}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                if *menu_open {
                    <nav class="mobile-menu">
                        {
                            NAV_ITEMS.iter().map(|(name, href)| html! {
                                <a key={*name} href={*href} class="nav-link" onclick={close_menu.clone()}>{ *name }</a>
                            }).collect::<Html>()
                        }
                        <div class="mobile-icons">
                            { contact_icons() }
                        </div>
                    </nav>
                }
            </div>
        </header>
    }
}
