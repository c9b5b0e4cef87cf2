use yew::prelude::*;

use crate::components::{
    about::About, backdrop::Backdrop, contact::Contact, footer::Footer, gallery::Gallery,
    header::Header, hero::Hero, services::Services,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        background: #000;
                        color: #fff;
                        font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                        overflow-x: hidden;
                    }
                    .site { position: relative; min-height: 100vh; }
                    .site-content { position: relative; z-index: 20; }
                    .container {
                        width: 100%;
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        box-sizing: border-box;
                    }
                    .section-heading { text-align: center; margin-bottom: 4rem; }
                    h2 { font-size: 3rem; font-weight: 700; margin: 0 0 1.5rem; line-height: 1.1; }
                    .text-white { color: #fff; }
                    .text-gradient {
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-lead {
                        font-size: 1.25rem;
                        color: #d1d5db;
                        max-width: 48rem;
                        margin: 0 auto 3rem;
                        line-height: 1.6;
                    }
                    .cta-primary,
                    .cta-secondary {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 1.125rem;
                        text-decoration: none;
                        transition: all 0.3s ease-out;
                    }
                    .cta-primary {
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        color: #000;
                    }
                    .cta-primary:hover {
                        transform: scale(1.05);
                        box-shadow: 0 0 25px rgba(251, 191, 36, 0.7);
                    }
                    .cta-secondary {
                        border: 2px solid #fbbf24;
                        color: #fbbf24;
                    }
                    .cta-secondary:hover { background: #fbbf24; color: #000; }
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.visible { opacity: 1; transform: none; }
                    @media (min-width: 768px) {
                        h2 { font-size: 3.75rem; }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        html { scroll-behavior: auto; }
                        .reveal { opacity: 1; transform: none; transition: none; }
                        *, *::before, *::after { animation: none !important; transition: none !important; }
                    }
                "#}
            </style>
            <Backdrop />
            <div class="site-content">
                <Header />
                <Hero />
                <About />
                <Services />
                <Gallery />
                <Contact />
                <Footer />
            </div>
        </div>
    }
}
