use chrono::Datelike;
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::{mailto_link, BRAND};

const LINK_COLUMNS: [(&str, [(&str, &str); 4]); 3] = [
    (
        "Serviços",
        [
            ("Casamentos", "#services"),
            ("Eventos Corporativos", "#services"),
            ("Festas Privadas", "#services"),
            ("Bartender Domiciliar", "#services"),
        ],
    ),
    (
        "Sobre",
        [
            ("Nossa História", "#about"),
            ("Experiência", "#about"),
            ("Depoimentos", "#about"),
            ("Galeria", "#gallery"),
        ],
    ),
    (
        "Contato",
        [
            ("Orçamento", "#contact"),
            ("WhatsApp", "#contact"),
            ("Email", "#contact"),
            ("Localização", "#contact"),
        ],
    ),
];

fn scroll_to_top() {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let on_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        background: #000;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        padding: 4rem 0;
                    }
                    .footer-brand h3 { font-size: 1.875rem; margin: 0 0 1rem; }
                    .footer-brand p { color: #9ca3af; line-height: 1.6; margin-bottom: 1.5rem; }
                    .footer-contact a,
                    .footer-contact span {
                        display: block;
                        color: #9ca3af;
                        text-decoration: none;
                        margin-bottom: 0.75rem;
                    }
                    .footer-contact a:hover { color: #fbbf24; }
                    .footer-column h4 { color: #fff; font-size: 1.125rem; margin: 0 0 1.5rem; }
                    .footer-column ul { list-style: none; padding: 0; margin: 0; }
                    .footer-column li { margin-bottom: 0.75rem; }
                    .footer-column a { color: #9ca3af; text-decoration: none; transition: color 0.3s; }
                    .footer-column a:hover { color: #fbbf24; }
                    .footer-bottom {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 2rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        color: #9ca3af;
                    }
                    .back-to-top {
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        color: #000;
                        cursor: pointer;
                    }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(2, 1fr); }
                        .footer-bottom { flex-direction: row; }
                    }
                    @media (min-width: 1024px) {
                        .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <Reveal class="footer-brand">
                        <h3><span class="text-gradient">{ BRAND.name }</span></h3>
                        <p>
                            {"Criando experiências únicas através da arte da mixologia. Cada drink é uma história, \
                              cada evento uma memória inesquecível."}
                        </p>
                        <div class="footer-contact">
                            <a href={BRAND.phone_link}>{ format!("☎ {}", BRAND.phone_display) }</a>
                            <a href={mailto_link()}>{ format!("✉ {}", BRAND.email) }</a>
                            <span>{ format!("📍 {}", BRAND.city) }</span>
                        </div>
                    </Reveal>

                    {
                        LINK_COLUMNS.iter().enumerate().map(|(index, (title, links))| html! {
                            <Reveal key={*title} class="footer-column" delay_ms={100 * index as u32}>
                                <h4>{ *title }</h4>
                                <ul>
                                    {
                                        links.iter().map(|(label, href)| html! {
                                            <li key={*label}><a href={*href}>{ *label }</a></li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-bottom">
                    <span>{ format!("© {} {}. Feito em {}", year, BRAND.name, BRAND.city) }</span>
                    <button class="back-to-top" aria-label="Voltar ao topo" onclick={on_top}>{"▲"}</button>
                </div>
            </div>
        </footer>
    }
}
