use yew::prelude::*;

use crate::components::reveal::Reveal;

const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    ("🏅", "Certificação", "Cada drink é estudado e pensado"),
    ("📖", "Mixologia Avançada", "Especialista em técnicas clássicas e modernas"),
    ("❤", "Paixão pela Arte", "Cada drink é uma obra de arte única"),
    ("⭐", "Reconhecimento", "Reconhecido e bem avaliado pelos nossos clientes"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                    .about-section {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                        background:
                            linear-gradient(135deg, rgba(15, 23, 42, 0.95), rgba(88, 28, 135, 0.3), rgba(15, 23, 42, 0.95)),
                            url('/images/backgroundsobre.jpg') center / cover;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-copy p {
                        font-size: 1.125rem;
                        color: #d1d5db;
                        line-height: 1.75;
                        margin-bottom: 1.5rem;
                    }
                    .achievement-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .achievement-card {
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s;
                    }
                    .achievement-card:hover { transform: translateY(-5px) scale(1.05); }
                    .achievement-icon { font-size: 2rem; margin-bottom: 1rem; }
                    .achievement-card h3 { color: #fff; font-weight: 600; margin: 0 0 0.5rem; }
                    .achievement-card p { color: #9ca3af; font-size: 0.875rem; margin: 0; }
                    .about-photo {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                    }
                    .about-photo img {
                        width: 100%;
                        height: 600px;
                        object-fit: cover;
                        transition: transform 0.6s;
                    }
                    .about-photo:hover img { transform: scale(1.05); }
                    .about-quote {
                        position: absolute;
                        left: 2rem;
                        right: 2rem;
                        bottom: 2rem;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(0, 0, 0, 0.6);
                        border: 1px solid rgba(251, 191, 36, 0.3);
                        backdrop-filter: blur(8px);
                    }
                    .about-quote .quote { color: #fbbf24; font-weight: 600; font-size: 1.125rem; font-style: italic; margin: 0 0 0.5rem; }
                    .about-quote .attribution { color: #d1d5db; font-size: 0.875rem; margin: 0; }
                    @media (min-width: 1024px) {
                        .about-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <Reveal class="about-copy">
                        <h2>
                            <span class="text-white">{"A Arte da"}</span><br />
                            <span class="text-gradient">{"Mixologia"}</span>
                        </h2>
                        <p>
                            {"Com mais de 15 anos de experiência, transformo ingredientes simples em experiências \
                              extraordinárias. Cada drink conta uma história, cada sabor desperta uma emoção."}
                        </p>
                        <p>
                            {"Minha paixão é criar momentos únicos através da combinação perfeita de técnica, \
                              criatividade e ingredientes premium. Do clássico ao inovador, cada criação é \
                              pensada para surpreender e encantar."}
                        </p>
                        <div class="achievement-grid">
                            {
                                ACHIEVEMENTS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                                    <Reveal key={*title} delay_ms={100 * index as u32}>
                                        <div class="achievement-card">
                                            <div class="achievement-icon">{ *icon }</div>
                                            <h3>{ *title }</h3>
                                            <p>{ *description }</p>
                                        </div>
                                    </Reveal>
                                }).collect::<Html>()
                            }
                        </div>
                    </Reveal>

                    <Reveal delay_ms={300}>
                        <div class="about-photo">
                            <img src="/images/fotosobre.jpg" alt="Bartender profissional" loading="lazy" decoding="async" />
                            <div class="about-quote">
                                <p class="quote">{"\"A mixologia é poesia líquida\""}</p>
                                <p class="attribution">{"Filosofia que guia cada criação"}</p>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
