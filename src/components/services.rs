use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::whatsapp_link;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
    image: &'static str,
    accent: &'static str,
    message: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "❤",
        title: "Casamentos",
        description: "Drinks especiais para o dia mais importante da sua vida",
        features: ["Bar personalizado", "Drinks autorais", "Decoração temática", "Equipe completa"],
        image: "https://images.pexels.com/photos/1024960/pexels-photo-1024960.jpeg",
        accent: "linear-gradient(90deg, #ec4899, #f43f5e)",
        message: "Olá! Gostaria de um orçamento para um CASAMENTO.",
    },
    Service {
        icon: "🏢",
        title: "Eventos Corporativos",
        description: "Impressione seus clientes e colaboradores",
        features: ["Open bar premium", "Networking drinks", "Apresentação profissional", "Logística completa"],
        image: "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg",
        accent: "linear-gradient(90deg, #3b82f6, #06b6d4)",
        message: "Olá! Gostaria de um orçamento para um EVENTO CORPORATIVO.",
    },
    Service {
        icon: "👥",
        title: "Festas Privadas",
        description: "Celebre com estilo e sofisticação",
        features: ["Menu personalizado", "Drinks exclusivos", "Animação interativa", "Setup completo"],
        image: "https://images.pexels.com/photos/1267696/pexels-photo-1267696.jpeg",
        accent: "linear-gradient(90deg, #a855f7, #6366f1)",
        message: "Olá! Gostaria de contratar o bar para uma FESTA PRIVADA.",
    },
    Service {
        icon: "✨",
        title: "Eventos Especiais",
        description: "Aniversários, formaturas e comemorações",
        features: ["Tematização única", "Show de drinks", "Drinks instagramáveis", "Experiência memorável"],
        image: "https://images.pexels.com/photos/1190298/pexels-photo-1190298.jpeg",
        accent: "linear-gradient(90deg, #f59e0b, #f97316)",
        message: "Olá! Gostaria de um orçamento para um EVENTO ESPECIAL (aniversário, formatura etc.).",
    },
];

const EXTRAS: [(&str, &str, &str); 4] = [
    ("🕒", "Disponibilidade 24/7", "Atendimento flexível para seus horários"),
    ("📍", "Atendimento em Domicílio", "Levamos a experiência até você"),
    ("✔", "Ingredientes Premium", "Apenas os melhores produtos"),
    ("⭐", "Satisfação Garantida", "100% de aprovação dos clientes"),
];

fn service_card(index: usize, service: &Service) -> Html {
    html! {
        <Reveal key={service.title} delay_ms={200 * index as u32}>
            <div class="service-card">
                <div class="service-bg">
                    <img src={service.image} alt={service.title} loading="lazy" decoding="async" />
                    <div class="service-bg-dim"></div>
                </div>
                <div class="service-body">
                    <div class="service-title-row">
                        <span class="service-icon" style={format!("background: {};", service.accent)}>
                            { service.icon }
                        </span>
                        <h3>{ service.title }</h3>
                    </div>
                    <p class="service-description">{ service.description }</p>
                    <ul class="service-features">
                        {
                            service.features.iter().map(|feature| html! {
                                <li key={*feature}>{ *feature }</li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <a
                        href={whatsapp_link(service.message)}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cta-primary"
                        aria-label={format!("Solicitar orçamento: {}", service.title)}
                    >
                        {"Solicitar Orçamento"}
                    </a>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                    .services-section {
                        position: relative;
                        padding: 8rem 0;
                        background: linear-gradient(135deg, #0f172a, rgba(88, 28, 135, 0.2), #0f172a);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        margin-bottom: 5rem;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: transform 0.3s;
                    }
                    .service-card:hover { transform: translateY(-10px) scale(1.02); }
                    .service-bg { position: absolute; inset: 0; opacity: 0.2; transition: opacity 0.5s; }
                    .service-card:hover .service-bg { opacity: 0.3; }
                    .service-bg img { width: 100%; height: 100%; object-fit: cover; }
                    .service-bg-dim {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
                    }
                    .service-body { position: relative; z-index: 10; padding: 2rem; }
                    .service-title-row { display: flex; align-items: center; margin-bottom: 1.5rem; }
                    .service-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        margin-right: 1rem;
                        border-radius: 9999px;
                        font-size: 1.25rem;
                    }
                    .service-title-row h3 { font-size: 1.5rem; color: #fff; margin: 0; }
                    .service-description { color: #d1d5db; line-height: 1.6; margin-bottom: 1.5rem; }
                    .service-features { list-style: none; padding: 0; margin: 0 0 1.5rem; }
                    .service-features li { color: #d1d5db; padding: 0.375rem 0; }
                    .service-features li::before { content: "✓ "; color: #fbbf24; }
                    .extras-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .extra-card {
                        text-align: center;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(251, 191, 36, 0.2);
                    }
                    .extra-card .extra-icon { font-size: 2rem; margin-bottom: 1rem; }
                    .extra-card h4 { color: #fff; margin: 0 0 0.5rem; }
                    .extra-card p { color: #9ca3af; font-size: 0.875rem; margin: 0; }
                    @media (min-width: 768px) {
                        .services-grid { grid-template-columns: repeat(2, 1fr); }
                        .extras-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .extras-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal class="section-heading">
                    <h2>
                        <span class="text-white">{"Nossos"}</span><br />
                        <span class="text-gradient">{"Serviços"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Oferecemos experiências únicas em mixologia para todos os tipos de eventos, \
                          sempre com a excelência que você merece"}
                    </p>
                </Reveal>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| service_card(index, service)) }
                </div>

                <div class="extras-grid">
                    {
                        EXTRAS.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <Reveal key={*title} delay_ms={100 * index as u32}>
                                <div class="extra-card">
                                    <div class="extra-icon">{ *icon }</div>
                                    <h4>{ *title }</h4>
                                    <p>{ *description }</p>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_links_to_whatsapp_with_its_message() {
        for service in &SERVICES {
            let link = whatsapp_link(service.message);
            assert!(link.starts_with("https://wa.me/"));
            assert!(link.contains(&urlencoding::encode(service.message).into_owned()));
        }
    }
}
