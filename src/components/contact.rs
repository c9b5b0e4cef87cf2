use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::{mailto_link, whatsapp_link, BRAND};

/// How long the "sent" confirmation stays on the submit button.
const SUBMITTED_RESET_MS: u32 = 2500;

pub const EVENT_TYPES: [&str; 6] = [
    "Casamento",
    "Aniversário",
    "Evento Corporativo",
    "Festa Privada",
    "Formatura",
    "Outro",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    EventType,
    Date,
    Guests,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub date: String,
    pub guests: String,
    pub message: String,
    #[serde(skip)]
    pub submitted: bool,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::EventType => &mut self.event_type,
            ContactField::Date => &mut self.date,
            ContactField::Guests => &mut self.guests,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Nothing leaves the browser; the request is only recorded locally.
    pub fn submit(&mut self) {
        match serde_json::to_string(&*self) {
            Ok(payload) => info!("Quote request captured: {}", payload),
            Err(e) => warn!("Could not serialize quote request: {}", e),
        }
        self.submitted = true;
    }

    pub fn reset_submitted(&mut self) {
        self.submitted = false;
    }
}

pub enum ContactAction {
    Set(ContactField, String),
    Submit,
    ResetSubmitted,
}

// A reducer so the delayed reset applies to the latest field values.
impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Set(field, value) => next.set(field, value),
            ContactAction::Submit => next.submit(),
            ContactAction::ResetSubmitted => next.reset_submitted(),
        }
        Rc::new(next)
    }
}

const CONTACT_INFO: [(&str, &str, &str, &str); 4] = [
    ("☎", "Telefone", BRAND.phone_display, "WhatsApp disponível"),
    ("✉", "Email", BRAND.email, "Resposta em até 2h"),
    ("📍", "Localização", BRAND.city, "Atendemos toda a região"),
    ("🕒", "Horário", "Seg - Dom: 24h", "Sempre disponível"),
];

fn contact_href(title: &str) -> Option<String> {
    match title {
        "Telefone" => Some(BRAND.phone_link.to_string()),
        "Email" => Some(mailto_link()),
        _ => None,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    // Dropping a pending Timeout cancels it, so unmounting clears it too.
    let reset_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Set(field, input.value()));
        })
    };

    let on_event_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Set(ContactField::EventType, select.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::Set(ContactField::Message, area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.dispatch(ContactAction::Submit);

            let dispatcher = form.dispatcher();
            let timeout = Timeout::new(SUBMITTED_RESET_MS, move || {
                dispatcher.dispatch(ContactAction::ResetSubmitted);
            });
            *reset_timer.borrow_mut() = Some(timeout);
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        position: relative;
                        padding: 8rem 0;
                        background: linear-gradient(135deg, #0f172a, rgba(88, 28, 135, 0.2), #0f172a);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                    }
                    .contact-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(4px);
                    }
                    .contact-card h3 { font-size: 1.5rem; color: #fff; margin: 0 0 1.5rem; }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-field label { display: block; color: #d1d5db; margin-bottom: 0.5rem; }
                    .form-field input,
                    .form-field select,
                    .form-field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: #fff;
                        font: inherit;
                    }
                    .form-field select option { background: #1e293b; }
                    .form-field textarea { resize: none; }
                    .form-field input:focus,
                    .form-field select:focus,
                    .form-field textarea:focus {
                        outline: none;
                        border-color: transparent;
                        box-shadow: 0 0 0 2px #fbbf24;
                    }
                    .form-actions { display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem; }
                    .form-actions > * { flex: 1; text-align: center; }
                    .submit-button { border: none; cursor: pointer; font: inherit; }
                    .info-card {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                        margin-bottom: 2rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        text-decoration: none;
                        transition: background 0.3s;
                    }
                    .info-card:hover { background: rgba(255, 255, 255, 0.1); }
                    .info-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #fbbf24, #f97316);
                        color: #000;
                        font-size: 1.25rem;
                    }
                    .info-card h4 { color: #fff; font-size: 1.125rem; margin: 0; }
                    .info-card .info { color: #fbbf24; margin: 0; }
                    .info-card .sub-info { color: #9ca3af; font-size: 0.875rem; margin: 0; }
                    .social-row { display: flex; flex-wrap: wrap; gap: 1rem; }
                    .social-link {
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .social-link:hover { color: #fbbf24; }
                    @media (min-width: 640px) {
                        .form-actions { flex-direction: row; }
                    }
                    @media (min-width: 768px) {
                        .form-row { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .contact-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <Reveal class="section-heading">
                    <h2>
                        <span class="text-white">{"Entre em"}</span><br />
                        <span class="text-gradient">{"Contato"}</span>
                    </h2>
                    <p class="section-lead">
                        { format!(
                            "Pronto para criar uma experiência inesquecível? Fale com a {} e vamos planejar seu evento perfeito.",
                            BRAND.name
                        ) }
                    </p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal>
                        <div class="contact-card">
                            <h3>{"Solicite seu Orçamento"}</h3>
                            <form {onsubmit}>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="contact-name">{"Nome Completo"}</label>
                                        <input id="contact-name" type="text" name="name" required=true placeholder="Seu nome"
                                            value={form.name.clone()} oninput={on_input(ContactField::Name)} />
                                    </div>
                                    <div class="form-field">
                                        <label for="contact-email">{"Email"}</label>
                                        <input id="contact-email" type="email" name="email" required=true placeholder="seu@email.com"
                                            value={form.email.clone()} oninput={on_input(ContactField::Email)} />
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="contact-phone">{"Telefone"}</label>
                                        <input id="contact-phone" type="tel" name="phone" placeholder="(19) 99750-8975"
                                            value={form.phone.clone()} oninput={on_input(ContactField::Phone)} />
                                    </div>
                                    <div class="form-field">
                                        <label for="contact-event-type">{"Tipo de Evento"}</label>
                                        <select id="contact-event-type" name="eventType" onchange={on_event_type}>
                                            <option value="" selected={form.event_type.is_empty()}>{"Selecione o tipo"}</option>
                                            {
                                                EVENT_TYPES.iter().map(|kind| html! {
                                                    <option key={*kind} value={*kind} selected={form.event_type == *kind}>{ *kind }</option>
                                                }).collect::<Html>()
                                            }
                                        </select>
                                    </div>
                                </div>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="contact-date">{"Data do Evento"}</label>
                                        <input id="contact-date" type="date" name="date"
                                            value={form.date.clone()} oninput={on_input(ContactField::Date)} />
                                    </div>
                                    <div class="form-field">
                                        <label for="contact-guests">{"Número de Convidados"}</label>
                                        <input id="contact-guests" type="number" name="guests" min="1" placeholder="Ex: 50"
                                            value={form.guests.clone()} oninput={on_input(ContactField::Guests)} />
                                    </div>
                                </div>
                                <div class="form-field">
                                    <label for="contact-message">{"Mensagem"}</label>
                                    <textarea id="contact-message" name="message" rows="4"
                                        placeholder="Conte-nos mais sobre seu evento..."
                                        value={form.message.clone()} oninput={on_message} />
                                </div>

                                <div class="form-actions">
                                    <button type="submit" class="cta-primary submit-button">
                                        { if form.submitted { "✔ Mensagem Enviada!" } else { "➤ Enviar Mensagem" } }
                                    </button>
                                    <a href={whatsapp_link("Olá! Gostaria de falar sobre um evento.")} target="_blank"
                                        rel="noopener noreferrer" class="cta-secondary">
                                        {"Falar no WhatsApp"}
                                    </a>
                                </div>
                            </form>
                        </div>
                    </Reveal>

                    <Reveal delay_ms={100}>
                        {
                            CONTACT_INFO.iter().map(|(icon, title, info, sub_info)| html! {
                                <a key={*title} class="info-card" href={contact_href(title)}>
                                    <span class="info-icon">{ *icon }</span>
                                    <div>
                                        <h4>{ *title }</h4>
                                        <p class="info">{ *info }</p>
                                        <p class="sub-info">{ *sub_info }</p>
                                    </div>
                                </a>
                            }).collect::<Html>()
                        }
                        <div class="contact-card">
                            <h3>{"Siga nas Redes"}</h3>
                            <div class="social-row">
                                <a href={BRAND.instagram} target="_blank" rel="noopener noreferrer" class="social-link">{"Instagram"}</a>
                                <a href={BRAND.facebook} target="_blank" rel="noopener noreferrer" class="social-link">{"Facebook"}</a>
                                <a href={BRAND.linkedin} target="_blank" rel="noopener noreferrer" class="social-link">{"LinkedIn"}</a>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_touches_only_named_field() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ana".to_string());
        form.set(ContactField::Guests, "80".to_string());
        assert_eq!(form.name, "Ana");
        assert_eq!(form.guests, "80");
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(!form.submitted);
    }

    #[test]
    fn submit_then_reset_toggles_flag_and_keeps_fields() {
        let mut form = ContactForm::default();
        form.set(ContactField::EventType, "Casamento".to_string());
        form.submit();
        assert!(form.submitted);
        form.reset_submitted();
        assert!(!form.submitted);
        assert_eq!(form.event_type, "Casamento");
    }

    #[test]
    fn reducer_applies_actions_in_order() {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(ContactAction::Set(ContactField::Email, "a@b.com".to_string()));
        let form = form.reduce(ContactAction::Submit);
        assert!(form.submitted);
        let form = form.reduce(ContactAction::Set(ContactField::Phone, "123".to_string()));
        let form = form.reduce(ContactAction::ResetSubmitted);
        assert!(!form.submitted);
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.phone, "123");
    }

    #[test]
    fn payload_uses_camel_case_and_omits_flag() {
        let mut form = ContactForm::default();
        form.set(ContactField::EventType, "Formatura".to_string());
        form.submitted = true;
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["eventType"], "Formatura");
        assert!(json.get("submitted").is_none());
    }

    #[test]
    fn only_phone_and_email_cards_link() {
        assert_eq!(contact_href("Telefone").as_deref(), Some(BRAND.phone_link));
        assert_eq!(contact_href("Email"), Some(format!("mailto:{}", BRAND.email)));
        assert!(contact_href("Horário").is_none());
    }
}
