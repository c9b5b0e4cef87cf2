use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Netlify image CDN, mounted on the same origin as the site.
pub const IMAGE_ENDPOINT: &str = "/.netlify/images";

pub struct Brand {
    pub name: &'static str,
    pub slogan: &'static str,
    pub phone_display: &'static str,
    pub phone_link: &'static str,
    pub whatsapp_number: &'static str,
    pub email: &'static str,
    pub city: &'static str,
    pub instagram: &'static str,
    pub facebook: &'static str,
    pub linkedin: &'static str,
}

pub const BRAND: Brand = Brand {
    name: "PHP Bartenders",
    slogan: "Elevamos o nível do seu sonho",
    phone_display: "+55 (19) 99750-8975",
    phone_link: "tel:+5519997508975",
    // international format: 55 + area code + number, digits only
    whatsapp_number: "5519997508975",
    email: "php.bartenders@gmail.com",
    city: "Piracicaba, SP",
    instagram: "https://instagram.com/phpbartenders",
    facebook: "https://facebook.com/",
    linkedin: "https://www.linkedin.com/",
};

pub const LOGO_SRC: &str = "/images/logo/logopng.png";

/// Header anchors, in page order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Início", "#home"),
    ("Sobre", "#about"),
    ("Serviços", "#services"),
    ("Galeria", "#gallery"),
    ("Contato", "#contact"),
];

pub fn whatsapp_link(text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        BRAND.whatsapp_number,
        urlencoding::encode(text)
    )
}

pub fn mailto_link() -> String {
    format!("mailto:{}", BRAND.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_message() {
        let link = whatsapp_link("Olá! Gostaria de um orçamento para um CASAMENTO.");
        assert!(link.starts_with("https://wa.me/5519997508975?text="));
        assert!(link.contains("Ol%C3%A1%21%20Gostaria"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn whatsapp_number_is_digits_only() {
        assert!(BRAND.whatsapp_number.chars().all(|c| c.is_ascii_digit()));
        assert!(BRAND.phone_link.ends_with(BRAND.whatsapp_number));
    }

    #[test]
    fn nav_items_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
