use gloo_utils::document;
use shared::SiteConfig;

// Surfaces and triggers
pub const CONTACT_MODAL_ID: &str = "contactModal";
pub const WHEEL_MODAL_ID: &str = "wheelModal";
pub const FLOATING_WHEEL_BUTTON_ID: &str = "floatingWheelBtn";
pub const SPIN_BUTTON_ID: &str = "spinButton";
pub const CONSULTATION_BUTTONS: &str = "button:not([id=\"spinButton\"]):not(.modal-close):not([type=\"submit\"]):not([id=\"floatingWheelBtn\"])";
pub const CONSULTATION_KEYWORDS: [&str; 2] = ["консультац", "тариф"];
pub const SITE_CONFIG_ID: &str = "site-config";
pub const MODAL_SURFACES: &str = ".modal";

// Landing page
pub const HEADER_ID: &str = "header";
pub const SERVICES_BUTTON_ID: &str = "servicesBtn";
pub const SERVICES_SECTION_ID: &str = "services";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
pub const ANIMATED_ELEMENTS: &str = "[class*=\"animate-\"]";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_INITIAL_PASS_MS: u32 = 100;
pub const PRICE_SELECT_IDS: [&str; 3] = ["keywords", "siteType", "competition"];
pub const CALCULATED_PRICE_ID: &str = "calculatedPrice";
pub const CALC_FORM_ID: &str = "calcForm";
pub const FAQ_ITEMS: &str = ".faq-item";
pub const FAQ_QUESTION: &str = ".faq-question";
pub const LOGOS_TRACK: &str = ".logos-track";
pub const CASES_CAROUSEL: &str = ".casesSwiper";

// Acknowledgements
pub const CONTACT_THANKS: &str = "Спасибо за заявку! Наш специалист свяжется с вами в течение 15 минут.";
pub const WHEEL_THANKS: &str = "Отлично! Мы свяжемся с вами и предоставим персональное предложение со скидкой!";
pub const FORM_THANKS: &str = "Спасибо за заявку! Мы свяжемся с вами в ближайшее время.";

/// Site settings from the page's inline JSON block, or defaults.
pub fn load_site_config() -> SiteConfig {
    let raw = document()
        .get_element_by_id(SITE_CONFIG_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    let config = match raw {
        Some(text) => serde_json::from_str::<SiteConfig>(&text).unwrap_or_else(|err| {
            log::warn!("invalid #{}: {}, using defaults", SITE_CONFIG_ID, err);
            SiteConfig::default()
        }),
        None => SiteConfig::default(),
    };
    config.sanitized()
}
