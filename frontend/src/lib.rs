pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod session;
pub mod styles;

use gloo_events::{EventListener, EventListenerOptions};
use shared::shared_wheel_game::WheelConfiguration;
use shared::SiteConfig;
use web_sys::Event;
use yew::Renderer;

use crate::base::{element_by_id, query_all, PageLock};
use crate::components::ModalHandle;
use crate::config::{
    load_site_config, CONSULTATION_BUTTONS, CONSULTATION_KEYWORDS, CONTACT_MODAL_ID,
    FLOATING_WHEEL_BUTTON_ID, WHEEL_MODAL_ID,
};
use crate::pages::contact::{ContactModal, ContactModalProps};
use crate::pages::wheel_game::{schedule_auto_open, SpinHandle, WheelGame, WheelGameProps};

/// Enhance the page, mount both dialogs and hook up their triggers.
pub fn start() {
    let config = load_site_config();
    pages::home::enhance(&config);

    let lock = PageLock::default();
    let contact = ModalHandle::bind(CONTACT_MODAL_ID, config.modal.clone(), lock.clone());
    let wheel_modal = ModalHandle::bind(WHEEL_MODAL_ID, config.modal.clone(), lock);
    let engine = spin_engine(&config);

    if let Some(host) = contact.host() {
        Renderer::<ContactModal>::with_root_and_props(
            host.clone().into(),
            ContactModalProps { modal: contact.clone() },
        )
        .render();
    }
    if let Some(host) = wheel_modal.host() {
        Renderer::<WheelGame>::with_root_and_props(
            host.clone().into(),
            WheelGameProps {
                modal: wheel_modal.clone(),
                engine: engine.clone(),
                reset_delay_ms: config.promo.reset_delay_after_submit_ms,
            },
        )
        .render();
    }

    bind_consultation_buttons(&contact);
    bind_floating_wheel_button(&wheel_modal, &engine);
    schedule_auto_open(&wheel_modal, &config.promo);

    log::info!("site scripts loaded");
}

fn spin_engine(config: &SiteConfig) -> SpinHandle {
    let wheel = config.wheel_configuration().unwrap_or_else(|err| {
        log::warn!("using default wheel: {}", err);
        WheelConfiguration::default()
    });
    SpinHandle::new(wheel, config.wheel.clone(), config.confetti.clone())
}

fn is_consultation_label(text: &str) -> bool {
    let text = text.to_lowercase();
    CONSULTATION_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

fn bind_consultation_buttons(contact: &ModalHandle) {
    if !contact.is_enabled() {
        return;
    }
    for button in query_all(CONSULTATION_BUTTONS) {
        let label = button.text_content().unwrap_or_default();
        if !is_consultation_label(&label) {
            continue;
        }
        let contact = contact.clone();
        EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                contact.open();
            },
        )
        .forget();
    }
}

fn bind_floating_wheel_button(wheel_modal: &ModalHandle, engine: &SpinHandle) {
    let Some(button) = element_by_id(FLOATING_WHEEL_BUTTON_ID) else {
        return;
    };
    let wheel_modal = wheel_modal.clone();
    let engine = engine.clone();
    EventListener::new(&button, "click", move |_| {
        wheel_modal.open();
        engine.reset_for_reuse();
    })
    .forget();
}
