use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

use super::calculator::PriceCalculator;
use crate::base::{alert, form_entries, query_all};
use crate::config::{CALC_FORM_ID, FORM_THANKS, MODAL_SURFACES};

/// Acknowledge submissions of the page's own forms. Dialog forms handle
/// themselves.
pub fn bind_forms(calculator: Option<PriceCalculator>) {
    for form in query_all("form") {
        if matches!(form.closest(MODAL_SURFACES), Ok(Some(_))) {
            continue;
        }
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let calculator = calculator.clone();
        let target = form.clone();
        EventListener::new_with_options(
            &target,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                log::info!("form #{} submitted: {:?}", form.id(), form_entries(&form));
                alert(FORM_THANKS);
                form.reset();
                if form.id() == CALC_FORM_ID {
                    if let Some(calculator) = &calculator {
                        calculator.update();
                    }
                }
            },
        )
        .forget();
    }
}
