use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::scroll::element_is_visible;
use crate::base::{query_all, set_class};
use crate::config::{ANIMATED_ELEMENTS, REVEAL_INITIAL_PASS_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::styles;

/// Mark animated blocks visible as they scroll into view. Blocks already on
/// screen are marked shortly after load.
pub fn bind_reveal() {
    let elements = query_all(ANIMATED_ELEMENTS);
    if elements.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                set_class(&entry.target(), styles::VISIBLE, true);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for element in &elements {
                observer.observe(element);
            }
            callback.forget();
        }
        Err(err) => log::warn!("reveal observer unavailable: {:?}", err),
    }

    Timeout::new(REVEAL_INITIAL_PASS_MS, move || {
        for element in elements.iter().filter(|el| element_is_visible(el)) {
            set_class(element, styles::VISIBLE, true);
        }
    })
    .forget();
}
