use std::cell::RefCell;
use std::rc::Rc;

use gloo_utils::{body, document, window};
use shared::shared_modal::ScrollLock;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlElement, HtmlFormElement};

/// The page's one background scroll lock, shared by every modal.
#[derive(Clone, Default)]
pub struct PageLock(Rc<RefCell<ScrollLock>>);

impl PageLock {
    pub fn with<R>(&self, f: impl FnOnce(&mut ScrollLock) -> R) -> R {
        let result = f(&mut self.0.borrow_mut());
        self.sync_body();
        result
    }

    pub fn is_active(&self) -> bool {
        self.0.borrow().is_active()
    }

    fn sync_body(&self) {
        let overflow = if self.is_active() { "hidden" } else { "" };
        if let Err(err) = body().style().set_property("overflow", overflow) {
            log::warn!("could not set body overflow: {:?}", err);
        }
    }
}

pub fn element_by_id(id: &str) -> Option<Element> {
    let element = document().get_element_by_id(id);
    if element.is_none() {
        log::debug!("#{} not on this page", id);
    }
    element
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nodes = match document().query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("bad selector {}: {:?}", selector, err);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("could not set {}: {:?}", property, err);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::warn!("could not toggle .{}: {:?}", class, err);
    }
}

pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::warn!("alert failed: {:?}", err);
    }
}

/// Monotonic milliseconds, on the same clock as animation frame timestamps.
pub fn now_ms() -> f64 {
    window()
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Named fields of a form, in document order.
pub fn form_entries(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(data.as_ref()) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair = entry.dyn_into::<js_sys::Array>().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string().unwrap_or_default()))
        })
        .collect()
}
