use gloo_events::{EventListener, EventListenerOptions};
use gloo_utils::{document, window};
use shared::scroll::{anchor_target, header_shadow, scroll_target};
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions};

use crate::base::{element_by_id, html_element_by_id, query_all, set_style};
use crate::config::{ANCHOR_LINKS, HEADER_ID, SERVICES_BUTTON_ID, SERVICES_SECTION_ID};

fn page_offset() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

/// Smoothly bring `target` just below the fixed header.
pub fn scroll_to_element(target: &Element, header_offset: f64) {
    let top = scroll_target(target.get_bounding_client_rect().top(), page_offset(), header_offset);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// In-page links and the services button scroll instead of jumping.
pub fn bind_smooth_scroll(header_offset: f64) {
    for link in query_all(ANCHOR_LINKS) {
        let href = link.get_attribute("href").unwrap_or_default();
        EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                match document().query_selector(selector) {
                    Ok(Some(target)) => scroll_to_element(&target, header_offset),
                    Ok(None) => log::debug!("no element for {}", selector),
                    Err(err) => log::warn!("bad anchor {}: {:?}", selector, err),
                }
            },
        )
        .forget();
    }

    if let Some(button) = element_by_id(SERVICES_BUTTON_ID) {
        EventListener::new(&button, "click", move |_| {
            if let Some(section) = element_by_id(SERVICES_SECTION_ID) {
                scroll_to_element(&section, header_offset);
            }
        })
        .forget();
    }
}

/// Shadow under the header once the page is scrolled.
pub fn bind_header_shadow() {
    let Some(header) = html_element_by_id(HEADER_ID) else {
        return;
    };
    let paint = move || set_style(&header, "box-shadow", header_shadow(page_offset()));
    paint();
    EventListener::new(&window(), "scroll", move |_| paint()).forget();
}

pub(super) fn element_is_visible(element: &Element) -> bool {
    let rect = element.get_bounding_client_rect();
    let viewport = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    shared::scroll::in_viewport(rect.top(), rect.bottom(), viewport)
}
