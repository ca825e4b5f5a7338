use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use shared::faq::Accordion;

use crate::base::{query_all, set_class};
use crate::config::{FAQ_ITEMS, FAQ_QUESTION};
use crate::styles;

pub fn bind_faq() {
    let items = Rc::new(query_all(FAQ_ITEMS));
    let accordion = Rc::new(RefCell::new(Accordion::new()));

    for (index, item) in items.iter().enumerate() {
        let Ok(Some(question)) = item.query_selector(FAQ_QUESTION) else {
            continue;
        };
        let items = items.clone();
        let accordion = accordion.clone();
        EventListener::new(&question, "click", move |_| {
            let accordion = {
                let mut accordion = accordion.borrow_mut();
                accordion.toggle(index);
                accordion.clone()
            };
            for (i, item) in items.iter().enumerate() {
                set_class(item, styles::FAQ_ACTIVE, accordion.is_open(i));
            }
        })
        .forget();
    }
}
