use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_utils::document;
use shared::config::ModalTiming;
use shared::shared_modal::{ModalSession, ModalState, PendingTransition};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::base::{html_element_by_id, set_class, set_style, PageLock};
use crate::styles;

struct ModalController {
    session: RefCell<ModalSession>,
    host: Option<HtmlElement>,
    timing: ModalTiming,
    lock: PageLock,
    pending: RefCell<Option<Timeout>>,
    escape: RefCell<Option<EventListener>>,
}

/// Shared handle to one dialog surface.
///
/// Bound to a missing surface the handle is disabled and every request is a
/// no-op, since the page only renders some dialogs.
#[derive(Clone)]
pub struct ModalHandle(Rc<ModalController>);

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ModalHandle {
    pub fn bind(surface_id: &str, timing: ModalTiming, lock: PageLock) -> Self {
        let host = html_element_by_id(surface_id);
        let session = match host {
            Some(_) => ModalSession::new(surface_id),
            None => ModalSession::detached(surface_id),
        };
        let handle = Self(Rc::new(ModalController {
            session: RefCell::new(session),
            host,
            timing,
            lock,
            pending: RefCell::new(None),
            escape: RefCell::new(None),
        }));

        if handle.is_enabled() {
            let weak = Rc::downgrade(&handle.0);
            let listener = EventListener::new(&document(), "keydown", move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if event.key() != "Escape" {
                    return;
                }
                if let Some(handle) = Self::upgrade(&weak) {
                    if handle.state() == ModalState::Open {
                        handle.close();
                    }
                }
            });
            *handle.0.escape.borrow_mut() = Some(listener);
        }
        handle
    }

    fn upgrade(weak: &Weak<ModalController>) -> Option<Self> {
        weak.upgrade().map(Self)
    }

    pub fn is_enabled(&self) -> bool {
        self.0.session.borrow().is_bound()
    }

    pub fn host(&self) -> Option<&HtmlElement> {
        self.0.host.as_ref()
    }

    pub fn state(&self) -> ModalState {
        self.0.session.borrow().state()
    }

    pub fn open(&self) {
        let request = self.0.session.borrow_mut().request_open(&self.0.timing);
        match request {
            Ok(pending) => self.begin(pending),
            Err(err) => log::debug!("open ignored: {}", err),
        }
    }

    pub fn close(&self) {
        let request = self.0.session.borrow_mut().request_close(&self.0.timing);
        match request {
            Ok(pending) => self.begin(pending),
            Err(err) => log::debug!("close ignored: {}", err),
        }
    }

    fn begin(&self, pending: PendingTransition) {
        self.paint();

        let weak = Rc::downgrade(&self.0);
        let timeout = Timeout::new(pending.delay_ms, move || {
            if let Some(handle) = Self::upgrade(&weak) {
                handle.complete(pending.epoch);
            }
        });
        // Replacing the previous timeout cancels it
        *self.0.pending.borrow_mut() = Some(timeout);
    }

    fn complete(&self, epoch: u64) {
        let controller = &self.0;
        let result = controller
            .lock
            .with(|lock| controller.session.borrow_mut().complete(epoch, lock));
        match result {
            Ok(_) => self.paint(),
            Err(err) => log::debug!("transition dropped: {}", err),
        }
    }

    fn paint(&self) {
        let Some(host) = self.host() else {
            return;
        };
        let state = self.state();
        match state {
            ModalState::Opening => set_style(host, "display", "flex"),
            ModalState::Closed => set_style(host, "display", "none"),
            ModalState::Open | ModalState::Closing => {}
        }
        set_class(host, styles::MODAL_ACTIVE, state.is_active());
    }
}

impl Drop for ModalController {
    fn drop(&mut self) {
        let session = self.session.get_mut();
        self.lock.with(|lock| session.give_back(lock));
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub modal: ModalHandle,
    #[prop_or_default]
    pub class: Classes,
    pub children: Html,
}

/// Backdrop, close button and content box of a dialog.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    let close = {
        let modal = props.modal.clone();
        Callback::from(move |_: MouseEvent| modal.close())
    };

    html! {
        <>
            <div class={styles::MODAL_OVERLAY} onclick={close.clone()}></div>
            <div class={classes!(styles::MODAL_CONTENT, props.class.clone())}>
                <button type="button" class={styles::MODAL_CLOSE} aria-label="Закрыть" onclick={close}>
                    {"×"}
                </button>
                { props.children.clone() }
            </div>
        </>
    }
}
