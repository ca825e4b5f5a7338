mod engine;
mod wheel_canvas;
mod wheel_utils;

use gloo_timers::callback::Timeout;
use shared::config::PromoConfig;
use shared::promo::AutoOpenPolicy;
use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::base::{alert, form_entries};
use crate::components::{ModalHandle, ModalShell};
use crate::config::WHEEL_THANKS;
use crate::hooks::use_spin_view;
use crate::session;
use crate::styles;

pub use engine::{SpinHandle, SpinView};
pub use wheel_canvas::{draw_wheel, WheelCanvas};
use wheel_utils::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct WheelGameProps {
    pub modal: ModalHandle,
    pub engine: SpinHandle,
    pub reset_delay_ms: u32,
}

/// Contents of the promotional wheel dialog.
#[function_component(WheelGame)]
pub fn wheel_game(props: &WheelGameProps) -> Html {
    let view = use_spin_view(&props.engine);
    let pending_reset = use_mut_ref(|| None::<Timeout>);

    let on_spin = {
        let engine = props.engine.clone();
        Callback::from(move |_: MouseEvent| engine.spin())
    };

    let on_submit = {
        let engine = props.engine.clone();
        let modal = props.modal.clone();
        let reset_delay_ms = props.reset_delay_ms;
        let pending_reset = pending_reset.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = e.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
                return;
            };
            log::info!("wheel form submitted: {:?}", form_entries(&form));
            alert(WHEEL_THANKS);
            form.reset();
            modal.close();

            // Ready the wheel for whoever opens the dialog next
            let engine = engine.clone();
            *pending_reset.borrow_mut() = Some(Timeout::new(reset_delay_ms, move || {
                engine.reset_for_reuse();
            }));
        })
    };

    html! {
        <ModalShell modal={props.modal.clone()} class={classes!(styles::WHEEL_CONTENT)}>
            if let Some(segment) = view.result.clone() {
                <div id="wheelResult" class={styles::WHEEL_RESULT}>
                    <ResultDisplay segment={segment.clone()} />
                    <form id="wheelContactForm" class={styles::MODAL_FORM} onsubmit={on_submit}>
                        <input type="hidden" id="discountInput" name="discount" value={segment.value.to_string()} />
                        <input class={styles::FORM_INPUT} type="text" name="name" placeholder="Ваше имя" required=true />
                        <input class={styles::FORM_INPUT} type="tel" name="phone" placeholder="Телефон" required=true />
                        <button type="submit" class={styles::BUTTON_PRIMARY}>{"Получить скидку"}</button>
                    </form>
                </div>
            } else {
                <>
                <h2 class={styles::MODAL_TITLE}>{"Испытайте удачу!"}</h2>
                <p class={styles::MODAL_SUBTITLE}>{"Крутите колесо и получите скидку на продвижение"}</p>
                <div class={styles::WHEEL_WRAPPER}>
                    <div class={styles::WHEEL_POINTER}></div>
                    <WheelCanvas rotation={view.rotation} wheel={props.engine.wheel()} />
                </div>
                <SpinButton
                    is_spinning={view.is_spinning}
                    enabled={view.trigger_enabled}
                    onclick={on_spin}
                />
                </>
            }
        </ModalShell>
    }
}

/// Open the wheel dialog once per browser session after the promo delay.
pub fn schedule_auto_open(modal: &ModalHandle, promo: &PromoConfig) {
    if !modal.is_enabled() {
        return;
    }
    let policy = AutoOpenPolicy::new(promo);
    let flag = session::get_flag(policy.storage_key());
    if !policy.should_schedule(flag.as_deref()) {
        log::debug!("promo already shown this session");
        return;
    }

    let modal = modal.clone();
    let key = policy.storage_key().to_string();
    let shown = policy.shown_value();
    Timeout::new(policy.delay_ms(), move || {
        modal.open();
        session::set_flag(&key, shown);
    })
    .forget();
}
