use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::base::{alert, form_entries};
use crate::components::{ModalHandle, ModalShell};
use crate::config::CONTACT_THANKS;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub modal: ModalHandle,
}

/// Consultation request dialog.
#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let on_submit = {
        let modal = props.modal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = e.target().and_then(|t| t.dyn_into::<HtmlFormElement>().ok()) else {
                return;
            };
            log::info!("contact form submitted: {:?}", form_entries(&form));
            alert(CONTACT_THANKS);
            form.reset();
            modal.close();
        })
    };

    html! {
        <ModalShell modal={props.modal.clone()}>
            <h2 class={styles::MODAL_TITLE}>{"Получить консультацию"}</h2>
            <p class={styles::MODAL_SUBTITLE}>{"Оставьте контакты, и мы перезвоним в течение 15 минут"}</p>
            <form id="modalContactForm" class={styles::MODAL_FORM} onsubmit={on_submit}>
                <input class={styles::FORM_INPUT} type="text" name="name" placeholder="Ваше имя" required=true />
                <input class={styles::FORM_INPUT} type="tel" name="phone" placeholder="Телефон" required=true />
                <textarea class={styles::FORM_INPUT} name="message" placeholder="Комментарий" rows="3"></textarea>
                <button type="submit" class={styles::BUTTON_PRIMARY}>{"Отправить заявку"}</button>
            </form>
        </ModalShell>
    }
}
