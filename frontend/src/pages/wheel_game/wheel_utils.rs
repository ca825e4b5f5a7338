use gloo_timers::callback::Timeout;
use gloo_utils::{body, document, window};
use shared::confetti::Particle;
use shared::shared_wheel_game::Segment;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::base::set_style;
use crate::config::SPIN_BUTTON_ID;
use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub segment: Segment,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    html! {
        <div class="wheel-result-header">
            <h3 class={styles::MODAL_TITLE}>{"Поздравляем!"}</h3>
            <p class={styles::MODAL_SUBTITLE}>
                {"Ваша скидка: "}
                <span id="discountValue" class={styles::DISCOUNT_VALUE}>{props.segment.label.clone()}</span>
            </p>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning {
        "Крутим..."
    } else {
        "Крутить колесо!"
    };

    html! {
        <button
            id={SPIN_BUTTON_ID}
            type="button"
            class={classes!(styles::SPIN_BUTTON, props.is_spinning.then_some(styles::SPIN_BUTTON_BUSY))}
            disabled={!props.enabled}
            onclick={props.onclick.clone()}
        >
            {button_text}
        </button>
    }
}

/// Drop the particles from the top of the viewport. Each piece removes itself
/// once its fall is over.
pub fn launch_confetti(particles: &[Particle]) {
    let fall = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(800.0);

    for particle in particles {
        let piece = match document()
            .create_element("div")
            .map(|el| el.unchecked_into::<HtmlElement>())
        {
            Ok(piece) => piece,
            Err(err) => {
                log::warn!("confetti skipped: {:?}", err);
                return;
            }
        };

        if let Err(err) = piece.set_attribute("style", styles::CONFETTI_STYLE) {
            log::warn!("confetti style not applied: {:?}", err);
        }
        set_style(&piece, "background-color", particle.color);
        set_style(&piece, "left", &format!("{}%", particle.left_percent));
        if let Err(err) = body().append_child(&piece) {
            log::warn!("confetti skipped: {:?}", err);
            return;
        }

        // Read layout so the start position is committed before the transition
        let _ = piece.offset_width();
        set_style(
            &piece,
            "transition",
            &format!(
                "transform {d}ms {e}, opacity {d}ms {e}",
                d = particle.duration_ms,
                e = styles::CONFETTI_EASING
            ),
        );
        set_style(
            &piece,
            "transform",
            &format!("translateY({}px) rotate({}deg)", fall, particle.rotation_deg),
        );
        set_style(&piece, "opacity", "0");

        Timeout::new(particle.duration_ms, move || piece.remove()).forget();
    }
}
