use std::f64::consts::{FRAC_PI_2, TAU};
use std::rc::Rc;

use shared::constants::*;
use shared::shared_wheel_game::WheelConfiguration;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub wheel: Rc<WheelConfiguration>,
    #[prop_or(400)]
    pub size: u32,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.rotation, props.wheel.clone()),
            move |(rotation, wheel)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    match context_2d(&canvas) {
                        Some(context) => {
                            let width = canvas.width() as f64;
                            let height = canvas.height() as f64;
                            if let Err(err) = draw_wheel(&context, width, height, wheel, *rotation) {
                                log::warn!("wheel paint failed: {:?}", err);
                            }
                        }
                        None => log::warn!("no 2d context for the wheel canvas"),
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={styles::WHEEL_CANVAS}
            width={props.size.to_string()}
            height={props.size.to_string()}
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Paint every wedge for `rotation`, then the centre cap on top.
///
/// Wheel angles are measured from the top, canvas angles from the right, hence
/// the quarter-turn shift.
pub fn draw_wheel(
    context: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    wheel: &WheelConfiguration,
    rotation: f64,
) -> Result<(), JsValue> {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) - WHEEL_RIM_MARGIN;

    context.clear_rect(0.0, 0.0, width, height);

    for wedge in wheel.layout(rotation) {
        let start = wedge.start_angle - FRAC_PI_2;
        let end = wedge.end_angle - FRAC_PI_2;

        context.begin_path();
        context.move_to(center_x, center_y);
        context.arc(center_x, center_y, radius, start, end)?;
        context.close_path();
        context.set_fill_style_str(wedge.segment.color.css());
        context.fill();

        context.set_stroke_style_str(WEDGE_OUTLINE_COLOR);
        context.set_line_width(WEDGE_OUTLINE_WIDTH);
        context.stroke();

        // Label reads outward from the centre
        context.save();
        context.translate(center_x, center_y)?;
        context.rotate(wedge.label_angle() - FRAC_PI_2)?;
        context.set_text_align("center");
        context.set_fill_style_str(LABEL_COLOR);
        context.set_font(LABEL_FONT);
        context.fill_text(
            &wedge.segment.label,
            radius * LABEL_RADIUS_RATIO,
            LABEL_BASELINE_OFFSET,
        )?;
        context.restore();
    }

    context.begin_path();
    context.arc(center_x, center_y, CENTER_CAP_RADIUS, 0.0, TAU)?;
    context.set_fill_style_str(CENTER_CAP_FILL);
    context.fill();
    context.set_stroke_style_str(CENTER_CAP_STROKE);
    context.set_line_width(WEDGE_OUTLINE_WIDTH);
    context.stroke();

    Ok(())
}
