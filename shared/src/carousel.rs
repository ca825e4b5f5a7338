//! Options for the cases carousel.
//!
//! The carousel itself is a third-party script; this is the declarative
//! configuration handed to its constructor, serialized in the camelCase keys
//! it expects.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: u32,
    pub space_between: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mousewheel {
    pub force_to_axis: bool,
    pub sensitivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyboard {
    pub enabled: bool,
    pub only_in_viewport: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct A11y {
    pub enabled: bool,
    pub prev_slide_message: String,
    pub next_slide_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub slides_per_view: u32,
    pub space_between: u32,
    /// Keyed by minimum viewport width in pixels
    pub breakpoints: BTreeMap<u32, Breakpoint>,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: Autoplay,
    pub mousewheel: Mousewheel,
    pub keyboard: Keyboard,
    pub grab_cursor: bool,
    pub speed: u32,
    pub a11y: A11y,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(640, Breakpoint { slides_per_view: 2, space_between: 20 });
        breakpoints.insert(1024, Breakpoint { slides_per_view: 3, space_between: 30 });

        Self {
            slides_per_view: 1,
            space_between: 20,
            breakpoints,
            looped: true,
            autoplay: Autoplay {
                delay: 5000,
                disable_on_interaction: false,
                pause_on_mouse_enter: true,
            },
            mousewheel: Mousewheel {
                force_to_axis: true,
                sensitivity: 1.0,
            },
            keyboard: Keyboard {
                enabled: true,
                only_in_viewport: true,
            },
            grab_cursor: true,
            speed: 600,
            a11y: A11y {
                enabled: true,
                prev_slide_message: "Предыдущий слайд".to_string(),
                next_slide_message: "Следующий слайд".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_carousel_keys() {
        let value = serde_json::to_value(CarouselConfig::default()).unwrap();
        assert_eq!(value["slidesPerView"], 1);
        assert_eq!(value["loop"], true);
        assert_eq!(value["breakpoints"]["640"]["slidesPerView"], 2);
        assert_eq!(value["breakpoints"]["1024"]["spaceBetween"], 30);
        assert_eq!(value["autoplay"]["disableOnInteraction"], false);
        assert_eq!(value["keyboard"]["onlyInViewport"], true);
        assert_eq!(value["a11y"]["nextSlideMessage"], "Следующий слайд");
    }
}
