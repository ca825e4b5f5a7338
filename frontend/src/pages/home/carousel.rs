use gloo_utils::format::JsValueSerdeExt;
use shared::carousel::CarouselConfig;
use wasm_bindgen::prelude::*;

use crate::config::CASES_CAROUSEL;

#[wasm_bindgen]
extern "C" {
    type Swiper;

    #[wasm_bindgen(constructor, catch)]
    fn new(selector: &str, options: &JsValue) -> Result<Swiper, JsValue>;
}

/// Start the case-studies slider if the page has one and the Swiper script
/// loaded.
pub fn init_cases_carousel(config: &CarouselConfig) {
    if !matches!(gloo_utils::document().query_selector(CASES_CAROUSEL), Ok(Some(_))) {
        return;
    }
    let options = match JsValue::from_serde(config) {
        Ok(options) => options,
        Err(err) => {
            log::warn!("carousel options not serializable: {}", err);
            return;
        }
    };
    match Swiper::new(CASES_CAROUSEL, &options) {
        Ok(_) => log::debug!("cases carousel started"),
        Err(err) => log::warn!("cases carousel unavailable: {:?}", err),
    }
}
