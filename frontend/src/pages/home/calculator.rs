use gloo_events::EventListener;
use shared::price_calculator::{format_price, total_price};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::base::element_by_id;
use crate::config::{CALCULATED_PRICE_ID, PRICE_SELECT_IDS};

/// Live total for the pricing form.
#[derive(Clone)]
pub struct PriceCalculator {
    selects: Vec<HtmlSelectElement>,
    output: Element,
}

impl PriceCalculator {
    /// `None` unless every select and the output are on the page.
    pub fn bind() -> Option<Self> {
        let selects = PRICE_SELECT_IDS
            .iter()
            .map(|id| element_by_id(id).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok()))
            .collect::<Option<Vec<_>>>()?;
        let output = element_by_id(CALCULATED_PRICE_ID)?;

        let calculator = Self { selects, output };
        for select in &calculator.selects {
            let calculator = calculator.clone();
            EventListener::new(select, "change", move |_| calculator.update()).forget();
        }
        Some(calculator)
    }

    pub fn update(&self) {
        let values: Vec<String> = self.selects.iter().map(|s| s.value()).collect();
        let total = total_price(values.iter().map(String::as_str));
        self.output.set_text_content(Some(&format_price(total)));
    }
}
