mod calculator;
mod carousel;
mod faq;
mod forms;
mod reveal;
mod scroll;

use gloo_utils::document;
use shared::carousel::CarouselConfig;
use shared::SiteConfig;

use crate::config::LOGOS_TRACK;

use calculator::PriceCalculator;

/// Wire up the static landing page. Runs before the dialogs mount so the
/// generic form handler only sees the page's own forms.
pub fn enhance(config: &SiteConfig) {
    scroll::bind_smooth_scroll(config.header_offset_px);
    scroll::bind_header_shadow();
    reveal::bind_reveal();

    let calculator = PriceCalculator::bind();
    faq::bind_faq();
    forms::bind_forms(calculator);

    duplicate_logos();
    carousel::init_cases_carousel(&CarouselConfig::default());
}

/// Repeat the logo strip once so the marquee loops without a gap.
fn duplicate_logos() {
    if let Ok(Some(track)) = document().query_selector(LOGOS_TRACK) {
        let logos = track.inner_html();
        track.set_inner_html(&format!("{logos}{logos}"));
    }
}
