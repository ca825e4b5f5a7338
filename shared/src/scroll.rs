use crate::constants::HEADER_SHADOW;

/// The `href` an in-page link should scroll to, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Document offset that puts an element just below the fixed header.
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}

/// `box-shadow` for the header at a given scroll position.
pub fn header_shadow(page_offset: f64) -> &'static str {
    if page_offset <= 0.0 {
        "none"
    } else {
        HEADER_SHADOW
    }
}

pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#services"), Some("#services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_target(-500.0, 500.0, 80.0), -80.0);
    }

    #[test]
    fn test_header_shadow() {
        assert_eq!(header_shadow(0.0), "none");
        assert_eq!(header_shadow(-4.0), "none");
        assert_eq!(header_shadow(1.0), HEADER_SHADOW);
    }

    #[test]
    fn test_in_viewport() {
        assert!(in_viewport(100.0, 300.0, 800.0));
        assert!(in_viewport(-50.0, 10.0, 800.0));
        assert!(!in_viewport(800.0, 900.0, 800.0));
        assert!(!in_viewport(-300.0, 0.0, 800.0));
    }
}
