use web_sys::{ScrollBehavior, ScrollToOptions, Window};

pub const VISIBLE_CLASS: &str = "visible";

pub fn is_visible(scroll: f64, threshold: f64) -> bool {
    scroll > threshold
}

pub fn progress_percent(scroll: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_visible(0.0, 300.0));
        assert!(!is_visible(300.0, 300.0));
        assert!(is_visible(300.5, 300.0));
        assert!(is_visible(400.0, 300.0));
    }

    #[test]
    fn progress_handles_short_pages() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_proportional_and_clamped() {
        assert_eq!(progress_percent(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(1000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(1200.0, 2000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(-20.0, 2000.0, 1000.0), 0.0);
    }

    proptest! {
        #[test]
        fn visibility_matches_the_comparison(scroll in 0.0f64..5000.0) {
            prop_assert_eq!(is_visible(scroll, 300.0), scroll > 300.0);
        }
    }
}
