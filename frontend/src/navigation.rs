pub const ANCHOR_SELECTOR: &str = ".nav-link, .nav-logo, .cta-button";

pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

pub fn scroll_destination(target_top: f64, header_offset: f64) -> f64 {
    (target_top - header_offset).max(0.0)
}
