use log::debug;
use web_sys::{Document, HtmlElement};
use wasm_bindgen::JsCast;

use crate::config::OverlayConfig;
use crate::timeline::Step;

pub const OVERLAY_CLASS: &str = "loading-overlay";

const OVERLAY_MARKUP: &str = r#"
    <div class="loading-spinner">
        <div class="spinner"></div>
        <p>Loading...</p>
    </div>
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Fade,
    Remove,
}

pub fn plan(config: &OverlayConfig) -> Vec<Step<OverlayAction>> {
    vec![
        Step::new(config.hold_ms, OverlayAction::Fade),
        Step::new(config.hold_ms.saturating_add(config.fade_ms), OverlayAction::Remove),
    ]
}

pub fn mount(document: &Document) -> Option<HtmlElement> {
    let body = document.body()?;
    let overlay = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    overlay.set_class_name(OVERLAY_CLASS);
    overlay.set_inner_html(OVERLAY_MARKUP);
    if body.append_child(&overlay).is_err() {
        debug!("Could not attach loading overlay");
        return None;
    }
    Some(overlay)
}

pub fn apply(overlay: &HtmlElement, action: OverlayAction) {
    match action {
        OverlayAction::Fade => {
            let _ = overlay.style().set_property("opacity", "0");
        }
        OverlayAction::Remove => overlay.remove(),
    }
}

pub fn already_loaded(document: &Document) -> bool {
    document.ready_state() == "complete"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fades_after_hold_then_removes() {
        let steps = plan(&OverlayConfig::default());
        assert_eq!(
            steps,
            vec![
                Step::new(1000, OverlayAction::Fade),
                Step::new(1500, OverlayAction::Remove),
            ]
        );
    }

    #[test]
    fn oversized_hold_saturates() {
        let config = OverlayConfig {
            hold_ms: u32::MAX,
            ..OverlayConfig::default()
        };
        let steps = plan(&config);
        assert_eq!(steps[1].at_ms, u32::MAX);
    }
}
