use crate::config::RevealConfig;
use crate::timeline::Step;

pub const REVEAL_SELECTOR: &str =
    ".section-content, .feature-card, .step, .achievement, .enhancement, .section";
pub const BOUNCE_CLASSES: [&str; 3] = ["feature-card", "achievement", "step"];
pub const STAGGER_CONTAINER_SELECTOR: &str = ".stagger-container";
pub const STAGGER_ITEM_SELECTOR: &str = ".animate-item";
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";

#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    revealed: Vec<bool>,
}

impl RevealRegistry {
    pub fn with_len(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Feeds one intersection event. Returns `true` only on the transition
    /// into the revealed state; later events, intersecting or not, change
    /// nothing.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if !*flag && intersecting => {
                *flag = true;
                true
            }
            _ => false,
        }
    }
}

pub fn hidden_style(index: usize, config: &RevealConfig) -> Vec<(&'static str, String)> {
    let delay = (index as f64 * config.delay_step_secs * 1000.0).round() / 1000.0;
    let duration = config.transition_secs;
    vec![
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({}px)", config.hidden_translate)),
        (
            "transition",
            format!(
                "opacity {d}s ease {delay}s, transform {d}s ease {delay}s",
                d = duration,
                delay = delay
            ),
        ),
    ]
}

pub fn visible_style() -> Vec<(&'static str, String)> {
    vec![
        ("opacity", "1".to_string()),
        ("transform", "translateY(0)".to_string()),
    ]
}

pub fn stagger_item_visible_style() -> Vec<(&'static str, String)> {
    vec![
        ("opacity", "1".to_string()),
        ("transform", "translateY(0) scale(1)".to_string()),
    ]
}

pub fn wants_bounce<'a>(mut classes: impl Iterator<Item = &'a str>) -> bool {
    classes.any(|c| BOUNCE_CLASSES.contains(&c))
}

pub fn bounce_plan(config: &RevealConfig) -> Vec<Step<String>> {
    vec![
        Step::new(
            config.bounce_delay_ms,
            format!("translateY(0) scale({})", config.bounce_scale),
        ),
        Step::new(
            config.bounce_delay_ms.saturating_add(config.bounce_hold_ms),
            "translateY(0) scale(1)".to_string(),
        ),
    ]
}
