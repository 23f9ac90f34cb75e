use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrubProperty {
    TranslateY,
    Opacity,
}

impl ScrubProperty {
    pub fn css(self, value: f64) -> (&'static str, String) {
        match self {
            ScrubProperty::TranslateY => ("transform", format!("translateY({}px)", value)),
            ScrubProperty::Opacity => ("opacity", value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrubDeclaration {
    pub target: String,
    pub trigger: String,
    pub property: ScrubProperty,
    pub from: f64,
    pub to: f64,
}

impl ScrubDeclaration {
    pub fn new(target: &str, trigger: &str, property: ScrubProperty, from: f64, to: f64) -> Self {
        Self {
            target: target.to_string(),
            trigger: trigger.to_string(),
            property,
            from,
            to,
        }
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        self.from + (self.to - self.from) * progress
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRegion {
    pub start: f64,
    pub end: f64,
}

impl TriggerRegion {
    pub fn of_element(offset_top: f64, height: f64) -> Self {
        Self {
            start: offset_top,
            end: offset_top + height,
        }
    }

    /// Fraction of the region scrolled through, clamped to `[0, 1]`. A region
    /// without extent jumps straight from 0 to 1 at its start.
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}
