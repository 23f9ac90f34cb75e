use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::scrub::{ScrubDeclaration, ScrubProperty};
use crate::theme::Theme;

pub const CONFIG_ISLAND_ID: &str = "coordinator-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    pub theme_storage_key: String,
    pub default_theme: Theme,
    pub scroll_top_threshold: f64,
    pub header_offset: f64,
    pub scrollspy_offset: f64,
    pub reveal: RevealConfig,
    pub stagger: StaggerConfig,
    pub parallax: ParallaxConfig,
    pub pointer: PointerConfig,
    pub typing: TypingConfig,
    pub overlay: OverlayConfig,
    pub scrub: Vec<ScrubDeclaration>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub bottom_margin: f64,
    pub hidden_translate: f64,
    pub transition_secs: f64,
    pub delay_step_secs: f64,
    pub bounce_scale: f64,
    pub bounce_delay_ms: u32,
    pub bounce_hold_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaggerConfig {
    pub threshold: f64,
    pub step_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub hero_speed: f64,
    pub layer_base_speed: f64,
    pub layer_speed_step: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub orb_speed_step: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub start_delay_ms: u32,
    pub tick_ms: u32,
    pub cursor_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enabled: bool,
    pub hold_ms: u32,
    pub fade_ms: u32,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "lightMode".to_string(),
            default_theme: Theme::Dark,
            scroll_top_threshold: 300.0,
            header_offset: 80.0,
            scrollspy_offset: 100.0,
            reveal: RevealConfig::default(),
            stagger: StaggerConfig::default(),
            parallax: ParallaxConfig::default(),
            pointer: PointerConfig::default(),
            typing: TypingConfig::default(),
            overlay: OverlayConfig::default(),
            scrub: default_scrub(),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
            hidden_translate: 60.0,
            transition_secs: 0.8,
            delay_step_secs: 0.1,
            bounce_scale: 1.02,
            bounce_delay_ms: 100,
            bounce_hold_ms: 200,
        }
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self { threshold: 0.2, step_ms: 150 }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_speed: 0.3,
            layer_base_speed: 0.1,
            layer_speed_step: 0.05,
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { orb_speed_step: 0.02 }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            start_delay_ms: 1500,
            tick_ms: 80,
            cursor_ms: 3000,
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hold_ms: 1000,
            fade_ms: 500,
        }
    }
}

fn default_scrub() -> Vec<ScrubDeclaration> {
    vec![
        ScrubDeclaration::new(".hero-content", ".hero", ScrubProperty::TranslateY, 0.0, -150.0),
        ScrubDeclaration::new(".hero-content", ".hero", ScrubProperty::Opacity, 1.0, 0.0),
        ScrubDeclaration::new(".overlay", ".hero", ScrubProperty::Opacity, 1.0, 0.0),
    ]
}

impl CoordinatorConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the config island if the page carries one. A malformed island
    /// is logged and ignored.
    pub fn load(document: Option<&Document>) -> Self {
        let raw = document
            .and_then(|d| d.get_element_by_id(CONFIG_ISLAND_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring malformed #{}: {}", CONFIG_ISLAND_ID, e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal.bottom_margin)
    }
}
