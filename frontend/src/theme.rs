use log::{debug, warn};
use serde::Deserialize;
use web_sys::{Document, Element, Storage};

use crate::error::DomError;

pub const LIGHT_MODE_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_light_flag(is_light: bool) -> Self {
        if is_light {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<bool>;
    fn save(&self, key: &str, value: bool) -> Result<(), DomError>;
}

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            debug!("Local storage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<bool> {
        let raw = self.storage.as_ref()?.get_item(key).ok().flatten()?;
        Some(raw == "true")
    }

    fn save(&self, key: &str, value: bool) -> Result<(), DomError> {
        let storage = self.storage.as_ref().ok_or(DomError::StorageUnavailable)?;
        storage.set_item(key, if value { "true" } else { "false" })?;
        Ok(())
    }
}

pub struct ThemeState<S> {
    store: S,
    key: String,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    pub fn init(store: S, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let theme = store
            .load(&key)
            .map(Theme::from_light_flag)
            .unwrap_or(default);
        Self { store, key, theme }
    }

    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and writes the new flag. A failed write is logged;
    /// the visible theme still changes.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.save(&self.key, self.theme.is_light()) {
            warn!("Theme preference not saved: {}", e);
        }
        self.theme
    }
}

pub fn apply(document: &Document, icon: Option<&Element>, theme: Theme) {
    if let Some(body) = document.body() {
        let _ = body
            .class_list()
            .toggle_with_force(LIGHT_MODE_CLASS, theme.is_light());
    }
    if let Some(icon) = icon {
        icon.set_text_content(Some(theme.icon()));
    }
}


#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn empty_storage_uses_default() {
        let state = ThemeState::init(MemoryStore::default(), "lightMode", Theme::Dark);
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn stored_flag_wins_over_default() {
        let store = MemoryStore::default();
        store.save("lightMode", true).unwrap();
        let state = ThemeState::init(store, "lightMode", Theme::Dark);
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn toggle_writes_once_per_click() {
        let store = MemoryStore::default();
        let mut state = ThemeState::init(store.clone(), "lightMode", Theme::Dark);
        assert_eq!(state.toggle(), Theme::Light);
        assert_eq!(*store.writes.borrow(), 1);
        assert_eq!(store.raw("lightMode").as_deref(), Some("true"));
    }

    #[test]
    fn double_toggle_round_trips_and_persists() {
        let store = MemoryStore::default();
        let mut state = ThemeState::init(store.clone(), "lightMode", Theme::Dark);
        let original = state.current();
        state.toggle();
        state.toggle();
        assert_eq!(state.current(), original);
        assert_eq!(state.current().icon(), original.icon());
        assert_eq!(store.raw("lightMode").as_deref(), Some("false"));

        let reloaded = ThemeState::init(store, "lightMode", Theme::Light);
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn unavailable_storage_still_toggles() {
        let mut state = ThemeState::init(MemoryStore::unavailable(), "lightMode", Theme::Dark);
        assert_eq!(state.toggle(), Theme::Light);
        let reloaded = ThemeState::init(MemoryStore::unavailable(), "lightMode", Theme::Dark);
        assert_eq!(reloaded.current(), Theme::Dark);
    }

    #[test]
    fn icon_points_at_the_other_theme() {
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::Light.icon(), "🌙");
    }
}
