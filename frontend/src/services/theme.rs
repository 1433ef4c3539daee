//! Light/dark theme handling.
//!
//! The preference lives in local storage and is mirrored on the document
//! element as `data-bs-theme`, which Bootstrap reads. The manager only
//! talks to the two through [`ThemeStore`] and [`ThemeTarget`].

use gloo_storage::{LocalStorage, Storage};
use leptos::{SignalSet, WriteSignal};

use crate::config::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::types::Theme;

/// Durable storage for the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

/// Where the active theme is displayed.
pub trait ThemeTarget {
    /// Theme currently applied, if any was applied yet.
    fn current(&self) -> Option<Theme>;
    /// Apply the theme attribute and switch the toggle icon.
    fn apply(&self, theme: Theme);
}

#[derive(Clone, Copy)]
pub struct ThemeManager<S, T> {
    store: S,
    target: T,
}

impl<S: ThemeStore, T: ThemeTarget> ThemeManager<S, T> {
    pub fn new(store: S, target: T) -> Self {
        Self { store, target }
    }

    /// Apply the saved preference (light when nothing is saved).
    pub fn restore(&self) -> Theme {
        let theme = self.store.load().unwrap_or_default();
        self.set_theme(theme);
        theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.target.apply(theme);
        self.store.save(theme);
        log::debug!("Theme set to {}", theme.as_str());
    }

    /// Flip whatever is currently displayed.
    pub fn toggle(&self) -> Theme {
        let next = self.target.current().unwrap_or_default().toggled();
        self.set_theme(next);
        next
    }
}

/// Browser local storage, holding the bare theme name (`dark`, not `"dark"`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        LocalStorage::raw()
            .get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .map(|value| Theme::from_stored(&value))
    }

    fn save(&self, theme: Theme) {
        if let Err(err) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("Could not save theme: {:?}", err);
        }
    }
}

/// The `<html>` element plus the signal driving the toggle icons.
#[derive(Clone, Copy)]
pub struct DocumentTheme {
    icon: WriteSignal<Theme>,
}

impl DocumentTheme {
    pub fn new(icon: WriteSignal<Theme>) -> Self {
        Self { icon }
    }
}

impl ThemeTarget for DocumentTheme {
    fn current(&self) -> Option<Theme> {
        gloo_utils::document_element()
            .get_attribute(THEME_ATTRIBUTE)
            .map(|value| Theme::from_attribute(&value))
    }

    fn apply(&self, theme: Theme) {
        let _ = gloo_utils::document_element().set_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.icon.set(theme);
    }
}
