//! Theme Preference
//!
//! The site ships a single light palette. The preference is handed down
//! through context so components never touch browser storage.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub dark: bool,
}

impl ThemePreference {
    pub const LIGHT: Self = Self { dark: false };

    pub fn class(self) -> &'static str {
        if self.dark { "theme-dark" } else { "theme-light" }
    }
}

/// Provide the theme for everything below the caller
pub fn provide_theme(preference: ThemePreference) {
    provide_context(preference);
}

/// Current theme, light when none was provided
pub fn use_theme() -> ThemePreference {
    use_context::<ThemePreference>().unwrap_or_default()
}
