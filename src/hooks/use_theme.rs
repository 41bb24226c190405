use yew::prelude::*;

use crate::models::theme::ThemePreference;
use crate::services::storage::{BrowserStore, DocumentRoot, prefers_dark};
use crate::services::theme::{mounted_theme, toggle};

/// Handle returned by use_theme hook
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: ThemePreference,
    pub toggle: Callback<()>,
}

/// Custom hook for theme management
#[hook]
pub fn use_theme() -> ThemeHandle {
    // Start from whatever the bootstrap script stamped on <html>. Mounting
    // writes nothing; only a toggle persists and re-stamps.
    let theme = use_state(|| mounted_theme(&DocumentRoot, &BrowserStore, prefers_dark));

    // Toggle callback: commits before the state update re-renders
    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(toggle(*theme, &BrowserStore, &DocumentRoot)))
    };

    ThemeHandle {
        theme: *theme,
        toggle: on_toggle,
    }
}
