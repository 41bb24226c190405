use crate::models::error::AppError;
use crate::models::theme::{THEME_STORAGE_KEY, ThemePreference};
use crate::services::storage::{KeyValueStore, ThemeRoot};

/// Picks the theme from a stored value and the platform preference.
///
/// A stored value only counts if it is `light` or `dark`; anything else
/// falls through to the platform signal, and an unknown signal means light.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> ThemePreference {
    if let Some(theme) = stored.and_then(|value| value.parse().ok()) {
        return theme;
    }
    if prefers_dark == Some(true) {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    }
}

/// Persisted theme value. A failed read is treated as no value.
pub fn stored_theme(store: &impl KeyValueStore) -> Option<String> {
    store.get(THEME_STORAGE_KEY).ok().flatten()
}

/// Resolves the initial theme and stamps it onto the root. The platform
/// signal is only queried when there is no valid stored value. Never
/// writes the store.
pub fn bootstrap<F>(
    store: &impl KeyValueStore,
    root: &impl ThemeRoot,
    prefers_dark: F,
) -> ThemePreference
where
    F: FnOnce() -> Option<bool>,
{
    let theme = resolve_persisted(store, prefers_dark);
    root.stamp(theme);
    theme
}

/// Theme the toggler starts from: whatever the bootstrap stamped, or the
/// same resolution it would have made if the root carries nothing valid.
pub fn mounted_theme<F>(
    root: &impl ThemeRoot,
    store: &impl KeyValueStore,
    prefers_dark: F,
) -> ThemePreference
where
    F: FnOnce() -> Option<bool>,
{
    root.theme()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| resolve_persisted(store, prefers_dark))
}

/// Writes the theme to the store and stamps the root. The root is stamped
/// even when the write fails; the write error is handed back for logging.
pub fn commit(
    theme: ThemePreference,
    store: &impl KeyValueStore,
    root: &impl ThemeRoot,
) -> Result<(), AppError> {
    let persisted = store.set(THEME_STORAGE_KEY, theme.as_str());
    root.stamp(theme);
    persisted
}

/// Flips the theme and commits it. A failed store write is logged and
/// otherwise ignored; the returned theme is the session's current one.
pub fn toggle(
    current: ThemePreference,
    store: &impl KeyValueStore,
    root: &impl ThemeRoot,
) -> ThemePreference {
    let next = current.toggled();
    if let Err(e) = commit(next, store, root) {
        warn(&format!("Failed to save theme: {e}"));
    }
    next
}

#[cfg(target_arch = "wasm32")]
fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(message: &str) {
    eprintln!("warning: {message}");
}

fn resolve_persisted<F>(store: &impl KeyValueStore, prefers_dark: F) -> ThemePreference
where
    F: FnOnce() -> Option<bool>,
{
    match stored_theme(store).and_then(|value| value.parse::<ThemePreference>().ok()) {
        Some(theme) => theme,
        None => resolve_theme(None, prefers_dark()),
    }
}
