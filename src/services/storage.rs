use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::models::error::AppError;
use crate::models::theme::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, ThemePreference};

/// Durable key-value storage shared by the bootstrap script and the toggler
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// The render-visible theme field on the document root
pub trait ThemeRoot {
    /// Raw attribute value, unvalidated
    fn theme(&self) -> Option<String>;
    fn stamp(&self, theme: ThemePreference);
}

/// In-memory store, also able to behave like disabled browser storage
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    unavailable: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// A store whose every read and write fails
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_unavailable(true);
        store
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable.get() {
            Err(AppError::StorageUnavailable("storage disabled".to_string()))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        self.check()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.check()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. Values are stored raw (not JSON) so the inline
/// bootstrap script can read them with a plain `getItem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or_else(|| AppError::StorageUnavailable("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| AppError::StorageUnavailable("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

/// The `<html>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    fn element() -> Option<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
    }
}

impl ThemeRoot for DocumentRoot {
    fn theme(&self) -> Option<String> {
        Self::element().and_then(|html| html.get_attribute(THEME_ATTRIBUTE))
    }

    fn stamp(&self, theme: ThemePreference) {
        if let Some(html) = Self::element() {
            let _ = html.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}

/// Platform dark appearance preference, `None` when `matchMedia` is unsupported
pub fn prefers_dark() -> Option<bool> {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mq| mq.matches())
}

fn js_error(e: JsValue) -> AppError {
    AppError::StorageUnavailable(format!("{e:?}"))
}
