//! Browser collaborators for the display-mode controller.
//!
//! Reads and writes the preference through `localStorage`, queries
//! `prefers-color-scheme`, and toggles the `dark` class on the `<html>`
//! element (Tailwind's class-based dark variant).
//!
//! TRADE-OFFS
//! ==========
//! Everything here is browser-only. Without the `hydrate` feature storage
//! reports itself unavailable, the OS probe has no answer and the root is a
//! no-op, which keeps server rendering deterministic.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::state::display_mode::{ColorSchemeProbe, DisplayModeController, DocumentRoot, PreferenceStore, StorageError};

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Class applied to `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Display-mode controller wired to the browser.
pub type BrowserDisplayMode = DisplayModeController<LocalStorage, MediaQueryProbe, HtmlRoot>;

/// Build a controller over `localStorage`, `matchMedia` and `<html>`.
pub fn browser_controller() -> BrowserDisplayMode {
    DisplayModeController::new(LocalStorage, MediaQueryProbe, HtmlRoot)
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| classify(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| classify(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media(DARK_QUERY)
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// The document's `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRoot;

impl DocumentRoot for HtmlRoot {
    fn set_dark(&mut self, dark: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            if let Err(e) = el.class_list().toggle_with_force(DARK_CLASS, dark) {
                leptos::logging::warn!("failed to toggle {DARK_CLASS} class: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dark;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    // Accessing `localStorage` throws when storage is disabled by policy.
    window
        .local_storage()
        .map_err(|e| classify(&e))?
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn classify(err: &wasm_bindgen::JsValue) -> StorageError {
    match err.dyn_ref::<web_sys::DomException>().map(web_sys::DomException::name) {
        Some(name) => storage_error_for(&name),
        None => StorageError::Backend(format!("{err:?}")),
    }
}

/// Map a `DOMException` name to a [`StorageError`].
pub fn storage_error_for(exception_name: &str) -> StorageError {
    match exception_name {
        "QuotaExceededError" | "NS_ERROR_DOM_QUOTA_REACHED" => StorageError::QuotaExceeded,
        "SecurityError" | "NotAllowedError" => StorageError::PermissionDenied,
        "InvalidStateError" => StorageError::Unavailable,
        other => StorageError::Backend(other.to_owned()),
    }
}
