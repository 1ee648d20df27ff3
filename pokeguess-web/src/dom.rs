use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access the browser `localStorage` handle without panicking.
///
/// Returns `None` outside a browser, or when storage is disabled.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Read a persisted preference.
#[must_use]
pub fn load_pref(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

/// Persist a preference, logging rather than failing when storage rejects it.
pub fn store_pref(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Err(err) = storage.set_item(key, value) {
        log::error!("Failed to persist {key}: {}", js_error_message(&err));
    }
}
