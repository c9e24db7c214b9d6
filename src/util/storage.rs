//! `localStorage`-backed settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller persists the warning threshold through
//! [`SettingsStore`]; this is the browser implementation. Outside the
//! browser nothing is stored and every load misses.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use board::settings::SettingsStore;

/// [`SettingsStore`] over `window.localStorage`.
///
/// Storage being unavailable (private mode, quota) is logged and otherwise
/// behaves like an empty store.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSettings;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SettingsStore for BrowserSettings {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to save {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
