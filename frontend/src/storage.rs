//! `localStorage`-backed key-value slot for the session token.

use session_core::KeyValueSlot;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Best-effort: when storage is unavailable (private mode, disabled) the
/// slot reads as empty and writes are dropped.
#[derive(Debug, Default)]
pub struct LocalStorageSlot;

impl KeyValueSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {}", key);
                }
            }
            None => log::warn!("localStorage unavailable; {} not saved", key),
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
