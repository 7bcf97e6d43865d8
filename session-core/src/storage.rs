//! Persistent key-value slot abstraction.
//!
//! The browser backs this with `localStorage`, the CLI with a JSON file.
//! Writes are best-effort: implementations log failures instead of
//! reporting them.

use std::cell::RefCell;
use std::collections::HashMap;

/// A string key-value store that survives restarts
pub trait KeyValueSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// In-memory slot, for tests and for clients with no persistence
#[derive(Debug, Default)]
pub struct MemorySlot {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySlot {
    /// Slot pre-populated with one entry
    pub fn with(key: &str, value: &str) -> Self {
        let slot = Self::default();
        slot.set(key, value);
        slot
    }
}

impl KeyValueSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn delete(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
