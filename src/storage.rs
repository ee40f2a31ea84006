//! Task Persistence
//!
//! The task list is stored under one key as a JSON array. `LocalStorage`
//! talks to `window.localStorage`; `MemoryStorage` keeps the same JSON in
//! memory for tests.

use crate::models::Task;

/// Persistence boundary for the task list
pub trait TaskStorage {
    /// Read the stored list. Missing or unreadable data is `None`.
    fn load(&self) -> Option<Vec<Task>>;

    /// Replace the stored list with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<(), StorageFault>;
}

/// Storage write errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageFault {
    /// No storage area is available (no window, or access denied)
    Unavailable,
    Serialize(String),
    Write(String),
}

impl std::fmt::Display for StorageFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageFault::Unavailable => write!(f, "Storage unavailable"),
            StorageFault::Serialize(msg) => write!(f, "Serialize error: {}", msg),
            StorageFault::Write(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl std::error::Error for StorageFault {}

fn decode(key: &str, raw: &str) -> Option<Vec<Task>> {
    match serde_json::from_str(raw) {
        Ok(tasks) => Some(tasks),
        Err(e) => {
            log::warn!("Ignoring unreadable value under '{}': {}", key, e);
            None
        }
    }
}

fn encode(tasks: &[Task]) -> Result<String, StorageFault> {
    serde_json::to_string(tasks).map_err(|e| StorageFault::Serialize(e.to_string()))
}

/// Browser `localStorage` backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn area() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TaskStorage for LocalStorage {
    fn load(&self) -> Option<Vec<Task>> {
        let raw = Self::area()?.get_item(&self.key).ok()??;
        decode(&self.key, &raw)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageFault> {
        let area = Self::area().ok_or(StorageFault::Unavailable)?;
        let json = encode(tasks)?;
        area.set_item(&self.key, &json)
            .map_err(|e| StorageFault::Write(format!("{:?}", e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
