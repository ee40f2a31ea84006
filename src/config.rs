//! App Configuration
//!
//! Built once in `main` and handed to the root component.

use log::Level;

use crate::models::Filter;

/// Startup settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// localStorage key holding the task list
    pub storage_key: String,
    /// Names of the static rows, given ids 1..=n
    pub seed_names: Vec<String>,
    /// Filter applied to the task section (no control changes it)
    pub filter: Filter,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_string(),
            seed_names: vec!["Todo 1".to_string(), "Todo 2".to_string(), "Todo 3".to_string()],
            filter: Filter::All,
            log_level: if cfg!(debug_assertions) { Level::Debug } else { Level::Info },
        }
    }
}
