//! Frontend Models
//!
//! Data structures for the static todo list and the persisted task list.

use serde::{Deserialize, Serialize};

/// Seed row of the static list (never persisted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticItem {
    pub id: u32,
    pub name: String,
    pub is_done: bool,
}

impl StaticItem {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_done: false,
        }
    }
}

/// User task, stored as `{"id": number, "text": string, "completed": boolean}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation timestamp in milliseconds
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Summary counts shown above the lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Counts {
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// Which tasks the task section shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }
}
