//! Application State Store
//!
//! Uses Leptos reactive_stores so the static list, the task list and the
//! filter notify independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::models::Filter;
use crate::static_list::StaticList;
use crate::storage::LocalStorage;
use crate::task_list::{TaskList, TaskResult};

/// Component state for both lists
#[derive(Clone, Debug, Store)]
pub struct TodoState {
    /// Seeded rows, memory only
    pub static_list: StaticList,
    /// User tasks, mirrored to localStorage
    pub task_list: TaskList<LocalStorage>,
    pub filter: Filter,
}

impl TodoState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            static_list: StaticList::seeded(config.seed_names.as_slice()),
            task_list: TaskList::mount(LocalStorage::new(config.storage_key.as_str())),
            filter: config.filter,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Wall clock in milliseconds, used as the id of a new task
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

// A failed save leaves the change in memory
fn report(action: &str, result: TaskResult) -> bool {
    match result {
        Ok(changed) => changed,
        Err(e) => {
            log::error!("{} not saved: {}", action, e);
            true
        }
    }
}

// ========================
// Static List Helpers
// ========================

pub fn store_toggle_static(store: &TodoStore, id: u32) {
    store.static_list().write().toggle_done(id);
}

pub fn store_start_static_edit(store: &TodoStore, id: u32, current_name: &str) {
    store.static_list().write().start_edit(id, current_name);
}

pub fn store_set_static_pending(store: &TodoStore, text: &str) {
    store.static_list().write().set_pending(text);
}

pub fn store_commit_static_edit(store: &TodoStore) {
    if store.static_list().write().commit_edit() {
        log::debug!("Renamed static todo");
    }
}

pub fn store_delete_static(store: &TodoStore, id: u32) {
    store.static_list().write().delete(id);
}

pub fn store_clear_static(store: &TodoStore) {
    store.static_list().write().clear_all();
}

// ========================
// Task List Helpers
// ========================

/// Add a task, returning whether one was added
pub fn store_add_task(store: &TodoStore, text: &str) -> bool {
    let result = store.task_list().write().add(text, now_ms());
    report("add", result)
}

pub fn store_toggle_task(store: &TodoStore, id: u64) {
    let result = store.task_list().write().toggle(id);
    report("toggle", result);
}

pub fn store_start_task_edit(store: &TodoStore, id: u64, current_text: &str) {
    store.task_list().write().start_edit(id, current_text);
}

pub fn store_set_task_pending(store: &TodoStore, text: &str) {
    store.task_list().write().set_pending(text);
}

pub fn store_commit_task_edit(store: &TodoStore) {
    let result = store.task_list().write().commit_edit();
    report("edit", result);
}

pub fn store_delete_task(store: &TodoStore, id: u64) {
    let result = store.task_list().write().delete(id);
    report("delete", result);
}

pub fn store_clear_tasks(store: &TodoStore) {
    let result = store.task_list().write().clear_all();
    if report("clear", result) {
        log::info!("Cleared all tasks");
    }
}
