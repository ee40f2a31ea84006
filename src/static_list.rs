//! Static Todo List
//!
//! The three seeded rows at the top of the page. Lives only in memory.

use crate::edit::{is_blank, EditCursor};
use crate::models::StaticItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticList {
    items: Vec<StaticItem>,
    editing: EditCursor<u32>,
}

impl StaticList {
    /// Build the list from seed names, numbering ids from 1
    pub fn seeded<N: AsRef<str>>(names: &[N]) -> Self {
        let items = names
            .iter()
            .zip(1u32..)
            .map(|(name, id)| StaticItem::new(id, name.as_ref()))
            .collect();
        Self { items, editing: EditCursor::NotEditing }
    }

    pub fn items(&self) -> &[StaticItem] {
        &self.items
    }

    pub fn editing(&self) -> &EditCursor<u32> {
        &self.editing
    }

    /// Flip `is_done` on the matching row
    pub fn toggle_done(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_done = !item.is_done;
                true
            }
            None => false,
        }
    }

    pub fn start_edit(&mut self, id: u32, current_name: &str) {
        self.editing.start(id, current_name);
    }

    pub fn set_pending(&mut self, text: &str) {
        self.editing.set_pending(text);
    }

    /// Save the pending name. Blank text just leaves edit mode.
    pub fn commit_edit(&mut self) -> bool {
        let Some((id, name)) = self.editing.finish() else {
            return false;
        };
        if is_blank(&name) {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.name = name;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.editing.forget(id);
        self.items.len() != before
    }

    pub fn clear_all(&mut self) -> bool {
        self.editing = EditCursor::NotEditing;
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }
}
