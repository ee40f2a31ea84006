//! Edit Cursor
//!
//! At most one row per list is in edit mode at a time.

/// Inline edit state of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCursor<K> {
    NotEditing,
    Editing { id: K, pending: String },
}

impl<K> Default for EditCursor<K> {
    fn default() -> Self {
        EditCursor::NotEditing
    }
}

impl<K: Copy + PartialEq> EditCursor<K> {
    /// Enter edit mode for `id`, dropping any unsaved text of a previous row
    pub fn start(&mut self, id: K, current: impl Into<String>) {
        *self = EditCursor::Editing { id, pending: current.into() };
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        if let EditCursor::Editing { pending, .. } = self {
            *pending = text.into();
        }
    }

    pub fn editing_id(&self) -> Option<K> {
        match self {
            EditCursor::Editing { id, .. } => Some(*id),
            EditCursor::NotEditing => None,
        }
    }

    pub fn is_editing(&self, id: K) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn pending(&self) -> &str {
        match self {
            EditCursor::Editing { pending, .. } => pending,
            EditCursor::NotEditing => "",
        }
    }

    /// Leave edit mode, returning the target and its pending text
    pub fn finish(&mut self) -> Option<(K, String)> {
        match std::mem::take(self) {
            EditCursor::Editing { id, pending } => Some((id, pending)),
            EditCursor::NotEditing => None,
        }
    }

    /// Leave edit mode if `id` is the row being edited
    pub fn forget(&mut self, id: K) {
        if self.is_editing(id) {
            *self = EditCursor::NotEditing;
        }
    }
}

/// Pending text is accepted when it has something besides whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
