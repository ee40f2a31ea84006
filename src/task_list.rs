//! Task List
//!
//! User-built tasks. Loaded from storage once on mount and written back
//! after every change.

use crate::edit::{is_blank, EditCursor};
use crate::models::{Counts, Filter, Task};
use crate::storage::{StorageFault, TaskStorage};

/// Outcome of a task mutation: `Ok(true)` changed and saved, `Ok(false)` no-op.
/// On `Err` the change is kept in memory but was not written.
pub type TaskResult = Result<bool, StorageFault>;

#[derive(Debug, Clone)]
pub struct TaskList<S> {
    tasks: Vec<Task>,
    editing: EditCursor<u64>,
    storage: S,
}

impl<S: TaskStorage> TaskList<S> {
    /// Load the stored tasks, or start empty
    pub fn mount(storage: S) -> Self {
        let mut tasks = storage.load().unwrap_or_default();
        let renumbered = renumber_repeated_ids(&mut tasks);
        if renumbered > 0 {
            log::warn!("Gave {} stored tasks with repeated ids a new id", renumbered);
        }
        log::debug!("Mounted task list with {} tasks", tasks.len());
        Self {
            tasks,
            editing: EditCursor::NotEditing,
            storage,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn editing(&self) -> &EditCursor<u64> {
        &self.editing
    }

    pub fn counts(&self) -> Counts {
        Counts::of(&self.tasks)
    }

    pub fn filtered(&self, filter: Filter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Append a task with `now_ms` as its id. Blank text is ignored.
    pub fn add(&mut self, text: &str, now_ms: u64) -> TaskResult {
        if is_blank(text) {
            return Ok(false);
        }
        let id = free_id(&self.tasks, now_ms);
        self.tasks.push(Task::new(id, text));
        self.persist()
    }

    pub fn toggle(&mut self, id: u64) -> TaskResult {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.completed = !task.completed,
            None => return Ok(false),
        }
        self.persist()
    }

    pub fn start_edit(&mut self, id: u64, current_text: &str) {
        self.editing.start(id, current_text);
    }

    pub fn set_pending(&mut self, text: &str) {
        self.editing.set_pending(text);
    }

    /// Save the pending text. Blank text just leaves edit mode.
    pub fn commit_edit(&mut self) -> TaskResult {
        let Some((id, text)) = self.editing.finish() else {
            return Ok(false);
        };
        if is_blank(&text) {
            return Ok(false);
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.text = text,
            None => return Ok(false),
        }
        self.persist()
    }

    pub fn delete(&mut self, id: u64) -> TaskResult {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.editing.forget(id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()
    }

    /// Empty the list. Always written, even when already empty.
    pub fn clear_all(&mut self) -> TaskResult {
        self.tasks.clear();
        self.editing = EditCursor::NotEditing;
        self.persist()
    }

    fn persist(&self) -> TaskResult {
        self.storage.save(&self.tasks)?;
        log::debug!("Saved {} tasks", self.tasks.len());
        Ok(true)
    }
}

/// `wanted` if no task has it, else one past the largest id.
/// When the largest id is `u64::MAX`, the smallest unused id.
///
/// Timestamp ids can repeat within one clock tick.
fn free_id(tasks: &[Task], wanted: u64) -> u64 {
    let taken = |id: u64| tasks.iter().any(|t| t.id == id);
    if !taken(wanted) {
        return wanted;
    }
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(wanted);
    match max.checked_add(1) {
        Some(id) => id,
        // Fewer tasks than ids, so a gap exists
        None => (0..).find(|id| !taken(*id)).unwrap_or(wanted),
    }
}

/// Give every task whose id already appeared earlier in the list a free id.
/// Returns how many tasks were renumbered.
fn renumber_repeated_ids(tasks: &mut [Task]) -> usize {
    let mut renumbered = 0;
    for i in 1..tasks.len() {
        let id = tasks[i].id;
        if tasks[..i].iter().any(|t| t.id == id) {
            let fresh = free_id(tasks, id);
            tasks[i].id = fresh;
            renumbered += 1;
        }
    }
    renumbered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const NOW: u64 = 1_700_000_000_000;

    fn fresh() -> (TaskList<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (TaskList::mount(storage.clone()), storage)
    }

    #[test]
    fn test_mount_empty() {
        let (list, storage) = fresh();
        assert!(list.tasks().is_empty());
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_mount_malformed_starts_empty() {
        let list = TaskList::mount(MemoryStorage::with_raw("{broken"));
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn test_add_appends_pending_task() {
        let (mut list, storage) = fresh();

        assert_eq!(list.add("Buy milk", NOW), Ok(true));

        assert_eq!(list.tasks(), &[Task::new(NOW, "Buy milk")]);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let (mut list, storage) = fresh();
        list.add("keep", NOW).unwrap();

        assert_eq!(list.add("", NOW + 1), Ok(false));
        assert_eq!(list.add("   ", NOW + 2), Ok(false));

        assert_eq!(list.tasks().len(), 1);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_add_keeps_untrimmed_text() {
        let (mut list, _) = fresh();
        list.add("  padded ", NOW).unwrap();
        assert_eq!(list.tasks()[0].text, "  padded ");
    }

    #[test]
    fn test_same_tick_ids_stay_unique() {
        let (mut list, _) = fresh();
        list.add("first", NOW).unwrap();
        list.add("second", NOW).unwrap();
        list.add("third", NOW).unwrap();

        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![NOW, NOW + 1, NOW + 2]);
    }

    #[test]
    fn test_mount_renumbers_repeated_ids() {
        let storage = MemoryStorage::with_raw(
            r#"[{"id":5,"text":"a","completed":false},{"id":5,"text":"b","completed":true}]"#,
        );
        let mut list = TaskList::mount(storage);

        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 6]);
        assert_eq!(list.tasks()[1].text, "b");

        assert_eq!(list.delete(5), Ok(true));
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.tasks()[0].text, "b");
    }

    #[test]
    fn test_mount_renumbering_avoids_later_ids() {
        let storage = MemoryStorage::with_raw(
            r#"[{"id":3,"text":"a","completed":false},{"id":3,"text":"b","completed":false},{"id":4,"text":"c","completed":false}]"#,
        );
        let list = TaskList::mount(storage);

        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 5, 4]);
    }

    #[test]
    fn test_add_next_to_max_id_does_not_overflow() {
        let storage = MemoryStorage::new();
        storage.save(&[Task::new(u64::MAX, "a"), Task::new(7, "b")]).unwrap();
        let mut list = TaskList::mount(storage);

        assert_eq!(list.add("c", 7), Ok(true));

        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![u64::MAX, 7, 0]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (mut list, _) = fresh();
        list.add("a", NOW).unwrap();
        let original = list.tasks()[0].clone();

        list.toggle(NOW).unwrap();
        let toggled = &list.tasks()[0];
        assert!(toggled.completed);
        assert_eq!((toggled.id, toggled.text.as_str()), (original.id, original.text.as_str()));

        list.toggle(NOW).unwrap();
        assert_eq!(list.tasks()[0], original);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let (mut list, storage) = fresh();
        assert_eq!(list.toggle(99), Ok(false));
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (mut list, _) = fresh();
        list.add("a", NOW).unwrap();
        list.add("b", NOW + 1).unwrap();

        assert_eq!(list.delete(NOW), Ok(true));
        assert_eq!(list.tasks(), &[Task::new(NOW + 1, "b")]);
        assert_eq!(list.delete(NOW), Ok(false));
        assert_eq!(list.tasks().len(), 1);
    }

    #[test]
    fn test_clear_all_idempotent() {
        let (mut list, storage) = fresh();
        list.add("a", NOW).unwrap();
        list.add("b", NOW + 1).unwrap();

        list.clear_all().unwrap();
        assert!(list.tasks().is_empty());
        list.clear_all().unwrap();
        assert!(list.tasks().is_empty());
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_commit_edit() {
        let (mut list, storage) = fresh();
        list.add("draft", NOW).unwrap();
        list.start_edit(NOW, "draft");
        list.set_pending("final");

        assert_eq!(list.commit_edit(), Ok(true));
        assert_eq!(list.tasks()[0].text, "final");
        assert_eq!(list.editing().editing_id(), None);
        assert_eq!(storage.save_count(), 2);
    }

    #[test]
    fn test_blank_commit_exits_without_change() {
        let (mut list, storage) = fresh();
        list.add("draft", NOW).unwrap();
        list.start_edit(NOW, "draft");
        list.set_pending("");

        assert_eq!(list.commit_edit(), Ok(false));
        assert_eq!(list.tasks()[0].text, "draft");
        assert_eq!(list.editing().editing_id(), None);
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_reload_round_trip() {
        let (mut list, storage) = fresh();
        list.add("one", NOW).unwrap();
        list.add("two", NOW + 5).unwrap();
        list.add("three", NOW + 9).unwrap();
        list.toggle(NOW + 5).unwrap();

        let reloaded = TaskList::mount(storage.clone());

        assert_eq!(reloaded.tasks(), list.tasks());
    }

    #[test]
    fn test_buy_milk_scenario() {
        let (mut list, storage) = fresh();

        list.add("Buy milk", NOW).unwrap();
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.tasks()[0].text, "Buy milk");
        assert!(!list.tasks()[0].completed);

        list.toggle(NOW).unwrap();
        assert!(list.tasks()[0].completed);

        list.delete(NOW).unwrap();
        assert!(list.tasks().is_empty());
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_counts_and_filter() {
        let (mut list, _) = fresh();
        list.add("a", NOW).unwrap();
        list.add("b", NOW + 1).unwrap();
        list.add("c", NOW + 2).unwrap();
        list.toggle(NOW + 1).unwrap();

        assert_eq!(list.counts(), Counts { total: 3, completed: 1, pending: 2 });
        assert_eq!(list.filtered(Filter::All).len(), 3);
        assert_eq!(list.filtered(Filter::Completed), vec![list.tasks()[1].clone()]);
        assert_eq!(list.filtered(Filter::Pending).len(), 2);
    }

    #[test]
    fn test_failed_save_keeps_change_in_memory() {
        let (mut list, storage) = fresh();
        storage.fail_writes(true);

        assert!(list.add("offline", NOW).is_err());
        assert_eq!(list.tasks().len(), 1);
        assert_eq!(storage.raw(), None);
    }
}
