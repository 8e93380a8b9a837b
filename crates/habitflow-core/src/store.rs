//! In-memory habit collection with whole-file JSON persistence.
//!
//! The store is the one piece of mutable state in the library. It is
//! session-scoped: constructed when a session starts, mutated through the
//! command methods, persisted when the session ends. Persistence is a full
//! overwrite of the habits file, not an incremental log.

use std::path::Path;

use crate::error::{Result, StorageError};
use crate::habit::{Habit, HabitStatus};

/// Insertion-ordered habit collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the starter habits, for first runs.
    pub fn starter() -> Self {
        Self {
            habits: Habit::starter_set(),
        }
    }

    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// Append a habit. Duplicate names are allowed; lookups only ever see
    /// the first occurrence, so later duplicates are shadowed.
    pub fn add(&mut self, habit: Habit) {
        self.habits.push(habit);
    }

    /// Set the first habit with this name to `Completed`. Returns whether a
    /// match was found; an unknown name is a no-op, not an error.
    pub fn mark_completed(&mut self, name: &str) -> bool {
        match self.habits.iter_mut().find(|h| h.name == name) {
            Some(habit) => {
                habit.status = HabitStatus::Completed;
                true
            }
            None => false,
        }
    }

    /// Live view of the collection, in insertion order.
    pub fn list(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Load the collection from a JSON file.
    ///
    /// Total: a missing file yields an empty store, and malformed contents
    /// yield an empty store with a warning on stderr. Neither is surfaced
    /// as an error.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::new(),
        };
        match serde_json::from_str::<Vec<Habit>>(&content) {
            Ok(habits) => Self { habits },
            Err(e) => {
                eprintln!(
                    "warning: habit data at {} is malformed ({e}); starting empty",
                    path.display()
                );
                Self::new()
            }
        }
    }

    /// Write the full collection to `path` as a JSON array, replacing any
    /// previous contents. Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or the file
    /// cannot be written.
    pub fn persist(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.habits)?;
        std::fs::write(path, content).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = HabitStore::new();
        store.add(Habit::new("b", "Today", HabitStatus::Pending));
        store.add(Habit::new("a", "Today", HabitStatus::Pending));
        store.add(Habit::new("c", "Tomorrow", HabitStatus::Upcoming));
        let names: Vec<&str> = store.list().iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn mark_completed_hits_first_match_only() {
        let mut store = HabitStore::new();
        store.add(Habit::new("water", "Today", HabitStatus::Pending));
        store.add(Habit::new("water", "Tomorrow", HabitStatus::Upcoming));
        assert!(store.mark_completed("water"));
        assert_eq!(store.list()[0].status, HabitStatus::Completed);
        assert_eq!(store.list()[1].status, HabitStatus::Upcoming);
    }

    #[test]
    fn mark_completed_is_idempotent() {
        let mut store = HabitStore::new();
        store.add(Habit::new("water", "Today", HabitStatus::Pending));
        assert!(store.mark_completed("water"));
        assert!(store.mark_completed("water"));
        assert_eq!(store.list()[0].status, HabitStatus::Completed);
    }

    #[test]
    fn mark_completed_unknown_name_is_a_noop() {
        let mut store = HabitStore::starter();
        let before = store.clone();
        assert!(!store.mark_completed("nonexistent"));
        assert_eq!(store, before);
    }

    #[test]
    fn upcoming_transitions_to_completed() {
        let mut store = HabitStore::new();
        store.add(Habit::new("walk", "Tomorrow", HabitStatus::Upcoming));
        assert!(store.mark_completed("walk"));
        assert_eq!(store.list()[0].status, HabitStatus::Completed);
    }

    #[test]
    fn load_missing_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = HabitStore::load(&dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn load_malformed_file_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = HabitStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn persist_overwrites_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");

        let mut long = HabitStore::starter();
        long.add(Habit::new("extra", "Today", HabitStatus::Pending));
        long.persist(&path).unwrap();

        let short = HabitStore::from_habits(vec![Habit::new(
            "only one",
            "Today",
            HabitStatus::Pending,
        )]);
        short.persist(&path).unwrap();

        let reloaded = HabitStore::load(&path);
        assert_eq!(reloaded, short);
    }

    #[test]
    fn persist_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("habits.json");
        HabitStore::starter().persist(&path).unwrap();
        assert_eq!(HabitStore::load(&path), HabitStore::starter());
    }
}
