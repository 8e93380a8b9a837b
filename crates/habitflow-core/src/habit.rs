//! Habit record types.

use serde::{Deserialize, Serialize};

/// Completion status of a habit.
///
/// The only transition is `Pending`/`Upcoming` -> `Completed`; there is no
/// unmark operation. `Completed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HabitStatus {
    /// Due and not yet done
    Pending,
    /// Scheduled for later (e.g. tomorrow)
    Upcoming,
    /// Done; terminal
    Completed,
}

impl HabitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitStatus::Pending => "Pending",
            HabitStatus::Upcoming => "Upcoming",
            HabitStatus::Completed => "Completed",
        }
    }
}

/// A tracked recurring or one-time goal.
///
/// `name` is the identity key within a session: lookups match on it, and
/// duplicates are shadowed rather than rejected. `due` is a free-form label
/// ("Today", "Tomorrow", "daily", "one-time"), set by the caller or derived
/// by the parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Habit {
    pub name: String,
    pub due: String,
    pub status: HabitStatus,
}

impl Habit {
    /// Create a habit, trimming surrounding whitespace off the name.
    pub fn new(name: &str, due: &str, status: HabitStatus) -> Self {
        Self {
            name: name.trim().to_string(),
            due: due.to_string(),
            status,
        }
    }

    /// The seed set a brand-new store starts with.
    pub fn starter_set() -> Vec<Habit> {
        vec![
            Habit::new("Drink 2L water", "Today", HabitStatus::Pending),
            Habit::new("Read 15 pages", "Today", HabitStatus::Pending),
            Habit::new("Walk 5000 steps", "Tomorrow", HabitStatus::Upcoming),
        ]
    }
}
