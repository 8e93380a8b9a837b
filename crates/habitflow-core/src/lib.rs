//! # HabitFlow Core Library
//!
//! This library provides the core business logic for the HabitFlow habit
//! tracker. All operations are available to any caller; the CLI binary is a
//! thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Store**: An insertion-ordered, in-memory habit collection with a
//!   whole-file JSON persistence round-trip
//! - **Parser**: A word-count heuristic turning free text into a
//!   (name, frequency) pair -- deliberately not NLP
//! - **Reminder gate**: A pure accept/reject predicate over times of day,
//!   not a scheduler
//! - **Suggestions**: A static focus-area catalog of candidate habits
//! - **Assistant**: A narrow `ask(prompt) -> text` capability behind which
//!   any text-generation provider can sit
//!
//! ## Key Components
//!
//! - [`HabitStore`]: Habit collection and persistence
//! - [`parse`]: Free-text habit parser
//! - [`reminder::validate`]: Reminder time gate
//! - [`suggestions::suggestions_for`]: Focus-area suggestion lookup
//! - [`Assistant`]: External text-generation collaborator

pub mod assistant;
pub mod config;
pub mod error;
pub mod habit;
pub mod parser;
pub mod reminder;
pub mod storage;
pub mod store;
pub mod suggestions;

pub use assistant::{Assistant, OpenAiAssistant};
pub use config::Config;
pub use error::{ConfigError, CoreError, StorageError};
pub use habit::{Habit, HabitStatus};
pub use parser::{parse, Frequency, ParsedHabit};
pub use reminder::{validate, ReminderOutcome};
pub use store::HabitStore;
