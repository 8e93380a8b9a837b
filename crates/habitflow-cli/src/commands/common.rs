//! Shared store open/persist plumbing for CLI commands.
//!
//! Every command is one session: open the store, run one command/query,
//! persist. A first run (no habits file yet) starts from the starter set
//! instead of an empty dashboard.

use std::path::PathBuf;

use habitflow_core::storage::habits_path;
use habitflow_core::HabitStore;

pub fn open_store() -> Result<(PathBuf, HabitStore), Box<dyn std::error::Error>> {
    let path = habits_path()?;
    let store = if path.exists() {
        HabitStore::load(&path)
    } else {
        HabitStore::starter()
    };
    Ok((path, store))
}
