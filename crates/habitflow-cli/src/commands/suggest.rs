use clap::Subcommand;
use habitflow_core::suggestions;

use super::common::open_store;

#[derive(Subcommand)]
pub enum SuggestAction {
    /// List suggestions for one or more focus areas
    List {
        /// Focus areas, e.g. Health Education
        areas: Vec<String>,
    },
    /// Accept a suggestion as a new habit due today
    Accept {
        /// Suggestion text, exactly as listed
        text: String,
    },
    /// List the known focus areas
    Areas,
}

pub fn run(action: SuggestAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SuggestAction::List { areas } => {
            let items = suggestions::suggestions_for(areas.iter().map(String::as_str));
            if items.is_empty() {
                println!("No suggestions. Known areas: {}", suggestions::areas().join(", "));
            } else {
                for item in items {
                    println!("- {item}");
                }
            }
        }
        SuggestAction::Accept { text } => {
            let (path, mut store) = open_store()?;
            let habit = suggestions::accept(&text);
            let name = habit.name.clone();
            store.add(habit);
            store.persist(&path)?;
            println!("Habit '{name}' added successfully!");
        }
        SuggestAction::Areas => {
            for area in suggestions::areas() {
                println!("{area}");
            }
        }
    }
    Ok(())
}
