use habitflow_core::HabitStatus;

use super::common::open_store;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (path, store) = open_store()?;

    if store.is_empty() {
        println!("No habits yet. Add one with `habitflow add`.");
    } else {
        println!("Habit Dashboard");
        for habit in store.list() {
            let marker = match habit.status {
                HabitStatus::Completed => "[x]",
                HabitStatus::Pending | HabitStatus::Upcoming => "[ ]",
            };
            println!(
                "{marker} {} (due: {}, status: {})",
                habit.name,
                habit.due,
                habit.status.as_str()
            );
        }
    }

    // First run seeds the starter set; make sure it lands on disk.
    store.persist(&path)?;
    Ok(())
}
