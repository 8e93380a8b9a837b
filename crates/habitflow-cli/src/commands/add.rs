use habitflow_core::parse;

use super::common::open_store;

pub fn run(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    if text.trim().is_empty() {
        eprintln!("please enter a habit description");
        std::process::exit(1);
    }

    let (path, mut store) = open_store()?;
    let habit = parse(text).into_habit();
    let name = habit.name.clone();
    store.add(habit);
    store.persist(&path)?;
    println!("Habit '{name}' added successfully!");
    Ok(())
}
