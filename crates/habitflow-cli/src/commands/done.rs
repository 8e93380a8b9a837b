use super::common::open_store;

pub fn run(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (path, mut store) = open_store()?;
    if store.mark_completed(name) {
        println!("Completed: {name}");
    } else {
        println!("No habit named '{name}'.");
    }
    store.persist(&path)?;
    Ok(())
}
