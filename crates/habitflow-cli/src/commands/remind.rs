use chrono::NaiveTime;
use habitflow_core::reminder::{validate_now, ReminderOutcome};

pub fn run(name: &str, time: &str) -> Result<(), Box<dyn std::error::Error>> {
    let proposed = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| format!("invalid time '{time}', expected HH:MM"))?;

    match validate_now(proposed) {
        ReminderOutcome::Accepted => {
            println!("Reminder for '{name}' set at {time}.");
        }
        ReminderOutcome::Rejected => {
            println!("Reminder time for '{name}' is in the past! Please choose a future time.");
        }
    }
    Ok(())
}
