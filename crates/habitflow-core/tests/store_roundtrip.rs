//! Persistence round-trip tests for the habit store.

use habitflow_core::{Habit, HabitStatus, HabitStore};
use proptest::prelude::*;

fn habit_strategy() -> impl Strategy<Value = Habit> {
    let status = prop_oneof![
        Just(HabitStatus::Pending),
        Just(HabitStatus::Upcoming),
        Just(HabitStatus::Completed),
    ];
    (
        "[A-Za-z0-9][A-Za-z0-9 '!-]{0,30}",
        prop_oneof![
            Just("Today".to_string()),
            Just("Tomorrow".to_string()),
            Just("daily".to_string()),
            Just("one-time".to_string()),
        ],
        status,
    )
        .prop_map(|(name, due, status)| Habit { name, due, status })
}

proptest! {
    /// load(persist(h)) == h, field for field, order preserved.
    #[test]
    fn persist_then_load_is_identity(habits in prop::collection::vec(habit_strategy(), 0..20)) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");

        let store = HabitStore::from_habits(habits);
        store.persist(&path).unwrap();
        let reloaded = HabitStore::load(&path);

        prop_assert_eq!(reloaded, store);
    }
}

#[test]
fn roundtrip_keeps_duplicate_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    let mut store = HabitStore::new();
    store.add(Habit::new("water", "Today", HabitStatus::Pending));
    store.add(Habit::new("water", "daily", HabitStatus::Upcoming));
    store.persist(&path).unwrap();

    let reloaded = HabitStore::load(&path);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded, store);
}

#[test]
fn persisted_shape_is_a_json_array_of_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    HabitStore::starter().persist(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().expect("top level must be an array");
    assert_eq!(records.len(), 3);
    for record in records {
        let obj = record.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("due"));
        assert!(obj.contains_key("status"));
        assert!(obj["status"].is_string());
    }
}

#[test]
fn empty_store_roundtrips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("habits.json");

    HabitStore::new().persist(&path).unwrap();
    assert!(HabitStore::load(&path).is_empty());
}
