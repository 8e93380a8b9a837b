//! Static focus-area suggestion catalog.
//!
//! A fixed mapping from focus-area tags to candidate habit strings. Lookup
//! is case-sensitive; unknown tags contribute nothing. Suggestions are plain
//! text until a caller accepts one, at which point it becomes a pending
//! habit due today.

use crate::habit::{Habit, HabitStatus};

const HEALTH: &[&str] = &[
    "Drink 2L water",
    "Walk 5000 steps",
    "Stretch for 10 minutes",
];

const EDUCATION: &[&str] = &[
    "Read 15 pages",
    "Practice a language for 15 minutes",
    "Review notes before bed",
];

/// Known focus-area tags, in catalog order.
pub fn areas() -> &'static [&'static str] {
    &["Health", "Education"]
}

/// Candidate list for one area. Unknown tags get an empty list, not an error.
pub fn candidates(area: &str) -> &'static [&'static str] {
    match area {
        "Health" => HEALTH,
        "Education" => EDUCATION,
        _ => &[],
    }
}

/// Concatenate the candidate lists of the requested areas, in the order
/// given. Not deduplicated: asking for an area twice repeats its list.
pub fn suggestions_for<'a, I>(areas: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    areas
        .into_iter()
        .flat_map(|area| candidates(area).iter().map(|s| (*s).to_string()))
        .collect()
}

/// Accept a suggestion, turning it into a pending habit due today.
pub fn accept(suggestion: &str) -> Habit {
    Habit::new(suggestion, "Today", HabitStatus::Pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_appended_in_request_order() {
        let result = suggestions_for(["Education", "Health"]);
        assert_eq!(result.len(), EDUCATION.len() + HEALTH.len());
        assert_eq!(result[0], "Read 15 pages");
        assert_eq!(result[EDUCATION.len()], "Drink 2L water");
    }

    #[test]
    fn repeated_area_is_not_deduplicated() {
        let result = suggestions_for(["Health", "Health"]);
        assert_eq!(result.len(), HEALTH.len() * 2);
        assert_eq!(&result[..HEALTH.len()], &result[HEALTH.len()..]);
    }

    #[test]
    fn unknown_area_contributes_nothing() {
        assert!(suggestions_for(["Finance"]).is_empty());
        let result = suggestions_for(["Finance", "Health"]);
        assert_eq!(result.len(), HEALTH.len());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(candidates("health").is_empty());
    }

    #[test]
    fn accepted_suggestion_is_pending_today() {
        let habit = accept("Walk 5000 steps");
        assert_eq!(habit.name, "Walk 5000 steps");
        assert_eq!(habit.due, "Today");
        assert_eq!(habit.status, HabitStatus::Pending);
    }
}
