//! Free-text habit parser.
//!
//! A fixed word-count heuristic, deliberately not NLP: the last two
//! whitespace tokens are assumed to be a frequency phrase ("every day",
//! "each morning") and are dropped from the name when the input is long
//! enough to have one. The quirks of this rule are part of its contract --
//! see [`parse`].

use std::fmt;

use crate::habit::{Habit, HabitStatus};

/// How often a parsed habit repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    OneTime,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::OneTime => "one-time",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing a habit description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHabit {
    pub name: String,
    pub frequency: Frequency,
}

impl ParsedHabit {
    /// Turn the parse result into a pending habit whose due label is the
    /// frequency string, matching the add-habit flow.
    pub fn into_habit(self) -> Habit {
        Habit::new(&self.name, self.frequency.as_str(), HabitStatus::Pending)
    }
}

/// Parse a free-text habit description into a name and frequency.
///
/// Tokenizes on whitespace runs. With more than two tokens, the name is
/// every token except the last two, rejoined with single spaces; otherwise
/// the name is the input text unchanged. The frequency is `Daily` iff the
/// exact token `every` appears (case-sensitive), else `OneTime`.
///
/// Total over all inputs. Empty or whitespace-only text comes back as the
/// name verbatim rather than an empty string; that fallthrough is kept
/// as-is rather than special-cased.
pub fn parse(text: &str) -> ParsedHabit {
    let words: Vec<&str> = text.split_whitespace().collect();
    let name = if words.len() > 2 {
        words[..words.len() - 2].join(" ")
    } else {
        text.to_string()
    };
    let frequency = if words.iter().any(|w| *w == "every") {
        Frequency::Daily
    } else {
        Frequency::OneTime
    };
    ParsedHabit { name, frequency }
}
