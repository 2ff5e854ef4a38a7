//! Verdict engine: weighs the collected evidence against an accusation.

use tracing::{debug, info};

use crate::data_structures::{ClueIndex, SuspectLookup};

/// How an accusation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Enough clues point at the accused
    Solved,
    /// Some clues may point at the accused, but fewer than required
    Unproven,
    /// Nothing was collected, so nothing could be weighed
    NoEvidence,
}

/// The judgement on one accusation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Name as compared against the suspect table
    pub accused: String,
    /// Collected clues pointing at the accused
    pub match_count: usize,
    /// Matches required for [`Outcome::Solved`]
    pub threshold: usize,
    /// The result
    pub outcome: Outcome,
}

impl Verdict {
    /// Whether the accusation stands.
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }
}

/// Counts supporting clues and applies the win threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictEngine {
    threshold: usize,
}

impl VerdictEngine {
    /// Creates an engine requiring `threshold` supporting clues.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Matches required to win.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Judges an accusation.
    ///
    /// Every clue in `clues` is visited once in ascending order and its
    /// suspect looked up in `suspects`; exact matches against `accused` are
    /// counted.
    pub fn accuse(&self, accused: &str, clues: &ClueIndex, suspects: &SuspectLookup) -> Verdict {
        if clues.is_empty() {
            info!(accused, "Accusation without evidence");
            return Verdict {
                accused: accused.to_string(),
                match_count: 0,
                threshold: self.threshold,
                outcome: Outcome::NoEvidence,
            };
        }

        let match_count = clues
            .in_order()
            .filter(|clue| {
                let suspect = suspects.lookup(clue);
                debug!(clue, ?suspect, "Weighing clue");
                suspect == Some(accused)
            })
            .count();

        let outcome = if match_count >= self.threshold {
            Outcome::Solved
        } else {
            Outcome::Unproven
        };
        info!(accused, match_count, ?outcome, "Accusation judged");

        Verdict {
            accused: accused.to_string(),
            match_count,
            threshold: self.threshold,
            outcome,
        }
    }
}

impl Default for VerdictEngine {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Turns a typed accusation into the name compared against the suspect table.
///
/// Keeps the first whitespace-separated word and upper-cases its first
/// character; the rest is kept as typed. Returns `None` if nothing was typed.
pub fn normalize_accusation(raw: &str) -> Option<String> {
    let word = raw.split_whitespace().next()?;
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
