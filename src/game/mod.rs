//! The game built on top of the data structures.
//!
//! A [`Session`] owns the mansion and the evidence. It runs the
//! [`ExplorationEngine`] until the player leaves, then hands the evidence to
//! the [`VerdictEngine`] to judge the accusation. All player I/O goes through
//! the [`Console`] trait.

pub mod console;
pub mod evidence;
pub mod exploration;
pub mod rules;
pub mod session;
pub mod verdict;

pub use console::{Console, TerminalConsole};
pub use evidence::Evidence;
pub use exploration::{
    Command, Discovery, ExplorationEngine, ExplorationState, ExplorationSummary, Rejection,
    Transition,
};
pub use rules::{SuspectRule, SuspectRules, UNKNOWN_SUSPECT};
pub use session::{GameReport, Session, TrialOutcome};
pub use verdict::{normalize_accusation, Outcome, Verdict, VerdictEngine};

#[cfg(test)]
pub use console::MockConsole;
