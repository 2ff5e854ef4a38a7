//! Detective Quest library.
//!
//! A text exploration game built around three classic data structures: a
//! binary tree of rooms, a binary search tree of collected clues and a chained
//! hash table from clues to suspects. The binary crate wires these to the
//! terminal; everything else lives here so it can be driven from tests.
//!
//! # Architecture
//!
//! - [`data_structures`]: the room graph, clue index, suspect lookup and
//!   keyword matcher
//! - [`game`]: exploration and verdict engines, suspect rules and the session
//!   tying them together behind a [`game::Console`]
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`error`]: error types and the global error reporter

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod game;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Detective Quest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
