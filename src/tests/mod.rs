//! Crate-level test suites for Detective Quest.
//!
//! Unit tests live next to the code they cover; the suites here exercise
//! several modules together:
//! - configuration loading and validation
//! - error types and the global error reporter
//! - whole sessions driven through a mocked console

pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{clue_strategy, create_test_dir, scripted_console, Transcript, TestFixture};
