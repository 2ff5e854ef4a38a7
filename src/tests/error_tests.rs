//! Tests for the error module.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::data_structures::room_graph::RoomGraphError;
use crate::data_structures::suspect_lookup::SuspectLookupError;
use crate::error::config::ConfigError;
use crate::error::game::GameError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, QuestError,
    TracingErrorReporter,
};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = QuestError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors keep their messages.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
    let quest_error = QuestError::from(GameError::from(io_error));

    let error_string = format!("{quest_error}");
    assert!(error_string.starts_with("Game error"));
    assert!(error_string.contains("stdout closed"));
}

/// Test conversions into the top-level error.
#[test]
fn test_error_conversions() {
    let error: QuestError = ConfigError::ValidationError("bad level".to_string()).into();
    assert!(matches!(error, QuestError::Config(ConfigError::ValidationError(_))));

    let error: QuestError = GameError::from(RoomGraphError::DuplicateName("Cozinha".into())).into();
    assert!(format!("{error}").contains("Cozinha"));

    let error: QuestError = GameError::from(SuspectLookupError::ZeroBuckets).into();
    assert!(matches!(error, QuestError::Game(GameError::SuspectLookup(_))));
}

/// Test the out-of-range message names the key.
#[test]
fn test_value_out_of_range_display() {
    let error = ConfigError::ValueOutOfRange {
        key: "game.win_threshold".to_string(),
        message: "must be at least 1".to_string(),
    };
    let text = error.to_string();
    assert!(text.contains("game.win_threshold"));
    assert!(text.contains("must be at least 1"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
///
/// This is the only test that installs a reporter, since the slot is global.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = QuestError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the tracing reporter accepts a context with a span trace.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = QuestError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_span_trace();

    // Just make sure this doesn't panic
    reporter.report(context);
}
