// Unit tests for logger initialization
// Only this module installs the global logger

use crate::logger::{LOG_FILE_NAME, initialize};

use log::LevelFilter;
use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: `run()` initializes logging, and tests or embedding code may
/// do so too; a second call must not crash the process.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok_and_file_exists() {
    // GIVEN
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    // WHEN
    let first = initialize(Some(log_dir.as_path()), LevelFilter::Debug);
    let second = initialize(None, LevelFilter::Trace);

    // THEN
    assert!(first.is_ok(), "First initialization should succeed: {first:?}");
    assert!(second.is_ok(), "Second initialization should succeed (idempotent)");
    assert!(log_dir.join(LOG_FILE_NAME).exists());
}
