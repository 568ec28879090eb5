//! Shared helpers for logging integration tests.

use std::path::Path;

use rw_core::LoggingConfig;

/// Logging config writing into `dir`.
pub fn create_file_logging_config(dir: &Path, json_output: bool) -> LoggingConfig {
    LoggingConfig {
        level: "info".into(),
        directory: dir.to_string_lossy().into_owned(),
        json_output,
    }
}

/// Contents of the rotated log file in `dir`.
pub fn read_log_file(dir: &Path) -> String {
    let entry = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .find(|e| e.file_name().to_string_lossy().starts_with("relaywarden.log"))
        .expect("no log file written");
    std::fs::read_to_string(entry.path()).unwrap()
}
