//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so this file
//! holds a single initialization test.

use cosmos_quickstart::config::LoggingConfig;
use cosmos_quickstart::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_log_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(!log_path.exists());
    let guard = init_logging("debug", &config).unwrap();
    assert!(log_path.is_dir());

    tracing::info!("written to the file layer");
    drop(guard);
}
