use bujo_labels::config::LoggingConfig;
use bujo_labels::logger;
use log::LevelFilter;

#[test]
fn test_parse_level() {
    assert_eq!(logger::parse_level("info").unwrap(), LevelFilter::Info);
    assert_eq!(logger::parse_level("DEBUG").unwrap(), LevelFilter::Debug);
    assert_eq!(logger::parse_level(" warn ").unwrap(), LevelFilter::Warn);
    assert_eq!(logger::parse_level("off").unwrap(), LevelFilter::Off);
    assert!(logger::parse_level("chatty").is_err());
}

#[test]
fn test_default_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("bujo-labels/bujo-labels.log"));
    }
}

// The global logger can only be installed once per process, so the
// disabled and enabled cases share one test.
#[test]
fn test_init_writes_to_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("bujo.log");

    let disabled = LoggingConfig {
        enabled: false,
        level: "debug".to_string(),
        file: Some(path.clone()),
    };
    logger::init(&disabled).unwrap();
    assert!(!path.exists());

    let invalid = LoggingConfig {
        enabled: true,
        level: "chatty".to_string(),
        file: Some(path.clone()),
    };
    assert!(logger::init(&invalid).is_err());

    let enabled = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(path.clone()),
    };
    logger::init(&enabled).unwrap();
    log::debug!("Test message with file");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Test message with file"));
    assert!(content.contains("DEBUG"));
}
