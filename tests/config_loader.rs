use flowkit::config::{Config, ConfigError};
use flowkit::core::{AppState, FlowFinishEvent, RetentionPolicy};
use std::path::PathBuf;

fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(!config.logging.enabled);
    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.file.is_none());

    assert!(config.navigation.animated);
    assert_eq!(config.navigation.retention, RetentionPolicy::FlowLifetime);

    assert_eq!(config.app.initial_state, AppState::Splash);
    assert!(config.app.logout_state.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("flowkit/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

/// An empty file is a valid config with every default applied.
#[test]
fn test_empty_file_loads_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[logging]
enabled = true
filter = "flowkit=debug"
file = "/tmp/flowkit.log"

[navigation]
animated = false
retention = "release_on_pop"

[app]
initial_state = "guest"
logout_state = "onboarding"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert!(config.logging.enabled);
    assert_eq!(config.logging.filter, "flowkit=debug");
    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/flowkit.log")));
    assert!(!config.navigation.animated);
    assert_eq!(config.navigation.retention, RetentionPolicy::ReleaseOnPop);
    assert_eq!(config.app.initial_state, AppState::Guest);
    assert_eq!(config.app.logout_state, Some(AppState::Onboarding));
}

/// Sections may be partial; missing keys fall back to defaults.
#[test]
fn test_partial_section_uses_defaults() {
    let (_dir, path) = write_config(
        r#"
[logging]
enabled = true
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert!(config.logging.enabled);
    assert_eq!(config.logging.filter, "info");
    assert!(config.navigation.animated);
}

#[test]
fn test_validation_fails_splash_logout_state() {
    let (_dir, path) = write_config(
        r#"
[app]
logout_state = "splash"
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("logout_state"), "message: {message}");
        }
        other => panic!("Expected ValidationError, got: {other:?}"),
    }
}

#[test]
fn test_validation_fails_empty_filter() {
    let mut config = Config::default();
    config.logging.filter = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_unknown_state_is_parse_error() {
    let (_dir, path) = write_config(
        r#"
[app]
initial_state = "premium"
"#,
    );

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

/// The logout state from config drives the controller's transition table.
#[test]
fn test_transitions_follow_logout_state() {
    let mut config = Config::default();
    assert_eq!(config.app.transitions().target(FlowFinishEvent::Logout), None);

    config.app.logout_state = Some(AppState::Guest);
    let transitions = config.app.transitions();
    assert_eq!(
        transitions.target(FlowFinishEvent::Logout),
        Some(AppState::Guest)
    );
    assert_eq!(
        transitions.target(FlowFinishEvent::SwitchToBanned),
        Some(AppState::Banned)
    );
}
