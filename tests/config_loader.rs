use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use termfolio::config::{Config, ConfigError};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

#[test]
fn defaults_mirror_the_original_timings() {
    let config = Config::default();
    assert_eq!(config.animation.tick_ms, 70);
    assert_eq!(config.submission.submit_delay_ms, 1500);
    assert_eq!(config.submission.status_reset_ms, 3000);
    assert_eq!(config.submission.copied_reset_ms, 2000);
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");
    let config = Config::load_from(file.path()).expect("load empty config");
    assert_eq!(config.animation.tick_ms, 70);
    assert_eq!(config.submission.status_reset_ms, 3000);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let file = write_config(
        r#"
[animation]
tick_ms = 40

[submission]
status_reset_ms = 5000
"#,
    );
    let config = Config::load_from(file.path()).expect("load config");
    assert_eq!(config.animation.tick_ms, 40);
    assert_eq!(config.animation.reveal_ticks, 6);
    assert_eq!(config.submission.status_reset_ms, 5000);
    assert_eq!(config.submission.submit_delay_ms, 1500);
}

#[test]
fn zero_tick_interval_fails_validation() {
    let file = write_config("[animation]\ntick_ms = 0\n");
    match Config::load_from(file.path()) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("tick_ms"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn zero_reveal_span_fails_validation() {
    let file = write_config("[animation]\nreveal_ticks = 0\n");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_config("animation = not toml");
    assert!(matches!(
        Config::load_from(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn missing_explicit_path_is_a_read_error() {
    let missing = std::path::Path::new("/nonexistent/termfolio/config.toml");
    assert!(matches!(
        Config::load_from(missing),
        Err(ConfigError::ReadError { .. })
    ));
}

#[test]
fn duration_accessors_convert_milliseconds() {
    let config = Config::default();
    assert_eq!(config.animation.tick(), Duration::from_millis(70));
    assert_eq!(config.submission.submit_delay(), Duration::from_millis(1500));
    assert_eq!(config.submission.status_reset(), Duration::from_millis(3000));
    assert_eq!(config.submission.copied_reset(), Duration::from_millis(2000));
}
