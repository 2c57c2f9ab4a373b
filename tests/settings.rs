use std::time::Duration;

use guestbook_gtk::app::{ConfigError, Settings};
use tempfile::TempDir;

#[test]
fn save_and_load_round_trip_through_nested_dir() {
    let td = TempDir::new().unwrap();
    let path = td.path().join("nested").join("guestbook.toml");
    let settings = Settings {
        base_url: "http://localhost:8000".into(),
        utc_offset_minutes: Some(480),
        request_timeout_secs: Some(10),
        ..Settings::default()
    };

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.timeout(), Some(Duration::from_secs(10)));
}

#[test]
fn broken_file_is_a_parse_error() {
    let td = TempDir::new().unwrap();
    let path = td.path().join("guestbook.toml");
    std::fs::write(&path, "base_url = [").unwrap();

    assert!(matches!(Settings::load_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let td = TempDir::new().unwrap();
    assert!(matches!(Settings::load_from(&td.path().join("absent.toml")), Err(ConfigError::Io(_))));
}
