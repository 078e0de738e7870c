//! Configuration tests - YAML round trip and validation into settings

use std::time::Duration;

use taskpanel::config::{TextAreaConfig, TextAreaSettings};
use taskpanel::theme::Color;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = TextAreaConfig {
        font_size: 18,
        wrap: true,
        prompt: "Search".to_string(),
        color_selection: "#102030".to_string(),
        undo_limit: 50,
        ..TextAreaConfig::default()
    };
    config.save_to(&path).unwrap();

    let loaded = TextAreaConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TextAreaConfig::load_from(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config"));
}

#[test]
fn test_load_malformed_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "font_size: [not, a, number]\n").unwrap();

    let err = TextAreaConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn test_settings_from_loaded_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "font_size: 20\nsingle_line: true\ncolor: '#ff0000'\nblink_on_ms: 600\npage_lines: 5\n",
    )
    .unwrap();

    let settings = TextAreaSettings::from_config(&TextAreaConfig::load_from(&path).unwrap());
    assert_eq!(settings.font_size, 20.0);
    assert_eq!(settings.scroll_margin, 60.0);
    assert!(settings.single_line);
    assert_eq!(settings.colors.text, Color::rgb(255, 0, 0));
    assert_eq!(settings.blink_on, Duration::from_millis(600));
    assert_eq!(settings.blink_off, Duration::from_millis(430));
    assert_eq!(settings.page_lines, 5);
}

#[test]
fn test_page_lines_setting_drives_page_motion() {
    use taskpanel::editable::{HeadlessHost, MonospaceShaper, MoveTarget, TextArea, TextEditMsg};

    let settings = TextAreaSettings::from_config(&TextAreaConfig {
        page_lines: 2,
        ..TextAreaConfig::default()
    });
    let mut host = HeadlessHost::new();
    let mut area = TextArea::new(MonospaceShaper::new(10.0, 20.0), settings, 100.0, 40.0)
        .with_text("a\nb\nc\nd");
    area.apply(TextEditMsg::Move(MoveTarget::PageUp), &mut host);
    assert_eq!(area.state().cursor(), 3);
}
