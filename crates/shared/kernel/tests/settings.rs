use tinct_kernel::settings::{Settings, SettingsError, SettingsSink, SettingsSource};

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.set_string_list(
        "Converter",
        "Names",
        &["color_css_rgb".to_owned(), "color_web_hex".to_owned()],
    );
    settings.set_bool_list("Converter", "Copy", &[true, false]);
    settings.set_string("Converter", "Display", "color_css_rgb");
    settings.save(&path).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(
        loaded.get_string_list("Converter", "Names"),
        Some(vec!["color_css_rgb".to_owned(), "color_web_hex".to_owned()])
    );
    assert_eq!(loaded.get_bool_list("Converter", "Copy"), Some(vec![true, false]));
    assert_eq!(loaded.get_bool_list("Converter", "Paste"), None);
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load(dir.path().join("settings.toml")).unwrap();

    assert!(settings.is_empty());
    assert_eq!(
        settings.get_string_with_default("Converter", "Display", "color_web_hex"),
        "color_web_hex"
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[Converter\nNames = ").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.context_str().is_some_and(|c| c.ends_with("settings.toml")));
}

#[test]
fn directory_in_place_of_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(dir.path()).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}
