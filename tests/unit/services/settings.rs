use super::*;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    ensure_settings_file_at(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: Settings = serde_json::from_str(&written).unwrap();
    assert!(parsed.keybindings.is_empty());
    assert_eq!(parsed.theme, ThemeSettings::default());

    std::fs::write(&path, r#"{"keybindings":[{"key":"e","button":"equal"}]}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    let kept = std::fs::read_to_string(&path).unwrap();
    assert!(kept.contains("equal"));
}

#[test]
fn load_settings_reads_partial_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(
        &path,
        r##"{
            "keybindings": [{ "key": "ctrl+e", "button": "equal" }],
            "theme": { "operator_bg": "#ff9500" }
        }"##,
    )
    .unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(
        settings.keybindings,
        vec![KeybindingRule {
            key: "ctrl+e".to_string(),
            button: "equal".to_string(),
        }]
    );
    assert_eq!(settings.theme.operator_bg.as_deref(), Some("#ff9500"));
    assert_eq!(settings.theme.digit_bg, None);
}

#[test]
fn load_settings_falls_back_on_bad_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    let settings = load_settings_from(&path);
    assert!(settings.keybindings.is_empty());
}

#[test]
fn load_settings_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("absent.json"));
    assert!(settings.keybindings.is_empty());
    assert_eq!(settings.theme, ThemeSettings::default());
}
