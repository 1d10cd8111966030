//! Tests for the settings store, its persister and the settings commands.

use std::time::Duration;

use tictac_duel::cli::SettingsAction;
use tictac_duel::commands::run_settings;
use tictac_duel::settings::{
    SettingKey, SettingValue, SettingsErrorKind, SettingsStore, spawn_persister,
};

#[test]
fn test_values_round_trip_through_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.toml");

    let store = SettingsStore::open(&path).expect("missing file is fine");
    assert!(store.snapshot().is_empty());
    store.set("dark_mode", true);
    store.set("volume", 3_i64);
    store.set("ratio", 0.5);
    store.set("name", "ana");
    store.save().expect("save");

    let reopened = SettingsStore::open(&path).expect("reopen");
    assert_eq!(reopened.snapshot(), store.snapshot());
    assert!(reopened.get("dark_mode", false));
    assert_eq!(reopened.get("volume", 0_i64), 3);
    assert_eq!(reopened.get("name", String::new()), "ana");
}

#[test]
fn test_open_rejects_malformed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "dark_mode = [").expect("write");

    let err = SettingsStore::open(&path).unwrap_err();
    assert!(matches!(err.kind, SettingsErrorKind::Parse(_)));
}

#[tokio::test]
async fn test_subscription_sees_only_its_key() {
    let store = SettingsStore::in_memory();
    let mut sub = store.subscribe("dark_mode");
    assert_eq!(sub.current(), None);

    store.set("alternate_symbols", true);
    store.set("dark_mode", true);

    let value = sub.changed().await.expect("store alive");
    assert_eq!(value, Some(SettingValue::Bool(true)));
    assert_eq!(sub.current(), Some(&SettingValue::Bool(true)));
}

#[tokio::test]
async fn test_subscription_reports_reset_as_unset() {
    let store = SettingsStore::in_memory();
    store.set("dark_mode", true);
    let mut sub = store.subscribe("dark_mode");

    store.reset();
    assert_eq!(sub.changed().await.expect("store alive"), None);
}

#[tokio::test]
async fn test_subscription_closes_with_store() {
    let store = SettingsStore::in_memory();
    let mut sub = store.subscribe("dark_mode");
    drop(store);

    let err = sub.changed().await.unwrap_err();
    assert_eq!(err.kind, SettingsErrorKind::Closed);
}

#[tokio::test]
async fn test_persister_writes_after_debounce() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let store = SettingsStore::open(&path).expect("open");
    let persister = spawn_persister(store.clone(), Duration::from_millis(10));

    store.set(SettingKey::DarkMode.as_str(), true);

    let mut written = false;
    for _ in 0..200 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        if path.exists() {
            written = true;
            break;
        }
    }
    assert!(written, "persister never wrote the file");

    persister.shutdown().await;
    let reopened = SettingsStore::open(&path).expect("reopen");
    assert!(reopened.get("dark_mode", false));
}

#[tokio::test]
async fn test_persister_flushes_on_shutdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let store = SettingsStore::open(&path).expect("open");
    let persister = spawn_persister(store.clone(), Duration::from_secs(60));

    store.set(SettingKey::SoundEnabled.as_str(), false);
    tokio::task::yield_now().await;
    persister.shutdown().await;

    let reopened = SettingsStore::open(&path).expect("reopen");
    assert!(!reopened.get("should_play_sound", true));
}

#[test]
fn test_settings_commands() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let mut out = Vec::new();
    run_settings(
        &path,
        &SettingsAction::Set {
            key: "dark_mode".to_string(),
            value: "on".to_string(),
        },
        &mut out,
    )
    .expect("set");
    assert_eq!(String::from_utf8(out).expect("utf8"), "dark_mode = true\n");

    let mut out = Vec::new();
    run_settings(&path, &SettingsAction::Show, &mut out).expect("show");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "should_play_sound = true\ndark_mode = true\nalternate_symbols = false\n"
    );

    let bad_key = SettingsAction::Set {
        key: "volume".to_string(),
        value: "11".to_string(),
    };
    assert!(run_settings(&path, &bad_key, &mut Vec::new()).is_err());

    let bad_value = SettingsAction::Set {
        key: "dark_mode".to_string(),
        value: "dim".to_string(),
    };
    assert!(run_settings(&path, &bad_value, &mut Vec::new()).is_err());

    run_settings(&path, &SettingsAction::Reset, &mut Vec::new()).expect("reset");
    let store = SettingsStore::open(&path).expect("reopen");
    assert!(store.snapshot().is_empty());
}
