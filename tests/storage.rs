//! Integration tests for the persistence adapter: round trip and fallbacks.

use poker_night_web::{RawNumber, Session, Storage};
use std::path::PathBuf;
use uuid::Uuid;

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("poker-night-test-{}.json", Uuid::new_v4()))
}

#[test]
fn save_then_load_round_trips() {
    let path = temp_path();
    let storage = Storage::new(&path);

    let mut session = Session::default();
    session.set_buy_in(50.0);
    session.rename_player(1, "Alice").unwrap();
    // A mid-edit empty field must survive the round trip as typed.
    session.set_entries(2, RawNumber::Text(String::new())).unwrap();
    session.set_final_chips(3, RawNumber::Value(275.5)).unwrap();

    storage.save(&session);
    let loaded = storage.load().expect("saved session should load");
    assert_eq!(loaded, session);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_loads_as_none() {
    let storage = Storage::new(temp_path());
    assert!(storage.load().is_none());
}

#[test]
fn malformed_json_falls_back_to_none() {
    let path = temp_path();
    std::fs::write(&path, "{not json").unwrap();
    let storage = Storage::new(&path);
    assert!(storage.load().is_none());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn persisted_payload_uses_camel_case_field_names() {
    let path = temp_path();
    let storage = Storage::new(&path);
    storage.save(&Session::default());

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.get("buyIn").is_some());
    assert!(value.get("nextId").is_some());
    assert!(value["players"][0].get("finalChips").is_some());

    let _ = std::fs::remove_file(&path);
}
