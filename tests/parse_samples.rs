//! Integration tests — parse the sample files in the toques/ directory.

use pretty_assertions::assert_eq;
use std::path::PathBuf;
use tubs::{detect_format, parse_file, toque_to_json, Drum, HeaderFormat, Meter, ToqueError};

/// Get the path to the toques directory.
fn toques_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("toques")
}

// ─── Labelled headers ───────────────────────────────────────────────

#[test]
fn parse_chachalokafun() {
    let toque = parse_file(toques_dir().join("chachalokafun.txt"))
        .expect("Failed to parse chachalokafun.txt");

    assert_eq!(toque.name, "Chachalokafun");
    assert_eq!(toque.time_signature, "4/4");
    assert_eq!(toque.meter(), Meter::Common);

    assert_eq!(toque.part(Drum::Okonkolo), "-A-A-A-A-A-A-A-A");
    assert_eq!(toque.part(Drum::Itotele), "S-PPS-PPS-PPS-PP");
    // Two body lines under one heading form one sequence
    assert_eq!(toque.part(Drum::Iya), "A--SA-P-A--SI-P-");
    assert_eq!(toque.max_len(), 16);
}

#[test]
fn parse_nyongo() {
    let toque = parse_file(toques_dir().join("nyongo.txt")).expect("Failed to parse nyongo.txt");

    assert_eq!(toque.name, "Nyongo");
    assert_eq!(toque.meter(), Meter::Compound);
    assert_eq!(toque.part(Drum::Okonkolo).len(), 6);
    assert_eq!(toque.part(Drum::Iya).len(), 12);
    assert_eq!(toque.max_len(), 12);
}

// ─── Bare time signature (older files) ──────────────────────────────

#[test]
fn parse_legacy_bare_format() {
    let path = toques_dir().join("legacy_bare.txt");
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(detect_format(&text), HeaderFormat::BareTimeSignature);

    let toque = parse_file(&path).expect("Failed to parse legacy_bare.txt");
    assert_eq!(toque.name, "");
    assert_eq!(toque.time_signature, "4/4");
    assert_eq!(toque.part(Drum::Okonkolo), "A-A-");
    assert_eq!(toque.part(Drum::Itotele), "--SS");
    assert_eq!(toque.part(Drum::Iya), "I---P---");
}

#[test]
fn legacy_and_labelled_formats_agree() {
    let bare = tubs::parse_toque("4/4\nOkonkolo\nA-A-\nIya\nS\n");
    let labelled = tubs::parse_toque("Time: 4/4\nOkonkolo\nA-A-\nIya\nS\n");
    assert_eq!(bare, labelled);
}

// ─── Errors ─────────────────────────────────────────────────────────

#[test]
fn missing_file_is_a_file_access_error() {
    let path = toques_dir().join("does-not-exist.txt");
    let err = parse_file(&path).unwrap_err();
    match err {
        ToqueError::FileAccess { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected FileAccess, got {other:?}"),
    }
}

// ─── JSON export ────────────────────────────────────────────────────

#[test]
fn json_export_keys_parts_by_drum_name() {
    let toque = parse_file(toques_dir().join("nyongo.txt")).unwrap();
    let json = toque_to_json(&toque).expect("JSON export failed");

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "Nyongo");
    assert_eq!(value["time_signature"], "6/8");
    assert_eq!(value["parts"]["Okonkolo"], "A-SA-S");
    assert_eq!(value["parts"]["Itotele"], "P-AP-A");
    assert_eq!(value["parts"]["Iya"], "I--A-SA--A-S");
}
