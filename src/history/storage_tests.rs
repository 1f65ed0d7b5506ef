use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use super::*;

fn entries(values: &[&str]) -> Vec<ClipboardEntry> {
    values
        .iter()
        .map(|v| ClipboardEntry::new(*v).unwrap())
        .collect()
}

fn contents(entries: &[ClipboardEntry]) -> Vec<&str> {
    entries.iter().map(ClipboardEntry::content).collect()
}

#[test]
fn test_default_history_path_is_home_dotfile() {
    let path = default_history_path();
    assert!(path.to_string_lossy().ends_with(".clipboard_history"));
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let loaded = load_history(&dir.path().join("nope"), 5).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_load_invalid_utf8_is_encoding_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

    let result = load_history(&path, 5);
    assert!(matches!(result, Err(PersistenceError::Encoding { .. })));
}

#[test]
fn test_load_directory_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = load_history(dir.path(), 5);
    assert!(matches!(result, Err(PersistenceError::Read { .. })));
}

#[test]
fn test_save_then_load_preserves_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    let saved = entries(&["newest", "middle", "oldest"]);

    save_history(&path, &saved).unwrap();
    let loaded = load_history(&path, 5).unwrap();

    assert_eq!(loaded, saved);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("history");

    save_history(&path, &entries(&["x"])).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "x\n");
}

#[test]
fn test_save_leaves_no_temp_files_behind() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");

    save_history(&path, &entries(&["a", "b"])).unwrap();
    save_history(&path, &entries(&["c"])).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("history")]);
}

#[test]
fn test_single_line_entries_are_stored_verbatim() {
    let serialized = serialize_history(&entries(&["plain text", "https://example.com/?q=1"]));
    assert_eq!(serialized, "plain text\nhttps://example.com/?q=1\n");
}

#[test]
fn test_multiline_entry_is_one_record() {
    let serialized = serialize_history(&entries(&["line one\nline two", "C:\\path"]));
    assert_eq!(serialized, "line one\\nline two\nC:\\\\path\n");
}

#[test]
fn test_parse_respects_capacity() {
    let parsed = parse_history("a\nb\nc\nd\n", 2);
    assert_eq!(contents(&parsed), vec!["a", "b"]);
}

#[test]
fn test_parse_skips_blank_lines_and_duplicates() {
    let parsed = parse_history("a\n\n   \nb\na\nc\n", 5);
    assert_eq!(contents(&parsed), vec!["a", "b", "c"]);
}

#[test]
fn test_parse_legacy_separator_format() {
    let legacy = "newest clip\n---CLIPBOARD_ENTRY_SEPARATOR---\nmulti\nline\n---CLIPBOARD_ENTRY_SEPARATOR---\nold\n";
    let parsed = parse_history(legacy, 5);
    assert_eq!(contents(&parsed), vec!["newest clip", "multi\nline", "old"]);
}

#[test]
fn test_separator_lookalike_entry_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    let saved = entries(&[LEGACY_SEPARATOR, "foo", "bar"]);

    save_history(&path, &saved).unwrap();
    let on_disk = fs::read_to_string(&path).unwrap();
    assert!(!on_disk.lines().any(|line| line == LEGACY_SEPARATOR));

    assert_eq!(load_history(&path, 5).unwrap(), saved);
}

#[test]
fn test_leading_dash_is_escaped_only_at_start() {
    assert_eq!(encode_record("-v --verbose"), "\\-v --verbose");
    assert_eq!(decode_record("\\-v --verbose"), "-v --verbose");
}

#[test]
fn test_decode_keeps_unknown_escapes() {
    assert_eq!(decode_record("a\\tb"), "a\\tb");
    assert_eq!(decode_record("trailing\\"), "trailing\\");
}

#[test]
fn test_decode_handles_crlf_escapes() {
    assert_eq!(decode_record("a\\r\\nb"), "a\r\nb");
}

// Any text survives encode + decode, and the encoded form is a single line
proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_record_encoding_is_lossless(
        text in prop_oneof![
            "\\PC*",
            "[a\\\\\n\r-]{0,12}",
            Just(LEGACY_SEPARATOR.to_string()),
        ]
    ) {
        let encoded = encode_record(&text);
        prop_assert!(!encoded.contains('\n'));
        prop_assert!(!encoded.contains('\r'));
        prop_assert_ne!(encoded.as_str(), LEGACY_SEPARATOR);
        prop_assert_eq!(decode_record(&encoded), text);
    }
}

// Persisting then loading reproduces the same ordered list
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_save_load_round_trip(
        values in prop::collection::hash_set(
            prop_oneof![
                "[a-z\\\\\n -]{0,6}[a-z]",
                Just(LEGACY_SEPARATOR.to_string()),
            ],
            0..8,
        )
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        let saved: Vec<ClipboardEntry> = values.into_iter().filter_map(ClipboardEntry::new).collect();

        save_history(&path, &saved).unwrap();
        let loaded = load_history(&path, saved.len().max(1)).unwrap();

        prop_assert_eq!(loaded, saved);
    }
}
