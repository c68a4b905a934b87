//! Integration tests for loading property files
//!
//! Fixture files live under `tests/testdata/` and mirror the board and
//! platform definition files the loader is meant to consume.

use props_map::{HostOs, LoadError, PropertyMap, load, load_from_slice, safe_load};
use std::path::{Path, PathBuf};

fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

#[test]
fn test_load_boards_txt() {
    let props = load(testdata("boards.txt"), HostOs::Linux).unwrap();

    assert_eq!(props.get("menu.cpu"), Some("Processor"));
    assert_eq!(props.get("ethernet.upload.maximum_size"), Some("32256"));
    // Placeholders survive loading untouched.
    assert_eq!(
        props.get("robotMotor.build.extra_flags"),
        Some("{build.usb_flags}")
    );

    let ethernet = props.sub_tree("ethernet");
    assert_eq!(ethernet.get("name"), Some("Arduino Ethernet"));
    assert_eq!(ethernet.sub_tree("upload").get("speed"), Some("115200"));
}

#[test]
fn test_load_platform_keys_for_each_os() {
    for (os, expected) in [
        (HostOs::Linux, "is linux"),
        (HostOs::Freebsd, "is freebsd"),
        (HostOs::Windows, "is windows"),
        (HostOs::Macosx, "is macosx"),
    ] {
        let props = load(testdata("platform_keys.txt"), os).unwrap();

        // One suffix collapses onto the plain key, the other three keep
        // their suffixed keys, plus the `key` line: five entries total.
        assert_eq!(props.len(), 5, "unexpected size for {:?}", os);
        assert_eq!(props.get("which.os"), Some(expected));
        assert_eq!(props.get("key"), Some("value = 1"));
    }
}

#[test]
fn test_load_normalizes_line_endings() {
    let props = load(testdata("crlf.txt"), HostOs::Linux).unwrap();

    assert_eq!(props.len(), 3);
    assert_eq!(props.get("menu.cpu"), Some("Processor"));
    assert_eq!(props.get("uno.name"), Some("Arduino Uno"));
    assert_eq!(props.get("ethernet.name"), Some("Arduino Ethernet"));
}

#[test]
fn test_load_broken_file() {
    match load(testdata("broken.txt"), HostOs::Linux) {
        Err(LoadError::LineFormat { path, line }) => {
            assert!(path.ends_with("broken.txt"));
            assert_eq!(line, 1);
        }
        other => panic!("Expected LineFormat error, got {:?}", other),
    }
}

#[test]
fn test_load_missing_file() {
    let result = load(testdata("does_not_exist.txt"), HostOs::Linux);
    assert!(matches!(result, Err(LoadError::FileRead { .. })));
}

#[test]
fn test_safe_load_missing_file_is_empty() {
    let props = safe_load(testdata("does_not_exist.txt"), HostOs::Linux).unwrap();
    assert!(props.is_empty());
}

#[test]
fn test_safe_load_existing_file() {
    let props = safe_load(testdata("boards.txt"), HostOs::Linux).unwrap();
    assert_eq!(props.get("uno.name"), Some("Arduino/Genuino Uno"));
}

#[test]
fn test_safe_load_propagates_parse_errors() {
    let result = safe_load(testdata("broken.txt"), HostOs::Linux);
    assert!(matches!(result, Err(LoadError::LineFormat { .. })));
}

#[test]
fn test_slice_and_file_loading_agree() {
    let from_file = load(testdata("boards.txt"), HostOs::Linux).unwrap();

    let text = std::fs::read_to_string(testdata("boards.txt")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    let from_slice = load_from_slice(&lines, HostOs::Linux).unwrap();

    assert!(from_file.equals(&from_slice));
}

#[test]
fn test_serde_round_trip() {
    let props = load(testdata("boards.txt"), HostOs::Linux).unwrap();

    let json = serde_json::to_string(&props).unwrap();
    let back: PropertyMap = serde_json::from_str(&json).unwrap();

    assert!(back.equals(&props));
}
