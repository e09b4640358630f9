//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and rejection of invalid policies.

use std::io::Write;

use mipsim_core::common::error::ConfigError;
use mipsim_core::config::*;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(!config.general.trace_sub_operands);
    assert_eq!(config.memory.instruction_words, 4096);
    assert_eq!(config.memory.data_words, 1024);
    assert_eq!(config.memory.out_of_bounds, OutOfBoundsPolicy::Fault);
    assert_eq!(config.execution.pc_advance, PcAdvance::Legacy);
    assert_eq!(config.execution.max_instructions, None);
}

#[test]
fn test_empty_object_uses_defaults() {
    let config = Config::from_json_str("{}").unwrap();
    assert_eq!(config.memory.instruction_words, 4096);
    assert_eq!(config.memory.data_words, 1024);
    assert_eq!(config.execution.pc_advance, PcAdvance::Legacy);
}

#[test]
fn test_partial_memory_section_keeps_other_defaults() {
    let config = Config::from_json_str(r#"{ "memory": { "data_words": 16 } }"#).unwrap();
    assert_eq!(config.memory.data_words, 16);
    assert_eq!(config.memory.instruction_words, 4096);
    assert_eq!(config.memory.out_of_bounds, OutOfBoundsPolicy::Fault);
}

#[test]
fn test_full_config() {
    let json = r#"{
        "general": { "trace_instructions": true, "trace_sub_operands": true },
        "memory": { "instruction_words": 64, "data_words": 8, "out_of_bounds": "wrap" },
        "execution": { "pc_advance": "exact", "max_instructions": 500 }
    }"#;
    let config = Config::from_json_str(json).unwrap();
    assert!(config.general.trace_instructions);
    assert!(config.general.trace_sub_operands);
    assert_eq!(config.memory.instruction_words, 64);
    assert_eq!(config.memory.data_words, 8);
    assert_eq!(config.memory.out_of_bounds, OutOfBoundsPolicy::Wrap);
    assert_eq!(config.execution.pc_advance, PcAdvance::Exact);
    assert_eq!(config.execution.max_instructions, Some(500));
}

#[rstest]
#[case(r#"{ "memory": { "out_of_bounds": "ignore" } }"#)]
#[case(r#"{ "execution": { "pc_advance": "fast" } }"#)]
#[case(r#"{ "memory": { "data_words": -1 } }"#)]
#[case("not json")]
fn test_invalid_config_rejected(#[case] json: &str) {
    assert!(matches!(
        Config::from_json_str(json),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_from_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "execution": {{ "max_instructions": 7 }} }}"#).unwrap();
    file.flush().unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.execution.max_instructions, Some(7));
}

#[test]
fn test_from_json_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(
        Config::from_json_file(&path),
        Err(ConfigError::Io { .. })
    ));
}
