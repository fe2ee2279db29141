//! Integration tests for tlv-cli
//!
//! Runs the commands against files in a temp dir: JSON -> frame file ->
//! decode/dump, for both raw and hex encodings.

use nether_tlv::{DecodeLimits, TlvError, Value};
use tempfile::tempdir;
use tlv_cli::config::CliConfig;
use tlv_cli::encode::{EncodeArgs, execute as encode_file};
use tlv_cli::io::read_frames;

const MESSAGE: &str = r#"{"a": 1, "b": [true, null, [2.0, "x"]]}"#;

/// Test JSON -> raw frame file -> decode
#[test]
fn test_encode_then_decode_raw() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("msg.json");
    let tlv_path = dir.path().join("msg.tlv");
    std::fs::write(&json_path, MESSAGE).expect("Failed to write JSON");

    encode_file(EncodeArgs {
        input: json_path,
        output: Some(tlv_path.clone()),
        hex: false,
    })
    .expect("encode failed");

    let bytes = read_frames(&tlv_path, false).expect("Failed to read frames");
    let values = nether_tlv::decode_all(&bytes, &DecodeLimits::default()).unwrap();
    assert_eq!(values.len(), 1);

    let value = &values[0];
    assert_eq!(value.get("a"), Some(&Value::Int(1)));
    assert_eq!(
        value.get("b"),
        Some(&Value::List(vec![
            Value::Bool(true),
            Value::None,
            Value::List(vec![Value::Float(2.0), Value::Str("x".into())]),
        ]))
    );
}

/// Test hex output is accepted back as hex input
#[test]
fn test_hex_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let json_path = dir.path().join("msg.json");
    let hex_path = dir.path().join("msg.hex");
    std::fs::write(&json_path, MESSAGE).expect("Failed to write JSON");

    encode_file(EncodeArgs {
        input: json_path,
        output: Some(hex_path.clone()),
        hex: true,
    })
    .expect("encode failed");

    let text = std::fs::read_to_string(&hex_path).unwrap();
    assert!(text.ends_with('\n'));
    assert!(text.trim().chars().all(|c| c.is_ascii_hexdigit()));

    let bytes = read_frames(&hex_path, true).expect("Failed to read hex frames");
    let dump = tlv_cli::dump::dump_frames(&bytes, &DecodeLimits::default()).unwrap();
    assert!(dump.starts_with("0x0000  DICT"));
}

/// Test depth limit from tlv.toml is applied to decoding
#[test]
fn test_config_depth_limit() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("tlv.toml");
    std::fs::write(&config_path, "[decode]\nmax_depth = 1\n").unwrap();

    let config = CliConfig::resolve(Some(&config_path)).unwrap();
    let bytes = tlv_cli::encode::encode_json(MESSAGE).unwrap();

    let err = nether_tlv::decode_all(&bytes, &config.decode).unwrap_err();
    assert_eq!(err, TlvError::DepthLimitExceeded(1));
}

/// Test missing config file is an error when named explicitly
#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    assert!(CliConfig::resolve(Some(&dir.path().join("absent.toml"))).is_err());
}
