//! Encode command - JSON document to a single frame

use anyhow::{Context, Result};
use clap::Args;
use nether_tlv::Value;
use std::path::PathBuf;

use crate::io::write_output;

/// Arguments for the encode command
#[derive(Args)]
pub struct EncodeArgs {
    /// JSON input file
    pub input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write hex text instead of raw bytes
    #[arg(long)]
    pub hex: bool,
}

/// Convert a JSON document to frame bytes
pub fn encode_json(text: &str) -> Result<Vec<u8>> {
    let json: serde_json::Value = serde_json::from_str(text).context("Failed to parse JSON")?;
    let value = Value::try_from(json)?;
    Ok(nether_tlv::serialize(&value))
}

/// Execute the encode command
pub fn execute(args: EncodeArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let bytes = encode_json(&text)?;
    tracing::info!("Encoded {:?} ({} bytes)", args.input, bytes.len());

    if args.hex {
        let mut text = hex::encode(&bytes);
        text.push('\n');
        write_output(args.output.as_deref(), text.as_bytes())
    } else {
        write_output(args.output.as_deref(), &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_json_object() {
        let bytes = encode_json(r#"{"a": 1}"#).unwrap();
        assert_eq!(
            bytes,
            vec![0x09, 0x08, 0x02, 0x01, b'a', 0x04, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[test]
    fn test_encode_keeps_key_order() {
        let bytes = encode_json(r#"{"b": 1, "a": 2}"#).unwrap();
        let (value, _) = nether_tlv::decode(&bytes).unwrap();
        assert_eq!(
            value,
            Value::Dict(vec![
                ("b".into(), Value::Int(1)),
                ("a".into(), Value::Int(2)),
            ])
        );
    }

    #[test]
    fn test_encode_rejects_bad_json() {
        assert!(encode_json("{not json").is_err());
        assert!(encode_json("18446744073709551615").is_err());
    }
}
