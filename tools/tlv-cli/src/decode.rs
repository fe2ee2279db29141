//! Decode command - print every frame in a file

use anyhow::{Context, Result};
use clap::Args;
use nether_tlv::{DecodeLimits, Value};
use std::path::PathBuf;

use crate::io::read_frames;

/// Arguments for the decode command
#[derive(Args)]
pub struct DecodeArgs {
    /// File holding one or more back-to-back frames
    pub input: PathBuf,

    /// Input is hex text rather than raw bytes
    #[arg(long)]
    pub hex: bool,

    /// Print each value as JSON
    #[arg(long)]
    pub json: bool,
}

/// Render decoded values one per line
pub fn render(values: &[Value], as_json: bool) -> Result<String> {
    let mut out = String::new();
    for value in values {
        if as_json {
            let json = serde_json::Value::try_from(value)?;
            out.push_str(&json.to_string());
        } else {
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    Ok(out)
}

/// Execute the decode command
pub fn execute(args: DecodeArgs, limits: &DecodeLimits) -> Result<()> {
    let bytes = read_frames(&args.input, args.hex)?;
    let values = nether_tlv::decode_all(&bytes, limits)
        .with_context(|| format!("Malformed frames in {}", args.input.display()))?;
    tracing::info!("Decoded {} frame(s) from {:?}", values.len(), args.input);

    print!("{}", render(&values, args.json)?);
    Ok(())
}
