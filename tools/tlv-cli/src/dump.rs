//! Dump command - show frame layout with offsets, tags and lengths
//!
//! ```text
//! 0x0000  DICT   header=2 payload=8
//! 0x0002    STR    header=2 payload=1  "a"
//! 0x0005    INT    header=1 payload=4  1
//! ```

use anyhow::{Context, Result};
use clap::Args;
use nether_tlv::{DecodeLimits, read_header};
use std::fmt::Write;
use std::path::PathBuf;

use crate::io::read_frames;

/// Arguments for the dump command
#[derive(Args)]
pub struct DumpArgs {
    /// File holding one or more back-to-back frames
    pub input: PathBuf,

    /// Input is hex text rather than raw bytes
    #[arg(long)]
    pub hex: bool,
}

/// Describe every frame in `bytes`
pub fn dump_frames(bytes: &[u8], limits: &DecodeLimits) -> Result<String> {
    // Full decode first; the walk below assumes well-formed frames
    nether_tlv::decode_all(bytes, limits)?;

    let mut out = String::new();
    let mut offset = 0;
    while offset < bytes.len() {
        offset += dump_frame(bytes, offset, 0, &mut out)?;
    }
    Ok(out)
}

/// Write one frame (and its children) and return its length
fn dump_frame(bytes: &[u8], offset: usize, depth: usize, out: &mut String) -> Result<usize> {
    let header = read_header(&bytes[offset..])?;
    let indent = "  ".repeat(depth);
    write!(
        out,
        "{:#06x}  {}{:<6} header={} payload={}",
        offset,
        indent,
        header.tag.name(),
        header.header_len,
        header.payload_len
    )?;

    if !header.tag.is_container() {
        let (value, consumed) = nether_tlv::decode(&bytes[offset..])?;
        writeln!(out, "  {}", value)?;
        return Ok(consumed);
    }

    writeln!(out)?;
    let end = offset + header.frame_len() as usize;
    let mut pos = offset + header.header_len;
    while pos < end {
        pos += dump_frame(bytes, pos, depth + 1, out)?;
    }
    Ok(pos - offset)
}

/// Execute the dump command
pub fn execute(args: DumpArgs, limits: &DecodeLimits) -> Result<()> {
    let bytes = read_frames(&args.input, args.hex)?;
    let text = dump_frames(&bytes, limits)
        .with_context(|| format!("Malformed frames in {}", args.input.display()))?;
    print!("{}", text);
    Ok(())
}
