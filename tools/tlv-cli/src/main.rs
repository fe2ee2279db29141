//! tlv - encode, decode and inspect Nether-TLV frames
//!
//! # Commands
//!
//! - `tlv encode msg.json -o msg.tlv` - JSON document to one frame
//! - `tlv decode msg.tlv [--json]` - print every back-to-back frame
//! - `tlv dump msg.tlv` - frame layout with offsets, tags and lengths
//!
//! All commands accept `--hex` to read or write hex text instead of raw bytes.
//!
//! # Config (tlv.toml)
//!
//! ```toml
//! [decode]
//! max_depth = 64
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tlv_cli::config::CliConfig;
use tlv_cli::{decode, dump, encode};

/// tlv - Nether-TLV frame tool
#[derive(Parser)]
#[command(name = "tlv")]
#[command(about = "Encode, decode and inspect Nether-TLV frames")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./tlv.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON document as a single frame
    Encode(encode::EncodeArgs),

    /// Decode and print every frame in a file
    Decode(decode::DecodeArgs),

    /// Show frame layout with offsets, tags and lengths
    Dump(dump::DumpArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::resolve(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode(args) => encode::execute(args),
        Commands::Decode(args) => decode::execute(args, &config.decode),
        Commands::Dump(args) => dump::execute(args, &config.decode),
    }
}
