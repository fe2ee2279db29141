//! Input/output helpers shared by the commands

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Read frame bytes from a file, either raw or as hex text
///
/// Whitespace in hex input is ignored so dumps can be wrapped.
pub fn read_frames(path: &Path, hex_input: bool) -> Result<Vec<u8>> {
    if hex_input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        hex::decode(&digits).with_context(|| format!("Invalid hex in {}", path.display()))
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Write bytes to `output`, or to stdout when no path is given
pub fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}
