//! tlv-cli - command implementations for the `tlv` tool
//!
//! Exposed as a library so integration tests can drive the commands without
//! spawning the binary.

pub mod config;
pub mod decode;
pub mod dump;
pub mod encode;
pub mod io;
