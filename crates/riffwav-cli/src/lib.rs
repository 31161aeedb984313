//! riffwav CLI library.
//!
//! Parameter loading, logging setup, and the command implementations behind
//! the `riffwav` binary.

pub mod commands;
pub mod logger;
pub mod params;
