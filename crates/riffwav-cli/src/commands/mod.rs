//! CLI command implementations.

pub mod header;
pub mod json_output;
pub mod noise;
