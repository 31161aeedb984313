//! JSON output types for machine-readable CLI output.
//!
//! Produced by the `--json` flag on `noise` and `header`.

use riffwav_encoder::{WavError, WavHeader};
use serde::{Deserialize, Serialize};

/// Error codes for CLI-level failures. Encoder failures pass through their
/// own `WAV_XXX` codes.
pub mod error_codes {
    /// Params file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Params file is not valid JSON for the expected schema
    pub const JSON_PARSE: &str = "CLI_002";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Adds a file path to the error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&WavError> for JsonError {
    fn from(err: &WavError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Output of the `noise` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoiseOutput {
    /// Whether the file was written
    pub success: bool,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Details of the written file (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<NoiseResult>,
}

/// Details of a generated noise file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoiseResult {
    /// Path the WAV file was written to
    pub path: String,
    /// Channel layout name
    pub layout: String,
    /// Channel labels in interleaving order
    pub channel_order: Vec<String>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bits_per_sample: u16,
    /// Frames written
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Total file size in bytes
    pub file_size: usize,
    /// BLAKE3 hash of the data chunk
    pub pcm_hash: String,
    /// Seed used for generation
    pub seed: u32,
}

impl NoiseOutput {
    /// Creates a successful noise output.
    pub fn success(result: NoiseResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed noise output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Output of the `header` command.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderOutput {
    /// Whether the header could be computed
    pub success: bool,
    /// Errors (empty on success)
    pub errors: Vec<JsonError>,
    /// Computed header fields (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<WavHeader>,
    /// Size of the file the header describes (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl HeaderOutput {
    /// Creates a successful header output.
    pub fn success(header: WavHeader) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            file_size: Some(header.file_size()),
            header: Some(header),
        }
    }

    /// Creates a failed header output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            header: None,
            file_size: None,
        }
    }
}
