//! Error types for the WAV encoder.

use thiserror::Error;

/// Result type for encoder operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while describing, generating, or encoding a stream.
///
/// Every variant is raised before any byte reaches the output sink, so a
/// failed encode never leaves a partial file behind.
#[derive(Debug, Error)]
pub enum WavError {
    /// A stream descriptor field is outside what the PCM format can express.
    #[error("invalid descriptor field '{field}': {message}")]
    InvalidDescriptor {
        /// Offending field name.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// A sample does not fit the signed range of the configured bit depth.
    #[error("sample {value} at index {index} is outside the range {min}..={max}")]
    SampleOutOfRange {
        /// Position of the sample in the interleaved sequence.
        index: usize,
        /// The offending value.
        value: i32,
        /// Smallest representable value.
        min: i32,
        /// Largest representable value.
        max: i32,
    },

    /// The sample sequence does not consist of whole frames.
    #[error("sample count {len} is not a multiple of the channel count {channels}")]
    MalformedInput {
        /// Number of samples supplied.
        len: usize,
        /// Channel count of the descriptor.
        channels: u16,
    },

    /// The data chunk would overflow the 32-bit RIFF size fields.
    #[error("audio data of {bytes} bytes does not fit a RIFF container")]
    DataTooLarge {
        /// Size the data chunk would have had.
        bytes: u64,
    },

    /// Invalid parameter passed to a generator.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error from the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavError {
    /// Creates an invalid descriptor error.
    pub fn invalid_descriptor(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable reports.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::InvalidDescriptor { .. } => "WAV_001",
            WavError::SampleOutOfRange { .. } => "WAV_002",
            WavError::MalformedInput { .. } => "WAV_003",
            WavError::DataTooLarge { .. } => "WAV_004",
            WavError::InvalidParameter { .. } => "WAV_005",
            WavError::Io(_) => "WAV_006",
        }
    }

    /// Error category; input problems are the caller's to fix.
    pub fn category(&self) -> &'static str {
        match self {
            WavError::Io(_) => "io",
            _ => "input",
        }
    }
}
