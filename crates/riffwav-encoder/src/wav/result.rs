//! Encoded WAV file with its PCM fingerprint.

use super::header::HEADER_LEN;
use super::writer::encode;
use crate::descriptor::AudioStreamDescriptor;
use crate::error::WavResult;

/// Result of encoding a sample sequence.
#[derive(Debug, Clone)]
pub struct EncodedWav {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the data chunk only, header excluded.
    pub pcm_hash: String,
    /// Stream parameters the file was encoded with.
    pub descriptor: AudioStreamDescriptor,
    /// Number of frames (samples per channel).
    pub num_frames: usize,
}

impl EncodedWav {
    /// Encodes samples and fingerprints the resulting PCM data.
    pub fn encode(descriptor: &AudioStreamDescriptor, samples: &[i32]) -> WavResult<Self> {
        let wav_data = encode(descriptor, samples)?;
        let pcm_hash = compute_pcm_hash(&wav_data[HEADER_LEN..]);

        Ok(Self {
            wav_data,
            pcm_hash,
            descriptor: *descriptor,
            num_frames: samples.len() / descriptor.channels as usize,
        })
    }

    /// Returns the data chunk payload, or nothing if `wav_data` has no full header.
    pub fn pcm_data(&self) -> &[u8] {
        self.wav_data.get(HEADER_LEN..).unwrap_or(&[])
    }

    /// Total file size in bytes.
    pub fn file_size(&self) -> usize {
        self.wav_data.len()
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.descriptor.sample_rate as f64
    }
}

/// BLAKE3 hex digest of raw PCM bytes.
pub fn compute_pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
