//! Reusable encoder bound to one stream descriptor.

use std::io::Write;

use super::header::WavHeader;
use super::result::EncodedWav;
use super::writer::{encode, write_wav};
use crate::descriptor::AudioStreamDescriptor;
use crate::error::WavResult;

/// WAV encoder for a fixed stream configuration.
///
/// Holds no state besides the descriptor, so one encoder can be shared
/// across threads and reused for any number of sample sequences.
#[derive(Debug, Clone, Copy)]
pub struct WavEncoder {
    descriptor: AudioStreamDescriptor,
}

impl WavEncoder {
    /// Creates an encoder, rejecting descriptors PCM cannot express.
    pub fn new(descriptor: AudioStreamDescriptor) -> WavResult<Self> {
        descriptor.validate()?;
        Ok(Self { descriptor })
    }

    /// Creates a 16-bit mono encoder.
    pub fn mono(sample_rate: u32) -> WavResult<Self> {
        Self::new(AudioStreamDescriptor::mono(sample_rate))
    }

    /// Creates a 16-bit stereo encoder.
    pub fn stereo(sample_rate: u32) -> WavResult<Self> {
        Self::new(AudioStreamDescriptor::stereo(sample_rate))
    }

    /// Creates a 16-bit 5.1 surround encoder.
    pub fn surround_5_1(sample_rate: u32) -> WavResult<Self> {
        Self::new(AudioStreamDescriptor::surround_5_1(sample_rate))
    }

    /// Returns the stream descriptor.
    pub fn descriptor(&self) -> &AudioStreamDescriptor {
        &self.descriptor
    }

    /// Encodes interleaved samples to a byte vector.
    pub fn encode(&self, samples: &[i32]) -> WavResult<Vec<u8>> {
        encode(&self.descriptor, samples)
    }

    /// Streams interleaved samples to a writer.
    pub fn write<W: Write>(&self, writer: &mut W, samples: &[i32]) -> WavResult<()> {
        write_wav(writer, &self.descriptor, samples)
    }

    /// Encodes samples and returns the file together with its PCM hash.
    pub fn encode_with_hash(&self, samples: &[i32]) -> WavResult<EncodedWav> {
        EncodedWav::encode(&self.descriptor, samples)
    }

    /// Computes the header a stream of `num_frames` frames would carry.
    pub fn header_for_frames(&self, num_frames: usize) -> WavResult<WavHeader> {
        WavHeader::for_frames(&self.descriptor, num_frames)
    }
}
