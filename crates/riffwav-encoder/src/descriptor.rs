//! Audio stream descriptor.

use serde::{Deserialize, Serialize};

use crate::error::{WavError, WavResult};
use crate::layout::ChannelLayout;

/// Bit depths this encoder can emit. Samples travel as `i32`, which caps the
/// width at 32 bits.
pub const SUPPORTED_BIT_DEPTHS: [u16; 4] = [8, 16, 24, 32];

/// Reference bit depth used by the convenience constructors.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Channel count, sample rate, and bit depth of a PCM stream.
///
/// `block_align` and `byte_rate` are always recomputed from these three
/// fields and are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioStreamDescriptor {
    /// Number of interleaved channels (1 = mono, 2 = stereo, 6 = 5.1).
    pub channels: u16,
    /// Sample rate in Hz, per channel.
    pub sample_rate: u32,
    /// Bits per sample: 8, 16, 24, or 32.
    pub bits_per_sample: u16,
}

impl AudioStreamDescriptor {
    /// Creates a validated descriptor.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> WavResult<Self> {
        let descriptor = Self {
            channels,
            sample_rate,
            bits_per_sample,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Creates a 16-bit mono descriptor.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }

    /// Creates a 16-bit stereo descriptor.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }

    /// Creates a 16-bit 5.1 surround descriptor.
    pub fn surround_5_1(sample_rate: u32) -> Self {
        Self {
            channels: 6,
            sample_rate,
            bits_per_sample: DEFAULT_BITS_PER_SAMPLE,
        }
    }

    /// Creates a validated descriptor for a channel layout.
    pub fn from_layout(
        layout: ChannelLayout,
        sample_rate: u32,
        bits_per_sample: u16,
    ) -> WavResult<Self> {
        Self::new(layout.channel_count(), sample_rate, bits_per_sample)
    }

    /// Returns the channel layout matching this descriptor's channel count.
    pub fn layout(&self) -> ChannelLayout {
        ChannelLayout::from_channel_count(self.channels)
    }

    /// Checks every field against what a PCM `fmt ` chunk can hold.
    ///
    /// Public fields allow building (or deserializing) a descriptor without
    /// going through [`AudioStreamDescriptor::new`], so the encoder calls
    /// this again before emitting anything.
    pub fn validate(&self) -> WavResult<()> {
        if self.channels == 0 {
            return Err(WavError::invalid_descriptor(
                "channels",
                "must be at least 1",
            ));
        }
        if self.sample_rate == 0 {
            return Err(WavError::invalid_descriptor(
                "sample_rate",
                "must be at least 1 Hz",
            ));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bits_per_sample) {
            return Err(WavError::invalid_descriptor(
                "bits_per_sample",
                format!(
                    "{} is not supported (expected one of {:?})",
                    self.bits_per_sample, SUPPORTED_BIT_DEPTHS
                ),
            ));
        }

        let block_align = self.channels as u64 * self.bytes_per_sample() as u64;
        if block_align > u16::MAX as u64 {
            return Err(WavError::invalid_descriptor(
                "channels",
                format!(
                    "{} channels at {} bits give a block align of {} bytes, above {}",
                    self.channels,
                    self.bits_per_sample,
                    block_align,
                    u16::MAX
                ),
            ));
        }

        let byte_rate = self.sample_rate as u64 * block_align;
        if byte_rate > u32::MAX as u64 {
            return Err(WavError::invalid_descriptor(
                "sample_rate",
                format!(
                    "byte rate {} does not fit the 32-bit ByteRate field",
                    byte_rate
                ),
            ));
        }

        Ok(())
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per interleaved frame (one sample per channel).
    ///
    /// Only meaningful for a descriptor that passed [`validate`](Self::validate).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes of audio data per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Inclusive signed range representable at this bit depth.
    pub fn sample_range(&self) -> (i32, i32) {
        let bits = self.bits_per_sample.clamp(1, 32) as u32;
        let max = ((1i64 << (bits - 1)) - 1) as i32;
        let min = (-(1i64 << (bits - 1))) as i32;
        (min, max)
    }
}
