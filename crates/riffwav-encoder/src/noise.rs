//! White noise source used to exercise the encoder.
//!
//! Samples are uniform over the full signed range of the stream's bit depth
//! and interleaved frame-major, channel-minor.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::descriptor::AudioStreamDescriptor;
use crate::error::{WavError, WavResult};
use crate::rng::create_channel_rng;
use crate::wav::WavHeader;

/// Draws `channels * num_frames` uniform samples from a single RNG.
///
/// # Arguments
/// * `rng` - Random source; pass a seeded one for reproducible output
/// * `descriptor` - Determines channel count and sample range
/// * `num_frames` - Number of frames to produce
///
/// Fails with `DataTooLarge` when the stream would not fit a RIFF file.
pub fn white_noise<R: Rng>(
    rng: &mut R,
    descriptor: &AudioStreamDescriptor,
    num_frames: usize,
) -> WavResult<Vec<i32>> {
    WavHeader::for_frames(descriptor, num_frames)?;

    let (min, max) = descriptor.sample_range();
    let len = num_frames * descriptor.channels as usize;
    Ok((0..len).map(|_| rng.gen_range(min..=max)).collect())
}

/// Converts a duration to a whole number of frames, rounding down.
pub fn frames_for_duration(sample_rate: u32, duration_seconds: f64) -> WavResult<usize> {
    if !duration_seconds.is_finite() || duration_seconds < 0.0 {
        return Err(WavError::invalid_param(
            "duration_seconds",
            format!("must be a finite, non-negative number, got {}", duration_seconds),
        ));
    }
    Ok((sample_rate as f64 * duration_seconds).floor() as usize)
}

/// Seeded multi-channel white noise generator.
///
/// Each channel draws from its own RNG derived from `seed`, so channel N of
/// a stereo stream matches channel N of a 5.1 stream with the same seed.
#[derive(Debug, Clone, Copy)]
pub struct WhiteNoise {
    /// Stream parameters of the produced samples.
    pub descriptor: AudioStreamDescriptor,
    /// Base seed.
    pub seed: u32,
}

impl WhiteNoise {
    /// Creates a generator for a validated descriptor.
    pub fn new(descriptor: AudioStreamDescriptor, seed: u32) -> WavResult<Self> {
        descriptor.validate()?;
        Ok(Self { descriptor, seed })
    }

    /// Generates `num_frames` interleaved frames.
    ///
    /// Fails with `DataTooLarge` when the stream would not fit a RIFF file.
    pub fn generate(&self, num_frames: usize) -> WavResult<Vec<i32>> {
        // Bounds the allocation below by the RIFF size limit.
        WavHeader::for_frames(&self.descriptor, num_frames)?;

        let (min, max) = self.descriptor.sample_range();
        let mut rngs: Vec<Pcg32> = (0..self.descriptor.channels)
            .map(|channel| create_channel_rng(self.seed, channel))
            .collect();

        let mut samples = Vec::with_capacity(num_frames * rngs.len());
        for _ in 0..num_frames {
            for rng in rngs.iter_mut() {
                samples.push(rng.gen_range(min..=max));
            }
        }

        log::debug!(
            "generated {} frames of white noise ({} ch, seed {})",
            num_frames,
            self.descriptor.channels,
            self.seed
        );

        Ok(samples)
    }

    /// Generates `floor(sample_rate * duration_seconds)` frames.
    pub fn generate_seconds(&self, duration_seconds: f64) -> WavResult<Vec<i32>> {
        let num_frames = frames_for_duration(self.descriptor.sample_rate, duration_seconds)?;
        self.generate(num_frames)
    }
}
