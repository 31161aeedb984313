//! riffwav encoder
//!
//! Serializes interleaved integer PCM samples into the canonical
//! RIFF/WAVE container, and generates seeded white noise to feed it.
//!
//! # Overview
//!
//! A stream is described by an [`AudioStreamDescriptor`] (channels, sample
//! rate, bit depth). [`encode`] turns a descriptor plus a frame-major,
//! channel-minor sample slice into the exact bytes of a PCM WAV file:
//!
//! | Offset | Field | Value |
//! |---|---|---|
//! | 0 | `RIFF` | file size - 8 |
//! | 8 | `WAVE` | |
//! | 12 | `fmt ` | 16, PCM, channels, rate, byte rate, block align, bits |
//! | 36 | `data` | data size, then samples |
//!
//! Size fields are always derived from the sample count. Invalid descriptors,
//! partial frames, and out-of-range samples are rejected before any byte is
//! produced; nothing is clamped, wrapped, or truncated.
//!
//! # Determinism
//!
//! Encoding is a pure function of its inputs. [`noise::WhiteNoise`] draws
//! from PCG32 generators seeded per channel via BLAKE3, so a seed fully
//! determines the generated audio.
//!
//! # Example
//!
//! ```
//! use riffwav_encoder::{encode, AudioStreamDescriptor};
//!
//! let descriptor = AudioStreamDescriptor::new(2, 44100, 16)?;
//! let wav = encode(&descriptor, &[100, -100, 200, -200])?;
//! assert_eq!(wav.len(), 52);
//! # Ok::<(), riffwav_encoder::WavError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`descriptor`] - Stream descriptor and derived quantities
//! - [`layout`] - Named channel layouts (mono, stereo, 5.1)
//! - [`wav`] - Header computation and the encoder
//! - [`noise`] - White noise generation
//! - [`rng`] - Deterministic RNG with per-channel seed derivation

pub mod descriptor;
pub mod error;
pub mod layout;
pub mod noise;
pub mod rng;
pub mod wav;

// Re-export main types at crate root
pub use descriptor::AudioStreamDescriptor;
pub use error::{WavError, WavResult};
pub use layout::ChannelLayout;
pub use noise::WhiteNoise;
pub use wav::{encode, write_wav, EncodedWav, WavEncoder, WavHeader, HEADER_LEN};
