//! Deterministic RIFF/WAVE PCM encoder.
//!
//! Output carries only the canonical 44-byte header and the data chunk: no
//! timestamps, metadata, or optional chunks, so identical input always
//! yields identical bytes. All multi-byte fields are little-endian.

mod encoder;
mod header;
mod result;
mod writer;


// Re-export public API
pub use encoder::WavEncoder;
pub use header::{WavHeader, HEADER_LEN};
pub use result::{compute_pcm_hash, EncodedWav};
pub use writer::{encode, samples_to_pcm, write_wav};
