//! RIFF/WAVE header field computation.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use serde::Serialize;

use crate::descriptor::AudioStreamDescriptor;
use crate::error::{WavError, WavResult};

/// Length of the canonical PCM header: RIFF header, `fmt ` chunk, `data` chunk header.
pub const HEADER_LEN: usize = 44;

/// Bytes of the header counted by `ChunkSize` besides the audio data.
const RIFF_OVERHEAD: u64 = 36;

/// `fmt ` chunk body size for plain PCM.
const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// `AudioFormat` tag for uncompressed PCM.
const WAVE_FORMAT_PCM: u16 = 1;

/// Every field of a canonical 44-byte PCM WAV header.
///
/// The size fields are derived from the descriptor and sample count and
/// cannot be set independently, so the declared sizes always match the data
/// that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavHeader {
    chunk_size: u32,
    subchunk1_size: u32,
    audio_format: u16,
    num_channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
    subchunk2_size: u32,
}

impl WavHeader {
    /// Computes the header for `sample_count` interleaved samples.
    pub fn for_samples(descriptor: &AudioStreamDescriptor, sample_count: usize) -> WavResult<Self> {
        descriptor.validate()?;

        let data_bytes = (sample_count as u64)
            .checked_mul(descriptor.bytes_per_sample() as u64)
            .ok_or(WavError::DataTooLarge { bytes: u64::MAX })?;
        let subchunk2_size = u32::try_from(data_bytes)
            .ok()
            .filter(|size| *size as u64 + RIFF_OVERHEAD <= u32::MAX as u64)
            .ok_or(WavError::DataTooLarge { bytes: data_bytes })?;

        Ok(Self {
            chunk_size: RIFF_OVERHEAD as u32 + subchunk2_size,
            subchunk1_size: PCM_FMT_CHUNK_SIZE,
            audio_format: WAVE_FORMAT_PCM,
            num_channels: descriptor.channels,
            sample_rate: descriptor.sample_rate,
            byte_rate: descriptor.byte_rate(),
            block_align: descriptor.block_align(),
            bits_per_sample: descriptor.bits_per_sample,
            subchunk2_size,
        })
    }

    /// Computes the header for `num_frames` whole frames.
    pub fn for_frames(descriptor: &AudioStreamDescriptor, num_frames: usize) -> WavResult<Self> {
        let sample_count = num_frames
            .checked_mul(descriptor.channels as usize)
            .ok_or(WavError::DataTooLarge { bytes: u64::MAX })?;
        Self::for_samples(descriptor, sample_count)
    }

    /// Declared file size minus 8.
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Number of channels.
    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    /// Bytes per frame.
    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Declared length of the audio data in bytes.
    pub fn subchunk2_size(&self) -> u32 {
        self.subchunk2_size
    }

    /// Total length of the file this header describes.
    pub fn file_size(&self) -> u64 {
        HEADER_LEN as u64 + self.subchunk2_size as u64
    }

    /// Writes the 44 header bytes, little-endian.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        // RIFF header
        writer.write_all(b"RIFF")?;
        writer.write_u32::<LittleEndian>(self.chunk_size)?;
        writer.write_all(b"WAVE")?;

        // fmt chunk
        writer.write_all(b"fmt ")?;
        writer.write_u32::<LittleEndian>(self.subchunk1_size)?;
        writer.write_u16::<LittleEndian>(self.audio_format)?;
        writer.write_u16::<LittleEndian>(self.num_channels)?;
        writer.write_u32::<LittleEndian>(self.sample_rate)?;
        writer.write_u32::<LittleEndian>(self.byte_rate)?;
        writer.write_u16::<LittleEndian>(self.block_align)?;
        writer.write_u16::<LittleEndian>(self.bits_per_sample)?;

        // data chunk header
        writer.write_all(b"data")?;
        writer.write_u32::<LittleEndian>(self.subchunk2_size)?;

        Ok(())
    }

    /// Returns the header as a fixed-size byte array.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        let mut cursor = &mut bytes[..];
        let written = self.write_to(&mut cursor);
        debug_assert!(
            written.is_ok() && cursor.is_empty(),
            "header must fill exactly {} bytes",
            HEADER_LEN
        );
        bytes
    }
}
