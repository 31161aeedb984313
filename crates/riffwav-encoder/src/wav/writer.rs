//! Core WAV encoding: validation, header emission, sample emission.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use super::header::{WavHeader, HEADER_LEN};
use crate::descriptor::AudioStreamDescriptor;
use crate::error::{WavError, WavResult};

/// Encodes interleaved samples into a complete WAV file.
///
/// # Arguments
/// * `descriptor` - Channel count, sample rate, and bit depth
/// * `samples` - Interleaved samples, frame-major and channel-minor
///
/// # Returns
/// The complete RIFF/WAVE byte sequence, or the first precondition violation
pub fn encode(descriptor: &AudioStreamDescriptor, samples: &[i32]) -> WavResult<Vec<u8>> {
    let header = prepare(descriptor, samples)?;
    let mut buffer = Vec::with_capacity(HEADER_LEN + header.subchunk2_size() as usize);
    emit(&mut buffer, descriptor, &header, samples)?;
    Ok(buffer)
}

/// Streams a complete WAV file to a writer.
///
/// Every check runs before the first byte is written, so an error leaves the
/// writer untouched unless the writer itself fails. Wrap files in a
/// `BufWriter`; samples are written one at a time.
pub fn write_wav<W: Write>(
    writer: &mut W,
    descriptor: &AudioStreamDescriptor,
    samples: &[i32],
) -> WavResult<()> {
    let header = prepare(descriptor, samples)?;
    emit(writer, descriptor, &header, samples)
}

/// Validates inputs and computes the header.
fn prepare(descriptor: &AudioStreamDescriptor, samples: &[i32]) -> WavResult<WavHeader> {
    descriptor.validate()?;

    if samples.len() % descriptor.channels as usize != 0 {
        return Err(WavError::MalformedInput {
            len: samples.len(),
            channels: descriptor.channels,
        });
    }

    let header = WavHeader::for_samples(descriptor, samples.len())?;
    check_sample_range(descriptor, samples)?;

    log::debug!(
        "encoding {} frames ({} ch, {} Hz, {} bit, {} data bytes)",
        samples.len() / descriptor.channels as usize,
        descriptor.channels,
        descriptor.sample_rate,
        descriptor.bits_per_sample,
        header.subchunk2_size()
    );

    Ok(header)
}

/// Finds the first sample outside the signed range of the bit depth.
fn check_sample_range(descriptor: &AudioStreamDescriptor, samples: &[i32]) -> WavResult<()> {
    let (min, max) = descriptor.sample_range();
    match samples
        .iter()
        .position(|&value| value < min || value > max)
    {
        Some(index) => Err(WavError::SampleOutOfRange {
            index,
            value: samples[index],
            min,
            max,
        }),
        None => Ok(()),
    }
}

fn emit<W: Write>(
    writer: &mut W,
    descriptor: &AudioStreamDescriptor,
    header: &WavHeader,
    samples: &[i32],
) -> WavResult<()> {
    header.write_to(writer)?;
    write_samples(writer, descriptor.bits_per_sample, samples)
}

/// Writes range-checked samples as little-endian integers of the given width.
///
/// 8-bit WAV data is unsigned offset-binary, so those samples are shifted by
/// 128 to keep the signed value a reader reports equal to the input.
fn write_samples<W: Write>(writer: &mut W, bits_per_sample: u16, samples: &[i32]) -> WavResult<()> {
    match bits_per_sample {
        8 => {
            for &sample in samples {
                writer.write_u8((sample + 128) as u8)?;
            }
        }
        16 => {
            for &sample in samples {
                writer.write_i16::<LittleEndian>(sample as i16)?;
            }
        }
        24 => {
            for &sample in samples {
                writer.write_i24::<LittleEndian>(sample)?;
            }
        }
        32 => {
            for &sample in samples {
                writer.write_i32::<LittleEndian>(sample)?;
            }
        }
        other => {
            return Err(WavError::invalid_descriptor(
                "bits_per_sample",
                format!("{} is not supported", other),
            ))
        }
    }
    Ok(())
}

/// Converts samples to the raw bytes of a data chunk.
///
/// Applies the same validation as [`encode`] apart from frame alignment.
pub fn samples_to_pcm(descriptor: &AudioStreamDescriptor, samples: &[i32]) -> WavResult<Vec<u8>> {
    descriptor.validate()?;
    check_sample_range(descriptor, samples)?;
    let mut pcm = Vec::with_capacity(samples.len() * descriptor.bytes_per_sample() as usize);
    write_samples(&mut pcm, descriptor.bits_per_sample, samples)?;
    Ok(pcm)
}
