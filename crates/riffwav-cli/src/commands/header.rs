//! Header command implementation
//!
//! Prints the RIFF/WAVE header a stream would carry, without generating audio.

use anyhow::{Context, Result};
use colored::Colorize;
use riffwav_encoder::{AudioStreamDescriptor, ChannelLayout, WavHeader};
use std::process::ExitCode;

use super::json_output::{HeaderOutput, JsonError};

/// Run the header command
///
/// # Arguments
/// * `layout` - Channel layout
/// * `sample_rate` - Sample rate in Hz
/// * `bits_per_sample` - Bit depth
/// * `frames` - Number of frames the stream holds
/// * `json_output` - Whether to print a machine-readable report
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    layout: ChannelLayout,
    sample_rate: u32,
    bits_per_sample: u16,
    frames: usize,
    json_output: bool,
) -> Result<ExitCode> {
    let header = AudioStreamDescriptor::from_layout(layout, sample_rate, bits_per_sample)
        .and_then(|descriptor| WavHeader::for_frames(&descriptor, frames));

    if json_output {
        let (report, code) = match header {
            Ok(header) => (HeaderOutput::success(header), ExitCode::SUCCESS),
            Err(e) => (HeaderOutput::failure(vec![JsonError::from(&e)]), ExitCode::from(1)),
        };
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize JSON output")?;
        println!("{}", json);
        return Ok(code);
    }

    let header = header?;
    println!(
        "{} {} x {} frames",
        "Header:".cyan().bold(),
        layout,
        frames
    );
    for (offset, name, value) in header_rows(&header) {
        println!("  {:>3}  {:<14} {}", offset, name, value);
    }
    println!("  {} {} bytes", "File size:".dimmed(), header.file_size());

    Ok(ExitCode::SUCCESS)
}

/// Offset, field name, and rendered value for every header field.
fn header_rows(header: &WavHeader) -> Vec<(usize, &'static str, String)> {
    vec![
        (0, "ChunkID", "RIFF".to_string()),
        (4, "ChunkSize", header.chunk_size().to_string()),
        (8, "Format", "WAVE".to_string()),
        (12, "Subchunk1ID", "fmt ".to_string()),
        (16, "Subchunk1Size", "16".to_string()),
        (20, "AudioFormat", "1 (PCM)".to_string()),
        (22, "NumChannels", header.num_channels().to_string()),
        (24, "SampleRate", header.sample_rate().to_string()),
        (28, "ByteRate", header.byte_rate().to_string()),
        (32, "BlockAlign", header.block_align().to_string()),
        (34, "BitsPerSample", header.bits_per_sample().to_string()),
        (36, "Subchunk2ID", "data".to_string()),
        (40, "Subchunk2Size", header.subchunk2_size().to_string()),
    ]
}
