//! Noise command implementation
//!
//! Generates seeded white noise and writes it as a PCM WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use riffwav_encoder::noise::frames_for_duration;
use riffwav_encoder::{EncodedWav, WavEncoder, WavError, WhiteNoise};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, JsonError, NoiseOutput, NoiseResult};
use crate::params::{NoiseParams, ParamOverrides};

/// Run the noise command
///
/// # Arguments
/// * `params_path` - Optional JSON params file
/// * `overrides` - Values from command-line flags, applied over the file
/// * `output` - Output WAV path
/// * `json_output` - Whether to print a machine-readable report
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
    output: &str,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        return run_json(params_path, overrides, output);
    }

    let params = resolve_params(params_path, overrides)?;

    println!(
        "{} {} noise, {} Hz, {} bit, {:.3} s (seed {})",
        "Generating:".cyan().bold(),
        params.layout,
        params.sample_rate,
        params.bits_per_sample,
        params.duration_seconds,
        params.seed
    );

    let encoded = render(&params)?;
    write_output(output, &encoded)?;

    println!(
        "{} Wrote {} ({} frames, {} bytes)",
        "SUCCESS".green().bold(),
        output,
        encoded.num_frames,
        encoded.file_size()
    );
    println!("  {} {}", "PCM hash:".dimmed(), encoded.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

fn run_json(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
    output: &str,
) -> Result<ExitCode> {
    let result = resolve_params_json(params_path, overrides).and_then(|params| {
        let encoded = render(&params).map_err(|e| JsonError::from(&e))?;
        write_output(output, &encoded).map_err(|e| {
            JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e)).with_file(output)
        })?;
        Ok(noise_result(&params, &encoded, output))
    });

    let (report, code) = match result {
        Ok(result) => (NoiseOutput::success(result), ExitCode::SUCCESS),
        Err(error) => (NoiseOutput::failure(vec![error]), ExitCode::from(1)),
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(code)
}

fn resolve_params(params_path: Option<&str>, overrides: &ParamOverrides) -> Result<NoiseParams> {
    let base = match params_path {
        Some(path) => NoiseParams::load(Path::new(path))?,
        None => NoiseParams::default(),
    };
    Ok(base.with_overrides(overrides))
}

fn resolve_params_json(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
) -> std::result::Result<NoiseParams, JsonError> {
    let base = match params_path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                JsonError::new(error_codes::FILE_READ, e.to_string()).with_file(path)
            })?;
            NoiseParams::from_json(&content).map_err(|e| {
                JsonError::new(error_codes::JSON_PARSE, format!("{:#}", e)).with_file(path)
            })?
        }
        None => NoiseParams::default(),
    };
    Ok(base.with_overrides(overrides))
}

/// Generates and encodes the noise described by `params`.
pub fn render(params: &NoiseParams) -> std::result::Result<EncodedWav, WavError> {
    let descriptor = params.descriptor()?;
    let num_frames = frames_for_duration(descriptor.sample_rate, params.duration_seconds)?;
    let samples = WhiteNoise::new(descriptor, params.seed)?.generate(num_frames)?;
    WavEncoder::new(descriptor)?.encode_with_hash(&samples)
}

fn write_output(output: &str, encoded: &EncodedWav) -> Result<()> {
    if let Some(parent) = Path::new(output).parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(output, &encoded.wav_data)
        .with_context(|| format!("Failed to write output file: {}", output))?;
    log::debug!("wrote {} bytes to {}", encoded.file_size(), output);
    Ok(())
}

fn noise_result(params: &NoiseParams, encoded: &EncodedWav, output: &str) -> NoiseResult {
    NoiseResult {
        path: output.to_string(),
        layout: params.layout.to_string(),
        channel_order: params.layout.channel_names(),
        sample_rate: encoded.descriptor.sample_rate,
        bits_per_sample: encoded.descriptor.bits_per_sample,
        frames: encoded.num_frames,
        duration_seconds: encoded.duration_seconds(),
        file_size: encoded.file_size(),
        pcm_hash: encoded.pcm_hash.clone(),
        seed: params.seed,
    }
}
