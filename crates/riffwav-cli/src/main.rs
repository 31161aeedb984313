//! riffwav CLI - white noise WAV generation
//!
//! Thin wrapper around `riffwav-encoder`: builds a stream from flags or a
//! params file, generates noise, and writes the encoded file.

use clap::{Parser, Subcommand};
use riffwav_encoder::ChannelLayout;
use std::process::ExitCode;

use riffwav_cli::commands;
use riffwav_cli::logger;
use riffwav_cli::params::ParamOverrides;

/// riffwav - PCM WAV encoder and white noise generator
#[derive(Parser)]
#[command(name = "riffwav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate white noise and write it as a WAV file
    Noise {
        /// Output WAV file path
        #[arg(short, long)]
        output: String,

        /// JSON params file (flags below override its values)
        #[arg(short, long)]
        params: Option<String>,

        /// Channel layout: mono, stereo, 5.1, or a channel count
        #[arg(short, long)]
        layout: Option<ChannelLayout>,

        /// Sample rate in Hz
        #[arg(short = 'r', long)]
        sample_rate: Option<u32>,

        /// Bits per sample (8, 16, 24, 32)
        #[arg(short, long)]
        bits: Option<u16>,

        /// Duration in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u32>,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the WAV header fields for a stream without generating audio
    Header {
        /// Channel layout: mono, stereo, 5.1, or a channel count
        #[arg(short, long, default_value = "stereo")]
        layout: ChannelLayout,

        /// Sample rate in Hz
        #[arg(short = 'r', long, default_value_t = 44100)]
        sample_rate: u32,

        /// Bits per sample (8, 16, 24, 32)
        #[arg(short, long, default_value_t = 16)]
        bits: u16,

        /// Number of frames in the stream
        #[arg(short, long)]
        frames: usize,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = match cli.command {
        Commands::Noise {
            output,
            params,
            layout,
            sample_rate,
            bits,
            duration,
            seed,
            json,
        } => {
            let overrides = ParamOverrides {
                layout,
                sample_rate,
                bits_per_sample: bits,
                duration_seconds: duration,
                seed,
            };
            commands::noise::run(params.as_deref(), &overrides, &output, json)
        }
        Commands::Header {
            layout,
            sample_rate,
            bits,
            frames,
            json,
        } => commands::header::run(layout, sample_rate, bits, frames, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
