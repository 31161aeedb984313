//! Integration tests for the noise command writing real files.

use std::fs;
use std::process::ExitCode;

use riffwav_cli::commands;
use riffwav_cli::params::ParamOverrides;
use riffwav_encoder::ChannelLayout;

fn short_overrides(layout: ChannelLayout) -> ParamOverrides {
    ParamOverrides {
        layout: Some(layout),
        duration_seconds: Some(0.1),
        seed: Some(42),
        ..Default::default()
    }
}

#[test]
fn test_noise_writes_readable_surround_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("surround.wav");
    let output = output.to_str().unwrap();

    let code = commands::noise::run(None, &short_overrides(ChannelLayout::Surround51), output, false)
        .unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let reader = hound::WavReader::open(output).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 6);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(reader.duration(), 4410);
}

#[test]
fn test_noise_params_file_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let params_path = dir.path().join("params.json");
    fs::write(
        &params_path,
        r#"{"layout": "mono", "sample_rate": 8000, "bits_per_sample": 8, "duration_seconds": 1.0}"#,
    )
    .unwrap();
    let output = dir.path().join("out.wav");
    let output = output.to_str().unwrap();

    let overrides = ParamOverrides {
        sample_rate: Some(16000),
        ..Default::default()
    };
    commands::noise::run(params_path.to_str(), &overrides, output, true).unwrap();

    let reader = hound::WavReader::open(output).unwrap();
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().sample_rate, 16000);
    assert_eq!(reader.spec().bits_per_sample, 8);
    assert_eq!(reader.duration(), 16000);
}

#[test]
fn test_noise_same_seed_same_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.wav");
    let b = dir.path().join("b.wav");
    let overrides = short_overrides(ChannelLayout::Stereo);

    commands::noise::run(None, &overrides, a.to_str().unwrap(), true).unwrap();
    commands::noise::run(None, &overrides, b.to_str().unwrap(), true).unwrap();

    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_noise_missing_params_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.wav");
    let missing = dir.path().join("missing.json");

    let result = commands::noise::run(
        missing.to_str(),
        &ParamOverrides::default(),
        output.to_str().unwrap(),
        false,
    );
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_noise_json_mode_reports_failure_with_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.wav");
    let overrides = ParamOverrides {
        bits_per_sample: Some(12),
        ..Default::default()
    };

    let code = commands::noise::run(None, &overrides, output.to_str().unwrap(), true).unwrap();
    assert_eq!(code, ExitCode::from(1));
    assert!(!output.exists());
}
