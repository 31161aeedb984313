//! End-to-end tests: generate white noise and encode it the way the demo
//! programs do (5 seconds, 44.1 kHz, 16-bit).

use std::io::Cursor;

use riffwav_encoder::noise::{frames_for_duration, WhiteNoise};
use riffwav_encoder::{AudioStreamDescriptor, ChannelLayout, WavEncoder};

const DEMO_RATE: u32 = 44100;
const DEMO_SECONDS: f64 = 5.0;

fn render(layout: ChannelLayout, seed: u32) -> Vec<u8> {
    let descriptor = AudioStreamDescriptor::from_layout(layout, DEMO_RATE, 16).unwrap();
    let samples = WhiteNoise::new(descriptor, seed)
        .unwrap()
        .generate_seconds(DEMO_SECONDS)
        .unwrap();
    WavEncoder::new(descriptor).unwrap().encode(&samples).unwrap()
}

#[test]
fn test_stereo_white_noise_file() {
    let bytes = render(ChannelLayout::Stereo, 1);
    let frames = frames_for_duration(DEMO_RATE, DEMO_SECONDS).unwrap();
    assert_eq!(bytes.len(), 44 + frames * 2 * 2);

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().channels, 2);
    assert_eq!(reader.duration() as usize, frames);
}

#[test]
fn test_surround_white_noise_file() {
    let bytes = render(ChannelLayout::Surround51, 1);
    assert_eq!(bytes.len(), 44 + 220_500 * 6 * 2);

    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().channels, 6);
    assert_eq!(reader.spec().sample_rate, 44100);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len(), 220_500 * 6);

    // Full-scale noise should reach both ends of the range somewhere.
    assert!(samples.iter().any(|&s| s < -30000));
    assert!(samples.iter().any(|&s| s > 30000));
}

#[test]
fn test_same_seed_same_file() {
    assert_eq!(render(ChannelLayout::Stereo, 7), render(ChannelLayout::Stereo, 7));
    assert_ne!(render(ChannelLayout::Stereo, 7), render(ChannelLayout::Stereo, 8));
}

#[test]
fn test_noise_mean_is_near_zero() {
    let descriptor = AudioStreamDescriptor::mono(DEMO_RATE);
    let samples = WhiteNoise::new(descriptor, 11).unwrap().generate(100_000).unwrap();
    let mean = samples.iter().map(|&s| s as f64).sum::<f64>() / samples.len() as f64;
    // Standard error of the mean is about 60 for uniform 16-bit noise.
    assert!(mean.abs() < 500.0, "mean {} too far from zero", mean);
}
