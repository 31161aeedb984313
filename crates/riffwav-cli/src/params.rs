//! Noise generation parameters, loadable from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use riffwav_encoder::{AudioStreamDescriptor, ChannelLayout, WavResult};
use serde::{Deserialize, Serialize};

/// Parameters for the `noise` command.
///
/// Every field is optional in JSON; missing fields take the defaults of the
/// demo configuration (5 seconds of 44.1 kHz 16-bit stereo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseParams {
    /// Channel layout (`mono`, `stereo`, `5.1`, or a channel count).
    #[serde(default = "default_layout")]
    pub layout: ChannelLayout,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Bits per sample.
    #[serde(default = "default_bits_per_sample")]
    pub bits_per_sample: u16,
    /// Duration in seconds.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
    /// RNG seed.
    #[serde(default)]
    pub seed: u32,
}

fn default_layout() -> ChannelLayout {
    ChannelLayout::Stereo
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_bits_per_sample() -> u16 {
    16
}

fn default_duration_seconds() -> f64 {
    5.0
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            sample_rate: default_sample_rate(),
            bits_per_sample: default_bits_per_sample(),
            duration_seconds: default_duration_seconds(),
            seed: 0,
        }
    }
}

/// Command-line values that replace fields loaded from a params file.
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub layout: Option<ChannelLayout>,
    pub sample_rate: Option<u32>,
    pub bits_per_sample: Option<u16>,
    pub duration_seconds: Option<f64>,
    pub seed: Option<u32>,
}

impl NoiseParams {
    /// Parses params from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse noise params")
    }

    /// Loads params from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read params file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse params file: {}", path.display()))
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, overrides: &ParamOverrides) -> Self {
        if let Some(layout) = overrides.layout {
            self.layout = layout;
        }
        if let Some(rate) = overrides.sample_rate {
            self.sample_rate = rate;
        }
        if let Some(bits) = overrides.bits_per_sample {
            self.bits_per_sample = bits;
        }
        if let Some(duration) = overrides.duration_seconds {
            self.duration_seconds = duration;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        self
    }

    /// Builds the validated stream descriptor.
    pub fn descriptor(&self) -> WavResult<AudioStreamDescriptor> {
        AudioStreamDescriptor::from_layout(self.layout, self.sample_rate, self.bits_per_sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_demo_configuration() {
        let params = NoiseParams::default();
        assert_eq!(params.layout, ChannelLayout::Stereo);
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.bits_per_sample, 16);
        assert_eq!(params.duration_seconds, 5.0);
        assert_eq!(params.seed, 0);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(NoiseParams::from_json("{}").unwrap(), NoiseParams::default());
    }

    #[test]
    fn test_partial_json() {
        let params = NoiseParams::from_json(r#"{"layout": "5.1", "seed": 99}"#).unwrap();
        assert_eq!(params.layout, ChannelLayout::Surround51);
        assert_eq!(params.seed, 99);
        assert_eq!(params.sample_rate, 44100);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(NoiseParams::from_json(r#"{"sample_rat": 48000}"#).is_err());
    }

    #[test]
    fn test_bad_layout_rejected() {
        assert!(NoiseParams::from_json(r#"{"layout": "quadraphonic"}"#).is_err());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let base = NoiseParams::from_json(r#"{"layout": "mono", "seed": 3}"#).unwrap();
        let overrides = ParamOverrides {
            sample_rate: Some(48000),
            seed: Some(4),
            ..Default::default()
        };
        let params = base.with_overrides(&overrides);
        assert_eq!(params.layout, ChannelLayout::Mono);
        assert_eq!(params.sample_rate, 48000);
        assert_eq!(params.seed, 4);
        assert_eq!(params.duration_seconds, 5.0);
    }

    #[test]
    fn test_descriptor() {
        let params = NoiseParams {
            layout: ChannelLayout::Surround51,
            bits_per_sample: 24,
            ..Default::default()
        };
        let d = params.descriptor().unwrap();
        assert_eq!(d.channels, 6);
        assert_eq!(d.bits_per_sample, 24);

        let bad = NoiseParams {
            bits_per_sample: 20,
            ..Default::default()
        };
        assert!(bad.descriptor().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"duration_seconds": 0.25}"#).unwrap();

        let params = NoiseParams::load(&path).unwrap();
        assert_eq!(params.duration_seconds, 0.25);

        let missing = NoiseParams::load(&dir.path().join("missing.json"));
        assert!(missing.is_err());
    }
}
