//! Channel layouts and their interleaving order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WavError;

/// Speaker order of a 5.1 surround frame.
pub const SURROUND_5_1_ORDER: [&str; 6] = ["FL", "FR", "C", "LFE", "SL", "SR"];

/// Channel arrangement of an interleaved stream.
///
/// Layouts compare by channel count, so `Custom(2)` equals `Stereo`. Prefer
/// [`ChannelLayout::from_channel_count`] or parsing to build one, which picks
/// the named variant. A `Custom(0)` layout is rejected when it is turned into
/// a descriptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChannelLayout {
    /// Single channel.
    Mono,
    /// Left, right.
    Stereo,
    /// Front left, front right, center, LFE, surround left, surround right.
    Surround51,
    /// Any other channel count, with no named speaker positions.
    Custom(u16),
}

impl ChannelLayout {
    /// Returns the number of interleaved channels per frame.
    pub fn channel_count(&self) -> u16 {
        match self {
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::Surround51 => 6,
            ChannelLayout::Custom(n) => *n,
        }
    }

    /// Returns channel labels in interleaving order.
    pub fn channel_names(&self) -> Vec<String> {
        match self {
            ChannelLayout::Mono => vec!["M".to_string()],
            ChannelLayout::Stereo => vec!["L".to_string(), "R".to_string()],
            ChannelLayout::Surround51 => SURROUND_5_1_ORDER.iter().map(|s| s.to_string()).collect(),
            ChannelLayout::Custom(n) => (0..*n).map(|i| format!("CH{}", i)).collect(),
        }
    }

    /// Picks the named layout matching a channel count.
    pub fn from_channel_count(channels: u16) -> Self {
        match channels {
            1 => ChannelLayout::Mono,
            2 => ChannelLayout::Stereo,
            6 => ChannelLayout::Surround51,
            n => ChannelLayout::Custom(n),
        }
    }
}

impl PartialEq for ChannelLayout {
    fn eq(&self, other: &Self) -> bool {
        self.channel_count() == other.channel_count()
    }
}

impl Eq for ChannelLayout {}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelLayout::Mono => write!(f, "mono"),
            ChannelLayout::Stereo => write!(f, "stereo"),
            ChannelLayout::Surround51 => write!(f, "5.1"),
            ChannelLayout::Custom(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for ChannelLayout {
    type Err = WavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" => Ok(ChannelLayout::Mono),
            "stereo" => Ok(ChannelLayout::Stereo),
            "5.1" | "surround51" | "surround_5_1" => Ok(ChannelLayout::Surround51),
            other => match other.parse::<u16>() {
                Ok(0) => Err(WavError::invalid_descriptor(
                    "channels",
                    "layout must have at least one channel",
                )),
                Ok(n) => Ok(ChannelLayout::from_channel_count(n)),
                Err(_) => Err(WavError::invalid_descriptor(
                    "channels",
                    format!(
                        "unknown layout '{}' (expected mono, stereo, 5.1 or a channel count)",
                        s
                    ),
                )),
            },
        }
    }
}

impl TryFrom<String> for ChannelLayout {
    type Error = WavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelLayout> for String {
    fn from(layout: ChannelLayout) -> Self {
        layout.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AudioStreamDescriptor;

    #[test]
    fn test_channel_counts() {
        assert_eq!(ChannelLayout::Mono.channel_count(), 1);
        assert_eq!(ChannelLayout::Stereo.channel_count(), 2);
        assert_eq!(ChannelLayout::Surround51.channel_count(), 6);
        assert_eq!(ChannelLayout::Custom(4).channel_count(), 4);
    }

    #[test]
    fn test_surround_order() {
        let names = ChannelLayout::Surround51.channel_names();
        assert_eq!(names, vec!["FL", "FR", "C", "LFE", "SL", "SR"]);
    }

    #[test]
    fn test_custom_names() {
        assert_eq!(
            ChannelLayout::Custom(3).channel_names(),
            vec!["CH0", "CH1", "CH2"]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("mono".parse::<ChannelLayout>().unwrap(), ChannelLayout::Mono);
        assert_eq!("Stereo".parse::<ChannelLayout>().unwrap(), ChannelLayout::Stereo);
        assert_eq!("5.1".parse::<ChannelLayout>().unwrap(), ChannelLayout::Surround51);
        assert_eq!("6".parse::<ChannelLayout>().unwrap(), ChannelLayout::Surround51);
        assert_eq!("2".parse::<ChannelLayout>().unwrap(), ChannelLayout::Stereo);
        assert_eq!("8".parse::<ChannelLayout>().unwrap(), ChannelLayout::Custom(8));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("quad-ish".parse::<ChannelLayout>().is_err());
        assert!("0".parse::<ChannelLayout>().is_err());
        assert!("70000".parse::<ChannelLayout>().is_err());
    }

    #[test]
    fn test_display_parse_agree() {
        for layout in [
            ChannelLayout::Mono,
            ChannelLayout::Stereo,
            ChannelLayout::Surround51,
            ChannelLayout::Custom(4),
        ] {
            assert_eq!(layout.to_string().parse::<ChannelLayout>().unwrap(), layout);
        }
    }

    #[test]
    fn test_custom_counts_equal_named_layouts() {
        for n in [1u16, 2, 6] {
            let custom = ChannelLayout::Custom(n);
            assert_eq!(custom, ChannelLayout::from_channel_count(n));
            assert_eq!(custom.to_string().parse::<ChannelLayout>().unwrap(), custom);
        }
        assert_ne!(ChannelLayout::Custom(3), ChannelLayout::Stereo);
    }

    #[test]
    fn test_custom_zero_rejected_as_descriptor() {
        assert!(AudioStreamDescriptor::from_layout(ChannelLayout::Custom(0), 44100, 16).is_err());
    }

    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&ChannelLayout::Surround51).unwrap();
        assert_eq!(json, "\"5.1\"");
        let parsed: ChannelLayout = serde_json::from_str("\"stereo\"").unwrap();
        assert_eq!(parsed, ChannelLayout::Stereo);
        assert!(serde_json::from_str::<ChannelLayout>("\"nope\"").is_err());
    }
}
