use serde::{Deserialize, Serialize};

/// Encoder tuning profile.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OpusApplication {
    /// Music and general audio.
    #[default]
    Audio,
    Voip,
    LowDelay,
}

/// `[encoder]` table. Sample rate, channel count and frame size are fixed and
/// not part of the settings.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EncoderSettings {
    pub application: OpusApplication,
    /// Target bitrate in bits per second; `None` lets libopus choose.
    pub bitrate: Option<i32>,
}
