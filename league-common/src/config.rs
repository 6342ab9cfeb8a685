use core::time::Duration;
use derivative::Derivative;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Branding set for the overlay. Picks the logo drawn next to the boost meter.
#[derive(Derivative, Serialize, Deserialize, Sequence)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Theme {
    WinterTide,
    #[derivative(Default)]
    #[serde(rename = "RLBot")]
    RlBot,
    #[serde(rename = "Johnnyboi_i")]
    JohnnyboiI,
}

impl Theme {
    /// File name of the logo inside the assets directory
    pub fn logo_file(self) -> &'static str {
        match self {
            Self::WinterTide => "logo.png",
            Self::RlBot => "rlbot_logo.png",
            Self::JohnnyboiI => "johnnyboi_i.png",
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::WinterTide => write!(f, "WinterTide"),
            Self::RlBot => write!(f, "RLBot"),
            Self::JohnnyboiI => write!(f, "Johnnyboi_i"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub theme: Theme,
    /// Reserved for features that are not switched on by default
    pub experimental_features: bool,
    /// Stream channel the overlay is broadcast on
    pub twitch_channel: String,
    /// Target number of packet requests per second
    pub fps: u32,
    pub assets_path: PathBuf,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            experimental_features: false,
            twitch_channel: "rlbotofficial".to_string(),
            fps: 60,
            assets_path: PathBuf::new(),
        }
    }
}

impl Overlay {
    /// Time between two packet requests. The rate is kept within `1..=1000` requests per second.
    pub fn poll_period(&self) -> Duration {
        Duration::from_secs(1) / self.fps.clamp(1, 1000)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    pub url: String,
    pub connect_timeout_secs: u64,
}

impl Default for Bridge {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000".to_string(),
            connect_timeout_secs: 20,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub overlay: Overlay,
    pub bridge: Bridge,
}
