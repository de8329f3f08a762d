// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::network;
use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use cosmic::{Theme, theme};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Application theme preference
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum AppTheme {
    /// Follow system theme (dark or light based on system setting)
    #[default]
    System,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl AppTheme {
    /// Get the COSMIC theme for this app theme preference
    pub fn theme(&self) -> Theme {
        match self {
            Self::Dark => {
                let mut theme = theme::system_dark();
                theme.theme_type.prefer_dark(Some(true));
                theme
            }
            Self::Light => {
                let mut theme = theme::system_light();
                theme.theme_type.prefer_dark(Some(false));
                theme
            }
            Self::System => theme::system_preference(),
        }
    }
}

/// Which camera the server captures from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraSource {
    /// Raspberry Pi camera module attached to the server
    #[default]
    PiCam,
    /// DroidCam stream from a phone on the local network
    DroidCam,
}

/// White balance modes of the server's Raspberry Pi camera
///
/// Variant order mirrors the numeric AwbModeEnum values the server stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AwbMode {
    /// Let the camera pick
    Auto,
    /// Warm indoor lighting (server default)
    #[default]
    Tungsten,
    /// Fluorescent tubes
    Fluorescent,
    /// Mixed indoor lighting
    Indoor,
    /// Direct sunlight
    Daylight,
    /// Overcast sky
    Cloudy,
}

impl AwbMode {
    /// Get all mode variants for UI iteration
    pub const ALL: [AwbMode; 6] = [
        AwbMode::Auto,
        AwbMode::Tungsten,
        AwbMode::Fluorescent,
        AwbMode::Indoor,
        AwbMode::Daylight,
        AwbMode::Cloudy,
    ];

    /// Get display name for the mode
    pub fn display_name(&self) -> &'static str {
        match self {
            AwbMode::Auto => "Auto",
            AwbMode::Tungsten => "Tungsten",
            AwbMode::Fluorescent => "Fluorescent",
            AwbMode::Indoor => "Indoor",
            AwbMode::Daylight => "Daylight",
            AwbMode::Cloudy => "Cloudy",
        }
    }
}

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq, Serialize, Deserialize)]
#[version = 1]
pub struct Config {
    /// Application theme preference (System, Dark, Light)
    pub app_theme: AppTheme,
    /// Base URL of the plant monitor server
    pub server_url: String,
    /// Which camera the server captures from
    pub camera_source: CameraSource,
    /// DroidCam host or IP, empty until configured
    pub droidcam_host: String,
    /// DroidCam port
    pub droidcam_port: u16,
    /// White balance mode for the Raspberry Pi camera
    pub picam_awb_mode: AwbMode,
    /// Minutes between background captures (floor of 1)
    pub capture_interval_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_theme: AppTheme::default(), // Default to System theme
            server_url: network::DEFAULT_SERVER_URL.to_string(),
            camera_source: CameraSource::default(),
            droidcam_host: String::new(),
            droidcam_port: network::DEFAULT_DROIDCAM_PORT,
            picam_awb_mode: AwbMode::default(),
            capture_interval_minutes: 60,
        }
    }
}

impl Config {
    /// Load the persisted configuration, falling back to defaults
    ///
    /// Returns the config handler (None when the settings backend is
    /// unavailable) together with the entry.
    pub fn load(app_id: &str) -> (Option<cosmic_config::Config>, Self) {
        match cosmic_config::Config::new(app_id, Self::VERSION) {
            Ok(handler) => {
                let config = match Self::get_entry(&handler) {
                    Ok(config) => config,
                    Err((errs, config)) => {
                        error!("errors loading config: {:?}", errs);
                        config
                    }
                };
                (Some(handler), config)
            }
            Err(err) => {
                error!("failed to create config handler: {:?}", err);
                (None, Self::default())
            }
        }
    }
}
