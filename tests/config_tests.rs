// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use plant_monitor::config::{AppTheme, AwbMode, CameraSource, Config};

#[test]
fn test_config_default() {
    // Test that default config can be created
    let config = Config::default();

    // Check sensible defaults
    assert_eq!(
        config.server_url, "http://127.0.0.1:5000",
        "Server URL should point at a local server by default"
    );
    assert_eq!(config.app_theme, AppTheme::System);
    assert_eq!(config.camera_source, CameraSource::PiCam);
    assert_eq!(config.picam_awb_mode, AwbMode::Tungsten);
    assert_eq!(config.capture_interval_minutes, 60);
}

#[test]
fn test_config_droidcam_defaults() {
    // Host starts unset; the port carries the DroidCam default
    let config = Config::default();
    assert!(config.droidcam_host.is_empty());
    assert_eq!(config.droidcam_port, 4747);
}

#[test]
fn test_awb_mode_variants() {
    // Test that all server white balance modes are listed
    assert_eq!(AwbMode::ALL.len(), 6);
}

#[test]
fn test_awb_mode_display_names() {
    // Test that all modes have non-empty display names
    for mode in AwbMode::ALL {
        let name = mode.display_name();
        assert!(!name.is_empty(), "Mode {:?} has empty display name", mode);
    }
}
