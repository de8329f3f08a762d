// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Timing constants
pub mod timing {
    use std::time::Duration;

    /// Period between reconciliations with the server capture status
    pub const STATUS_POLL_PERIOD: Duration = Duration::from_secs(60);

    /// Period between checks for a newer captured image
    pub const IMAGE_POLL_PERIOD: Duration = Duration::from_secs(5);

    /// Period of the local countdown tick
    pub const PROGRESS_TICK_PERIOD: Duration = Duration::from_secs(1);
}

/// Network constants
pub mod network {
    /// Default base URL of the plant monitor server (Flask development default)
    pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

    /// Default DroidCam port
    pub const DEFAULT_DROIDCAM_PORT: u16 = 4747;
}

/// UI Constants
pub mod ui {
    /// Window width below which selecting a page also closes the sidebar
    pub const NARROW_WINDOW_BREAKPOINT: f32 = 768.0;

    /// Sidebar width when open
    pub const SIDEBAR_WIDTH: f32 = 200.0;

    /// Progress bar height on the dashboard card
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;

    /// Section header text size
    pub const SECTION_HEADER_TEXT_SIZE: u16 = 16;

    /// Countdown label text size
    pub const COUNTDOWN_TEXT_SIZE: u16 = 12;

    /// Placeholder icon size shown before the first capture arrives
    pub const PREVIEW_PLACEHOLDER_ICON_SIZE: u16 = 48;

    /// Maximum height of the latest-capture preview
    pub const PREVIEW_MAX_HEIGHT: f32 = 480.0;

    /// Text input width for numeric settings fields
    pub const NUMERIC_INPUT_WIDTH: f32 = 120.0;
}

/// Application information utilities
pub mod app_info {
    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }
}
