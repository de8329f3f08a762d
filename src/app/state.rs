// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::api::{ApiClient, CaptureStatus, LatestImage};
use crate::app::poller::CapturePoller;
use crate::config::{CameraSource, Config};
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use cosmic::widget::image::Handle;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Settings,
}

/// Latest-capture preview with the URL it was loaded from
///
/// The URL is the identity of the shown picture: a poll result only triggers
/// a download when it names a different, non-empty URL, so an unchanged
/// server answer never re-fetches the same image.
#[derive(Debug, Clone, Default)]
pub struct LatestPreview {
    url: Option<String>,
    handle: Option<Handle>,
}

impl LatestPreview {
    /// Whether a freshly polled URL warrants downloading the image
    pub fn wants(&self, url: &str) -> bool {
        !url.is_empty() && self.url.as_deref() != Some(url)
    }

    /// Show a downloaded image and remember the URL it came from
    pub fn install(&mut self, url: String, handle: Handle) {
        self.url = Some(url);
        self.handle = Some(handle);
    }

    /// URL of the currently shown image
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Handle of the currently shown image, if one arrived yet
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }
}

/// The application model stores app-specific state
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Client for the plant monitor server, rebuilt when the base URL changes
    pub api: ApiClient,
    /// Countdown state behind the dashboard's capture card
    pub poller: CapturePoller,
    /// Latest-capture preview
    pub preview: LatestPreview,
    /// Page shown in the content area
    pub page: Page,
    /// Whether the navigation sidebar is open
    pub sidebar_open: bool,
    /// Last known window width, drives the narrow-window sidebar behavior
    pub window_width: f32,
    /// Cached dropdown options for the white balance setting
    pub awb_dropdown_options: Vec<String>,
    /// Cached dropdown options for the theme setting
    pub theme_dropdown_options: Vec<String>,
}

/// Identifies a context page to display in the context drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextPage {
    #[default]
    About,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: sidebar, pages, context drawer, window events
/// - **Capture Progress**: status reconciliation, countdown ticks, the toggle
/// - **Latest Image**: image polling and preview loading
/// - **Settings**: configuration changes
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About)
    ToggleContextPage(ContextPage),
    /// Open or close the navigation sidebar
    ToggleSidebar,
    /// Show a page, closing the sidebar on narrow windows
    SelectPage(Page),
    /// Main window was resized
    WindowResized(cosmic::iced::Size),

    // ===== Capture Progress =====
    /// Ask the server for the capture status (60 s reconciliation)
    PollCaptureStatus,
    /// Capture status arrived, or the fetch failed
    CaptureStatusFetched(Result<CaptureStatus, String>),
    /// Advance the local countdown by one second
    ProgressTick,
    /// Flip background capture on the server (optimistic)
    ToggleBackgroundCapture,
    /// Server answered the toggle request
    ToggleCompleted(Result<CaptureStatus, String>),

    // ===== Latest Image =====
    /// Ask the server for the newest capture URL (5 s poll)
    PollLatestImage,
    /// Newest capture URL arrived, or the fetch failed
    LatestImageFetched(Result<LatestImage, String>),
    /// Image bytes arrived for the preview (URL they came from, loaded handle)
    PreviewLoaded(Result<(String, Handle), String>),

    // ===== Settings =====
    /// Config file changed on disk (cosmic-config watcher)
    UpdateConfig(Config),
    /// Select app theme from dropdown by index
    SelectAppTheme(usize),
    /// Set the server base URL
    SetServerUrl(String),
    /// Select which camera the server captures from
    SelectCameraSource(CameraSource),
    /// Set the DroidCam host
    SetDroidcamHost(String),
    /// Set the DroidCam port (numeric text input)
    SetDroidcamPort(String),
    /// Select white balance mode from dropdown by index
    SelectAwbMode(usize),
    /// Set the capture interval in minutes (numeric text input)
    SetCaptureInterval(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_wants_only_new_non_empty_urls() {
        let mut preview = LatestPreview::default();
        assert!(!preview.wants(""));
        assert!(preview.wants("/static/images/plant_1.jpg"));

        preview.install(
            "/static/images/plant_1.jpg".to_string(),
            Handle::from_bytes(Vec::new()),
        );
        assert!(!preview.wants("/static/images/plant_1.jpg"));
        assert!(preview.wants("/static/images/plant_2.jpg"));
        assert!(!preview.wants(""));
    }
}
