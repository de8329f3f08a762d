// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! This module handles all application messages by routing them to focused handler methods.
//! The main `update()` function acts as a dispatcher, while specific handlers are implemented
//! in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: sidebar, page navigation, context drawer, window events
//! - `handlers::capture`: status reconciliation, countdown ticks, the toggle
//! - `handlers::preview`: latest-image polling and preview loading
//! - `handlers::settings`: configuration changes and persistence

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),
            Message::ToggleSidebar => self.handle_toggle_sidebar(),
            Message::SelectPage(page) => self.handle_select_page(page),
            Message::WindowResized(size) => self.handle_window_resized(size),

            // ===== Capture Progress =====
            Message::PollCaptureStatus => self.handle_poll_capture_status(),
            Message::CaptureStatusFetched(result) => self.handle_capture_status_fetched(result),
            Message::ProgressTick => self.handle_progress_tick(),
            Message::ToggleBackgroundCapture => self.handle_toggle_background_capture(),
            Message::ToggleCompleted(result) => self.handle_toggle_completed(result),

            // ===== Latest Image =====
            Message::PollLatestImage => self.handle_poll_latest_image(),
            Message::LatestImageFetched(result) => self.handle_latest_image_fetched(result),
            Message::PreviewLoaded(result) => self.handle_preview_loaded(result),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::SelectAppTheme(index) => self.handle_select_app_theme(index),
            Message::SetServerUrl(url) => self.handle_set_server_url(url),
            Message::SelectCameraSource(source) => self.handle_select_camera_source(source),
            Message::SetDroidcamHost(host) => self.handle_set_droidcam_host(host),
            Message::SetDroidcamPort(port) => self.handle_set_droidcam_port(port),
            Message::SelectAwbMode(index) => self.handle_select_awb_mode(index),
            Message::SetCaptureInterval(minutes) => self.handle_set_capture_interval(minutes),
        }
    }
}
