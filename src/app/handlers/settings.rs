// SPDX-License-Identifier: GPL-3.0-only

//! Settings handlers
//!
//! Every edit persists the config entry immediately; numeric fields ignore
//! input that does not parse and keep the last saved value.

use crate::api::ApiClient;
use crate::app::state::{AppModel, Message};
use crate::config::{AppTheme, AwbMode, CameraSource, Config};
use cosmic::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // Settings Handlers
    // =========================================================================

    pub(crate) fn handle_update_config(
        &mut self,
        config: Config,
    ) -> Task<cosmic::Action<Message>> {
        info!("Configuration reloaded");
        if config.server_url != self.config.server_url {
            self.api = ApiClient::new(&config.server_url);
        }
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_select_app_theme(
        &mut self,
        index: usize,
    ) -> Task<cosmic::Action<Message>> {
        let app_theme = match index {
            0 => AppTheme::System,
            1 => AppTheme::Dark,
            2 => AppTheme::Light,
            _ => return Task::none(),
        };

        info!(?app_theme, "Setting application theme");
        self.config.app_theme = app_theme;
        self.save_config();

        cosmic::command::set_theme(app_theme.theme())
    }

    pub(crate) fn handle_set_server_url(&mut self, url: String) -> Task<cosmic::Action<Message>> {
        self.api = ApiClient::new(&url);
        self.config.server_url = url;
        self.save_config();
        Task::none()
    }

    pub(crate) fn handle_select_camera_source(
        &mut self,
        source: CameraSource,
    ) -> Task<cosmic::Action<Message>> {
        info!(?source, "Selecting camera source");
        self.config.camera_source = source;
        self.save_config();
        Task::none()
    }

    pub(crate) fn handle_set_droidcam_host(
        &mut self,
        host: String,
    ) -> Task<cosmic::Action<Message>> {
        self.config.droidcam_host = host;
        self.save_config();
        Task::none()
    }

    pub(crate) fn handle_set_droidcam_port(
        &mut self,
        port: String,
    ) -> Task<cosmic::Action<Message>> {
        let Ok(port) = port.trim().parse::<u16>() else {
            return Task::none();
        };
        self.config.droidcam_port = port;
        self.save_config();
        Task::none()
    }

    pub(crate) fn handle_select_awb_mode(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        if index < AwbMode::ALL.len() {
            let mode = AwbMode::ALL[index];
            info!(?mode, "Selecting white balance mode");
            self.config.picam_awb_mode = mode;
            self.save_config();
        }
        Task::none()
    }

    pub(crate) fn handle_set_capture_interval(
        &mut self,
        minutes: String,
    ) -> Task<cosmic::Action<Message>> {
        let Ok(minutes) = minutes.trim().parse::<u32>() else {
            return Task::none();
        };
        // The server clamps the interval to at least one minute
        self.config.capture_interval_minutes = minutes.max(1);
        self.save_config();
        Task::none()
    }

    /// Persist the current config entry, logging on failure
    fn save_config(&self) {
        if let Some(handler) = self.config_handler.as_ref()
            && let Err(err) = self.config.write_entry(handler)
        {
            error!(?err, "Failed to save settings");
        }
    }
}
