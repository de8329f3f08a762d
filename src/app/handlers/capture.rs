// SPDX-License-Identifier: GPL-3.0-only

//! Capture progress handlers
//!
//! Reconciles the countdown with the server once a minute, advances it
//! locally once a second, and runs the optimistic background-capture toggle.

use crate::api::CaptureStatus;
use crate::app::state::{AppModel, Message};
use cosmic::Task;
use tracing::{debug, error, info};

impl AppModel {
    // =========================================================================
    // Capture Progress Handlers
    // =========================================================================

    /// Fetch the capture status for the periodic reconciliation
    pub(crate) fn handle_poll_capture_status(&self) -> Task<cosmic::Action<Message>> {
        let api = self.api.clone();
        Task::perform(
            async move { api.capture_status().await.map_err(|err| err.to_string()) },
            |result| cosmic::Action::App(Message::CaptureStatusFetched(result)),
        )
    }

    pub(crate) fn handle_capture_status_fetched(
        &mut self,
        result: Result<CaptureStatus, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(status) => {
                self.poller.apply_status(status);
                debug!(
                    active = status.active,
                    total_secs = self.poller.interval_total_secs(),
                    "Reconciled capture status"
                );
            }
            Err(err) => {
                // Last known state keeps rendering
                error!(error = %err, "Failed to fetch capture status");
            }
        }
        Task::none()
    }

    /// Advance the countdown by one local second
    pub(crate) fn handle_progress_tick(&mut self) -> Task<cosmic::Action<Message>> {
        self.poller.tick();
        Task::none()
    }

    /// Flip the switch optimistically and send the toggle request
    pub(crate) fn handle_toggle_background_capture(&mut self) -> Task<cosmic::Action<Message>> {
        if !self.poller.begin_toggle() {
            return Task::none();
        }

        info!(
            requested_on = self.poller.switch_on(),
            "Toggling background capture"
        );

        let api = self.api.clone();
        Task::perform(
            async move { api.toggle_capture().await.map_err(|err| err.to_string()) },
            |result| cosmic::Action::App(Message::ToggleCompleted(result)),
        )
    }

    pub(crate) fn handle_toggle_completed(
        &mut self,
        result: Result<CaptureStatus, String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok(status) => {
                self.poller.complete_toggle(status);
                info!(active = status.active, "Background capture toggled");
            }
            Err(err) => {
                self.poller.fail_toggle();
                error!(error = %err, "Toggle request failed, reverting switch");
            }
        }
        Task::none()
    }
}
