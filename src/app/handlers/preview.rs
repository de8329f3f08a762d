// SPDX-License-Identifier: GPL-3.0-only

//! Latest-image handlers
//!
//! Polls the server for the newest capture and reloads the dashboard preview
//! only when the URL actually changes.

use crate::api::LatestImage;
use crate::app::state::{AppModel, Message};
use cosmic::Task;
use cosmic::widget::image::Handle;
use tracing::{debug, error};

impl AppModel {
    // =========================================================================
    // Latest Image Handlers
    // =========================================================================

    /// Ask the server which capture is newest
    pub(crate) fn handle_poll_latest_image(&self) -> Task<cosmic::Action<Message>> {
        let api = self.api.clone();
        Task::perform(
            async move { api.latest_image().await.map_err(|err| err.to_string()) },
            |result| cosmic::Action::App(Message::LatestImageFetched(result)),
        )
    }

    pub(crate) fn handle_latest_image_fetched(
        &mut self,
        result: Result<LatestImage, String>,
    ) -> Task<cosmic::Action<Message>> {
        let latest = match result {
            Ok(latest) => latest,
            Err(err) => {
                error!(error = %err, "Failed to fetch latest image URL");
                return Task::none();
            }
        };

        if !self.preview.wants(&latest.url) {
            return Task::none();
        }

        debug!(url = %latest.url, "Newer capture available, downloading");
        let api = self.api.clone();
        Task::perform(
            async move {
                let url = latest.url;
                match api.fetch_image_bytes(&url).await {
                    Ok(bytes) => Ok((url, Handle::from_bytes(bytes))),
                    Err(err) => Err(err.to_string()),
                }
            },
            |result| cosmic::Action::App(Message::PreviewLoaded(result)),
        )
    }

    pub(crate) fn handle_preview_loaded(
        &mut self,
        result: Result<(String, Handle), String>,
    ) -> Task<cosmic::Action<Message>> {
        match result {
            Ok((url, handle)) => {
                self.preview.install(url, handle);
            }
            Err(err) => {
                // The previous picture stays up
                error!(error = %err, "Failed to download latest image");
            }
        }
        Task::none()
    }
}
