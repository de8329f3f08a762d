// SPDX-License-Identifier: GPL-3.0-only

//! UI Navigation handlers
//!
//! Handles the sidebar, page selection, context drawer, and window events.

use crate::app::state::{AppModel, ContextPage, Message, Page};
use crate::constants::ui;
use cosmic::Task;
use tracing::error;

impl AppModel {
    // =========================================================================
    // UI Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_sidebar(&mut self) -> Task<cosmic::Action<Message>> {
        self.sidebar_open = !self.sidebar_open;
        Task::none()
    }

    /// Switch pages; on narrow windows the sidebar folds away afterwards
    pub(crate) fn handle_select_page(&mut self, page: Page) -> Task<cosmic::Action<Message>> {
        self.page = page;
        if self.window_width < ui::NARROW_WINDOW_BREAKPOINT {
            self.sidebar_open = false;
        }
        Task::none()
    }

    pub(crate) fn handle_window_resized(
        &mut self,
        size: cosmic::iced::Size,
    ) -> Task<cosmic::Action<Message>> {
        self.window_width = size.width;
        Task::none()
    }
}
