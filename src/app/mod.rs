// SPDX-License-Identifier: GPL-3.0-only

//! Main application module for the plant monitor dashboard
//!
//! This module contains the application state, message handling, UI rendering,
//! and the timers that keep the dashboard in sync with the capture server.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, Page, etc.)
//! - `poller`: Background capture countdown state machine
//! - `sidebar`: Navigation sidebar rendering
//! - `settings`: Settings page rendering
//! - `view`: Main view rendering
//! - `update`: Message dispatch
//! - `handlers`: Message handlers grouped by domain
//!
//! # Main Types
//!
//! - `AppModel`: Main application state
//! - `Message`: All possible user interactions and system events

mod handlers;
pub mod poller;
mod settings;
mod sidebar;
mod state;
mod update;
mod view;

use crate::api::ApiClient;
use crate::config::{AwbMode, Config};
use crate::constants::{timing, ui};
use crate::fl;
use cosmic::app::context_drawer;
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use state::{AppModel, ContextPage, Message, Page};

const REPOSITORY: &str = "https://github.com/cosmic-utils/plant-monitor";
const APP_ICON: &[u8] = include_bytes!(
    "../../resources/icons/hicolor/scalable/apps/io.github.cosmic-utils.plant-monitor.svg"
);

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic-utils.plant-monitor";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration, falling back to defaults when unavailable
        let (config_handler, config) = Config::load(Self::APP_ID);

        let api = ApiClient::new(&config.server_url);

        // Construct the app model with the runtime's core.
        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            api,
            poller: Default::default(),
            preview: Default::default(),
            page: Page::default(),
            sidebar_open: false,
            // Assume a regular window until the first resize event arrives
            window_width: ui::NARROW_WINDOW_BREAKPOINT,
            awb_dropdown_options: AwbMode::ALL
                .iter()
                .map(|mode| mode.display_name().to_string())
                .collect(),
            theme_dropdown_options: vec![
                fl!("theme-system"),
                fl!("theme-dark"),
                fl!("theme-light"),
            ],
            config,
            config_handler,
        };

        // Fetch the capture status and newest image right away; the periodic
        // subscriptions take over one period later.
        let status_task = app.handle_poll_capture_status();
        let image_task = app.handle_poll_latest_image();

        (app, Task::batch([status_task, image_task]))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let icon_name = if self.sidebar_open {
            "window-close-symbolic"
        } else {
            "open-menu-symbolic"
        };

        vec![
            widget::button::icon(widget::icon::from_name(icon_name))
                .on_press(Message::ToggleSidebar)
                .into(),
        ]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        use cosmic::iced::futures::SinkExt;

        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        // Reconcile with the server once a minute
        let status_sub = Subscription::run_with_id(
            "status_poll",
            cosmic::iced::stream::channel(10, move |mut output| async move {
                loop {
                    tokio::time::sleep(timing::STATUS_POLL_PERIOD).await;
                    if output.send(Message::PollCaptureStatus).await.is_err() {
                        break;
                    }
                }
            }),
        );

        // Check for a newer capture every five seconds
        let image_sub = Subscription::run_with_id(
            "image_poll",
            cosmic::iced::stream::channel(10, move |mut output| async move {
                loop {
                    tokio::time::sleep(timing::IMAGE_POLL_PERIOD).await;
                    if output.send(Message::PollLatestImage).await.is_err() {
                        break;
                    }
                }
            }),
        );

        // Advance the countdown once a second
        let tick_sub = Subscription::run_with_id(
            "progress_tick",
            cosmic::iced::stream::channel(10, move |mut output| async move {
                loop {
                    tokio::time::sleep(timing::PROGRESS_TICK_PERIOD).await;
                    if output.send(Message::ProgressTick).await.is_err() {
                        break;
                    }
                }
            }),
        );

        // Track the window width for the narrow-layout sidebar behavior
        let resize_sub = cosmic::iced::event::listen_with(|event, _status, _id| match event {
            cosmic::iced::Event::Window(cosmic::iced::window::Event::Opened { size, .. })
            | cosmic::iced::Event::Window(cosmic::iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        Subscription::batch([config_sub, status_sub, image_sub, tick_sub, resize_sub])
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}
