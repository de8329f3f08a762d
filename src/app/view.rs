// SPDX-License-Identifier: GPL-3.0-only

//! Main application view
//!
//! This module composes the main UI from modularized components:
//! - Sidebar navigation (sidebar module)
//! - Dashboard page with the capture card and latest image (inline)
//! - Settings page (settings module)

use crate::app::state::{AppModel, Message, Page};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the main application view
    ///
    /// Lays out the optional sidebar next to the current page.
    pub fn view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let page: Element<'_, Message> = match self.page {
            Page::Dashboard => self.dashboard_view(),
            Page::Settings => self.settings_view(),
        };

        let content = widget::container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing.space_m);

        if self.sidebar_open {
            widget::row()
                .push(self.sidebar_view())
                .push(content)
                .spacing(spacing.space_xs)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else {
            content.into()
        }
    }

    /// Build the dashboard page: capture progress on top, newest image below.
    fn dashboard_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        widget::column()
            .push(self.capture_card())
            .push(self.latest_image_card())
            .spacing(spacing.space_m)
            .width(Length::Fill)
            .into()
    }

    /// Card with the background capture switch, interval progress, and countdown.
    fn capture_card(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // The switch goes inert while a toggle request is on the wire
        let mut capture_switch = widget::toggler(self.poller.switch_on());
        if !self.poller.toggle_pending() {
            capture_switch = capture_switch.on_toggle(|_| Message::ToggleBackgroundCapture);
        }

        let header = widget::row()
            .push(
                widget::text(fl!("background-capture"))
                    .size(ui::SECTION_HEADER_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::Space::new(Length::Fill, Length::Shrink))
            .push(capture_switch)
            .align_y(Alignment::Center)
            .width(Length::Fill);

        let progress = widget::progress_bar(0.0..=100.0, self.poller.percent())
            .height(Length::Fixed(ui::PROGRESS_BAR_HEIGHT));

        // Empty text keeps the card height stable when no interval is running
        let countdown = match self.poller.remaining_minutes() {
            Some(minutes) => fl!("remaining-minutes", minutes = minutes),
            None => String::new(),
        };

        let card = widget::column()
            .push(header)
            .push(progress)
            .push(widget::text(countdown).size(ui::COUNTDOWN_TEXT_SIZE))
            .spacing(spacing.space_xs)
            .width(Length::Fill);

        widget::container(card)
            .padding(spacing.space_m)
            .width(Length::Fill)
            .class(cosmic::theme::Container::Card)
            .into()
    }

    /// Card showing the latest captured photo, or a placeholder before the
    /// first capture exists.
    fn latest_image_card(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let preview: Element<'_, Message> = match self.preview.handle() {
            Some(handle) => widget::image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(ui::PREVIEW_MAX_HEIGHT))
                .into(),
            None => widget::column()
                .push(
                    icon::from_name("camera-photo-symbolic")
                        .size(ui::PREVIEW_PLACEHOLDER_ICON_SIZE),
                )
                .push(widget::text(fl!("no-capture-yet")))
                .spacing(spacing.space_xs)
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .into(),
        };

        let card = widget::column()
            .push(
                widget::text(fl!("latest-capture"))
                    .size(ui::SECTION_HEADER_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(
                widget::container(preview)
                    .width(Length::Fill)
                    .center_x(Length::Fill),
            )
            .spacing(spacing.space_xs)
            .width(Length::Fill);

        widget::container(card)
            .padding(spacing.space_m)
            .width(Length::Fill)
            .class(cosmic::theme::Container::Card)
            .into()
    }
}
