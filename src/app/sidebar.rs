// SPDX-License-Identifier: GPL-3.0-only

//! Sidebar navigation
//!
//! A fixed-width column with one button per page. The active page gets the
//! suggested button class so it reads as selected.

use crate::app::state::{AppModel, Message, Page};
use crate::constants::ui;
use crate::fl;
use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, icon};

impl AppModel {
    /// Build the sidebar column with the page navigation buttons.
    pub(crate) fn sidebar_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let nav = widget::column()
            .push(self.nav_button(
                Page::Dashboard,
                "user-home-symbolic",
                fl!("page-dashboard"),
            ))
            .push(self.nav_button(
                Page::Settings,
                "preferences-system-symbolic",
                fl!("page-settings"),
            ))
            .spacing(spacing.space_xxs)
            .width(Length::Fill);

        widget::container(nav)
            .padding(spacing.space_xs)
            .width(Length::Fixed(ui::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .class(cosmic::theme::Container::Card)
            .into()
    }

    /// One navigation button; the current page renders highlighted.
    fn nav_button(
        &self,
        page: Page,
        icon_name: &'static str,
        label: String,
    ) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let content = widget::row()
            .push(icon::from_name(icon_name).size(16))
            .push(widget::text(label))
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center);

        let class = if self.page == page {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Text
        };

        widget::button::custom(content)
            .padding(spacing.space_xs)
            .width(Length::Fill)
            .class(class)
            .on_press(Message::SelectPage(page))
            .into()
    }
}
