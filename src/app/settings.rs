// SPDX-License-Identifier: GPL-3.0-only

//! Settings page view

use crate::app::state::{AppModel, Message};
use crate::config::{AppTheme, AwbMode, CameraSource};
use crate::constants::{app_info, ui};
use crate::fl;
use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget;

impl AppModel {
    /// Create the settings page
    ///
    /// Shows appearance, server, and capture options. Exactly one of the two
    /// camera source sections is visible, matching the selected radio.
    pub fn settings_view(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        // Theme dropdown
        let current_theme_index = match self.config.app_theme {
            AppTheme::System => 0,
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
        };

        let theme_dropdown = widget::dropdown(
            &self.theme_dropdown_options,
            Some(current_theme_index),
            Message::SelectAppTheme,
        );

        // Server base URL
        let server_url_input = widget::text_input("http://", self.config.server_url.as_str())
            .on_input(Message::SetServerUrl);

        // Capture interval in minutes
        let interval_input = widget::text_input(
            "60",
            self.config.capture_interval_minutes.to_string(),
        )
        .on_input(Message::SetCaptureInterval)
        .width(Length::Fixed(ui::NUMERIC_INPUT_WIDTH));

        // Camera source radios
        let picam_radio = widget::radio(
            widget::text::body(fl!("source-picam")),
            CameraSource::PiCam,
            Some(self.config.camera_source),
            Message::SelectCameraSource,
        );

        let droidcam_radio = widget::radio(
            widget::text::body(fl!("source-droidcam")),
            CameraSource::DroidCam,
            Some(self.config.camera_source),
            Message::SelectCameraSource,
        );

        // Section for the selected source only
        let source_section: Element<'_, Message> = match self.config.camera_source {
            CameraSource::PiCam => self.build_picam_section(),
            CameraSource::DroidCam => self.build_droidcam_section(),
        };

        let version_info = format!("Version {}", app_info::version());

        widget::column()
            .push(
                widget::text(fl!("appearance"))
                    .size(ui::SECTION_HEADER_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("theme")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(theme_dropdown)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("server"))
                    .size(ui::SECTION_HEADER_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("server-url")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(server_url_input)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(fl!("capture"))
                    .size(ui::SECTION_HEADER_TEXT_SIZE)
                    .font(cosmic::font::bold()),
            )
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(widget::text(fl!("capture-interval")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(interval_input)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("camera-source")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(picam_radio)
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(droidcam_radio)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(source_section)
            .push(widget::vertical_space().height(spacing.space_l))
            .push(widget::divider::horizontal::default())
            .push(widget::vertical_space().height(spacing.space_s))
            .push(
                widget::text(version_info)
                    .size(12)
                    .class(cosmic::theme::Text::Accent),
            )
            .spacing(0)
            .into()
    }

    /// Options shown while the Raspberry Pi camera is selected
    fn build_picam_section(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let current_awb_index = AwbMode::ALL
            .iter()
            .position(|mode| *mode == self.config.picam_awb_mode);

        let awb_dropdown = widget::dropdown(
            &self.awb_dropdown_options,
            current_awb_index,
            Message::SelectAwbMode,
        );

        widget::column()
            .push(widget::text(fl!("picam-awb")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(awb_dropdown)
            .into()
    }

    /// Options shown while DroidCam is selected
    fn build_droidcam_section(&self) -> Element<'_, Message> {
        let spacing = cosmic::theme::spacing();

        let host_input = widget::text_input("192.168.0.10", self.config.droidcam_host.as_str())
            .on_input(Message::SetDroidcamHost);

        let port_input = widget::text_input("4747", self.config.droidcam_port.to_string())
            .on_input(Message::SetDroidcamPort)
            .width(Length::Fixed(ui::NUMERIC_INPUT_WIDTH));

        widget::column()
            .push(widget::text(fl!("droidcam-host")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(host_input)
            .push(widget::vertical_space().height(spacing.space_s))
            .push(widget::text(fl!("droidcam-port")))
            .push(widget::vertical_space().height(spacing.space_xxs))
            .push(port_input)
            .into()
    }
}
