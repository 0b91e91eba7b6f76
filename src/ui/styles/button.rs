// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Translucent control drawn over story media (close, pause, mute).
pub fn overlay(alpha_normal: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::CONTROL_STRONG,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Tray entry; the ring is brand colored while the author has unseen items.
pub fn tray_avatar(unseen: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let ring = if unseen {
            palette::BRAND_500
        } else {
            palette::GRAY_400
        };
        let background = match status {
            button::Status::Hovered => palette::GRAY_900,
            _ => BLACK,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: ring,
                width: 2.0,
                radius: radius::LG.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Brand-filled send button of the reply composer.
pub fn send(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_400,
        _ => palette::BRAND_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
