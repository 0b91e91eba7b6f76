// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped reply composer drawn over story media.
pub fn composer(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_alpha = match status {
        text_input::Status::Focused { .. } => 1.0,
        _ => opacity::TRACK,
    };

    text_input::Style {
        background: Background::Color(Color {
            a: opacity::CONTROL,
            ..BLACK
        }),
        border: Border {
            color: Color {
                a: border_alpha,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        icon: WHITE,
        placeholder: Color {
            a: opacity::SECONDARY_TEXT,
            ..WHITE
        },
        value: WHITE,
        selection: palette::BRAND_400,
    }
}
