// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::story::OverlayColor;
use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-bleed black surface behind story media.
pub fn story_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Placeholder frame where the media of the current item is presented.
pub fn media_frame(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One part of a progress segment: filled white or the translucent track.
pub fn progress_part(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let color = if filled {
            palette::WHITE
        } else {
            Color {
                a: opacity::TRACK,
                ..palette::WHITE
            }
        };
        container::Style {
            background: Some(Background::Color(color)),
            border: Border::default().rounded(radius::SM),
            ..Default::default()
        }
    }
}

/// Text color for overlay captions.
#[must_use]
pub fn overlay_text_color(color: OverlayColor) -> Color {
    match color {
        OverlayColor::Light => palette::WHITE,
        OverlayColor::Dark => palette::BLACK,
    }
}
