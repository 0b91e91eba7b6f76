// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the stories tray and the story viewer.
//!
//! - **Palette**: Base colors (ChekMate orange brand scale)
//! - **Opacity**: Overlay opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (orange scale)
    pub const BRAND_400: Color = Color::from_rgb(0.984, 0.573, 0.235);
    pub const BRAND_500: Color = Color::from_rgb(0.976, 0.451, 0.086);
}

pub mod opacity {
    /// Unfilled part of a progress segment.
    pub const TRACK: f32 = 0.3;
    /// Header and footer button backgrounds.
    pub const CONTROL: f32 = 0.3;
    /// Author navigation buttons.
    pub const CONTROL_STRONG: f32 = 0.5;
    /// Secondary text (timestamps).
    pub const SECONDARY_TEXT: f32 = 0.75;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    /// Height of a story progress segment.
    pub const PROGRESS_SEGMENT: f32 = 4.0;
    /// Avatar ring in the stories tray.
    pub const TRAY_AVATAR: f32 = 64.0;
    /// Maximum width of the viewer column (phone-sized).
    pub const VIEWER_MAX_WIDTH: f32 = 390.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const OVERLAY: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}
