// SPDX-License-Identifier: MPL-2.0
//! Symbol glyphs used as button labels. These are not localized.

pub const PLAY: &str = "▶";
pub const PAUSE: &str = "⏸";
pub const MUTED: &str = "🔇";
pub const UNMUTED: &str = "🔊";
pub const CLOSE: &str = "✕";
pub const PREVIOUS_AUTHOR: &str = "‹";
pub const NEXT_AUTHOR: &str = "›";
pub const LIKED: &str = "♥";
pub const NOT_LIKED: &str = "♡";
