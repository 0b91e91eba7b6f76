// SPDX-License-Identifier: MPL-2.0
//! Story domain types.
//!
//! This module contains story content, playback states and value objects
//! that are independent of any presentation or infrastructure concerns.

pub mod newtypes;
pub mod playback;
pub mod types;

// Re-export commonly used types
pub use newtypes::{
    DismissThreshold, DisplayDuration, FallbackDuration, SwipeThreshold, TapZoneFraction,
    TickInterval,
};
pub use playback::PlaybackState;
pub use types::{AuthorId, ItemId, MediaKind, OverlayColor, StoryAuthor, StoryItem, TextPosition};
