// SPDX-License-Identifier: MPL-2.0
//! Domain layer - story content and playback value objects.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Beyond `std` it only relies on `serde` (catalog decoding) and `tracing`
//! (reporting substituted values), so it stays free of any UI toolkit.
//!
//! # Modules
//!
//! - [`story`]: Story types ([`StoryAuthor`](story::StoryAuthor),
//!   [`StoryItem`](story::StoryItem), [`PlaybackState`](story::PlaybackState),
//!   [`DisplayDuration`](story::DisplayDuration))

pub mod story;
