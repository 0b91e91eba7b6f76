// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": each component exposes a `Message`
//! enum, an `update` and a `view`, and the [`crate::app`] root maps them.
//!
//! - [`tray`] - Stories tray listing authors with unseen markers
//! - [`story_viewer`] - Full-screen story playback
//! - [`styles`] - Shared widget styles
//! - [`glyphs`] - Symbol button labels
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod glyphs;
pub mod story_viewer;
pub mod styles;
pub mod tray;
