// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles for the tray and the story viewer.

pub mod button;
pub mod container;
pub mod text_input;

pub use button::{overlay as button_overlay, tray_avatar as button_tray_avatar};
