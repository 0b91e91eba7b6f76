// SPDX-License-Identifier: MPL-2.0
//! `chekmate_stories` is the story viewer of the ChekMate social app, built
//! with the Iced GUI framework.
//!
//! The playback core in [`story`] is UI-independent: a pure transition
//! function over an immutable roster snapshot, wrapped by an observer-driven
//! controller. The [`ui`] and [`app`] modules bind it to iced.

#![doc(html_root_url = "https://docs.rs/chekmate_stories/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod story;
pub mod ui;
