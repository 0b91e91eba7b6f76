// SPDX-License-Identifier: MPL-2.0
//! Story content types: authors and the items they publish.

use super::newtypes::DisplayDuration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a story author (a content creator account).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a single story item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of media carried by a story item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// Returns true for media with its own playback (and audio).
    #[must_use]
    pub fn is_video(self) -> bool {
        matches!(self, Self::Video)
    }
}

/// Vertical anchor of an item's overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextPosition {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Legibility hint for overlay text drawn on top of the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayColor {
    /// Light text with a dark shadow.
    #[default]
    Light,
    /// Dark text with a light shadow.
    Dark,
}

/// One piece of ephemeral media. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryItem {
    pub id: ItemId,
    #[serde(rename = "media", default)]
    pub media_kind: MediaKind,
    #[serde(rename = "url")]
    pub media_url: String,
    #[serde(rename = "duration_secs", default)]
    pub display_duration: DisplayDuration,
    #[serde(rename = "text", default, skip_serializing_if = "Option::is_none")]
    pub overlay_text: Option<String>,
    #[serde(default)]
    pub text_position: TextPosition,
    #[serde(default)]
    pub overlay_color: OverlayColor,
    /// Human readable age of the item ("2h", "yesterday").
    #[serde(rename = "created_at", default)]
    pub created_at_label: String,
}

impl StoryItem {
    /// Creates an image item with default presentation attributes.
    #[must_use]
    pub fn image(id: impl Into<String>, url: impl Into<String>, secs: f64) -> Self {
        Self {
            id: ItemId::new(id),
            media_kind: MediaKind::Image,
            media_url: url.into(),
            display_duration: DisplayDuration::from_secs_f64(secs),
            overlay_text: None,
            text_position: TextPosition::default(),
            overlay_color: OverlayColor::default(),
            created_at_label: String::new(),
        }
    }

    /// Creates a video item with default presentation attributes.
    #[must_use]
    pub fn video(id: impl Into<String>, url: impl Into<String>, secs: f64) -> Self {
        Self {
            media_kind: MediaKind::Video,
            ..Self::image(id, url, secs)
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, text: impl Into<String>, position: TextPosition) -> Self {
        self.overlay_text = Some(text.into());
        self.text_position = position;
        self
    }
}

/// A content creator and their items in presentation (chronological) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAuthor {
    pub id: AuthorId,
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub items: Vec<StoryItem>,
}

impl StoryAuthor {
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::new(id),
            display_name: display_name.into(),
            avatar_url: String::new(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<StoryItem>) -> Self {
        self.items = items;
        self
    }

    /// Returns true if the author has anything to show.
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}
