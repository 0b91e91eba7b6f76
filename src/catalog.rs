// SPDX-License-Identifier: MPL-2.0
//! Story catalog files.
//!
//! A catalog describes the authors available to the stories tray together
//! with the viewing user's id and the authors they follow:
//!
//! ```toml
//! viewer_id = "1"
//! following = ["2", "3"]
//!
//! [[authors]]
//! id = "2"
//! display_name = "jessica_m"
//! avatar_url = "https://cdn.example/avatars/2.jpg"
//!
//! [[authors.items]]
//! id = "2-1"
//! media = "image"
//! url = "https://cdn.example/stories/2-1.jpg"
//! duration_secs = 5
//! text = "Perfect morning coffee"
//! text_position = "bottom"
//! created_at = "2h"
//! ```

use crate::domain::story::{AuthorId, StoryAuthor};
use crate::error::{CatalogError, Result};
use crate::story::Eligibility;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Authors and follow relationships loaded from a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoryCatalog {
    /// The viewing user; their own stories are always shown.
    #[serde(default)]
    pub viewer_id: Option<AuthorId>,
    /// Authors the viewing user follows.
    #[serde(default)]
    pub following: Vec<AuthorId>,
    #[serde(default)]
    pub authors: Vec<StoryAuthor>,
}

impl StoryCatalog {
    /// Parses and validates a catalog document.
    pub fn parse(content: &str) -> Result<Self> {
        let catalog: Self =
            toml::from_str(content).map_err(|err| CatalogError::Malformed(err.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            authors = catalog.authors.len(),
            "loaded story catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> std::result::Result<(), CatalogError> {
        let mut authors = HashSet::new();
        let mut items = HashSet::new();
        for author in &self.authors {
            if !authors.insert(&author.id) {
                return Err(CatalogError::DuplicateAuthor(author.id.to_string()));
            }
            for item in &author.items {
                if !items.insert(&item.id) {
                    return Err(CatalogError::DuplicateItem(item.id.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Follow filter for opening the viewer on `focus`.
    #[must_use]
    pub fn eligibility(&self, focus: Option<AuthorId>) -> Eligibility {
        let eligibility = Eligibility::following(self.following.iter().cloned()).with_focus(focus);
        match &self.viewer_id {
            Some(viewer) => eligibility.with_viewer(viewer.clone()),
            None => eligibility,
        }
    }

    /// Authors shown in the stories tray: the viewer first, then followed
    /// authors with content, in catalog order.
    #[must_use]
    pub fn tray_authors(&self) -> Vec<&StoryAuthor> {
        let eligibility = self.eligibility(None);
        let (own, others): (Vec<&StoryAuthor>, Vec<&StoryAuthor>) = self
            .authors
            .iter()
            .filter(|author| author.has_items() && eligibility.admits(&author.id))
            .partition(|author| self.viewer_id.as_ref() == Some(&author.id));
        own.into_iter().chain(others).collect()
    }
}
