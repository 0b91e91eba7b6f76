// SPDX-License-Identifier: MPL-2.0
//! Immutable snapshot of the authors a viewer instance may show.
//!
//! The roster is built once when the viewer opens. Follow changes made while
//! the viewer is on screen do not reach it, which keeps every cursor index
//! valid for the lifetime of the viewer.

use crate::domain::story::{AuthorId, StoryAuthor, StoryItem};
use std::collections::HashSet;

/// Which authors the viewing user is allowed to see.
#[derive(Debug, Clone, Default)]
pub struct Eligibility {
    /// Followed author ids. `None` means every author is eligible.
    followed: Option<HashSet<AuthorId>>,
    /// The viewing user's own id; their stories are always shown.
    viewer: Option<AuthorId>,
    /// Author the viewer was opened on; always shown and focused first.
    focus: Option<AuthorId>,
}

impl Eligibility {
    /// Every author is eligible.
    #[must_use]
    pub fn everyone() -> Self {
        Self::default()
    }

    /// Only the given (followed) authors are eligible.
    #[must_use]
    pub fn following<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = AuthorId>,
    {
        Self {
            followed: Some(ids.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Marks the viewing user, whose own stories are always eligible.
    #[must_use]
    pub fn with_viewer(mut self, viewer: AuthorId) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// Sets the author to open on.
    #[must_use]
    pub fn with_focus(mut self, focus: Option<AuthorId>) -> Self {
        self.focus = focus;
        self
    }

    #[must_use]
    pub fn focus(&self) -> Option<&AuthorId> {
        self.focus.as_ref()
    }

    /// Returns true if the author passes the follow filter.
    #[must_use]
    pub fn admits(&self, id: &AuthorId) -> bool {
        if self.viewer.as_ref() == Some(id) || self.focus.as_ref() == Some(id) {
            return true;
        }
        self.followed
            .as_ref()
            .is_none_or(|followed| followed.contains(id))
    }
}

/// Filtered, ordered list of authors with at least one item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    authors: Vec<StoryAuthor>,
    start_index: usize,
}

impl Roster {
    /// Builds the snapshot: keeps eligible authors that have items, in input
    /// order, and resolves the focus author to its position.
    ///
    /// A focus id that is unknown or has no items starts the roster at 0.
    #[must_use]
    pub fn build(authors: &[StoryAuthor], eligibility: &Eligibility) -> Self {
        let kept: Vec<StoryAuthor> = authors
            .iter()
            .filter(|author| author.has_items() && eligibility.admits(&author.id))
            .cloned()
            .collect();

        let start_index = eligibility
            .focus()
            .and_then(|focus| kept.iter().position(|author| &author.id == focus))
            .unwrap_or(0);

        tracing::debug!(
            input = authors.len(),
            kept = kept.len(),
            start_index,
            "built story roster"
        );

        Self {
            authors: kept,
            start_index,
        }
    }

    #[must_use]
    pub fn authors(&self) -> &[StoryAuthor] {
        &self.authors
    }

    #[must_use]
    pub fn author(&self, index: usize) -> Option<&StoryAuthor> {
        self.authors.get(index)
    }

    #[must_use]
    pub fn item(&self, author_index: usize, item_index: usize) -> Option<&StoryItem> {
        self.author(author_index)
            .and_then(|author| author.items.get(item_index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Index of the author playback starts at.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Number of items across all authors.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.authors.iter().map(|author| author.items.len()).sum()
    }

    #[must_use]
    pub fn position_of(&self, id: &AuthorId) -> Option<usize> {
        self.authors.iter().position(|author| &author.id == id)
    }
}
