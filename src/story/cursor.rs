// SPDX-License-Identifier: MPL-2.0
//! Pointer to the (author, item) pair currently on screen.

use std::time::Duration;

/// Position and progress of playback inside a [`Roster`](super::Roster).
///
/// `author_index` and `item_index` always point at an existing item; the
/// viewer drops its cursor (closes) rather than letting them leave bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackCursor {
    pub(crate) author_index: usize,
    pub(crate) item_index: usize,
    pub(crate) elapsed: Duration,
    /// Display time of the current item, possibly shortened by a media failure.
    pub(crate) duration: Duration,
    pub(crate) is_paused: bool,
}

impl PlaybackCursor {
    pub(crate) fn new(author_index: usize, item_index: usize, duration: Duration) -> Self {
        Self {
            author_index,
            item_index,
            elapsed: Duration::ZERO,
            duration,
            is_paused: false,
        }
    }

    #[must_use]
    pub fn author_index(&self) -> usize {
        self.author_index
    }

    #[must_use]
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// Time the current item has been on screen while playing.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Effective display time of the current item.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Progress through the current item in `0.0..=1.0`.
    #[must_use]
    pub fn elapsed_fraction(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Returns true once the current item has been shown for its full duration.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Moves to another item, clearing progress. The pause flag is kept.
    pub(crate) fn reposition(&mut self, author_index: usize, item_index: usize, duration: Duration) {
        self.author_index = author_index;
        self.item_index = item_index;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
    }
}
