// SPDX-License-Identifier: MPL-2.0
//! Inputs and outputs of the story playback state machine.

use crate::domain::story::ItemId;
use std::time::Duration;

/// Everything that can happen to an open viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The tick source fired; carries the time elapsed since the previous tick.
    Tick(Duration),
    Pause,
    Resume,
    /// Center tap or space bar.
    TogglePause,
    /// Next item, spilling over to the next author.
    Next,
    /// Previous item, spilling back to the previous author's last item.
    Previous,
    /// Jump to the next author's first item.
    NextAuthor,
    /// Jump to the previous author's first item.
    PreviousAuthor,
    /// User dismissed the viewer.
    Close,
    /// The current item's media could not be loaded.
    MediaFailed,
    /// The current item's media finished on its own (end of a video).
    MediaEnded,
    ToggleMute,
}

/// Side effects requested by a transition, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A new item is on screen and should be marked as seen.
    ItemViewed(ItemId),
    /// Playback ran past the last item of the last author; the viewer closed.
    AdvancedPastEnd,
    /// The user asked to close the viewer.
    RequestClose,
}

impl Effect {
    /// Returns true if this effect ends the viewer session.
    #[must_use]
    pub fn closes_viewer(&self) -> bool {
        matches!(self, Self::AdvancedPastEnd | Self::RequestClose)
    }
}
