// SPDX-License-Identifier: MPL-2.0
//! Story playback: roster snapshot, cursor, transitions and input mapping.
//!
//! The core is [`ViewerState`] plus the pure [`transition`] function. The
//! [`StoryPlaybackController`] wraps it for callers that prefer callbacks
//! through a [`PlaybackObserver`], and [`GestureConfig`] turns taps and
//! drags into [`Event`]s.

pub mod controller;
pub mod cursor;
pub mod event;
pub mod gesture;
pub mod observer;
pub mod roster;
pub mod state;

pub use controller::StoryPlaybackController;
pub use cursor::PlaybackCursor;
pub use event::{Effect, Event};
pub use gesture::{Gesture, GestureConfig, PointerTracker};
pub use observer::{PlaybackObserver, ViewedStories};
pub use roster::{Eligibility, Roster};
pub use state::{transition, PlaybackOptions, Transition, ViewerState};
