// SPDX-License-Identifier: MPL-2.0
//! Observer-driven wrapper around the story transition function.
//!
//! [`StoryPlaybackController`] owns the [`ViewerState`] of one open viewer
//! and forwards every effect to its [`PlaybackObserver`]. Bindings that want
//! the raw effects can use `Vec<Effect>` as the observer and drain it.

use super::event::Event;
use super::gesture::{Gesture, GestureConfig};
use super::observer::PlaybackObserver;
use super::roster::{Eligibility, Roster};
use super::state::{transition, PlaybackOptions, ViewerState};
use crate::domain::story::{PlaybackState, StoryAuthor};
use std::sync::Arc;
use std::time::Duration;

/// Drives one viewer instance from open to close.
#[derive(Debug)]
pub struct StoryPlaybackController<O: PlaybackObserver> {
    state: ViewerState,
    gestures: GestureConfig,
    observer: O,
}

impl<O: PlaybackObserver> StoryPlaybackController<O> {
    /// Builds the roster snapshot and opens on its start author.
    ///
    /// The observer receives the initial `on_item_viewed` immediately.
    pub fn open(
        authors: &[StoryAuthor],
        eligibility: &Eligibility,
        options: PlaybackOptions,
        gestures: GestureConfig,
        observer: O,
    ) -> Self {
        let roster = Arc::new(Roster::build(authors, eligibility));
        Self::with_roster(roster, options, gestures, observer)
    }

    /// Opens on an already built roster.
    pub fn with_roster(
        roster: Arc<Roster>,
        options: PlaybackOptions,
        gestures: GestureConfig,
        mut observer: O,
    ) -> Self {
        let opened = ViewerState::open(roster, options);
        for effect in &opened.effects {
            observer.notify(effect);
        }
        Self {
            state: opened.state,
            gestures,
            observer,
        }
    }

    /// Applies an event and notifies the observer of its effects.
    pub fn dispatch(&mut self, event: Event) -> PlaybackState {
        let next = transition(&self.state, event);
        self.state = next.state;
        for effect in &next.effects {
            self.observer.notify(effect);
        }
        self.state.playback()
    }

    pub fn tick(&mut self, dt: Duration) -> PlaybackState {
        self.dispatch(Event::Tick(dt))
    }

    pub fn pause(&mut self) -> PlaybackState {
        self.dispatch(Event::Pause)
    }

    pub fn resume(&mut self) -> PlaybackState {
        self.dispatch(Event::Resume)
    }

    pub fn toggle_pause(&mut self) -> PlaybackState {
        self.dispatch(Event::TogglePause)
    }

    pub fn go_next(&mut self) -> PlaybackState {
        self.dispatch(Event::Next)
    }

    pub fn go_previous(&mut self) -> PlaybackState {
        self.dispatch(Event::Previous)
    }

    pub fn go_next_author(&mut self) -> PlaybackState {
        self.dispatch(Event::NextAuthor)
    }

    pub fn go_previous_author(&mut self) -> PlaybackState {
        self.dispatch(Event::PreviousAuthor)
    }

    pub fn close(&mut self) -> PlaybackState {
        self.dispatch(Event::Close)
    }

    /// Reports that the current item's media failed to load.
    pub fn media_failed(&mut self) -> PlaybackState {
        self.dispatch(Event::MediaFailed)
    }

    /// Reports that the current item's media finished playing.
    pub fn media_ended(&mut self) -> PlaybackState {
        self.dispatch(Event::MediaEnded)
    }

    pub fn toggle_mute(&mut self) -> PlaybackState {
        self.dispatch(Event::ToggleMute)
    }

    /// Handles a tap at `x` in a viewport `width` pixels wide.
    pub fn tap(&mut self, x: f32, width: f32) -> PlaybackState {
        self.dispatch(self.gestures.map_tap(x, width))
    }

    /// Handles a completed pointer gesture.
    pub fn gesture(&mut self, gesture: Gesture) -> PlaybackState {
        self.dispatch(self.gestures.map(gesture))
    }

    #[must_use]
    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.state.playback()
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureConfig {
        &self.gestures
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the controller, handing back its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
