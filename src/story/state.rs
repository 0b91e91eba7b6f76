// SPDX-License-Identifier: MPL-2.0
//! Viewer state object and its pure transition function.
//!
//! [`transition`] takes the current [`ViewerState`] and an [`Event`] and
//! returns the next state plus the [`Effect`]s the caller must act on. It
//! performs no I/O and owns no timers, so any UI binding can drive it.

use super::cursor::PlaybackCursor;
use super::event::{Effect, Event};
use super::roster::Roster;
use crate::domain::story::{FallbackDuration, PlaybackState, StoryAuthor, StoryItem};
use std::sync::Arc;

/// Tunables that affect transitions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackOptions {
    /// Display time left to an item whose media failed to load.
    pub fallback: FallbackDuration,
    /// Whether the viewer opens muted.
    pub start_muted: bool,
}

/// Complete state of one viewer instance.
///
/// A `None` cursor is the `Closed` state; the roster snapshot is shared and
/// never changes after open.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    roster: Arc<Roster>,
    cursor: Option<PlaybackCursor>,
    muted: bool,
    options: PlaybackOptions,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: ViewerState,
    pub effects: Vec<Effect>,
}

impl ViewerState {
    /// Opens a viewer on the roster's start author, first item.
    ///
    /// An empty roster opens directly into `Closed` with no effects.
    #[must_use]
    pub fn open(roster: Arc<Roster>, options: PlaybackOptions) -> Transition {
        let mut effects = Vec::new();
        let start = roster.start_index();
        let cursor = roster.item(start, 0).map(|item| {
            effects.push(Effect::ItemViewed(item.id.clone()));
            PlaybackCursor::new(start, 0, item.display_duration.value())
        });

        if cursor.is_none() {
            tracing::debug!("story viewer opened with no eligible content");
        }

        Transition {
            state: Self {
                roster,
                cursor,
                muted: options.start_muted,
                options,
            },
            effects,
        }
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        match &self.cursor {
            None => PlaybackState::Closed,
            Some(cursor) if cursor.is_paused => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&PlaybackCursor> {
        self.cursor.as_ref()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn current_author(&self) -> Option<&StoryAuthor> {
        self.cursor
            .as_ref()
            .and_then(|cursor| self.roster.author(cursor.author_index))
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&StoryItem> {
        self.cursor
            .as_ref()
            .and_then(|cursor| self.roster.item(cursor.author_index, cursor.item_index))
    }

    /// Progress of the current item, zero when closed.
    #[must_use]
    pub fn elapsed_fraction(&self) -> f32 {
        self.cursor
            .as_ref()
            .map_or(0.0, PlaybackCursor::elapsed_fraction)
    }

    fn apply(&mut self, event: Event, effects: &mut Vec<Effect>) {
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };

        match event {
            Event::Tick(dt) => {
                if cursor.is_paused {
                    return;
                }
                cursor.elapsed = cursor.elapsed.saturating_add(dt);
                if cursor.is_expired() {
                    self.advance(effects);
                }
            }
            Event::Pause => cursor.is_paused = true,
            Event::Resume => cursor.is_paused = false,
            Event::TogglePause => cursor.is_paused = !cursor.is_paused,
            Event::Next | Event::MediaEnded => self.advance(effects),
            Event::Previous => self.retreat(effects),
            Event::NextAuthor => {
                let next = cursor.author_index + 1;
                if next < self.roster.len() {
                    self.move_to(next, 0, effects);
                }
            }
            Event::PreviousAuthor => {
                if let Some(previous) = cursor.author_index.checked_sub(1) {
                    self.move_to(previous, 0, effects);
                }
            }
            Event::Close => {
                self.cursor = None;
                effects.push(Effect::RequestClose);
            }
            Event::MediaFailed => {
                cursor.duration = cursor.duration.min(self.options.fallback.as_duration());
            }
            Event::ToggleMute => self.muted = !self.muted,
        }
    }

    fn advance(&mut self, effects: &mut Vec<Effect>) {
        let Some((author_index, item_index)) = self.position() else {
            return;
        };
        let item_count = self
            .roster
            .author(author_index)
            .map_or(0, |author| author.items.len());

        if item_index + 1 < item_count {
            self.move_to(author_index, item_index + 1, effects);
        } else if author_index + 1 < self.roster.len() {
            self.move_to(author_index + 1, 0, effects);
        } else {
            self.cursor = None;
            effects.push(Effect::AdvancedPastEnd);
        }
    }

    fn retreat(&mut self, effects: &mut Vec<Effect>) {
        let Some((author_index, item_index)) = self.position() else {
            return;
        };

        if let Some(previous) = item_index.checked_sub(1) {
            self.move_to(author_index, previous, effects);
        } else if let Some(previous_author) = author_index.checked_sub(1) {
            let last = self
                .roster
                .author(previous_author)
                .map_or(0, |author| author.items.len().saturating_sub(1));
            self.move_to(previous_author, last, effects);
        }
    }

    fn move_to(&mut self, author_index: usize, item_index: usize, effects: &mut Vec<Effect>) {
        let Some(item) = self.roster.item(author_index, item_index) else {
            // Roster authors always have items, so this only guards a broken snapshot.
            self.cursor = None;
            effects.push(Effect::AdvancedPastEnd);
            return;
        };
        let duration = item.display_duration.value();
        effects.push(Effect::ItemViewed(item.id.clone()));
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.reposition(author_index, item_index, duration);
        }
    }

    fn position(&self) -> Option<(usize, usize)> {
        self.cursor
            .as_ref()
            .map(|cursor| (cursor.author_index, cursor.item_index))
    }
}

/// Applies `event` to `state`, returning the next state and its effects.
///
/// Events reaching a closed viewer are ignored.
#[must_use]
pub fn transition(state: &ViewerState, event: Event) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();
    next.apply(event, &mut effects);

    if !matches!(event, Event::Tick(_)) || !effects.is_empty() {
        tracing::debug!(
            ?event,
            from = ?state.playback(),
            to = ?next.playback(),
            author = next.cursor.as_ref().map(|c| c.author_index),
            item = next.cursor.as_ref().map(|c| c.item_index),
            "story transition"
        );
    }

    Transition {
        state: next,
        effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::{AuthorId, ItemId};
    use crate::story::roster::Eligibility;
    use std::time::Duration;

    fn author(id: &str, items: &[&str]) -> StoryAuthor {
        StoryAuthor::new(id, id).with_items(
            items
                .iter()
                .map(|item| StoryItem::image(*item, "u", 5.0))
                .collect(),
        )
    }

    fn open(authors: &[StoryAuthor]) -> ViewerState {
        let roster = Arc::new(Roster::build(authors, &Eligibility::everyone()));
        ViewerState::open(roster, PlaybackOptions::default()).state
    }

    fn at(state: &ViewerState) -> Option<(usize, usize)> {
        state.position()
    }

    fn step(state: &ViewerState, event: Event) -> ViewerState {
        transition(state, event).state
    }

    #[test]
    fn open_emits_first_item_viewed() {
        let roster = Arc::new(Roster::build(
            &[author("a", &["a1", "a2"])],
            &Eligibility::everyone(),
        ));
        let opened = ViewerState::open(roster, PlaybackOptions::default());
        assert_eq!(opened.state.playback(), PlaybackState::Playing);
        assert_eq!(opened.effects, vec![Effect::ItemViewed(ItemId::new("a1"))]);
    }

    #[test]
    fn open_on_empty_roster_is_closed() {
        let state = open(&[author("a", &[])]);
        assert_eq!(state.playback(), PlaybackState::Closed);
        assert!(state.current_item().is_none());
        assert_eq!(state.elapsed_fraction(), 0.0);
    }

    #[test]
    fn open_respects_focus_author() {
        let authors = [author("a", &["a1"]), author("b", &["b1", "b2"])];
        let eligibility = Eligibility::everyone().with_focus(Some(AuthorId::new("b")));
        let roster = Arc::new(Roster::build(&authors, &eligibility));
        let state = ViewerState::open(roster, PlaybackOptions::default()).state;
        assert_eq!(at(&state), Some((1, 0)));
    }

    #[test]
    fn next_spills_into_next_author_then_closes() {
        let state = open(&[author("a", &["a1", "a2"]), author("c", &["c1"])]);
        let state = step(&state, Event::Next);
        assert_eq!(at(&state), Some((0, 1)));

        let t = transition(&state, Event::Next);
        assert_eq!(at(&t.state), Some((1, 0)));
        assert_eq!(t.effects, vec![Effect::ItemViewed(ItemId::new("c1"))]);

        let t = transition(&t.state, Event::Next);
        assert_eq!(t.state.playback(), PlaybackState::Closed);
        assert_eq!(t.effects, vec![Effect::AdvancedPastEnd]);
    }

    #[test]
    fn previous_goes_to_last_item_of_previous_author() {
        let state = open(&[author("a", &["a1", "a2", "a3"]), author("b", &["b1"])]);
        let state = step(&state, Event::NextAuthor);
        assert_eq!(at(&state), Some((1, 0)));

        let t = transition(&state, Event::Previous);
        assert_eq!(at(&t.state), Some((0, 2)));
        assert_eq!(t.effects, vec![Effect::ItemViewed(ItemId::new("a3"))]);
    }

    #[test]
    fn previous_at_very_first_item_is_noop() {
        let state = open(&[author("a", &["a1", "a2"])]);
        let state = step(&state, Event::Tick(Duration::from_secs(2)));
        let t = transition(&state, Event::Previous);
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn author_jumps_land_on_first_item_and_stop_at_bounds() {
        let state = open(&[author("a", &["a1", "a2"]), author("b", &["b1", "b2"])]);
        let state = step(&state, Event::Next);
        let state = step(&state, Event::NextAuthor);
        assert_eq!(at(&state), Some((1, 0)));

        let t = transition(&state, Event::NextAuthor);
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());

        let state = step(&state, Event::Next);
        let state = step(&state, Event::PreviousAuthor);
        assert_eq!(at(&state), Some((0, 0)));
        let t = transition(&state, Event::PreviousAuthor);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let state = open(&[author("a", &["a1"])]);
        let paused = step(&state, Event::Pause);
        let still = step(&paused, Event::Tick(Duration::from_secs(60)));
        assert_eq!(still.playback(), PlaybackState::Paused);
        assert_eq!(still.cursor().map(PlaybackCursor::elapsed), Some(Duration::ZERO));
    }

    #[test]
    fn navigation_keeps_pause_state() {
        let state = open(&[author("a", &["a1", "a2"])]);
        let state = step(&state, Event::TogglePause);
        let state = step(&state, Event::Next);
        assert_eq!(state.playback(), PlaybackState::Paused);
        assert_eq!(at(&state), Some((0, 1)));
    }

    #[test]
    fn close_is_terminal() {
        let state = open(&[author("a", &["a1", "a2"])]);
        let paused = step(&state, Event::Pause);
        let t = transition(&paused, Event::Close);
        assert_eq!(t.state.playback(), PlaybackState::Closed);
        assert_eq!(t.effects, vec![Effect::RequestClose]);

        for event in [Event::Resume, Event::Next, Event::Close, Event::Tick(Duration::from_secs(9))] {
            let after = transition(&t.state, event);
            assert_eq!(after.state.playback(), PlaybackState::Closed);
            assert!(after.effects.is_empty());
        }
    }

    #[test]
    fn media_failure_shortens_current_item() {
        let state = open(&[author("a", &["a1", "a2"])]);
        let failed = step(&state, Event::MediaFailed);
        assert_eq!(
            failed.cursor().map(PlaybackCursor::duration),
            Some(FallbackDuration::default().as_duration())
        );

        let t = transition(&failed, Event::Tick(Duration::from_millis(1_000)));
        assert_eq!(at(&t.state), Some((0, 1)));
        assert_eq!(t.effects, vec![Effect::ItemViewed(ItemId::new("a2"))]);
        assert_eq!(
            t.state.cursor().map(PlaybackCursor::duration),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn media_failure_after_fallback_elapsed_advances_next_tick() {
        let state = open(&[author("a", &["a1", "a2"])]);
        let state = step(&state, Event::Tick(Duration::from_secs(3)));
        let failed = step(&state, Event::MediaFailed);
        assert_eq!(at(&failed), Some((0, 0)));
        let advanced = step(&failed, Event::Tick(Duration::from_millis(100)));
        assert_eq!(at(&advanced), Some((0, 1)));
    }

    #[test]
    fn media_ended_behaves_like_next() {
        let state = open(&[author("a", &["a1"]), author("b", &["b1"])]);
        assert_eq!(
            transition(&state, Event::MediaEnded),
            transition(&state, Event::Next)
        );
    }

    #[test]
    fn toggle_mute_leaves_cursor_alone() {
        let state = open(&[author("a", &["a1"])]);
        let muted = step(&state, Event::ToggleMute);
        assert!(muted.is_muted());
        assert_eq!(muted.cursor(), state.cursor());
        assert!(!step(&muted, Event::ToggleMute).is_muted());
    }
}
