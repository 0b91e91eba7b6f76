// SPDX-License-Identifier: MPL-2.0
//! Callbacks invoked by the controller for each transition effect.

use super::event::Effect;
use crate::domain::story::{ItemId, StoryAuthor};
use std::collections::HashSet;

/// Receives viewer side effects. All methods default to no-ops.
pub trait PlaybackObserver {
    /// A new item is on screen.
    fn on_item_viewed(&mut self, _item: &ItemId) {}

    /// Playback ran past the last item; the viewer has closed itself.
    fn on_advance_past_end(&mut self) {}

    /// The user dismissed the viewer.
    fn on_request_close(&mut self) {}

    /// Routes an effect to the matching callback.
    fn notify(&mut self, effect: &Effect) {
        match effect {
            Effect::ItemViewed(item) => self.on_item_viewed(item),
            Effect::AdvancedPastEnd => self.on_advance_past_end(),
            Effect::RequestClose => self.on_request_close(),
        }
    }
}

/// Ignores every effect.
impl PlaybackObserver for () {}

/// Queues effects for callers that prefer to drain them after dispatch.
impl PlaybackObserver for Vec<Effect> {
    fn notify(&mut self, effect: &Effect) {
        self.push(effect.clone());
    }
}

/// Set of item ids the viewing user has already seen.
///
/// Outlives individual viewer instances so the stories tray can tell seen
/// authors from unseen ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewedStories {
    seen: HashSet<ItemId>,
}

impl ViewedStories {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, item: &ItemId) -> bool {
        self.seen.contains(item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Returns true once every item of the author has been viewed.
    #[must_use]
    pub fn has_seen_all(&self, author: &StoryAuthor) -> bool {
        author.items.iter().all(|item| self.seen.contains(&item.id))
    }
}

impl PlaybackObserver for ViewedStories {
    fn on_item_viewed(&mut self, item: &ItemId) {
        self.seen.insert(item.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::story::StoryItem;

    #[derive(Default)]
    struct Counter {
        viewed: usize,
        ended: usize,
        closed: usize,
    }

    impl PlaybackObserver for Counter {
        fn on_item_viewed(&mut self, _item: &ItemId) {
            self.viewed += 1;
        }

        fn on_advance_past_end(&mut self) {
            self.ended += 1;
        }

        fn on_request_close(&mut self) {
            self.closed += 1;
        }
    }

    #[test]
    fn notify_routes_each_effect() {
        let mut counter = Counter::default();
        counter.notify(&Effect::ItemViewed(ItemId::new("a1")));
        counter.notify(&Effect::ItemViewed(ItemId::new("a2")));
        counter.notify(&Effect::AdvancedPastEnd);
        counter.notify(&Effect::RequestClose);
        assert_eq!((counter.viewed, counter.ended, counter.closed), (2, 1, 1));
    }

    #[test]
    fn effect_queue_keeps_order() {
        let mut queue: Vec<Effect> = Vec::new();
        queue.notify(&Effect::ItemViewed(ItemId::new("x")));
        queue.notify(&Effect::RequestClose);
        assert_eq!(
            queue,
            vec![Effect::ItemViewed(ItemId::new("x")), Effect::RequestClose]
        );
    }

    #[test]
    fn viewed_stories_tracks_authors_seen_in_full() {
        let author = StoryAuthor::new("a", "jessica_m").with_items(vec![
            StoryItem::image("a1", "u", 5.0),
            StoryItem::image("a2", "u", 5.0),
        ]);
        let mut viewed = ViewedStories::new();
        viewed.on_item_viewed(&ItemId::new("a1"));
        assert!(!viewed.has_seen_all(&author));
        viewed.notify(&Effect::ItemViewed(ItemId::new("a2")));
        viewed.on_item_viewed(&ItemId::new("a2"));
        assert!(viewed.has_seen_all(&author));
        assert_eq!(viewed.len(), 2);
    }
}
