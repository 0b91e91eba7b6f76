// SPDX-License-Identifier: MPL-2.0
//! Tap and drag gesture mapping.
//!
//! Pointer input (mouse or touch) is reduced to a [`Gesture`], which the
//! [`GestureConfig`] then maps to a playback [`Event`].

use super::event::Event;
use crate::domain::story::{DismissThreshold, SwipeThreshold, TapZoneFraction};

/// Tap zone and drag thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureConfig {
    pub tap_zone: TapZoneFraction,
    pub swipe: SwipeThreshold,
    pub dismiss: DismissThreshold,
}

/// A completed pointer interaction, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Press and release without significant travel.
    Tap { x: f32, width: f32 },
    /// Press and release with travel `(dx, dy)`; `end_x` is the release point.
    Drag {
        dx: f32,
        dy: f32,
        end_x: f32,
        width: f32,
    },
}

impl GestureConfig {
    /// Maps a tap at `x` in a viewport of `width` pixels.
    ///
    /// Left zone goes back, right zone goes forward, the center toggles pause.
    /// A degenerate viewport is treated as a center tap.
    #[must_use]
    pub fn map_tap(&self, x: f32, width: f32) -> Event {
        if !(width.is_finite() && width > 0.0) {
            return Event::TogglePause;
        }
        let zone = width * self.tap_zone.value();
        if x < zone {
            Event::Previous
        } else if x > width - zone {
            Event::Next
        } else {
            Event::TogglePause
        }
    }

    /// Maps a drag to a swipe or a dismiss, if it travelled far enough.
    ///
    /// Horizontal travel wins over vertical: swiping right goes back, swiping
    /// left goes forward. Only downward travel dismisses.
    #[must_use]
    pub fn map_drag(&self, dx: f32, dy: f32) -> Option<Event> {
        if dx.abs() > dy.abs() && dx.abs() > self.swipe.value() {
            Some(if dx > 0.0 { Event::Previous } else { Event::Next })
        } else if dy > self.dismiss.value() {
            Some(Event::Close)
        } else {
            None
        }
    }

    /// Maps any gesture. A short drag falls back to a tap at its release point.
    #[must_use]
    pub fn map(&self, gesture: Gesture) -> Event {
        match gesture {
            Gesture::Tap { x, width } => self.map_tap(x, width),
            Gesture::Drag {
                dx,
                dy,
                end_x,
                width,
            } => self
                .map_drag(dx, dy)
                .unwrap_or_else(|| self.map_tap(end_x, width)),
        }
    }
}

/// Pointer travel below which a press/release pair is a tap.
const TAP_SLOP_PX: f32 = 10.0;

/// Pairs pointer presses with releases.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    start: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Records where the pointer went down.
    pub fn press(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Completes the interaction; `None` if no press was recorded.
    pub fn release(&mut self, x: f32, y: f32, width: f32) -> Option<Gesture> {
        let (start_x, start_y) = self.start.take()?;
        let (dx, dy) = (x - start_x, y - start_y);

        if dx.abs() < TAP_SLOP_PX && dy.abs() < TAP_SLOP_PX {
            Some(Gesture::Tap { x, width })
        } else {
            Some(Gesture::Drag {
                dx,
                dy,
                end_x: x,
                width,
            })
        }
    }

    /// Forgets an in-flight press (pointer left the viewport, touch lost).
    pub fn cancel(&mut self) {
        self.start = None;
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }
}
