// SPDX-License-Identifier: MPL-2.0
//! Story playback newtypes.
//!
//! This module provides type-safe wrappers for playback and gesture values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DISMISS_THRESHOLD_PX, DEFAULT_FALLBACK_DURATION_MS, DEFAULT_ITEM_DURATION_SECS,
    DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TAP_ZONE_FRACTION, DEFAULT_TICK_INTERVAL_MS,
    MAX_DISMISS_THRESHOLD_PX, MAX_FALLBACK_DURATION_MS, MAX_SWIPE_THRESHOLD_PX,
    MAX_TAP_ZONE_FRACTION, MAX_TICK_INTERVAL_MS, MIN_DISMISS_THRESHOLD_PX,
    MIN_FALLBACK_DURATION_MS, MIN_SWIPE_THRESHOLD_PX, MIN_TAP_ZONE_FRACTION,
    MIN_TICK_INTERVAL_MS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a story item stays on screen, guaranteed to be strictly positive.
///
/// A zero or negative duration would make the tick source advance forever
/// without showing anything, so such values are replaced with
/// [`DEFAULT_ITEM_DURATION_SECS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// Creates a display duration from seconds, substituting the default
    /// for values that are not a strictly positive, representable `Duration`.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        match Duration::try_from_secs_f64(secs) {
            Ok(duration) if !duration.is_zero() => Self(duration),
            _ => Self::substituted(secs),
        }
    }

    fn substituted(secs: f64) -> Self {
        tracing::warn!(
            declared_secs = secs,
            substituted_secs = DEFAULT_ITEM_DURATION_SECS,
            "invalid story item duration"
        );
        Self::default()
    }

    /// Creates a display duration, substituting the default for zero.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        if duration.is_zero() {
            Self::from_secs_f64(0.0)
        } else {
            Self(duration)
        }
    }

    /// Returns the wrapped duration.
    #[must_use]
    pub fn value(self) -> Duration {
        self.0
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(Duration::from_secs_f64(DEFAULT_ITEM_DURATION_SECS))
    }
}

impl From<f64> for DisplayDuration {
    fn from(secs: f64) -> Self {
        Self::from_secs_f64(secs)
    }
}

impl From<DisplayDuration> for f64 {
    fn from(duration: DisplayDuration) -> Self {
        duration.0.as_secs_f64()
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Period of the progress tick source, clamped to 16–1000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a tick interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(DEFAULT_TICK_INTERVAL_MS)
    }
}

// =============================================================================
// FallbackDuration
// =============================================================================

/// Display time granted to an item whose media failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackDuration(u64);

impl FallbackDuration {
    /// Creates a fallback duration, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_FALLBACK_DURATION_MS, MAX_FALLBACK_DURATION_MS))
    }

    /// Returns the fallback in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the fallback as a duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FallbackDuration {
    fn default() -> Self {
        Self(DEFAULT_FALLBACK_DURATION_MS)
    }
}

// =============================================================================
// TapZoneFraction
// =============================================================================

/// Width of each side tap zone relative to the viewport (0.1–0.45).
///
/// The remaining center band toggles pause.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapZoneFraction(f32);

impl TapZoneFraction {
    /// Creates a tap zone fraction, clamping to valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_TAP_ZONE_FRACTION, MAX_TAP_ZONE_FRACTION))
    }

    /// Returns the fraction as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TapZoneFraction {
    fn default() -> Self {
        Self(DEFAULT_TAP_ZONE_FRACTION)
    }
}

// =============================================================================
// Drag thresholds
// =============================================================================

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a swipe threshold, clamping to valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Minimum downward travel, in pixels, for a drag to dismiss the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissThreshold(f32);

impl DismissThreshold {
    /// Creates a dismiss threshold, clamping to valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if px.is_nan() {
            return Self::default();
        }
        Self(px.clamp(MIN_DISMISS_THRESHOLD_PX, MAX_DISMISS_THRESHOLD_PX))
    }

    /// Returns the threshold in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for DismissThreshold {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_THRESHOLD_PX)
    }
}
