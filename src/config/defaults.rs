// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the story viewer. Constants are organized by category.
//!
//! # Categories
//!
//! - **Item Duration**: Display time of a story item
//! - **Playback**: Tick source granularity and media failure fallback
//! - **Gestures**: Tap zones and drag thresholds

// ==========================================================================
// Item Duration Defaults
// ==========================================================================

/// Display duration substituted for items declaring a non-positive duration.
pub const DEFAULT_ITEM_DURATION_SECS: f64 = 5.0;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default interval between progress ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Minimum tick interval (roughly one frame at 60 Hz).
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 1_000;

/// Default time an item stays on screen after its media failed to load.
pub const DEFAULT_FALLBACK_DURATION_MS: u64 = 1_000;

/// Minimum fallback duration.
pub const MIN_FALLBACK_DURATION_MS: u64 = 100;

/// Maximum fallback duration.
pub const MAX_FALLBACK_DURATION_MS: u64 = 10_000;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default width of the left and right tap zones, as a fraction of the viewport.
pub const DEFAULT_TAP_ZONE_FRACTION: f32 = 1.0 / 3.0;

/// Minimum tap zone fraction.
pub const MIN_TAP_ZONE_FRACTION: f32 = 0.1;

/// Maximum tap zone fraction (leaves a center zone for pause).
pub const MAX_TAP_ZONE_FRACTION: f32 = 0.45;

/// Default horizontal drag distance that counts as a swipe (in pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Default downward drag distance that dismisses the viewer (in pixels).
pub const DEFAULT_DISMISS_THRESHOLD_PX: f32 = 100.0;

/// Minimum dismiss threshold.
pub const MIN_DISMISS_THRESHOLD_PX: f32 = 10.0;

/// Maximum dismiss threshold.
pub const MAX_DISMISS_THRESHOLD_PX: f32 = 800.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ITEM_DURATION_SECS > 0.0);

    // Tick interval validation
    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    // Fallback duration validation
    assert!(MIN_FALLBACK_DURATION_MS > 0);
    assert!(MAX_FALLBACK_DURATION_MS >= MIN_FALLBACK_DURATION_MS);
    assert!(DEFAULT_FALLBACK_DURATION_MS >= MIN_FALLBACK_DURATION_MS);
    assert!(DEFAULT_FALLBACK_DURATION_MS <= MAX_FALLBACK_DURATION_MS);

    // Tap zone validation
    assert!(MIN_TAP_ZONE_FRACTION > 0.0);
    assert!(MAX_TAP_ZONE_FRACTION < 0.5);
    assert!(DEFAULT_TAP_ZONE_FRACTION >= MIN_TAP_ZONE_FRACTION);
    assert!(DEFAULT_TAP_ZONE_FRACTION <= MAX_TAP_ZONE_FRACTION);

    // Drag threshold validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(MIN_DISMISS_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_DISMISS_THRESHOLD_PX >= MIN_DISMISS_THRESHOLD_PX);
    assert!(DEFAULT_DISMISS_THRESHOLD_PX <= MAX_DISMISS_THRESHOLD_PX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_interval_defaults_are_valid() {
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 100);
        assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
        assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    }

    #[test]
    fn fallback_is_shorter_than_default_item_duration() {
        let default_item_ms = (DEFAULT_ITEM_DURATION_SECS * 1000.0) as u64;
        assert!(DEFAULT_FALLBACK_DURATION_MS < default_item_ms);
    }

    #[test]
    fn gesture_defaults_are_valid() {
        assert!(DEFAULT_TAP_ZONE_FRACTION > 0.33 && DEFAULT_TAP_ZONE_FRACTION < 0.34);
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 50.0);
        assert_eq!(DEFAULT_DISMISS_THRESHOLD_PX, 100.0);
    }
}
