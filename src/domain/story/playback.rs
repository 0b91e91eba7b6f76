// SPDX-License-Identifier: MPL-2.0
//! Story viewer playback states.

/// Represents the current playback state of a story viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// The current item is on screen and its timer is running.
    #[default]
    Playing,
    /// The timer is suspended; elapsed time is retained.
    Paused,
    /// The viewer is dismissed. Terminal.
    Closed,
}

impl PlaybackState {
    /// Returns true if the tick source should be running.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the viewer is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true once the viewer has been dismissed.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true while the viewer is on screen (playing or paused).
    #[must_use]
    pub fn is_open(self) -> bool {
        !self.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_playing() {
        assert_eq!(PlaybackState::default(), PlaybackState::Playing);
    }

    #[test]
    fn test_state_checks() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Paused.is_playing());

        assert!(PlaybackState::Paused.is_paused());
        assert!(!PlaybackState::Closed.is_paused());

        assert!(PlaybackState::Closed.is_closed());
        assert!(!PlaybackState::Playing.is_closed());
    }

    #[test]
    fn test_is_open() {
        assert!(PlaybackState::Playing.is_open());
        assert!(PlaybackState::Paused.is_open());
        assert!(!PlaybackState::Closed.is_open());
    }
}
