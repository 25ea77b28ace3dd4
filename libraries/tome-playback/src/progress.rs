//! Playback progress tracking
//!
//! Holds the session's duration and elapsed position and guards every
//! update against the `[0, duration]` range. An out-of-range request is
//! dropped silently: it is a guard, not a failure, and must not surface as
//! a playback error.

use tome_core::timecode::display_timecode;

/// Range-guarded progress state with displayable timecodes
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    /// Total duration in seconds
    duration: f64,

    /// Elapsed position in seconds, `0 <= progress <= duration`
    progress: f64,
}

impl ProgressTracker {
    /// Create a tracker for a media item of the given duration
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            progress: 0.0,
        }
    }

    /// Set the elapsed position
    ///
    /// Accepts only `0 <= value <= duration` and returns whether the value
    /// was applied. Out-of-range values leave the state untouched.
    pub fn set_progress(&mut self, value: f64) -> bool {
        if value < 0.0 || value > self.duration {
            return false;
        }

        self.progress = value;
        true
    }

    /// Elapsed position in seconds
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Elapsed time formatted as `[H:]MM:SS`
    pub fn elapsed(&self) -> String {
        display_timecode(self.progress)
    }

    /// Remaining time formatted as `[H:]MM:SS`
    pub fn remaining(&self) -> String {
        display_timecode(self.duration - self.progress)
    }
}
