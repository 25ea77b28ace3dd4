//! Transport state and skip intents
//!
//! The transport slice only reflects commanded play/pause state; the
//! coordinator owns the actual player calls and confirms the flag after
//! they succeed. Skip intents carry no state of their own, the coordinator
//! translates them into absolute seek targets.

use serde::{Deserialize, Serialize};

/// Skip/seek intents emitted by the transport controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportIntent {
    /// Jump to the beginning
    SkipToStart,

    /// Jump to the end
    SkipToEnd,

    /// Seek 5 seconds back
    Back5,

    /// Seek 10 seconds forward
    Forward10,
}

/// Commanded play/pause state
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportControl {
    is_now_playing: bool,
}

impl TransportControl {
    /// Flip the play/pause flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.is_now_playing = !self.is_now_playing;
        self.is_now_playing
    }

    /// Set the play/pause flag
    pub fn set_playing(&mut self, playing: bool) {
        self.is_now_playing = playing;
    }

    /// Whether playback is commanded to run
    pub fn is_now_playing(&self) -> bool {
        self.is_now_playing
    }
}
