//! Player/chapter-list mode switching

use serde::{Deserialize, Serialize};

/// Which auxiliary view the player surface shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    /// The player transport surface
    #[default]
    Player,

    /// The chapter list
    Chapters,
}

/// Two-state mode flag
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeSwitcher {
    mode: PlayerMode,
}

impl ModeSwitcher {
    /// Switch to the given mode unconditionally
    pub fn switch_to(&mut self, mode: PlayerMode) {
        self.mode = mode;
    }

    /// Current mode
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }
}
