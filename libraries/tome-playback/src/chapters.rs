//! Chapter navigation
//!
//! A snapshot of the book's ordered chapter list plus the timecode at the
//! moment the list was opened. Selection emits a delegate event for the
//! session to translate into an actual seek; the navigator itself never
//! touches the player.

use tome_core::types::Chapter;

/// Delegate events emitted by the chapter navigator
#[derive(Debug, Clone, PartialEq)]
pub enum ChapterEvent {
    /// A chapter was picked; the parent decides what to do with it
    Selected(Chapter),

    /// The navigator asked to be dismissed
    Closed,
}

/// Chapter list snapshot with the currently playing position
#[derive(Debug, Clone)]
pub struct ChapterNavigator {
    chapters: Vec<Chapter>,
    current_timecode: f64,
}

impl ChapterNavigator {
    /// Create a navigator over an ordered chapter snapshot
    pub fn new(chapters: Vec<Chapter>, current_timecode: f64) -> Self {
        Self {
            chapters,
            current_timecode,
        }
    }

    /// The chapter the current timecode falls into
    ///
    /// Resolves to the last chapter whose timecode is at or before the
    /// current one; `None` before playback has started (timecode <= 0) or
    /// when the list is empty.
    pub fn playing_chapter(&self) -> Option<&Chapter> {
        if self.current_timecode <= 0.0 {
            return None;
        }

        self.chapters
            .iter()
            .rev()
            .find(|chapter| chapter.timecode <= self.current_timecode)
    }

    /// Select a chapter, moving the current timecode to its start
    pub fn select(&mut self, chapter: Chapter) -> ChapterEvent {
        self.current_timecode = chapter.timecode;
        ChapterEvent::Selected(chapter)
    }

    /// Request dismissal; carries no state change
    pub fn close(&self) -> ChapterEvent {
        ChapterEvent::Closed
    }

    /// The chapter snapshot
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Timecode the navigator currently points at
    pub fn current_timecode(&self) -> f64 {
        self.current_timecode
    }
}
