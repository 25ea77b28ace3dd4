//! Book session root
//!
//! Loads the book, wires the playback coordinator and the purchase gate
//! together, and owns the single destination slot every cross-cutting
//! error lands in. Children never surface UI themselves; they hand typed
//! errors up and this is the only place they become a user-visible alert.

use std::sync::Arc;

use tracing::{info, warn};

use tome_core::clients::{BookClient, PlayerClient, StoreClient};
use tome_core::types::{Book, Chapter, RemoteEvent};

use crate::chapters::{ChapterEvent, ChapterNavigator};
use crate::coordinator::PlaybackCoordinator;
use crate::mode::PlayerMode;
use crate::purchase::PurchaseGate;
use crate::transport::TransportIntent;

/// The single presentation slot of the session
///
/// Presenting a new destination replaces any previous one; at most one is
/// visible at a time.
#[derive(Debug)]
pub enum Destination {
    /// The chapter list sheet
    ChapterList(ChapterNavigator),

    /// The error alert
    Alert {
        /// Human-readable message shown to the user
        message: String,
    },
}

/// Root of the playback state tree for one book
pub struct BookSession {
    book_client: Arc<dyn BookClient>,

    book: Option<Arc<Book>>,
    coordinator: PlaybackCoordinator,
    purchase: PurchaseGate,
    destination: Option<Destination>,
    is_loading: bool,
}

impl BookSession {
    /// Create a session over the injected collaborators
    pub fn new(
        book_client: Arc<dyn BookClient>,
        player: Arc<dyn PlayerClient>,
        store: Arc<dyn StoreClient>,
    ) -> Self {
        Self {
            book_client: Arc::clone(&book_client),
            book: None,
            coordinator: PlaybackCoordinator::new(player, book_client),
            purchase: PurchaseGate::new(store),
            destination: None,
            is_loading: false,
        }
    }

    /// Fetch the book and attach it to the playback coordinator
    pub async fn fetch_book(&mut self) {
        self.is_loading = true;

        match self.book_client.fetch().await {
            Ok(book) => {
                info!(book = book.id, title = %book.title, "book loaded");
                let book = Arc::new(book);
                self.book = Some(Arc::clone(&book));
                self.coordinator.attach(book).await;
                self.is_loading = false;
            }
            Err(err) => {
                self.is_loading = false;
                self.present_alert(err.message());
            }
        }
    }

    /// Toggle play/pause, routing a playback failure to the alert slot
    pub fn toggle_play_pause(&mut self) {
        if let Err(err) = self.coordinator.toggle_play_pause() {
            self.present_alert(err.message());
        }
    }

    /// Apply an OS remote-control event
    pub fn on_remote_event(&mut self, event: RemoteEvent) {
        if let Err(err) = self.coordinator.on_remote_event(event) {
            self.present_alert(err.message());
        }
    }

    /// Translate a transport skip intent
    pub fn handle_intent(&mut self, intent: TransportIntent) {
        self.coordinator.handle_intent(intent);
    }

    /// Seek to an absolute position (slider scrub)
    pub fn seek_to(&mut self, seconds: f64) {
        self.coordinator.seek_to(seconds);
    }

    /// Apply a periodic progress callback from the player engine
    pub fn report_progress(&mut self, seconds: f64) {
        self.coordinator.report_progress(seconds);
    }

    /// Handle the engine's end-of-media signal
    pub fn on_finish_playing(&mut self) {
        self.coordinator.on_finish_playing();
    }

    /// Advance the playback speed cycle
    pub fn advance_speed(&mut self) {
        self.coordinator.advance_speed();
    }

    /// Switch the auxiliary view mode
    ///
    /// Switching to the chapter list presents a navigator snapshot built
    /// from the current chapter list and progress.
    pub fn switch_mode(&mut self, mode: PlayerMode) {
        self.coordinator.switch_mode(mode);

        if mode == PlayerMode::Chapters {
            let chapters = self
                .book
                .as_ref()
                .map(|book| book.chapters.clone())
                .unwrap_or_default();

            self.destination = Some(Destination::ChapterList(ChapterNavigator::new(
                chapters,
                self.coordinator.progress().progress(),
            )));
        }
    }

    /// Select a chapter from the presented list
    ///
    /// Selection seeks; it does not dismiss the list. Dismissal only
    /// happens via [`close_chapter_list`](Self::close_chapter_list).
    pub fn select_chapter(&mut self, chapter: Chapter) {
        let Some(Destination::ChapterList(navigator)) = self.destination.as_mut() else {
            return;
        };

        match navigator.select(chapter) {
            ChapterEvent::Selected(chapter) => self.coordinator.seek_to(chapter.timecode),
            ChapterEvent::Closed => {}
        }
    }

    /// Dismiss the chapter list
    pub fn close_chapter_list(&mut self) {
        let Some(Destination::ChapterList(navigator)) = self.destination.as_ref() else {
            return;
        };

        match navigator.close() {
            ChapterEvent::Closed => self.destination = None,
            ChapterEvent::Selected(_) => {}
        }
    }

    /// Acknowledge and dismiss the presented alert
    pub fn dismiss_alert(&mut self) {
        if matches!(self.destination, Some(Destination::Alert { .. })) {
            self.destination = None;
        }
    }

    /// Fetch the product offering, routing failures to the alert slot
    pub async fn fetch_product(&mut self) {
        if let Err(err) = self.purchase.fetch_product().await {
            self.present_alert(err.message());
        }
    }

    /// Run the purchase flow, routing failures to the alert slot
    pub async fn purchase(&mut self) {
        if let Err(err) = self.purchase.purchase().await {
            self.present_alert(err.message());
        }
    }

    /// 1-based position of the currently playing chapter, if any
    pub fn current_chapter_index(&self) -> Option<usize> {
        let current = self.current_chapter()?;
        self.book
            .as_ref()?
            .chapters
            .iter()
            .position(|chapter| chapter.id == current.id)
            .map(|index| index + 1)
    }

    /// Title of the currently playing chapter, if any
    pub fn current_chapter_title(&self) -> Option<&str> {
        self.current_chapter().map(|chapter| chapter.title.as_str())
    }

    fn current_chapter(&self) -> Option<&Chapter> {
        let book = self.book.as_deref()?;
        let progress = self.coordinator.progress().progress();

        book.chapters
            .iter()
            .rev()
            .find(|chapter| chapter.timecode <= progress)
    }

    fn present_alert(&mut self, message: String) {
        warn!(message = %message, "presenting error alert");
        self.destination = Some(Destination::Alert { message });
    }

    /// The loaded book, if any
    pub fn book(&self) -> Option<&Arc<Book>> {
        self.book.as_ref()
    }

    /// The playback coordinator
    pub fn coordinator(&self) -> &PlaybackCoordinator {
        &self.coordinator
    }

    /// The purchase gate
    pub fn purchase_gate(&self) -> &PurchaseGate {
        &self.purchase
    }

    /// The presented destination, if any
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    /// Whether the book fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
