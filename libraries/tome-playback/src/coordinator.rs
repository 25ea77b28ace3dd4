//! Playback coordination
//!
//! The composite slice that owns the attached book, the artwork bytes, and
//! the four leaf slices (progress, speed, transport, mode). It is the only
//! component that issues commands to the player engine, reconciles the
//! engine's periodic progress callbacks, and republishes the now-playing
//! snapshot after every change that affects displayed metadata.

use std::sync::Arc;

use tracing::{debug, warn};

use tome_core::clients::{BookClient, PlayerClient};
use tome_core::error::PlaybackError;
use tome_core::types::{Book, NowPlaying, RemoteEvent};

use crate::mode::{ModeSwitcher, PlayerMode};
use crate::progress::ProgressTracker;
use crate::speed::SpeedControl;
use crate::transport::{TransportControl, TransportIntent};

/// Skip interval for the backward transport button, in seconds
const SKIP_BACKWARD_SECONDS: f64 = 5.0;

/// Skip interval for the forward transport button, in seconds
const SKIP_FORWARD_SECONDS: f64 = 10.0;

/// Owner of the playback state tree and of the player engine
pub struct PlaybackCoordinator {
    player: Arc<dyn PlayerClient>,
    book_client: Arc<dyn BookClient>,

    book: Option<Arc<Book>>,
    artwork: Option<Vec<u8>>,

    progress: ProgressTracker,
    speed: SpeedControl,
    transport: TransportControl,
    mode: ModeSwitcher,
}

impl PlaybackCoordinator {
    /// Create a coordinator over the injected player engine and book client
    pub fn new(player: Arc<dyn PlayerClient>, book_client: Arc<dyn BookClient>) -> Self {
        Self {
            player,
            book_client,
            book: None,
            artwork: None,
            progress: ProgressTracker::default(),
            speed: SpeedControl::default(),
            transport: TransportControl::default(),
            mode: ModeSwitcher::default(),
        }
    }

    /// Attach a book: set the duration, create the player session for its
    /// media URL, publish initial metadata, then load the artwork
    pub async fn attach(&mut self, book: Arc<Book>) {
        debug!(book = book.id, "attaching book");
        self.progress = ProgressTracker::new(book.duration);
        self.player.create_session(&book.media_url);
        self.book = Some(book);
        self.publish_now_playing();
        self.load_artwork().await;
    }

    /// Seek to an absolute position
    ///
    /// Out-of-range targets are dropped by the progress guard. An accepted
    /// seek is reflected locally right away instead of waiting for the
    /// engine's next periodic callback.
    pub fn seek_to(&mut self, seconds: f64) {
        if !self.progress.set_progress(seconds) {
            return;
        }

        self.player.seek_to(seconds);
        self.publish_now_playing();
    }

    /// Apply a periodic progress callback from the player engine
    pub fn report_progress(&mut self, seconds: f64) {
        if self.progress.set_progress(seconds) {
            self.publish_now_playing();
        }
    }

    /// Toggle between playing and paused
    ///
    /// A failed play may mean stale player state: the session is torn down
    /// and recreated for the current book before the error is surfaced.
    /// Playback is not retried automatically.
    pub fn toggle_play_pause(&mut self) -> Result<(), PlaybackError> {
        if self.transport.is_now_playing() {
            self.player.pause();
            self.transport.set_playing(false);
            self.publish_now_playing();
            return Ok(());
        }

        match self.player.play() {
            Ok(()) => {
                self.transport.set_playing(true);
                self.publish_now_playing();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "play failed, recreating player session");
                if let Some(book) = &self.book {
                    self.player.create_session(&book.media_url);
                }
                Err(err)
            }
        }
    }

    /// Translate a transport skip intent into an absolute seek
    pub fn handle_intent(&mut self, intent: TransportIntent) {
        let target = match intent {
            TransportIntent::SkipToStart => 0.0,
            TransportIntent::SkipToEnd => self.progress.duration(),
            TransportIntent::Back5 => (self.progress.progress() - SKIP_BACKWARD_SECONDS).max(0.0),
            TransportIntent::Forward10 => {
                (self.progress.progress() + SKIP_FORWARD_SECONDS).min(self.progress.duration())
            }
        };

        self.seek_to(target);
    }

    /// Map an OS remote-control event onto the transport operations
    ///
    /// Remote play and pause both route through the toggle, mirroring the
    /// lock-screen behavior the app ships with.
    pub fn on_remote_event(&mut self, event: RemoteEvent) -> Result<(), PlaybackError> {
        match event {
            RemoteEvent::Play | RemoteEvent::Pause => self.toggle_play_pause(),
            RemoteEvent::SeekBackward => {
                self.handle_intent(TransportIntent::Back5);
                Ok(())
            }
            RemoteEvent::SeekForward => {
                self.handle_intent(TransportIntent::Forward10);
                Ok(())
            }
            RemoteEvent::SeekTo(seconds) => {
                self.seek_to(seconds);
                Ok(())
            }
        }
    }

    /// Handle the engine's end-of-media signal: rewind and stop
    pub fn on_finish_playing(&mut self) {
        self.transport.set_playing(false);
        self.player.pause();
        self.player.seek_to(0.0);
        self.progress.set_progress(0.0);
        self.publish_now_playing();
    }

    /// Advance the playback speed cycle and apply it to the engine
    pub fn advance_speed(&mut self) {
        self.speed.advance();
        self.player.set_speed(self.speed.rate());
        self.publish_now_playing();
    }

    /// Switch the auxiliary view mode
    pub fn switch_mode(&mut self, mode: PlayerMode) {
        self.mode.switch_to(mode);
    }

    /// Load the cover artwork, once per session
    ///
    /// Artwork is best-effort: a failed fetch leaves it unset and playback
    /// continues, no error is surfaced.
    pub async fn load_artwork(&mut self) {
        if self.artwork.is_some() {
            return;
        }
        let Some(book) = self.book.clone() else {
            return;
        };

        match self.book_client.fetch_artwork(&book.artwork_url).await {
            Ok(Some(bytes)) => {
                debug!(bytes = bytes.len(), "artwork loaded");
                self.artwork = Some(bytes);
                self.publish_now_playing();
            }
            Ok(None) => {}
            Err(err) => {
                debug!(error = %err, "artwork fetch failed, continuing without artwork");
            }
        }
    }

    /// Rebuild and publish the now-playing snapshot
    ///
    /// The published rate is the selected speed while playing and 0 while
    /// paused, so the lock screen scrubber stands still when the app does.
    fn publish_now_playing(&self) {
        let Some(book) = &self.book else {
            return;
        };

        let rate = if self.transport.is_now_playing() {
            self.speed.rate()
        } else {
            0.0
        };

        self.player.update_now_playing(&NowPlaying {
            artist: book.author.clone(),
            title: book.title.clone(),
            duration: self.progress.duration(),
            progress: self.progress.progress(),
            rate,
            artwork: self.artwork.clone(),
        });
    }

    /// The attached book, if any
    pub fn book(&self) -> Option<&Arc<Book>> {
        self.book.as_ref()
    }

    /// Cover artwork bytes, once loaded
    pub fn artwork(&self) -> Option<&[u8]> {
        self.artwork.as_deref()
    }

    /// Progress slice
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Speed slice
    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    /// Transport slice
    pub fn transport(&self) -> &TransportControl {
        &self.transport
    }

    /// Mode slice
    pub fn mode(&self) -> &ModeSwitcher {
        &self.mode
    }
}
