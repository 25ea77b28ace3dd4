//! Core types for the audiobook player

use serde::{Deserialize, Serialize};

/// A single audiobook with its chapter markers
///
/// Fetched once per session and immutable afterwards. The session root owns
/// the book and shares it with the playback coordinator and the chapter
/// navigator for the session's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier (equality key)
    pub id: u64,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// URL of the cover artwork
    pub artwork_url: String,

    /// URL of the audio media
    pub media_url: String,

    /// Total duration in seconds
    pub duration: f64,

    /// Chapter markers, ordered by timecode ascending
    ///
    /// The loader guarantees the ordering; nothing re-sorts.
    pub chapters: Vec<Chapter>,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

impl Book {
    /// Bundled sample book, served by the live client and used in tests
    pub fn sample() -> Self {
        Self {
            id: 1,
            title: "Нація".to_string(),
            author: "Марія Матіос".to_string(),
            artwork_url:
                "https://4read.org/uploads/posts/2020-09/medium/1599634013_marya-nacya.jpg"
                    .to_string(),
            media_url: "https://dfbx.info/ua/1297/01%20-%20Nacija01.mp3".to_string(),
            duration: 1800.0,
            chapters: vec![
                Chapter {
                    id: 1,
                    title: "Beginning".to_string(),
                    timecode: 0.0,
                },
                Chapter {
                    id: 2,
                    title: "Middle".to_string(),
                    timecode: 900.0,
                },
                Chapter {
                    id: 3,
                    title: "30 sec to end".to_string(),
                    timecode: 1770.0,
                },
            ],
        }
    }
}

/// A chapter marker within a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter identifier, unique within its book
    pub id: u64,

    /// Chapter title
    pub title: String,

    /// Start position in seconds, `0 <= timecode <= book.duration`
    pub timecode: f64,
}

/// A purchasable offering for the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store product identifier
    pub id: String,

    /// Human-readable product name
    pub display_name: String,

    /// Localized display price
    pub display_price: String,
}

/// Subscription state reported by the commerce service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    /// Active subscription
    Subscribed,

    /// Subscription lapsed
    Expired,

    /// Lapsed but still within the grace period
    InGracePeriod,

    /// Access revoked by the store
    Revoked,
}

/// A completed store transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Store transaction identifier
    pub id: u64,

    /// Product the transaction was made for
    pub product_id: String,
}

/// Commerce-layer verification result for a completed transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionVerification {
    /// Receipt validated cryptographically
    Verified(Transaction),

    /// Receipt failed validation; carries the failure reason
    Unverified(Transaction, String),
}

/// Outcome of a purchase attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOutcome {
    /// The purchase completed; verification result attached
    Success(TransactionVerification),

    /// The user dismissed the purchase flow
    UserCancelled,

    /// The purchase awaits external approval (e.g. family approval)
    Pending,
}

/// Snapshot published to the OS now-playing surface
///
/// Rebuilt and republished after every state change that affects displayed
/// metadata: progress, play state, speed, artwork.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// Author, shown as the artist line
    pub artist: String,

    /// Book title
    pub title: String,

    /// Total duration in seconds
    pub duration: f64,

    /// Elapsed playback time in seconds
    pub progress: f64,

    /// Effective playback rate: the selected speed while playing, 0 while paused
    pub rate: f64,

    /// Cover artwork bytes, once loaded
    pub artwork: Option<Vec<u8>>,
}

/// Transport command originating outside the app (lock-screen/headset controls)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemoteEvent {
    /// Remote play command
    Play,

    /// Remote pause command
    Pause,

    /// Skip backward (5 seconds)
    SeekBackward,

    /// Skip forward (10 seconds)
    SeekForward,

    /// Absolute scrub to a position in seconds
    SeekTo(f64),
}
