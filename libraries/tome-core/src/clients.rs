//! Client traits for external collaborators
//!
//! The playback state machine consumes three injected capabilities: the
//! network client that fetches the book and its artwork, the media player
//! engine, and the store/subscription service. All three are modeled as
//! traits so the state machine can be exercised against fakes in tests
//! instead of process-wide singletons.

use crate::error::{NetworkError, PlaybackError, StoreError};
use crate::types::{Book, NowPlaying, Product, PurchaseOutcome, SubscriptionStatus, Transaction};
use async_trait::async_trait;

/// Network client for book metadata and artwork
#[async_trait]
pub trait BookClient: Send + Sync {
    /// Fetch the book for this session
    async fn fetch(&self) -> Result<Book, NetworkError>;

    /// Fetch the cover artwork bytes
    ///
    /// Returns `Ok(None)` when the server has no artwork for the URL.
    async fn fetch_artwork(&self, url: &str) -> Result<Option<Vec<u8>>, NetworkError>;
}

/// Media playback engine
///
/// Commands are fire-and-forget except [`play`](PlayerClient::play), which
/// fails when the media is not ready. The engine's periodic time callback
/// (~every 0.5 s while attached) and the OS remote-control events are driver
/// concerns; the driver delivers them into the state machine one at a time.
pub trait PlayerClient: Send + Sync {
    /// Create (or replace) the playback session for a media URL
    fn create_session(&self, url: &str);

    /// Start playback
    fn play(&self) -> Result<(), PlaybackError>;

    /// Pause playback
    fn pause(&self);

    /// Seek to an absolute position in seconds
    fn seek_to(&self, seconds: f64);

    /// Set the playback rate
    fn set_speed(&self, rate: f64);

    /// Whether the engine is currently rendering audio
    fn is_playing(&self) -> bool;

    /// Publish a now-playing snapshot to the OS media-info surface
    fn update_now_playing(&self, info: &NowPlaying);
}

/// Store/subscription service
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Fetch the product offering, `Ok(None)` when the store has no such product
    async fn fetch_product(&self, product_id: &str) -> Result<Option<Product>, StoreError>;

    /// Run the purchase flow for a product
    async fn purchase(&self, product: &Product) -> Result<PurchaseOutcome, StoreError>;

    /// Query the subscription status for a product
    ///
    /// `Ok(None)` means the product carries no subscription information.
    async fn check_subscription_status(
        &self,
        product: &Product,
    ) -> Result<Option<SubscriptionStatus>, StoreError>;

    /// Finalize a verified transaction with the store
    async fn finish(&self, transaction: &Transaction);
}
