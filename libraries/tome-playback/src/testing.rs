//! Fake clients for exercising the state machine in tests
//!
//! Each fake records the commands it receives behind a mutex so tests can
//! assert on the exact call sequence, and exposes its failure knobs as
//! plain fields.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use tome_core::clients::{BookClient, PlayerClient, StoreClient};
use tome_core::error::{NetworkError, PlaybackError, StoreError};
use tome_core::types::{
    Book, NowPlaying, Product, PurchaseOutcome, SubscriptionStatus, Transaction,
};

use crate::purchase::SUBSCRIPTION_PRODUCT_ID;

/// A command issued to the fake player engine
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlayerCall {
    CreateSession(String),
    Play,
    Pause,
    SeekTo(f64),
    SetSpeed(f64),
    UpdateNowPlaying(NowPlaying),
}

/// Recording fake of the player engine
#[derive(Default)]
pub(crate) struct FakePlayer {
    pub calls: Mutex<Vec<PlayerCall>>,
    pub play_error: Mutex<Option<PlaybackError>>,
    playing: Mutex<bool>,
}

impl FakePlayer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// The most recently published now-playing snapshot
    pub fn last_now_playing(&self) -> Option<NowPlaying> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|call| match call {
                PlayerCall::UpdateNowPlaying(info) => Some(info.clone()),
                _ => None,
            })
    }
}

impl PlayerClient for FakePlayer {
    fn create_session(&self, url: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(PlayerCall::CreateSession(url.to_string()));
    }

    fn play(&self) -> Result<(), PlaybackError> {
        self.calls.lock().unwrap().push(PlayerCall::Play);
        if let Some(err) = self.play_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.playing.lock().unwrap() = true;
        Ok(())
    }

    fn pause(&self) {
        self.calls.lock().unwrap().push(PlayerCall::Pause);
        *self.playing.lock().unwrap() = false;
    }

    fn seek_to(&self, seconds: f64) {
        self.calls.lock().unwrap().push(PlayerCall::SeekTo(seconds));
    }

    fn set_speed(&self, rate: f64) {
        self.calls.lock().unwrap().push(PlayerCall::SetSpeed(rate));
    }

    fn is_playing(&self) -> bool {
        *self.playing.lock().unwrap()
    }

    fn update_now_playing(&self, info: &NowPlaying) {
        self.calls
            .lock()
            .unwrap()
            .push(PlayerCall::UpdateNowPlaying(info.clone()));
    }
}

/// Recording fake of the book/artwork network client
pub(crate) struct FakeBookClient {
    pub book: Mutex<Book>,
    pub fetch_error: Mutex<Option<NetworkError>>,
    pub artwork: Mutex<Option<Vec<u8>>>,
    pub artwork_error: Mutex<Option<NetworkError>>,
    artwork_requests: AtomicUsize,
}

impl FakeBookClient {
    /// Serves the sample book with no artwork
    pub fn sample() -> Arc<Self> {
        Arc::new(Self {
            book: Mutex::new(Book::sample()),
            fetch_error: Mutex::new(None),
            artwork: Mutex::new(None),
            artwork_error: Mutex::new(None),
            artwork_requests: AtomicUsize::new(0),
        })
    }

    /// Serves the sample book and the given artwork bytes
    pub fn with_artwork(bytes: Vec<u8>) -> Arc<Self> {
        let client = Self::sample();
        *client.artwork.lock().unwrap() = Some(bytes);
        client
    }

    /// Serves the sample book but fails every artwork fetch
    pub fn with_failing_artwork() -> Arc<Self> {
        let client = Self::sample();
        *client.artwork_error.lock().unwrap() =
            Some(NetworkError::HttpError(404, "no artwork".to_string()));
        client
    }

    /// How many artwork fetches were issued
    pub fn artwork_requests(&self) -> usize {
        self.artwork_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookClient for FakeBookClient {
    async fn fetch(&self) -> Result<Book, NetworkError> {
        if let Some(err) = self.fetch_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.book.lock().unwrap().clone())
    }

    async fn fetch_artwork(&self, _url: &str) -> Result<Option<Vec<u8>>, NetworkError> {
        self.artwork_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.artwork_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.artwork.lock().unwrap().clone())
    }
}

/// Recording fake of the store/subscription service
#[derive(Default)]
pub(crate) struct FakeStore {
    pub product: Mutex<Option<Product>>,
    pub fetch_error: Mutex<Option<StoreError>>,
    pub status: Mutex<Option<SubscriptionStatus>>,
    pub status_error: Mutex<Option<StoreError>>,
    pub outcome: Mutex<Option<PurchaseOutcome>>,
    pub purchase_error: Mutex<Option<StoreError>>,
    pub finished: Mutex<Vec<Transaction>>,
    status_call_count: AtomicUsize,
    purchase_call_count: AtomicUsize,
}

impl FakeStore {
    /// A store with no offering at all
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A store offering the one-year plan with the given subscription status
    pub fn with_status(status: SubscriptionStatus) -> Arc<Self> {
        let store = Self::empty();
        *store.product.lock().unwrap() = Some(Product {
            id: SUBSCRIPTION_PRODUCT_ID.to_string(),
            display_name: "One Year".to_string(),
            display_price: "$14.99".to_string(),
        });
        *store.status.lock().unwrap() = Some(status);
        store
    }

    /// A store offering the one-year plan with an active subscription
    pub fn subscribed() -> Arc<Self> {
        Self::with_status(SubscriptionStatus::Subscribed)
    }

    /// How many status checks were issued
    pub fn status_calls(&self) -> usize {
        self.status_call_count.load(Ordering::SeqCst)
    }

    /// How many purchase flows were started
    pub fn purchase_calls(&self) -> usize {
        self.purchase_call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreClient for FakeStore {
    async fn fetch_product(&self, _product_id: &str) -> Result<Option<Product>, StoreError> {
        if let Some(err) = self.fetch_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.product.lock().unwrap().clone())
    }

    async fn purchase(&self, _product: &Product) -> Result<PurchaseOutcome, StoreError> {
        self.purchase_call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.purchase_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self
            .outcome
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(PurchaseOutcome::UserCancelled))
    }

    async fn check_subscription_status(
        &self,
        _product: &Product,
    ) -> Result<Option<SubscriptionStatus>, StoreError> {
        self.status_call_count.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.status_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(*self.status.lock().unwrap())
    }

    async fn finish(&self, transaction: &Transaction) {
        self.finished.lock().unwrap().push(transaction.clone());
    }
}
