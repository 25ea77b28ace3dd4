//! Tome Player Core
//!
//! Platform-agnostic core types, client traits, and error handling for
//! Tome Player.
//!
//! This crate provides the foundational building blocks used by the
//! playback state machine and by platform integrations:
//! - **Domain Types**: [`Book`], [`Chapter`], [`Product`], [`NowPlaying`]
//! - **Client Traits**: [`BookClient`], [`PlayerClient`], [`StoreClient`]
//! - **Error Handling**: [`NetworkError`], [`PlaybackError`], [`PurchaseError`]
//! - **Display Helpers**: timecode formatting for elapsed/remaining labels
//!
//! # Example
//!
//! ```rust
//! use tome_core::types::Book;
//! use tome_core::timecode::display_timecode;
//!
//! let book = Book::sample();
//! assert_eq!(book.chapters.len(), 3);
//!
//! // Half an hour reads as MM:SS, no hour segment
//! assert_eq!(display_timecode(book.duration), "30:00");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clients;
pub mod error;
pub mod timecode;
pub mod types;

// Re-export commonly used items
pub use clients::{BookClient, PlayerClient, StoreClient};
pub use error::{NetworkError, PlaybackError, PurchaseError, StoreError};
pub use types::{
    Book, Chapter, NowPlaying, Product, PurchaseOutcome, RemoteEvent, SubscriptionStatus,
    Transaction, TransactionVerification,
};
