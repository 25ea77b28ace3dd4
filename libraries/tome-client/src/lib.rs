//! Tome Player - HTTP Book Client
//!
//! Live [`tome_core::BookClient`] implementation backed by reqwest.
//!
//! The client serves the bundled sample book unless a book metadata URL is
//! configured, and fetches cover artwork over HTTP with the referer header
//! the artwork host expects.
//!
//! # Example
//!
//! ```ignore
//! use tome_client::{BookClientConfig, HttpBookClient};
//!
//! let client = HttpBookClient::new(BookClientConfig::default())?;
//! let book = client.fetch().await?;
//! let artwork = client.fetch_artwork(&book.artwork_url).await?;
//! ```

mod client;

pub use client::{BookClientConfig, HttpBookClient};

/// Result type for client operations
pub type Result<T> = std::result::Result<T, tome_core::NetworkError>;
