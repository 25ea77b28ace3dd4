//! Tome Player - Playback Session Management
//!
//! Platform-agnostic playback session state machine for a single audiobook.
//!
//! This crate provides:
//! - Progress tracking with range-guarded seeks and display timecodes
//! - Playback speed cycling (x0.5 / x1 / x2)
//! - Transport state and skip intents
//! - Player/chapter-list mode switching
//! - Chapter navigation over an ordered chapter list
//! - Purchase/subscription gating
//! - A session root that wires everything together and routes errors to a
//!   single alert destination
//!
//! # Architecture
//!
//! `tome-playback` is completely platform-agnostic: the network client, the
//! media engine, and the store service are injected behind the traits in
//! `tome-core`. State lives in a tree owned by [`BookSession`]; every
//! transition runs against `&mut self`, so transitions are serialized and
//! suspension only happens inside the injected client calls. Asynchronous
//! results (fetch responses, purchase outcomes) commit as one atomic
//! transition when the call returns; the driver forwards the engine's
//! periodic time callback and OS remote-control events the same way, one
//! event at a time.
//!
//! # Example: Leaf Slices
//!
//! ```rust
//! use tome_playback::{ProgressTracker, SpeedControl, Speed};
//!
//! let mut progress = ProgressTracker::new(1800.0);
//! assert!(progress.set_progress(930.0));
//! assert_eq!(progress.elapsed(), "15:30");
//! assert_eq!(progress.remaining(), "14:30");
//!
//! // Out-of-range requests are dropped, not clamped
//! assert!(!progress.set_progress(2000.0));
//! assert_eq!(progress.progress(), 930.0);
//!
//! let mut speed = SpeedControl::default();
//! speed.advance();
//! assert_eq!(speed.speed(), Speed::Double);
//! ```
//!
//! # Example: Session Wiring
//!
//! ```ignore
//! use std::sync::Arc;
//! use tome_playback::BookSession;
//!
//! // book_client / player / store implement the tome-core client traits
//! let mut session = BookSession::new(book_client, player, store);
//!
//! session.fetch_book().await;          // load + attach the book
//! session.toggle_play_pause();         // start playback
//! session.report_progress(12.5);       // driver forwards periodic ticks
//! session.fetch_product().await;       // offering + subscription check
//! ```

mod chapters;
mod coordinator;
mod mode;
mod progress;
mod purchase;
mod session;
mod speed;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

// Public exports
pub use chapters::{ChapterEvent, ChapterNavigator};
pub use coordinator::PlaybackCoordinator;
pub use mode::{ModeSwitcher, PlayerMode};
pub use progress::ProgressTracker;
pub use purchase::{PurchaseGate, SUBSCRIPTION_PRODUCT_ID};
pub use session::{BookSession, Destination};
pub use speed::{Speed, SpeedControl};
pub use transport::{TransportControl, TransportIntent};
