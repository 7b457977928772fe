//! A chronology card game engine with optional `no_std` support.
//!
//! The player is shown pairs of artworks and judges whether the current one
//! was made before or after the reference one. The crate provides a [`Game`]
//! type that owns the shuffled deck, lives and score, plus the pieces a front
//! end needs around it: catalog loading with a built-in fallback, swipe and
//! key mapping, and (with `std`) a clock-driven [`Session`].
//!
//! # Example
//!
//! ```
//! use artswipe::{Catalog, Direction, Game, GameOptions};
//!
//! let catalog = Catalog::builtin();
//! let mut game = Game::from_catalog(GameOptions::default(), &catalog, 42);
//!
//! if let Some(ticket) = game.decide(Direction::After) {
//!     // Show feedback, wait for the settle delay, then:
//!     game.commit(ticket);
//! }
//! assert_eq!(game.attempts(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod artwork;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod game;
pub mod gesture;
pub mod haptics;
pub mod options;
pub mod result;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod session;

// Re-export main types
pub use artwork::{Artwork, MIN_ARTWORKS};
pub use catalog::{Catalog, CatalogSource};
pub use deck::Deck;
pub use error::{CatalogError, HapticsError};
pub use game::{
    Direction, Feedback, Game, GameOutcome, GamePhase, IgnoredReason, PendingCommit,
};
pub use gesture::{CardPose, Key, Release, SwipeAnimation, SwipeMapper};
pub use haptics::{Haptics, NoHaptics};
pub use options::{GameOptions, GestureOptions, MAX_LIVES};
pub use result::{CommitResult, GameSummary};
#[cfg(feature = "std")]
pub use session::{Input, Session, SessionEvent};
