//! A casino blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs the round state machine
//! (dealing, hitting, standing, splitting, doubling down and dealer play)
//! over one or more player hands, and a [`Bankroll`] that pays for bets and
//! settles finished rounds. The dealer peeks for blackjack, draws to 16 and
//! stands on all 17s, and blackjack pays 3 to 2.
//!
//! # Example
//!
//! ```no_run
//! use bjcore::{Bankroll, Round, TableOptions};
//!
//! let mut round = Round::new(TableOptions::default().with_decks(6), 42).unwrap();
//! let mut bankroll = Bankroll::new(500);
//! bankroll.set_bet(10).unwrap();
//!
//! bankroll.deal(&mut round).unwrap();
//! while round.is_round_ongoing() {
//!     let total = round.current_hand().map_or(0, |hand| hand.score_only());
//!     if total < 17 {
//!         round.hit();
//!     } else {
//!         round.stand();
//!     }
//! }
//!
//! let result = bankroll.settle(&round).unwrap();
//! let _ = result.net;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod shoe;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{ACE, Card, DECK_SIZE, Suit};
pub use error::{BetError, CardError, ConfigError, SettleError};
pub use hand::{ConcealedHand, Hand};
pub use options::{RoundingMode, TableOptions};
pub use result::{HandOutcome, HandResult, ResultReason, RoundResult};
pub use round::{Round, RoundState};
pub use shoe::Shoe;
