//! Error types for engine and bankroll operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of the thirteen card ranks.
    #[error("invalid rank, expected 2-10, J, Q, K or A")]
    InvalidRank,
    /// Suit index is out of range.
    #[error("suit is out of bounds, expected 0-3 for hearts, diamonds, clubs and spades")]
    InvalidSuit,
}

/// Errors that can occur when configuring the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Zero decks requested.
    #[error("the number of decks must be at least 1")]
    ZeroDecks,
    /// Zero hands requested.
    #[error("the number of hands must be at least 1")]
    ZeroHands,
    /// The change is not allowed while a round is in progress.
    #[error("cannot change the table while a round is in progress")]
    RoundInProgress,
}

/// Errors that can occur when placing or paying bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The round does not allow this action right now.
    #[error("the current hand is not eligible for this action")]
    NotEligible,
}

/// Errors that can occur when settling a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The round is still being played.
    #[error("the round is still in progress")]
    RoundInProgress,
    /// No round has been dealt yet.
    #[error("no round has been dealt")]
    NotDealt,
    /// The round was not paid for through the bankroll.
    #[error("no bet was paid for this round")]
    NoBet,
    /// The round has already been settled.
    #[error("the round has already been settled")]
    AlreadySettled,
}
