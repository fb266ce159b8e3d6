//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// No round has been dealt yet.
    #[default]
    NotStarted,
    /// Player hands are being played.
    Ongoing,
    /// The round has ended and can be settled.
    Over,
}

impl RoundState {
    /// Whether player actions are accepted.
    #[must_use]
    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Ongoing)
    }
}

/// Where a drawn card goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Seat {
    /// The dealer's hand.
    Dealer,
    /// The player hand at this index.
    Player(usize),
}
