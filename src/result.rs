//! Hand outcomes and round settlement records.

use core::fmt;

use alloc::vec::Vec;

/// Result of a single player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player wins with a blackjack.
    Blackjack,
    /// Push (tie).
    Push,
}

impl HandOutcome {
    /// Whether the outcome returns anything to the player.
    #[must_use]
    pub const fn is_favorable(self) -> bool {
        !matches!(self, Self::Lose)
    }
}

/// Why a hand ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultReason {
    /// The player went over 21.
    Bust,
    /// The dealer went over 21.
    DealerBust,
    /// The player won with a blackjack.
    Blackjack,
    /// The player had the higher total.
    HigherTotal,
    /// The dealer won with a blackjack.
    DealerBlackjack,
    /// The dealer had the higher total.
    LowerTotal,
    /// Equal totals.
    Push,
    /// One of the hands was never dealt.
    NotDealt,
}

impl ResultReason {
    /// The outcome this reason leads to.
    #[must_use]
    pub const fn outcome(self) -> HandOutcome {
        match self {
            Self::Bust | Self::DealerBlackjack | Self::LowerTotal | Self::NotDealt => {
                HandOutcome::Lose
            }
            Self::DealerBust | Self::HigherTotal => HandOutcome::Win,
            Self::Blackjack => HandOutcome::Blackjack,
            Self::Push => HandOutcome::Push,
        }
    }
}

impl fmt::Display for ResultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bust => "Bust! You lost.",
            Self::DealerBust => "Dealer bust! You won!",
            Self::Blackjack => "Blackjack! You won!",
            Self::HigherTotal => "You won!",
            Self::DealerBlackjack => "Dealer blackjack! You lost.",
            Self::LowerTotal => "The dealer won.",
            Self::Push => "Push! You tied.",
            Self::NotDealt => "Hand was not dealt.",
        })
    }
}

/// Settlement of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Position of the hand in the round (split hands included).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// Why the hand ended that way.
    pub reason: ResultReason,
    /// The hand's bet multiplier.
    pub multiplier: u32,
    /// Amount staked on this hand (`multiplier × bet`).
    pub stake: usize,
    /// Amount credited back to the bankroll, stake included.
    pub payout: usize,
    /// The player's final total.
    pub player_value: u8,
}

/// Settlement of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player hand, in table order.
    pub hands: Vec<HandResult>,
    /// The dealer's final total.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Total credited to the bankroll.
    pub total_payout: usize,
    /// Total staked across all hands.
    pub total_stake: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}
