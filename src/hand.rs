//! Hand representation, scoring and result determination.

extern crate alloc;

use core::fmt;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{HandOutcome, ResultReason};

/// Scores `cards` in a single left-to-right pass.
///
/// Returns the total and whether an ace is still counted as 11. At most one
/// ace can be soft at a time since two of them would already make 22. Once a
/// hard total goes over 21 the pass stops and the busted total is returned.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut sum: u8 = 0;
    let mut is_soft = false;

    for card in cards {
        let mut value = card.value();

        if value == 11 {
            if sum + 11 > 21 {
                value = 1;
            } else {
                sum += 11;
                is_soft = true;
                continue;
            }
        }

        if sum + value > 21 {
            if is_soft {
                // The soft ace drops to 1; a ten-value card leaves the total unchanged.
                sum = sum + value - 10;
                is_soft = false;
            } else {
                return (sum + value, false);
            }
        } else {
            sum += value;
        }
    }

    (sum, is_soft)
}

/// A hand of cards with the multiplier of the base bet riding on it.
///
/// The same type is used for player hands and the dealer's hand; the dealer's
/// multiplier is simply never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// How many base bets this hand is worth.
    bet_multiplier: u32,
}

impl Hand {
    /// Creates a new empty hand worth one base bet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            bet_multiplier: 1,
        }
    }

    /// Creates a hand seeded with one card, as produced by a split.
    #[must_use]
    pub fn with_card(bet_multiplier: u32, card: Card) -> Self {
        Self {
            cards: alloc::vec![card],
            bet_multiplier,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes all cards and resets the multiplier.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.bet_multiplier = 1;
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card, which is the dealer's up card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty (not yet dealt).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the bet multiplier.
    #[must_use]
    pub const fn bet_multiplier(&self) -> u32 {
        self.bet_multiplier
    }

    /// Doubles the bet multiplier.
    pub const fn double_bet(&mut self) {
        self.bet_multiplier *= 2;
    }

    /// Signed score of the hand.
    ///
    /// Positive for hard hands, negative for soft hands (the magnitude is the
    /// total), 0 for an empty hand. A value above 21 is the total at which the
    /// hand busted.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Hand};
    ///
    /// let mut hand = Hand::new();
    /// for card in ["A♥", "A♣", "9♠"] {
    ///     hand.add_card(card.parse::<Card>().unwrap());
    /// }
    /// assert_eq!(hand.score(), -21);
    /// ```
    #[must_use]
    pub fn score(&self) -> i8 {
        let (sum, is_soft) = evaluate_cards(&self.cards);
        #[expect(
            clippy::cast_possible_wrap,
            reason = "a total never exceeds 32, one card past a hard 21"
        )]
        let sum = sum as i8;
        if is_soft { -sum } else { sum }
    }

    /// Score of the hand regardless of softness.
    #[must_use]
    pub fn score_only(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score_only() > 21
    }

    /// Returns whether the hand is a blackjack: two cards totalling 21.
    ///
    /// Split hands qualify too.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.score_only() == 21
    }

    /// Returns whether the hand is two cards of the same rank.
    #[must_use]
    pub fn is_splittable(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.rank() == second.rank())
    }

    /// Determines how this player hand fares against the dealer's hand.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Hand, HandOutcome};
    ///
    /// let hand = |cards: &[&str]| {
    ///     let mut hand = Hand::new();
    ///     for card in cards {
    ///         hand.add_card(card.parse::<Card>().unwrap());
    ///     }
    ///     hand
    /// };
    ///
    /// let player = hand(&["A♥", "K♠"]);
    /// let dealer = hand(&["9♣", "5♦", "7♥"]);
    /// assert_eq!(player.determine_result(&dealer), HandOutcome::Blackjack);
    /// ```
    #[must_use]
    pub fn determine_result(&self, dealer: &Self) -> HandOutcome {
        self.result_reason(dealer).outcome()
    }

    /// Determines why this player hand wins, loses or ties against the
    /// dealer's hand.
    #[must_use]
    pub fn result_reason(&self, dealer: &Self) -> ResultReason {
        let player_score = self.score_only();
        let dealer_score = dealer.score_only();

        if player_score == 0 || dealer_score == 0 {
            return ResultReason::NotDealt;
        }

        if player_score > 21 {
            ResultReason::Bust
        } else if dealer_score > 21 {
            ResultReason::DealerBust
        } else if player_score > dealer_score {
            if self.is_blackjack() {
                ResultReason::Blackjack
            } else {
                ResultReason::HigherTotal
            }
        } else if dealer_score > player_score {
            if dealer.is_blackjack() {
                ResultReason::DealerBlackjack
            } else {
                ResultReason::LowerTotal
            }
        } else if dealer_score == 21 {
            // Both have 21, so the card counts decide who holds a blackjack.
            if dealer.len() == self.len() {
                ResultReason::Push
            } else if dealer.len() == 2 {
                ResultReason::DealerBlackjack
            } else if self.len() == 2 {
                ResultReason::Blackjack
            } else {
                ResultReason::Push
            }
        } else {
            ResultReason::Push
        }
    }

    /// Renders the hand as the dealer's, hiding the hole card while the round
    /// is ongoing and the hand still has exactly two cards.
    #[must_use]
    pub const fn concealed(&self, round_ongoing: bool) -> ConcealedHand<'_> {
        ConcealedHand {
            hand: self,
            round_ongoing,
        }
    }

    fn write_cards(cards: &[Card], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows the total on the first line ("Blackjack", "Soft 17", "12") and the
/// cards on the second.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.score();
        if self.is_blackjack() {
            f.write_str("Blackjack")?;
        } else if score < 0 {
            write!(f, "Soft {}", -score)?;
        } else {
            write!(f, "{score}")?;
        }
        f.write_str("\n")?;
        Self::write_cards(&self.cards, f)
    }
}

/// Display adapter returned by [`Hand::concealed`].
#[derive(Debug, Clone, Copy)]
pub struct ConcealedHand<'a> {
    hand: &'a Hand,
    round_ongoing: bool,
}

impl ConcealedHand<'_> {
    /// Whether the hole card is hidden.
    #[must_use]
    pub fn is_concealed(&self) -> bool {
        self.round_ongoing && self.hand.len() == 2
    }

    /// The total a player is allowed to see.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.is_concealed() {
            self.hand.up_card().map_or(0, Card::value)
        } else {
            self.hand.score_only()
        }
    }
}

impl fmt::Display for ConcealedHand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hand.up_card() {
            Some(up_card) if self.is_concealed() => {
                write!(f, "{}\n{up_card} --", up_card.value())
            }
            _ => fmt::Display::fmt(self.hand, f),
        }
    }
}
