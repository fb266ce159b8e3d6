//! Round engine and state management.

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::Card;
use crate::error::ConfigError;
use crate::hand::{ConcealedHand, Hand};
use crate::options::TableOptions;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

use state::Seat;
pub use state::RoundState;

/// A blackjack round: the shoe, the dealer's hand and the player's hands.
///
/// The player plays one or more hands against the dealer, one at a time, in
/// table order. [`Round::current_hand_index`] names the hand being played.
/// Hands finish on their own when they bust or reach 21, or explicitly through
/// [`Round::stand`] and [`Round::double_down`]. When the last hand finishes
/// the dealer plays out and the round is over.
///
/// Actions that do not apply to the current hand are ignored rather than
/// reported as errors, and leave the round untouched.
#[derive(Debug, Clone)]
pub struct Round<R = ChaCha8Rng> {
    /// Cards in the shoe.
    shoe: Shoe<R>,
    /// Dealer's hand.
    dealer_hand: Hand,
    /// Player hands in table order, split hands included.
    player_hands: Vec<Hand>,
    /// Number of hands dealt at the start of each round.
    num_hands: usize,
    /// Index of the hand being played.
    current_hand_index: usize,
    /// Current round state.
    state: RoundState,
}

impl Round {
    /// Creates a new table with a shoe seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for zero decks or zero hands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Round, TableOptions};
    ///
    /// let mut round = Round::new(TableOptions::default().with_hands(2), 42).unwrap();
    /// round.deal();
    /// assert_eq!(round.player_hands().len(), 2);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Round<R> {
    /// Creates a new table drawing with the given random source.
    ///
    /// # Errors
    ///
    /// Returns an error if the options ask for zero decks or zero hands.
    pub fn with_rng(options: TableOptions, rng: R) -> Result<Self, ConfigError> {
        options.validate()?;

        Ok(Self {
            shoe: Shoe::with_rng(options.decks, rng)?,
            dealer_hand: Hand::new(),
            player_hands: Vec::new(),
            num_hands: options.hands,
            current_hand_index: 0,
            state: RoundState::NotStarted,
        })
    }

    /// Draws one card into the hand at `seat`.
    ///
    /// With `check_for_resolution`, a hand that reaches 21 or more finishes
    /// the current hand straight away. This is how the dealer peeks for
    /// blackjack and how player busts and 21s end a turn without a stand.
    fn draw(&mut self, seat: Seat, check_for_resolution: bool) -> Option<Card> {
        let hand = match seat {
            Seat::Dealer => &mut self.dealer_hand,
            Seat::Player(index) => self.player_hands.get_mut(index)?,
        };

        let card = self.shoe.draw();
        hand.add_card(card);
        let score = hand.score_only();
        trace!(?seat, %card, score, "card dealt");

        if check_for_resolution && score >= 21 {
            self.resolve_hand();
        }

        Some(card)
    }

    /// Returns whether a round is being played.
    pub const fn is_round_ongoing(&self) -> bool {
        self.state.is_ongoing()
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the dealer's hand.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the dealer's hand for display, hiding the hole card while the
    /// round is ongoing.
    pub fn dealer_display(&self) -> ConcealedHand<'_> {
        self.dealer_hand.concealed(self.is_round_ongoing())
    }

    /// Returns the dealer total a player is allowed to see.
    pub fn dealer_visible_value(&self) -> u8 {
        self.dealer_display().visible_value()
    }

    /// Returns the player's hands.
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the index of the hand being played, or the last resolved hand
    /// once the round is over.
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand_index
    }

    /// Returns the hand at [`Round::current_hand_index`].
    pub fn current_hand(&self) -> Option<&Hand> {
        self.player_hands.get(self.current_hand_index)
    }

    /// Returns the number of hands dealt at the start of each round.
    pub const fn num_hands(&self) -> usize {
        self.num_hands
    }

    /// Returns the number of decks in the shoe.
    pub const fn decks(&self) -> u8 {
        self.shoe.decks()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn shoe_len(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the shoe.
    pub const fn shoe(&self) -> &Shoe<R> {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stage known cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe<R> {
        &mut self.shoe
    }

    /// Sets the number of decks and replaces the shoe with a full one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn set_num_of_decks(&mut self, decks: u8) -> Result<(), ConfigError> {
        self.shoe.set_decks(decks)?;
        debug!(decks, "shoe replaced");
        Ok(())
    }

    /// Sets the number of hands dealt from the next round on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroHands`] if `hands` is zero, or
    /// [`ConfigError::RoundInProgress`] while a round is ongoing.
    pub fn set_num_of_hands(&mut self, hands: usize) -> Result<(), ConfigError> {
        if hands == 0 {
            return Err(ConfigError::ZeroHands);
        }
        if self.is_round_ongoing() {
            return Err(ConfigError::RoundInProgress);
        }

        self.num_hands = hands;
        Ok(())
    }
}

impl<R: RngCore + SeedableRng> Round<R> {
    /// Returns a deep copy of the round whose shoe draws from a fresh source
    /// seeded with `seed`.
    ///
    /// Forks share no state with the original or with each other, so each
    /// one can play out a different continuation of the same position.
    #[must_use]
    pub fn fork(&self, seed: u64) -> Self {
        Self {
            shoe: self.shoe.fork(seed),
            dealer_hand: self.dealer_hand.clone(),
            player_hands: self.player_hands.clone(),
            num_hands: self.num_hands,
            current_hand_index: self.current_hand_index,
            state: self.state,
        }
    }
}
