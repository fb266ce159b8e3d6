//! The shoe that cards are drawn from.

use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ConfigError;

/// A multiset of cards drawn uniformly at random.
///
/// The shoe is not a shuffled pack that is dealt from the top. Every draw
/// picks one of the remaining cards at random, and a shoe that runs out is
/// immediately refilled to a fresh `52 × decks` composition, so a draw never
/// fails.
///
/// The random source is a type parameter so that callers can inject their
/// own. Removal keeps the remaining cards in order, which means a source that
/// always yields zero draws the staged cards front to back.
#[derive(Debug, Clone)]
pub struct Shoe<R = ChaCha8Rng> {
    cards: Vec<Card>,
    decks: u8,
    rng: R,
}

impl Shoe {
    /// Creates a full shoe backed by a `ChaCha8` source seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::Shoe;
    ///
    /// let shoe = Shoe::new(6, 42).unwrap();
    /// assert_eq!(shoe.len(), 6 * 52);
    /// ```
    pub fn new(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(decks, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Shoe<R> {
    /// Creates a full shoe drawing with the given random source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn with_rng(decks: u8, rng: R) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }

        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            rng,
        };
        shoe.fill();
        Ok(shoe)
    }

    /// Refills the shoe with exactly four cards of each rank per deck.
    ///
    /// Any cards still in the shoe are discarded.
    pub fn fill(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.capacity());

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    if let Ok(card) = Card::new(suit, rank) {
                        self.cards.push(card);
                    }
                }
            }
        }
    }

    /// Draws one card at random.
    ///
    /// An empty shoe is refilled before drawing, and a shoe emptied by this
    /// draw is refilled straight away.
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.fill();
        }

        let index = self.rng.random_range(0..self.cards.len());
        let card = self.cards.remove(index);
        trace!(%card, remaining = self.cards.len(), "drew card");

        if self.cards.is_empty() {
            debug!(decks = self.decks, "shoe exhausted, refilling");
            self.fill();
        }

        card
    }

    /// Changes the number of decks and refills the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDecks`] if `decks` is zero.
    pub fn set_decks(&mut self, decks: u8) -> Result<(), ConfigError> {
        if decks == 0 {
            return Err(ConfigError::ZeroDecks);
        }

        self.decks = decks;
        self.fill();
        Ok(())
    }

    /// Replaces the remaining cards, e.g. to resume a saved shoe or to stage
    /// a known sequence.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the remaining cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    ///
    /// Only observable after [`Shoe::replace_cards`] with an empty list; draws
    /// always leave the shoe non-empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }
}

impl<R: RngCore + SeedableRng> Shoe<R> {
    /// Returns a copy of this shoe with the same remaining cards and a fresh
    /// random source seeded with `seed`.
    #[must_use]
    pub fn fork(&self, seed: u64) -> Self {
        Self {
            cards: self.cards.clone(),
            decks: self.decks,
            rng: R::seed_from_u64(seed),
        }
    }

    /// Reseeds the random source.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
