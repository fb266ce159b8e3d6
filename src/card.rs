//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in index order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit for an index in `0..=3` (hearts, diamonds, clubs, spades).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] for any other index.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Hearts),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Clubs),
            3 => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }

    fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        match symbol {
            "H" | "h" | "♥" => Ok(Self::Hearts),
            "D" | "d" | "♦" => Ok(Self::Diamonds),
            "C" | "c" | "♣" => Ok(Self::Clubs),
            "S" | "s" | "♠" => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;

/// A playing card.
///
/// Ranks run from 1 to 13 (1 = Ace, 11 = Jack, 12 = Queen, 13 = King) and are
/// validated on construction, so every `Card` in circulation is a real card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcore::{Card, Suit};
    ///
    /// let card = Card::new(Suit::Spades, 1).unwrap();
    /// assert_eq!(card.value(), 11);
    /// assert!(Card::new(Suit::Spades, 14).is_err());
    /// ```
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        match rank {
            1..=13 => Ok(Self { suit, rank }),
            _ => Err(CardError::InvalidRank),
        }
    }

    /// Creates a card from a rank symbol (`"2"`..`"10"`, `"J"`, `"Q"`, `"K"`,
    /// `"A"`) and a suit index in `0..=3`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`].
    pub fn from_parts(rank: &str, suit: u8) -> Result<Self, CardError> {
        let suit = Suit::from_index(suit)?;
        Self::new(suit, parse_rank(rank)?)
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Blackjack value of the card.
    ///
    /// Number cards count their number, face cards count 10 and an ace always
    /// counts 11 here. Softening an ace to 1 is the hand's job.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            ACE => 11,
            2..=10 => self.rank,
            _ => 10,
        }
    }

    /// The printed rank symbol.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        match self.rank {
            ACE => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

fn parse_rank(symbol: &str) -> Result<u8, CardError> {
    match symbol {
        "A" | "a" => Ok(ACE),
        "J" | "j" => Ok(11),
        "Q" | "q" => Ok(12),
        "K" | "k" => Ok(13),
        _ => match symbol.parse::<u8>() {
            Ok(rank @ 2..=10) => Ok(rank),
            _ => Err(CardError::InvalidRank),
        },
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}

/// Parses a rank symbol followed by a suit letter or glyph, e.g. `"10H"`,
/// `"A♠"` or `"qd"`.
impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s
            .char_indices()
            .last()
            .map(|(index, _)| index)
            .ok_or(CardError::InvalidRank)?;
        let (rank, suit) = s.split_at(split);
        let suit = Suit::from_symbol(suit)?;
        Self::new(suit, parse_rank(rank)?)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
