//! Card types and deck utilities.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the one-letter suit code (`c`, `d`, `h`, `s`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }

    /// Returns the suit glyph used for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }

    /// Returns the hex colour used to render the suit.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Clubs => "#22c55e",
            Self::Diamonds => "#3b82f6",
            Self::Hearts => "#ef4444",
            Self::Spades => "#1f2937",
        }
    }

    /// Parses a suit code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Self::Clubs),
            'd' => Some(Self::Diamonds),
            'h' => Some(Self::Hearts),
            's' => Some(Self::Spades),
            _ => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank, ordered deuce low to ace high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Deuce.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks from deuce to ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the rank index (0 = deuce, 12 = ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for an index in `0..=12`.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value < 13 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Returns the one-character rank code (`2`..`9`, `T`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Parses a rank code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.code() == code)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank index of the card (0 = deuce, 12 = ace).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank), Some(suit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardError::InvalidLength(s.chars().count()));
        };

        let rank = Rank::from_code(rank).ok_or(CardError::InvalidRank(rank))?;
        let suit = Suit::from_code(suit).ok_or(CardError::InvalidSuit(suit))?;
        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Parses a two-character card code such as `"Ah"` or `"Tc"`.
///
/// # Errors
///
/// Returns an error if the code is not exactly one rank character followed
/// by one suit character.
///
/// # Example
///
/// ```
/// use diamond_arcade::{Rank, Suit, parse_card};
///
/// let card = parse_card("Kd").unwrap();
/// assert_eq!(card.rank, Rank::King);
/// assert_eq!(card.suit, Suit::Diamonds);
/// assert_eq!(card.value(), 11);
/// ```
pub fn parse_card(code: &str) -> Result<Card, CardError> {
    code.parse()
}

/// Parses a whitespace-separated list of card codes.
///
/// # Errors
///
/// Returns the first card parse error.
pub fn parse_cards(codes: &str) -> Result<Vec<Card>, CardError> {
    codes.split_whitespace().map(parse_card).collect()
}

/// Returns a fresh 52-card deck in canonical order (rank-major, suit-minor).
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Returns a shuffled copy of `deck`, leaving the input untouched.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &[Card], rng: &mut R) -> Vec<Card> {
    let mut cards = deck.to_vec();
    cards.shuffle(rng);
    cards
}

/// Display data for rendering a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardFace {
    /// Rank character followed by the suit glyph, e.g. `A♥`.
    pub display: String,
    /// Hex colour of the suit.
    pub color: &'static str,
}

/// Returns the display glyph and colour for a card.
#[must_use]
pub fn format_card(card: Card) -> CardFace {
    let mut display = String::with_capacity(4);
    display.push(card.rank.code());
    display.push(card.suit.symbol());

    CardFace {
        display,
        color: card.suit.color(),
    }
}
