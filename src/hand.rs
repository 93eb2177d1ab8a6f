//! Poker hand evaluation over 5 to 7 cards.
//!
//! The evaluator classifies the best five-card category from rank and suit
//! tallies instead of enumerating every five-card combination. Each category
//! owns a band of numeric values (1000s for high card up to 10000 for a royal
//! flush); `value` orders hands across and within categories, and `kickers`
//! settle what `value` leaves open.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::card::{Card, Rank};
use crate::error::HandError;

/// A-2-3-4-5 as a rank bitmask.
const WHEEL: u16 = 0b1_0000_0000_1111;
/// Five consecutive rank bits.
const RUN: u16 = 0b1_1111;
const ROYAL_FLUSH_VALUE: u32 = 10_000;

/// Hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HandRank {
    /// No made hand.
    HighCard,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Straight in one suit.
    StraightFlush,
    /// Ace-high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns the display name, e.g. `"Three of a Kind"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }

    /// Returns the kebab-case code, e.g. `"three-of-a-kind"`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::HighCard => "high-card",
            Self::Pair => "pair",
            Self::TwoPair => "two-pair",
            Self::ThreeOfAKind => "three-of-a-kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full-house",
            Self::FourOfAKind => "four-of-a-kind",
            Self::StraightFlush => "straight-flush",
            Self::RoyalFlush => "royal-flush",
        }
    }

    /// Returns the lowest value of the category's band (1000 for high card,
    /// 10000 for royal flush).
    #[must_use]
    pub const fn base_value(self) -> u32 {
        (self as u32 + 1) * 1000
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five-card hand found in a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedHand {
    /// The hand category.
    pub rank: HandRank,
    /// Category band plus the ranks that define the hand.
    pub value: u32,
    /// Tie-breaking rank values, highest first.
    pub kickers: Vec<u8>,
}

impl EvaluatedHand {
    fn new(rank: HandRank, offset: u32, kickers: Vec<u8>) -> Self {
        Self {
            rank,
            value: rank.base_value() + offset,
            kickers,
        }
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value).then_with(|| {
            let len = self.kickers.len().max(other.kickers.len());
            (0..len)
                .map(|i| {
                    let mine = self.kickers.get(i).copied().unwrap_or(0);
                    let theirs = other.kickers.get(i).copied().unwrap_or(0);
                    mine.cmp(&theirs)
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank and suit tallies for a set of cards.
struct Tally {
    counts: [u8; 13],
    suits: [u16; 4],
    present: u16,
}

impl Tally {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0; 13];
        let mut suits = [0; 4];
        let mut present = 0;

        for card in cards {
            let value = card.value();
            counts[value as usize] += 1;
            suits[card.suit.index()] |= 1 << value;
            present |= 1 << value;
        }

        Self {
            counts,
            suits,
            present,
        }
    }

    /// Ranks held exactly `n` times, highest first.
    fn with_count(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        (0..13u8).rev().filter(move |&v| self.counts[v as usize] == n)
    }

    /// The `take` highest ranks present, skipping `skip`.
    fn remaining(&self, skip: &[u8], take: usize) -> Vec<u8> {
        descending(self.present)
            .filter(|v| !skip.contains(v))
            .take(take)
            .collect()
    }
}

/// Rank values set in `mask`, highest first.
fn descending(mask: u16) -> impl Iterator<Item = u8> {
    (0..13u8).rev().filter(move |v| mask & (1 << v) != 0)
}

/// High card of the best straight in a rank mask; the wheel plays five-high.
fn straight_high(mask: u16) -> Option<u8> {
    (4..13u8)
        .rev()
        .find(|&high| {
            let run = RUN << (high - 4);
            mask & run == run
        })
        .or_else(|| (mask & WHEEL == WHEEL).then_some(Rank::Five.value()))
}

/// Classifies the best five-card hand in `cards`.
///
/// Accepts any number of cards; callers holding hole cards and a board
/// should prefer [`evaluate_hand`], which validates sizes and duplicates.
#[must_use]
pub fn evaluate(cards: &[Card]) -> EvaluatedHand {
    let tally = Tally::new(cards);
    let flush = tally.suits.iter().copied().find(|mask| mask.count_ones() >= 5);

    if let Some(high) = flush.and_then(straight_high) {
        if high == Rank::Ace.value() {
            return EvaluatedHand {
                rank: HandRank::RoyalFlush,
                value: ROYAL_FLUSH_VALUE,
                kickers: Vec::new(),
            };
        }
        return EvaluatedHand::new(HandRank::StraightFlush, u32::from(high), Vec::new());
    }

    if let Some(quad) = tally.with_count(4).next() {
        let kickers = tally.remaining(&[quad], 1);
        let kicker = kickers.first().copied().unwrap_or(0);
        let offset = u32::from(quad) * 13 + u32::from(kicker);
        return EvaluatedHand::new(HandRank::FourOfAKind, offset, kickers);
    }

    let trips: Vec<u8> = tally.with_count(3).collect();
    let pairs: Vec<u8> = tally.with_count(2).collect();

    if let Some(&high) = trips.first() {
        // A second set of trips plays as the pair.
        let pair = trips.get(1).copied().into_iter().chain(pairs.first().copied()).max();
        if let Some(pair) = pair {
            let offset = u32::from(high) * 13 + u32::from(pair);
            return EvaluatedHand::new(HandRank::FullHouse, offset, Vec::new());
        }
    }

    if let Some(mask) = flush {
        let top: Vec<u8> = descending(mask).take(5).collect();
        let high = top.first().copied().unwrap_or(0);
        return EvaluatedHand::new(HandRank::Flush, u32::from(high), top);
    }

    if let Some(high) = straight_high(tally.present) {
        return EvaluatedHand::new(HandRank::Straight, u32::from(high), Vec::new());
    }

    if let Some(&trip) = trips.first() {
        let kickers = tally.remaining(&[trip], 2);
        return EvaluatedHand::new(HandRank::ThreeOfAKind, u32::from(trip), kickers);
    }

    if let &[high, low, ..] = pairs.as_slice() {
        let kickers = tally.remaining(&[high, low], 1);
        let offset = u32::from(high) * 13 + u32::from(low);
        return EvaluatedHand::new(HandRank::TwoPair, offset, kickers);
    }

    if let Some(&pair) = pairs.first() {
        let kickers = tally.remaining(&[pair], 3);
        return EvaluatedHand::new(HandRank::Pair, u32::from(pair), kickers);
    }

    let mut ranks = descending(tally.present).take(5);
    let high = ranks.next().unwrap_or(0);
    EvaluatedHand::new(HandRank::HighCard, u32::from(high), ranks.collect())
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|(i, card)| cards[..*i].contains(card))
        .map(|(_, card)| *card)
}

/// Evaluates two hole cards against a board of 3 to 5 cards.
///
/// # Errors
///
/// Returns an error if the board size is outside `3..=5` or a card repeats.
///
/// # Example
///
/// ```
/// use diamond_arcade::{HandRank, evaluate_hand, parse_cards};
///
/// let hole = parse_cards("Ah Kh").unwrap();
/// let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
/// let hand = evaluate_hand(&[hole[0], hole[1]], &board).unwrap();
/// assert_eq!(hand.rank, HandRank::RoyalFlush);
/// assert_eq!(hand.value, 10_000);
/// ```
pub fn evaluate_hand(hole: &[Card; 2], board: &[Card]) -> Result<EvaluatedHand, HandError> {
    if !(3..=5).contains(&board.len()) {
        return Err(HandError::BoardSize(board.len()));
    }

    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);

    if let Some(card) = first_duplicate(&cards) {
        return Err(HandError::DuplicateCard(card));
    }

    Ok(evaluate(&cards))
}

/// Compares two hands on the same board.
///
/// Returns [`Ordering::Greater`] when `first` wins, [`Ordering::Less`] when
/// `second` wins and [`Ordering::Equal`] on an exact tie.
///
/// # Errors
///
/// Returns an error if the board size is invalid or any card is shared
/// between the hands or with the board.
pub fn compare_hands(
    first: &[Card; 2],
    second: &[Card; 2],
    board: &[Card],
) -> Result<Ordering, HandError> {
    if let Some(card) = second.iter().find(|card| first.contains(card)) {
        return Err(HandError::DuplicateCard(*card));
    }

    let first = evaluate_hand(first, board)?;
    let second = evaluate_hand(second, board)?;
    Ok(first.cmp(&second))
}
