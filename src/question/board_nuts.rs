extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::hand::HandRank;

use super::{fresh_deck, hole, strength};

const OPTIONS: usize = 4;

/// A river board and four candidate holdings; pick the strongest.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardNutsQuestion {
    /// Five community cards.
    pub board: Vec<Card>,
    /// Four disjoint two-card holdings.
    pub options: Vec<[Card; 2]>,
    /// 0-based index of the strongest holding. Equal hand values are broken
    /// by kickers, and an exact tie goes to the lowest index.
    pub correct_index: usize,
    /// Category of the strongest holding.
    pub nuts_rank: HandRank,
    /// Human-readable reason, e.g. `"Flush is the nuts on this board"`.
    pub explanation: String,
}

/// Deals a board nuts question.
///
/// Options are compared by hand value, then kickers. When two options tie
/// exactly, the lower index is the answer.
pub fn generate_board_nuts_question<R: Rng + ?Sized>(rng: &mut R) -> BoardNutsQuestion {
    let deck = fresh_deck(rng);
    let board = deck[..5].to_vec();
    let options: Vec<[Card; 2]> = (0..OPTIONS).map(|i| hole(&deck, 5 + i * 2)).collect();

    let strengths: Vec<_> = options
        .iter()
        .map(|option| strength(option, &board))
        .collect();
    let correct_index = (1..strengths.len()).fold(0, |best, i| {
        if strengths[i] > strengths[best] { i } else { best }
    });
    let best = &strengths[correct_index];

    BoardNutsQuestion {
        explanation: format!("{} is the nuts on this board", best.rank.name()),
        nuts_rank: best.rank,
        board,
        options,
        correct_index,
    }
}
