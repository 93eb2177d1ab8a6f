extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::error::QuestionError;
use crate::options::ArcadeOptions;

use super::{fresh_deck, hole, strength};

/// Hands dealt per showdown question.
pub const SHOWDOWN_HANDS: usize = 5;

/// Five hands on a shared river board; order them best to worst.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowdownQuestion {
    /// Five community cards.
    pub board: Vec<Card>,
    /// Five disjoint two-card hands.
    pub hands: Vec<[Card; 2]>,
    /// Hand indices from strongest to weakest. No two hands tie.
    pub correct_order: Vec<usize>,
    /// Category names in winning order, e.g. `"Flush > Pair > High Card"`.
    pub explanation: String,
}

/// Deals a showdown question with the standard house rules.
///
/// # Errors
///
/// Returns [`QuestionError::RetriesExhausted`] if every deal within the cap
/// contains a tie.
pub fn generate_showdown_question<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<ShowdownQuestion, QuestionError> {
    generate(&ArcadeOptions::default(), rng)
}

pub(super) fn generate<R: Rng + ?Sized>(
    options: &ArcadeOptions,
    rng: &mut R,
) -> Result<ShowdownQuestion, QuestionError> {
    let attempts = options.attempts();

    for attempt in 1..=attempts {
        let deck = fresh_deck(rng);
        let board = deck[..5].to_vec();
        let hands: Vec<[Card; 2]> = (0..SHOWDOWN_HANDS)
            .map(|i| hole(&deck, 5 + i * 2))
            .collect();
        let strengths: Vec<_> = hands.iter().map(|hand| strength(hand, &board)).collect();

        let mut correct_order: Vec<usize> = (0..SHOWDOWN_HANDS).collect();
        correct_order.sort_by(|a, b| strengths[*b].cmp(&strengths[*a]));

        if correct_order
            .windows(2)
            .any(|pair| strengths[pair[0]].cmp(&strengths[pair[1]]).is_eq())
        {
            log::debug!("showdown deal {attempt} has tied hands, redealing");
            continue;
        }

        let names: Vec<&str> = correct_order
            .iter()
            .map(|&i| strengths[i].rank.name())
            .collect();

        return Ok(ShowdownQuestion {
            board,
            hands,
            correct_order,
            explanation: names.join(" > "),
        });
    }

    log::warn!("showdown gave up after {attempts} tied deals");
    Err(QuestionError::RetriesExhausted { attempts })
}
