extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;

use crate::card::Card;
use crate::error::QuestionError;
use crate::options::ArcadeOptions;

use super::{HandChoice, fresh_deck, hole, strength};

/// Two hands on a shared river board; pick the winner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandSnapQuestion {
    /// First hand.
    pub hand1: [Card; 2],
    /// Second hand.
    pub hand2: [Card; 2],
    /// Five community cards.
    pub board: Vec<Card>,
    /// The winning hand. Never a tie.
    pub correct_answer: HandChoice,
    /// Advisory answer time in milliseconds; the caller enforces it.
    pub time_limit_ms: u32,
}

/// Deals a hand snap question with the standard house rules.
///
/// # Errors
///
/// Returns [`QuestionError::RetriesExhausted`] if every deal within the cap
/// ties.
pub fn generate_hand_snap_question<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<HandSnapQuestion, QuestionError> {
    generate(&ArcadeOptions::default(), rng)
}

pub(super) fn generate<R: Rng + ?Sized>(
    options: &ArcadeOptions,
    rng: &mut R,
) -> Result<HandSnapQuestion, QuestionError> {
    let attempts = options.attempts();

    for attempt in 1..=attempts {
        let deck = fresh_deck(rng);
        let hand1 = hole(&deck, 0);
        let hand2 = hole(&deck, 2);
        let board = deck[4..9].to_vec();

        let correct_answer = match strength(&hand1, &board).cmp(&strength(&hand2, &board)) {
            Ordering::Greater => HandChoice::First,
            Ordering::Less => HandChoice::Second,
            Ordering::Equal => {
                log::debug!("hand snap deal {attempt} tied, redealing");
                continue;
            }
        };

        return Ok(HandSnapQuestion {
            hand1,
            hand2,
            board,
            correct_answer,
            time_limit_ms: options.hand_snap_time_limit_ms,
        });
    }

    log::warn!("hand snap gave up after {attempts} tied deals");
    Err(QuestionError::RetriesExhausted { attempts })
}
