//! Question generators and grading.
//!
//! Every generator shuffles a fresh deck per deal and keeps no state between
//! calls; the only shared input is the caller's random number generator.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, full_deck, shuffle_deck};
use crate::catalog::GameId;
use crate::error::QuestionError;
use crate::hand::{EvaluatedHand, evaluate};
use crate::options::ArcadeOptions;

mod board_nuts;
mod chip_math;
mod hand_snap;
mod showdown;

pub use board_nuts::{BoardNutsQuestion, generate_board_nuts_question};
pub use chip_math::{ChipMathQuestion, equity_needed, generate_chip_math_question};
pub use hand_snap::{HandSnapQuestion, generate_hand_snap_question};
pub use showdown::{SHOWDOWN_HANDS, ShowdownQuestion, generate_showdown_question};

/// Which of two hands wins a hand snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandChoice {
    /// The first hand (answer `1`).
    First,
    /// The second hand (answer `2`).
    Second,
}

impl HandChoice {
    /// Returns the 1-based answer number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Returns the choice for a 1-based answer number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            _ => None,
        }
    }
}

/// A player's answer to a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Answer {
    /// The hand picked in a hand snap.
    Hand(HandChoice),
    /// A 0-based option index (board nuts, chip math).
    Choice(usize),
    /// Hand indices ordered best first (showdown).
    Ranking(Vec<usize>),
}

/// One round of an arcade game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Question {
    /// Pick the winner of two hands.
    HandSnap(HandSnapQuestion),
    /// Pick the nuts among four options.
    BoardNuts(BoardNutsQuestion),
    /// Pick the equity needed to call.
    ChipMath(ChipMathQuestion),
    /// Order five hands best to worst.
    Showdown(ShowdownQuestion),
}

impl Question {
    /// Grades an answer. An answer of the wrong shape is incorrect.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::{Answer, Question, generate_chip_math_question};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let question = Question::ChipMath(generate_chip_math_question(&mut rng));
    /// assert!(question.is_correct(&question.correct_answer()));
    /// assert!(!question.is_correct(&Answer::Ranking(vec![0])));
    /// ```
    #[must_use]
    pub fn is_correct(&self, answer: &Answer) -> bool {
        match self {
            Self::HandSnap(question) => {
                matches!(answer, Answer::Hand(choice) if *choice == question.correct_answer)
            }
            Self::BoardNuts(question) => {
                matches!(answer, Answer::Choice(index) if *index == question.correct_index)
            }
            Self::ChipMath(question) => {
                matches!(answer, Answer::Choice(index) if *index == question.correct_index)
            }
            Self::Showdown(question) => {
                matches!(answer, Answer::Ranking(order) if *order == question.correct_order)
            }
        }
    }

    /// Returns the answer that grades as correct.
    #[must_use]
    pub fn correct_answer(&self) -> Answer {
        match self {
            Self::HandSnap(question) => Answer::Hand(question.correct_answer),
            Self::BoardNuts(question) => Answer::Choice(question.correct_index),
            Self::ChipMath(question) => Answer::Choice(question.correct_index),
            Self::Showdown(question) => Answer::Ranking(question.correct_order.clone()),
        }
    }

    /// Returns the board shown with the question, if any.
    #[must_use]
    pub fn board(&self) -> Option<&[Card]> {
        match self {
            Self::HandSnap(question) => Some(&question.board),
            Self::BoardNuts(question) => Some(&question.board),
            Self::ChipMath(_) => None,
            Self::Showdown(question) => Some(&question.board),
        }
    }
}

/// Generates a question for `game` with the standard house rules.
///
/// Jackpot modes (double or nothing, the gauntlet, mystery box) draw a mixed
/// quiz: a hand snap, board nuts or chip math question with equal odds.
///
/// # Errors
///
/// Returns an error if a generator exhausts its redeal cap.
pub fn generate_question<R: Rng + ?Sized>(
    game: GameId,
    rng: &mut R,
) -> Result<Question, QuestionError> {
    generate_question_with(&ArcadeOptions::default(), game, rng)
}

/// Generates a question for a game given by its string id.
///
/// # Errors
///
/// Returns [`QuestionError::UnknownGame`] for ids outside the catalog, or an
/// error if a generator exhausts its redeal cap.
pub fn generate_question_for<R: Rng + ?Sized>(
    game: &str,
    rng: &mut R,
) -> Result<Question, QuestionError> {
    generate_question(game.parse()?, rng)
}

/// Generates a question for `game` under the given house rules.
///
/// # Errors
///
/// Returns an error if a generator exhausts its redeal cap.
pub fn generate_question_with<R: Rng + ?Sized>(
    options: &ArcadeOptions,
    game: GameId,
    rng: &mut R,
) -> Result<Question, QuestionError> {
    let question = match game {
        GameId::HandSnap => Question::HandSnap(hand_snap::generate(options, rng)?),
        GameId::BoardNuts => Question::BoardNuts(generate_board_nuts_question(rng)),
        GameId::ChipMath => Question::ChipMath(generate_chip_math_question(rng)),
        GameId::Showdown => Question::Showdown(showdown::generate(options, rng)?),
        GameId::DoubleOrNothing | GameId::TheGauntlet | GameId::MysteryBox => {
            match rng.random_range(0..3) {
                0 => Question::HandSnap(hand_snap::generate(options, rng)?),
                1 => Question::BoardNuts(generate_board_nuts_question(rng)),
                _ => Question::ChipMath(generate_chip_math_question(rng)),
            }
        }
    };

    log::trace!("generated {game} question");
    Ok(question)
}

fn fresh_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    shuffle_deck(&full_deck(), rng)
}

/// Two consecutive cards starting at `at`.
fn hole(deck: &[Card], at: usize) -> [Card; 2] {
    [deck[at], deck[at + 1]]
}

/// Evaluates hole cards dealt from the same deck as the board.
fn strength(hole: &[Card; 2], board: &[Card]) -> EvaluatedHand {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate(&cards)
}
