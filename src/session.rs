//! Per-play tally kept by the caller.

use crate::catalog::{ArcadeGame, GameId};
use crate::options::ArcadeOptions;
use crate::payout::{
    GAUNTLET_QUESTIONS, GameResult, calculate_double_or_nothing_with, calculate_gauntlet_with,
    calculate_prize_with,
};
use crate::question::{Answer, Question};

/// Points for each correct answer.
pub const POINTS_PER_CORRECT: u64 = 100;
/// Extra points per previous consecutive correct answer.
pub const COMBO_POINTS: u64 = 10;

/// Running tally of one play-through.
///
/// The session only counts; persisting it and enforcing the game's timer
/// are up to the caller. Answers past the game's question count are
/// ignored, and settling early scores the unanswered questions as misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    /// Caller-assigned session id.
    pub id: u64,
    /// The game being played.
    pub game_id: GameId,
    /// Entry fee charged for the session.
    pub entry_fee: u64,
    /// Questions in the game.
    pub questions_count: u32,
    /// Points scored.
    pub score: u64,
    /// Questions answered correctly.
    pub correct_count: u32,
    /// Questions answered.
    pub total_questions: u32,
    /// Total answer time.
    pub time_spent_ms: u64,
    /// Consecutive correct answers at the end of the tally.
    ///
    /// This is the in-session scoring combo. The player's streak of won
    /// sessions is tracked by the caller and passed to
    /// [`settle`](Self::settle) as `win_streak`.
    pub combo: u32,
}

impl GameSession {
    /// Starts an empty session for `game`.
    #[must_use]
    pub const fn new(id: u64, game: &ArcadeGame) -> Self {
        Self {
            id,
            game_id: game.id,
            entry_fee: game.entry_fee,
            questions_count: game.questions_count,
            score: 0,
            correct_count: 0,
            total_questions: 0,
            time_spent_ms: 0,
            combo: 0,
        }
    }

    /// Records one graded answer. Does nothing once the session is complete.
    pub const fn record(&mut self, correct: bool, elapsed_ms: u64) {
        if self.is_complete() {
            return;
        }

        self.total_questions += 1;
        self.time_spent_ms = self.time_spent_ms.saturating_add(elapsed_ms);

        if correct {
            self.score += POINTS_PER_CORRECT + COMBO_POINTS * self.combo as u64;
            self.correct_count += 1;
            self.combo += 1;
        } else {
            self.combo = 0;
        }
    }

    /// Grades `answer` against `question`, records it and returns whether it
    /// was correct.
    pub fn answer(&mut self, question: &Question, answer: &Answer, elapsed_ms: u64) -> bool {
        let correct = question.is_correct(answer);
        self.record(correct, elapsed_ms);
        correct
    }

    /// Fraction of answers that were correct, 0 before the first answer.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            f64::from(self.correct_count) / f64::from(self.total_questions)
        }
    }

    /// Returns whether every question of the game has been answered.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total_questions >= self.questions_count
    }

    /// Settles the session with the standard house rules.
    ///
    /// `win_streak` is the player's streak of winning sessions before this
    /// one; `multiplier` scales tiered payouts (mystery box roll, daily
    /// bonus).
    #[must_use]
    pub fn settle(&self, game: &ArcadeGame, win_streak: u32, multiplier: u32) -> GameResult {
        self.settle_with(&ArcadeOptions::default(), game, win_streak, multiplier)
    }

    /// Settles the session under the given house rules.
    ///
    /// Double or nothing and the gauntlet pay only on a complete run with
    /// every answer correct; both ignore `multiplier`. Every other game pays
    /// by accuracy tier over the game's full question count, so unanswered
    /// questions count as misses.
    #[must_use]
    pub fn settle_with(
        &self,
        options: &ArcadeOptions,
        game: &ArcadeGame,
        win_streak: u32,
        multiplier: u32,
    ) -> GameResult {
        let total = self.total_questions.max(game.questions_count);
        let perfect = self.total_questions > 0 && self.correct_count == total;

        let result = match self.game_id {
            GameId::DoubleOrNothing => {
                calculate_double_or_nothing_with(options, perfect, self.entry_fee)
            }
            GameId::TheGauntlet => {
                let correct = if perfect {
                    self.correct_count
                } else {
                    self.correct_count.min(GAUNTLET_QUESTIONS - 1)
                };
                calculate_gauntlet_with(options, correct, self.entry_fee)
            }
            GameId::HandSnap
            | GameId::BoardNuts
            | GameId::ChipMath
            | GameId::Showdown
            | GameId::MysteryBox => calculate_prize_with(
                options,
                game,
                self.correct_count,
                total,
                win_streak,
                multiplier,
            ),
        };

        log::debug!(
            "session {} ({}) settled: won={} final_prize={} new_streak={}",
            self.id,
            self.game_id,
            result.won,
            result.final_prize,
            result.new_streak
        );
        result
    }
}
