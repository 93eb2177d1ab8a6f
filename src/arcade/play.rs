use crate::catalog::GameId;
use crate::error::QuestionError;
use crate::payout::{GameResult, roll_mystery_multiplier};
use crate::question::{Question, generate_question_with};
use crate::rotation::FeaturedGames;
use crate::session::GameSession;

use super::Arcade;

impl Arcade {
    /// Deals the next question for `game`.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator exhausts its redeal cap.
    pub fn question(&self, game: GameId) -> Result<Question, QuestionError> {
        let mut rng = self.rng.lock();
        generate_question_with(&self.options, game, &mut *rng)
    }

    /// Deals the next question for a game given by its string id.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::UnknownGame`] for ids outside the catalog, or
    /// an error if a generator exhausts its redeal cap.
    pub fn question_for(&self, game: &str) -> Result<Question, QuestionError> {
        let game: GameId = game.parse()?;
        self.question(game)
    }

    /// Starts an empty session for `game`, charging the catalog entry fee.
    #[must_use]
    pub const fn start_session(&self, game: GameId, session_id: u64) -> GameSession {
        GameSession::new(session_id, self.catalog.game(game))
    }

    /// Rolls a mystery box multiplier.
    pub fn roll_mystery_multiplier(&self) -> u32 {
        let mut rng = self.rng.lock();
        roll_mystery_multiplier(&mut *rng)
    }

    /// Settles a finished session.
    ///
    /// The mystery box rolls its multiplier here. When `featured` names the
    /// session's game as the daily bonus game, tiered payouts are multiplied
    /// by the bonus as well; double or nothing and the gauntlet keep their
    /// fixed payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::{Arcade, ArcadeOptions, GameId};
    ///
    /// let arcade = Arcade::new(ArcadeOptions::default(), 1);
    /// let mut session = arcade.start_session(GameId::DoubleOrNothing, 7);
    /// session.record(true, 1200);
    ///
    /// let result = arcade.settle(&session, 0, None);
    /// assert!(result.won);
    /// assert_eq!(result.final_prize, 90);
    /// ```
    pub fn settle(
        &self,
        session: &GameSession,
        win_streak: u32,
        featured: Option<&FeaturedGames>,
    ) -> GameResult {
        let bonus = featured.map_or(1, |featured| featured.multiplier_for(session.game_id));
        let multiplier = match session.game_id {
            GameId::MysteryBox => self.roll_mystery_multiplier().saturating_mul(bonus),
            _ => bonus,
        };

        session.settle_with(
            &self.options,
            self.catalog.game(session.game_id),
            win_streak,
            multiplier,
        )
    }
}
