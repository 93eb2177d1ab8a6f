//! Prize, rake and streak bonus computation.
//!
//! All functions are total: every input in their domain yields a result and
//! nothing panics or divides by zero. Amounts are whole diamonds and every
//! percentage is floored.

use rand::Rng;

use crate::catalog::ArcadeGame;
use crate::options::ArcadeOptions;

/// Questions a gauntlet run must answer correctly.
pub const GAUNTLET_QUESTIONS: u32 = 10;
/// Fixed multiplier reported by double-or-nothing results.
pub const DOUBLE_OR_NOTHING_MULTIPLIER: u32 = 2;
/// Fixed multiplier reported by gauntlet results.
pub const GAUNTLET_MULTIPLIER: u32 = 10;

/// Accuracy tiers as (minimum accuracy percent, share of max prize percent).
const PRIZE_TIERS: [(u64, u64); 3] = [(95, 100), (85, 75), (70, 50)];
/// Share of max prize paid to winners below every tier.
const BASE_TIER_PERCENT: u64 = 25;

/// Mystery box weights as (exclusive upper bound of a 0..100 roll, multiplier).
const MYSTERY_TABLE: [(f64, u32); 5] = [(40.0, 1), (65.0, 2), (80.0, 3), (90.0, 5), (97.0, 7)];
const MYSTERY_JACKPOT: u32 = 10;

/// Outcome of a completed session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameResult {
    /// Whether the session paid out.
    pub won: bool,
    /// Fraction of questions answered correctly.
    pub accuracy: f64,
    /// Prize before rake, after multipliers.
    pub base_prize: u64,
    /// House cut.
    pub rake: u64,
    /// Extra payout for the player's win streak.
    pub streak_bonus: u64,
    /// Diamonds credited to the player.
    pub final_prize: u64,
    /// Win streak to store for the next session.
    pub new_streak: u32,
    /// Multiplier applied to this session.
    pub multiplier: u32,
}

impl GameResult {
    const fn loss(accuracy: f64, multiplier: u32) -> Self {
        Self {
            won: false,
            accuracy,
            base_prize: 0,
            rake: 0,
            streak_bonus: 0,
            final_prize: 0,
            new_streak: 0,
            multiplier,
        }
    }

    /// Winning result with no streak bonus and a streak reset to 1.
    const fn flat_win(base_prize: u64, rake_percent: u64, multiplier: u32) -> Self {
        let rake = percent_of(base_prize, rake_percent);
        Self {
            won: true,
            accuracy: 1.0,
            base_prize,
            rake,
            streak_bonus: 0,
            final_prize: base_prize.saturating_sub(rake),
            new_streak: 1,
            multiplier,
        }
    }
}

const fn percent_of(amount: u64, percent: u64) -> u64 {
    amount.saturating_mul(percent) / 100
}

fn accuracy(correct_count: u32, total_questions: u32) -> f64 {
    if total_questions == 0 {
        0.0
    } else {
        f64::from(correct_count) / f64::from(total_questions)
    }
}

/// Whether `correct / total` is at least `percent`%.
fn reaches(correct_count: u32, total_questions: u32, percent: u64) -> bool {
    u64::from(correct_count) * 100 >= u64::from(total_questions) * percent
}

/// Computes the payout of a tiered game with the standard house rules.
///
/// # Example
///
/// ```
/// use diamond_arcade::{Catalog, GameId, calculate_prize};
///
/// let catalog = Catalog::default();
/// let result = calculate_prize(catalog.game(GameId::HandSnap), 20, 20, 0, 1);
/// assert!(result.won);
/// assert_eq!(result.base_prize, 50);
/// assert_eq!(result.rake, 5);
/// assert_eq!(result.final_prize, 45);
/// assert_eq!(result.new_streak, 1);
/// ```
#[must_use]
pub fn calculate_prize(
    game: &ArcadeGame,
    correct_count: u32,
    total_questions: u32,
    streak: u32,
    multiplier: u32,
) -> GameResult {
    calculate_prize_with(
        &ArcadeOptions::default(),
        game,
        correct_count,
        total_questions,
        streak,
        multiplier,
    )
}

/// Computes the payout of a tiered game under the given house rules.
///
/// Below the win threshold the session loses everything and the streak
/// resets. Otherwise the max prize is scaled by accuracy tier and
/// `multiplier`, raked, and topped up by the capped streak bonus.
#[must_use]
pub fn calculate_prize_with(
    options: &ArcadeOptions,
    game: &ArcadeGame,
    correct_count: u32,
    total_questions: u32,
    streak: u32,
    multiplier: u32,
) -> GameResult {
    let accuracy = accuracy(correct_count, total_questions);

    if total_questions == 0
        || !reaches(
            correct_count,
            total_questions,
            u64::from(options.win_threshold_percent),
        )
    {
        return GameResult::loss(accuracy, multiplier);
    }

    let share = PRIZE_TIERS
        .iter()
        .find(|(minimum, _)| reaches(correct_count, total_questions, *minimum))
        .map_or(BASE_TIER_PERCENT, |(_, share)| *share);

    let tiered = percent_of(game.max_prize, share);
    let base_prize = tiered.saturating_mul(u64::from(multiplier));
    let rake = percent_of(base_prize, options.rake_percent);
    let after_rake = base_prize.saturating_sub(rake);

    let streak_percent = u64::from(streak)
        .saturating_mul(options.streak_step_percent)
        .min(options.streak_cap_percent);
    let streak_bonus = percent_of(after_rake, streak_percent);

    GameResult {
        won: true,
        accuracy,
        base_prize,
        rake,
        streak_bonus,
        final_prize: after_rake.saturating_add(streak_bonus),
        new_streak: streak.saturating_add(1),
        multiplier,
    }
}

/// Settles a double-or-nothing round with the standard house rules.
///
/// A correct answer pays twice the entry fee less rake and sets the streak
/// to 1; a wrong answer loses everything.
#[must_use]
pub fn calculate_double_or_nothing(correct: bool, entry_fee: u64) -> GameResult {
    calculate_double_or_nothing_with(&ArcadeOptions::default(), correct, entry_fee)
}

/// Settles a double-or-nothing round under the given house rules.
#[must_use]
pub fn calculate_double_or_nothing_with(
    options: &ArcadeOptions,
    correct: bool,
    entry_fee: u64,
) -> GameResult {
    if !correct {
        return GameResult::loss(0.0, DOUBLE_OR_NOTHING_MULTIPLIER);
    }

    let base_prize = entry_fee.saturating_mul(u64::from(DOUBLE_OR_NOTHING_MULTIPLIER));
    GameResult::flat_win(base_prize, options.rake_percent, DOUBLE_OR_NOTHING_MULTIPLIER)
}

/// Settles a gauntlet run with the standard house rules.
///
/// Only a perfect run of [`GAUNTLET_QUESTIONS`] pays, at ten times the entry
/// fee less rake.
#[must_use]
pub fn calculate_gauntlet(correct_count: u32, entry_fee: u64) -> GameResult {
    calculate_gauntlet_with(&ArcadeOptions::default(), correct_count, entry_fee)
}

/// Settles a gauntlet run under the given house rules.
#[must_use]
pub fn calculate_gauntlet_with(
    options: &ArcadeOptions,
    correct_count: u32,
    entry_fee: u64,
) -> GameResult {
    if correct_count < GAUNTLET_QUESTIONS {
        return GameResult::loss(
            accuracy(correct_count, GAUNTLET_QUESTIONS),
            GAUNTLET_MULTIPLIER,
        );
    }

    let base_prize = entry_fee.saturating_mul(u64::from(GAUNTLET_MULTIPLIER));
    GameResult::flat_win(base_prize, options.rake_percent, GAUNTLET_MULTIPLIER)
}

/// Maps a roll in `[0, 100)` to a mystery box multiplier.
///
/// | roll       | multiplier |
/// |------------|------------|
/// | `[0, 40)`  | 1x         |
/// | `[40, 65)` | 2x         |
/// | `[65, 80)` | 3x         |
/// | `[80, 90)` | 5x         |
/// | `[90, 97)` | 7x         |
/// | `[97, 100)`| 10x        |
#[must_use]
pub fn mystery_multiplier_for_roll(roll: f64) -> u32 {
    MYSTERY_TABLE
        .iter()
        .find(|(below, _)| roll < *below)
        .map_or(MYSTERY_JACKPOT, |(_, multiplier)| *multiplier)
}

/// Rolls the mystery box multiplier.
pub fn roll_mystery_multiplier<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    let roll: f64 = rng.random::<f64>() * 100.0;
    mystery_multiplier_for_roll(roll)
}
