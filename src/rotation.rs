//! Deterministic daily rotation of featured games.
//!
//! Every client derives the same featured set for a UTC date without any
//! coordination: the date string seeds [`SeededRandom`], which drives a
//! Fisher-Yates shuffle of the catalog. The generator is predictable and
//! must never back anything that needs secrecy.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::catalog::{Catalog, GameId};
use crate::float;
use crate::options::ArcadeOptions;

/// Returns the rotation seed for a calendar date.
///
/// The month is zero-based, so 2024-03-15 seeds as `"2024-2-15"`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use diamond_arcade::seed_for_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(seed_for_date(date), "2024-2-15");
/// ```
#[must_use]
pub fn seed_for_date(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month0(), date.day())
}

/// Returns the rotation seed for the current UTC date.
#[cfg(feature = "std")]
#[must_use]
pub fn todays_seed() -> String {
    seed_for_date(Utc::now().date_naive())
}

/// Sine-scrambled generator keyed by a string.
///
/// The seed's UTF-16 units fold into a 32-bit hash (`hash * 31 + unit`,
/// wrapping); each draw replaces the state with `sin(state) * 10000` and
/// yields its fractional part in `[0, 1)`. `sin` is always `libm`'s, so a
/// seed yields the same draws on every platform and feature set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededRandom {
    state: f64,
}

impl SeededRandom {
    /// Creates a generator for `seed`.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        let hash = seed
            .encode_utf16()
            .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));

        Self {
            state: f64::from(hash),
        }
    }

    /// Returns the next draw in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = float::sin(self.state) * 10_000.0;
        self.state - float::floor(self.state)
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// The games promoted for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeaturedGames {
    /// Featured game ids, bonus game first.
    pub games: Vec<GameId>,
    /// The game paying the daily bonus.
    pub bonus_game: GameId,
    /// Multiplier paid on the bonus game.
    pub bonus_multiplier: u32,
}

impl FeaturedGames {
    /// Returns whether `game` is featured today.
    #[must_use]
    pub fn is_featured(&self, game: GameId) -> bool {
        self.games.contains(&game)
    }

    /// Returns the daily multiplier for `game`: the bonus multiplier for the
    /// bonus game, 1 for everything else.
    #[must_use]
    pub fn multiplier_for(&self, game: GameId) -> u32 {
        if game == self.bonus_game {
            self.bonus_multiplier
        } else {
            1
        }
    }
}

/// Picks the featured games for `seed` with the standard house rules.
#[must_use]
pub fn daily_featured_games(catalog: &Catalog, seed: &str) -> FeaturedGames {
    daily_featured_games_with(&ArcadeOptions::default(), catalog, seed)
}

/// Picks the featured games for `seed` under the given house rules.
#[must_use]
pub fn daily_featured_games_with(
    options: &ArcadeOptions,
    catalog: &Catalog,
    seed: &str,
) -> FeaturedGames {
    let mut random = SeededRandom::new(seed);
    let mut games = catalog.ids();

    for i in (1..games.len()).rev() {
        #[expect(
            clippy::cast_precision_loss,
            reason = "catalog sizes are far below f64 precision limits"
        )]
        let j = (random.next_f64() * (i + 1) as f64) as usize;
        games.swap(i, j.min(i));
    }

    games.truncate(options.featured_count.max(1));
    let bonus_game = games[0];

    FeaturedGames {
        games,
        bonus_game,
        bonus_multiplier: options.bonus_multiplier,
    }
}

/// Picks today's featured games with the standard house rules.
#[cfg(feature = "std")]
#[must_use]
pub fn todays_featured_games(catalog: &Catalog) -> FeaturedGames {
    daily_featured_games(catalog, &todays_seed())
}

/// Time left until the rotation resets at the next UTC midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetCountdown {
    /// Whole hours.
    pub hours: u32,
    /// Minutes past the hours.
    pub minutes: u32,
    /// Seconds past the minutes.
    pub seconds: u32,
}

/// Returns the countdown from `now` to the next UTC midnight.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use diamond_arcade::time_until_reset;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 21, 29, 15).unwrap();
/// let countdown = time_until_reset(now);
/// assert_eq!((countdown.hours, countdown.minutes, countdown.seconds), (2, 30, 45));
/// ```
#[must_use]
pub fn time_until_reset(now: DateTime<Utc>) -> ResetCountdown {
    let millis = now
        .date_naive()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .map_or(0, |midnight| (midnight.and_utc() - now).num_milliseconds())
        .max(0);

    ResetCountdown {
        hours: (millis / 3_600_000) as u32,
        minutes: (millis % 3_600_000 / 60_000) as u32,
        seconds: (millis % 60_000 / 1000) as u32,
    }
}

/// Returns the countdown from the current time to the next UTC midnight.
#[cfg(feature = "std")]
#[must_use]
pub fn time_until_reset_now() -> ResetCountdown {
    time_until_reset(Utc::now())
}
