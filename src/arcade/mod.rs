//! Arcade engine tying the catalog, house rules and randomness together.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{ArcadeGame, Catalog, GameId};
use crate::options::ArcadeOptions;
use crate::rotation::{FeaturedGames, daily_featured_games_with, seed_for_date};
use crate::sync::Mutex;

mod play;

/// An arcade that deals questions and settles sessions.
///
/// The arcade owns an immutable [`Catalog`], its [`ArcadeOptions`] and a
/// seeded random number generator. Every method takes `&self`, so one arcade
/// can be shared between all sessions of a process.
pub struct Arcade {
    /// Games on offer.
    catalog: Catalog,
    /// House rules.
    options: ArcadeOptions,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Arcade {
    /// Creates an arcade with the default catalog and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::{Arcade, ArcadeOptions, GameId};
    ///
    /// let arcade = Arcade::new(ArcadeOptions::default(), 42);
    /// assert_eq!(arcade.game(GameId::HandSnap).entry_fee, 10);
    /// ```
    #[must_use]
    pub fn new(options: ArcadeOptions, seed: u64) -> Self {
        Self::with_catalog(Catalog::default(), options, seed)
    }

    /// Creates an arcade with a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, options: ArcadeOptions, seed: u64) -> Self {
        log::debug!("arcade ready with {} games", catalog.games().len());

        Self {
            catalog,
            options,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Reseeds the random number generator.
    pub fn reseed(&mut self, seed: u64) {
        *self.rng.get_mut() = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the house rules.
    #[must_use]
    pub const fn options(&self) -> &ArcadeOptions {
        &self.options
    }

    /// Returns the configuration of a game.
    #[must_use]
    pub const fn game(&self, id: GameId) -> &ArcadeGame {
        self.catalog.game(id)
    }

    /// Returns the games featured on a UTC calendar date.
    #[must_use]
    pub fn featured_on(&self, date: NaiveDate) -> FeaturedGames {
        daily_featured_games_with(&self.options, &self.catalog, &seed_for_date(date))
    }

    /// Returns the games featured today (UTC).
    #[cfg(feature = "std")]
    #[must_use]
    pub fn featured_today(&self) -> FeaturedGames {
        self.featured_on(chrono::Utc::now().date_naive())
    }
}
