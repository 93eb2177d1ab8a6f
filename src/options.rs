//! House rules for the arcade.

/// Configuration options for an arcade.
///
/// The defaults are the standard house rules. Use the builder methods to
/// customize them:
///
/// ```
/// use diamond_arcade::ArcadeOptions;
///
/// let options = ArcadeOptions::default()
///     .with_rake_percent(5)
///     .with_streak_cap_percent(30)
///     .with_max_regenerations(20);
/// assert_eq!(options.rake_percent, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcadeOptions {
    /// House cut taken from every winning payout, in percent.
    pub rake_percent: u64,
    /// Streak bonus per consecutive win, in percent of the raked prize.
    pub streak_step_percent: u64,
    /// Upper bound of the streak bonus, in percent of the raked prize.
    pub streak_cap_percent: u64,
    /// Minimum accuracy to win a tiered payout, in percent.
    pub win_threshold_percent: u32,
    /// Deals tried before a generator that needs a decisive winner gives up.
    pub max_regenerations: u32,
    /// Advisory per-question time limit for hand snap, in milliseconds.
    pub hand_snap_time_limit_ms: u32,
    /// Number of games featured by the daily rotation.
    pub featured_count: usize,
    /// Payout multiplier for the daily bonus game.
    pub bonus_multiplier: u32,
}

impl Default for ArcadeOptions {
    fn default() -> Self {
        Self {
            rake_percent: 10,
            streak_step_percent: 10,
            streak_cap_percent: 50,
            win_threshold_percent: 50,
            max_regenerations: 100,
            hand_snap_time_limit_ms: 3000,
            featured_count: 4,
            bonus_multiplier: 2,
        }
    }
}

impl ArcadeOptions {
    /// Sets the rake percentage.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::ArcadeOptions;
    ///
    /// let options = ArcadeOptions::default().with_rake_percent(0);
    /// assert_eq!(options.rake_percent, 0);
    /// ```
    #[must_use]
    pub const fn with_rake_percent(mut self, percent: u64) -> Self {
        self.rake_percent = percent;
        self
    }

    /// Sets the streak bonus per consecutive win.
    #[must_use]
    pub const fn with_streak_step_percent(mut self, percent: u64) -> Self {
        self.streak_step_percent = percent;
        self
    }

    /// Sets the streak bonus cap.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::ArcadeOptions;
    ///
    /// let options = ArcadeOptions::default().with_streak_cap_percent(100);
    /// assert_eq!(options.streak_cap_percent, 100);
    /// ```
    #[must_use]
    pub const fn with_streak_cap_percent(mut self, percent: u64) -> Self {
        self.streak_cap_percent = percent;
        self
    }

    /// Sets the minimum winning accuracy.
    #[must_use]
    pub const fn with_win_threshold_percent(mut self, percent: u32) -> Self {
        self.win_threshold_percent = percent;
        self
    }

    /// Sets the redeal cap for generators that discard tied deals.
    ///
    /// A cap of zero is treated as one attempt.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::ArcadeOptions;
    ///
    /// let options = ArcadeOptions::default().with_max_regenerations(10);
    /// assert_eq!(options.max_regenerations, 10);
    /// ```
    #[must_use]
    pub const fn with_max_regenerations(mut self, attempts: u32) -> Self {
        self.max_regenerations = attempts;
        self
    }

    /// Sets the advisory hand snap time limit.
    #[must_use]
    pub const fn with_hand_snap_time_limit_ms(mut self, millis: u32) -> Self {
        self.hand_snap_time_limit_ms = millis;
        self
    }

    /// Sets how many games the daily rotation features.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::ArcadeOptions;
    ///
    /// let options = ArcadeOptions::default().with_featured_count(3);
    /// assert_eq!(options.featured_count, 3);
    /// ```
    #[must_use]
    pub const fn with_featured_count(mut self, count: usize) -> Self {
        self.featured_count = count;
        self
    }

    /// Sets the daily bonus game multiplier.
    #[must_use]
    pub const fn with_bonus_multiplier(mut self, multiplier: u32) -> Self {
        self.bonus_multiplier = multiplier;
        self
    }

    pub(crate) const fn attempts(&self) -> u32 {
        if self.max_regenerations == 0 {
            1
        } else {
            self.max_regenerations
        }
    }
}
