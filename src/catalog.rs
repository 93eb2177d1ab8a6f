//! Static catalog of arcade games.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::CatalogError;

/// Identifier of an arcade game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum GameId {
    /// Pick the winner of two hands.
    HandSnap,
    /// Identify the nuts among four options.
    BoardNuts,
    /// Pot odds arithmetic.
    ChipMath,
    /// Rank five hands from best to worst.
    Showdown,
    /// One question, double or bust.
    DoubleOrNothing,
    /// Ten in a row or nothing.
    TheGauntlet,
    /// Random payout multiplier.
    MysteryBox,
}

impl GameId {
    /// All games in catalog order.
    pub const ALL: [Self; 7] = [
        Self::HandSnap,
        Self::BoardNuts,
        Self::ChipMath,
        Self::Showdown,
        Self::DoubleOrNothing,
        Self::TheGauntlet,
        Self::MysteryBox,
    ];

    /// Returns the string id, e.g. `"the-gauntlet"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HandSnap => "hand-snap",
            Self::BoardNuts => "board-nuts",
            Self::ChipMath => "chip-math",
            Self::Showdown => "showdown",
            Self::DoubleOrNothing => "double-or-nothing",
            Self::TheGauntlet => "the-gauntlet",
            Self::MysteryBox => "mystery-box",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or(CatalogError::UnknownGame)
    }
}

/// Game category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Timed rapid-fire rounds.
    Speed,
    /// Untimed skill puzzles.
    Skill,
    /// High-stakes special modes.
    Jackpot,
}

/// Configuration of one arcade game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArcadeGame {
    /// Game id.
    pub id: GameId,
    /// Display name.
    pub name: &'static str,
    /// One-line pitch.
    pub description: &'static str,
    /// Category.
    pub category: Category,
    /// Diamonds charged to play.
    pub entry_fee: u64,
    /// Top tiered prize before rake and multipliers.
    pub max_prize: u64,
    /// Session length.
    pub duration_seconds: u32,
    /// Questions per session.
    pub questions_count: u32,
    /// Icon glyph.
    pub icon: &'static str,
    /// Theme colour.
    pub color: &'static str,
}

const DEFAULT_GAMES: [ArcadeGame; 7] = [
    ArcadeGame {
        id: GameId::HandSnap,
        name: "Hand Snap",
        description: "Two hands flash - tap the winner FAST!",
        category: Category::Speed,
        entry_fee: 10,
        max_prize: 50,
        duration_seconds: 60,
        questions_count: 20,
        icon: "⚡",
        color: "#fbbf24",
    },
    ArcadeGame {
        id: GameId::BoardNuts,
        name: "Board Nuts",
        description: "Identify the nuts from 4 options",
        category: Category::Speed,
        entry_fee: 15,
        max_prize: 75,
        duration_seconds: 60,
        questions_count: 15,
        icon: "🎯",
        color: "#22c55e",
    },
    ArcadeGame {
        id: GameId::ChipMath,
        name: "Chip Math",
        description: "Quick pot odds calculations",
        category: Category::Speed,
        entry_fee: 10,
        max_prize: 50,
        duration_seconds: 60,
        questions_count: 20,
        icon: "🔢",
        color: "#3b82f6",
    },
    ArcadeGame {
        id: GameId::Showdown,
        name: "Showdown!",
        description: "Rank 5 hands from best to worst",
        category: Category::Speed,
        entry_fee: 20,
        max_prize: 100,
        duration_seconds: 90,
        questions_count: 10,
        icon: "🃏",
        color: "#8b5cf6",
    },
    ArcadeGame {
        id: GameId::DoubleOrNothing,
        name: "Double or Nothing",
        description: "One question. Right = 2x. Wrong = bust.",
        category: Category::Jackpot,
        entry_fee: 50,
        max_prize: 100,
        duration_seconds: 30,
        questions_count: 1,
        icon: "🎲",
        color: "#ef4444",
    },
    ArcadeGame {
        id: GameId::TheGauntlet,
        name: "The Gauntlet",
        description: "10 in a row. Miss one = lose it all.",
        category: Category::Jackpot,
        entry_fee: 100,
        max_prize: 1000,
        duration_seconds: 300,
        questions_count: 10,
        icon: "💀",
        color: "#dc2626",
    },
    ArcadeGame {
        id: GameId::MysteryBox,
        name: "Mystery Box",
        description: "Answer correctly for random 1x-10x multiplier",
        category: Category::Jackpot,
        entry_fee: 25,
        max_prize: 250,
        duration_seconds: 60,
        questions_count: 5,
        icon: "🎁",
        color: "#a855f7",
    },
];

/// The set of playable games, one entry per [`GameId`].
///
/// A catalog is built once and then shared read-only:
///
/// ```
/// use diamond_arcade::{Catalog, GameId};
///
/// let catalog = Catalog::default();
/// let game = catalog.game(GameId::TheGauntlet);
/// assert_eq!(game.entry_fee, 100);
/// assert_eq!(game.questions_count, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    games: [ArcadeGame; 7],
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
        }
    }
}

impl Catalog {
    /// Replaces the entry with the same id.
    ///
    /// # Example
    ///
    /// ```
    /// use diamond_arcade::{Catalog, GameId};
    ///
    /// let mut promo = *Catalog::default().game(GameId::ChipMath);
    /// promo.max_prize = 80;
    /// let catalog = Catalog::default().with_game(promo);
    /// assert_eq!(catalog.game(GameId::ChipMath).max_prize, 80);
    /// ```
    #[must_use]
    pub const fn with_game(mut self, game: ArcadeGame) -> Self {
        self.games[game.id.index()] = game;
        self
    }

    /// Returns the configuration of a game.
    #[must_use]
    pub const fn game(&self, id: GameId) -> &ArcadeGame {
        &self.games[id.index()]
    }

    /// Looks up a game by its string id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the catalog.
    pub fn find(&self, id: &str) -> Result<&ArcadeGame, CatalogError> {
        id.parse().map(|id| self.game(id))
    }

    /// Returns all games in catalog order.
    #[must_use]
    pub const fn games(&self) -> &[ArcadeGame] {
        &self.games
    }

    /// Returns all game ids in catalog order.
    #[must_use]
    pub fn ids(&self) -> Vec<GameId> {
        self.games.iter().map(|game| game.id).collect()
    }
}
