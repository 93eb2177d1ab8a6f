//! A poker-knowledge arcade engine with optional `no_std` support.
//!
//! The crate evaluates poker hands, deals arcade questions built on the
//! evaluator, converts finished sessions into diamond payouts (10% rake,
//! capped streak bonus, double-or-nothing, gauntlet and mystery box modes)
//! and picks the featured games of the day from a date-keyed seed.
//!
//! All computation is synchronous and pure apart from the caller's random
//! number generator. [`Arcade`] bundles a catalog, house rules and a seeded
//! generator for callers that want one shared value.
//!
//! # Example
//!
//! ```
//! use diamond_arcade::{Arcade, ArcadeOptions, GameId};
//!
//! let arcade = Arcade::new(ArcadeOptions::default(), 42);
//! let game = GameId::HandSnap;
//! let mut session = arcade.start_session(game, 1);
//!
//! for _ in 0..arcade.game(game).questions_count {
//!     let question = arcade.question(game).unwrap();
//!     session.answer(&question, &question.correct_answer(), 800);
//! }
//!
//! let result = arcade.settle(&session, 0, None);
//! assert!(result.won);
//! assert_eq!(result.final_prize, 45);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod arcade;
pub mod card;
pub mod catalog;
pub mod error;
mod float;
pub mod hand;
pub mod options;
pub mod payout;
pub mod question;
pub mod rotation;
pub mod session;
mod sync;

// Re-export main types
pub use arcade::Arcade;
pub use card::{
    Card, CardFace, DECK_SIZE, Rank, Suit, format_card, full_deck, parse_card, parse_cards,
    shuffle_deck,
};
pub use catalog::{ArcadeGame, Catalog, Category, GameId};
pub use error::{CardError, CatalogError, HandError, QuestionError};
pub use hand::{EvaluatedHand, HandRank, compare_hands, evaluate, evaluate_hand};
pub use options::ArcadeOptions;
pub use payout::{
    GameResult, calculate_double_or_nothing, calculate_double_or_nothing_with, calculate_gauntlet,
    calculate_gauntlet_with, calculate_prize, calculate_prize_with, mystery_multiplier_for_roll,
    roll_mystery_multiplier,
};
pub use question::{
    Answer, BoardNutsQuestion, ChipMathQuestion, HandChoice, HandSnapQuestion, Question,
    ShowdownQuestion, equity_needed, generate_board_nuts_question, generate_chip_math_question,
    generate_hand_snap_question, generate_question, generate_question_for,
    generate_question_with, generate_showdown_question,
};
#[cfg(feature = "std")]
pub use rotation::{time_until_reset_now, todays_featured_games, todays_seed};
pub use rotation::{
    FeaturedGames, ResetCountdown, SeededRandom, daily_featured_games, daily_featured_games_with,
    seed_for_date, time_until_reset,
};
pub use session::GameSession;
