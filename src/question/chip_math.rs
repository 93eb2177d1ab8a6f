extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::float;

const POTS: [u32; 9] = [50, 75, 100, 150, 200, 250, 300, 400, 500];
const BET_FRACTIONS: [f64; 5] = [0.33, 0.5, 0.66, 0.75, 1.0];
/// Offsets of the wrong answers from the correct equity, in points.
const DISTRACTOR_OFFSETS: [i64; 3] = [5, -5, 10];

/// A pot and a bet; pick the equity needed to call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChipMathQuestion {
    /// Pot before the bet.
    pub pot: u32,
    /// Bet facing the player.
    pub bet: u32,
    /// Candidate equities in whole percent, shuffled.
    pub options: Vec<u32>,
    /// 0-based index of the correct equity.
    pub correct_index: usize,
    /// Worked solution, e.g. `"Need 50/(100+50+50) = 25% equity to call"`.
    pub explanation: String,
}

impl ChipMathQuestion {
    /// Returns option `index` formatted as a percentage, e.g. `"25%"`.
    #[must_use]
    pub fn option_label(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|equity| format!("{equity}%"))
    }
}

/// Equity needed to call `bet` into `pot`, in whole percent:
/// `bet / (pot + bet + bet)`, rounded half up.
///
/// # Example
///
/// ```
/// use diamond_arcade::equity_needed;
///
/// assert_eq!(equity_needed(100, 50), 25);
/// assert_eq!(equity_needed(100, 100), 33);
/// assert_eq!(equity_needed(0, 0), 0);
/// ```
#[must_use]
pub fn equity_needed(pot: u32, bet: u32) -> u32 {
    let total = u64::from(pot) + 2 * u64::from(bet);
    if total == 0 {
        return 0;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "pot sizes are far below f64 precision limits"
    )]
    let ratio = f64::from(bet) / total as f64;
    float::round(ratio * 100.0) as u32
}

/// Deals a chip math question.
pub fn generate_chip_math_question<R: Rng + ?Sized>(rng: &mut R) -> ChipMathQuestion {
    let pot = POTS[rng.random_range(0..POTS.len())];
    let fraction = BET_FRACTIONS[rng.random_range(0..BET_FRACTIONS.len())];
    let bet = float::round(f64::from(pot) * fraction) as u32;
    let equity = equity_needed(pot, bet);

    let mut options = Vec::with_capacity(DISTRACTOR_OFFSETS.len() + 1);
    options.push(equity);
    options.extend(
        DISTRACTOR_OFFSETS
            .iter()
            .map(|offset| i64::from(equity) + offset)
            .filter(|value| (1..100).contains(value) && *value != i64::from(equity))
            .map(|value| value as u32),
    );
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|&value| value == equity)
        .unwrap_or_default();

    ChipMathQuestion {
        pot,
        bet,
        options,
        correct_index,
        explanation: format!("Need {bet}/({pot}+{bet}+{bet}) = {equity}% equity to call"),
    }
}
