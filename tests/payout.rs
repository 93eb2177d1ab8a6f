use diamond_arcade::{
    ArcadeOptions, Catalog, GameId, calculate_double_or_nothing, calculate_gauntlet,
    calculate_gauntlet_with, calculate_prize, calculate_prize_with, mystery_multiplier_for_roll,
    roll_mystery_multiplier,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn final_prize(game: GameId, correct: u32, total: u32, streak: u32) -> u64 {
    let catalog = Catalog::default();
    calculate_prize(catalog.game(game), correct, total, streak, 1).final_prize
}

#[test]
fn perfect_hand_snap_pays_max_less_rake() {
    let catalog = Catalog::default();
    let result = calculate_prize(catalog.game(GameId::HandSnap), 20, 20, 0, 1);

    assert!(result.won);
    assert!((result.accuracy - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.base_prize, 50);
    assert_eq!(result.rake, 5);
    assert_eq!(result.streak_bonus, 0);
    assert_eq!(result.final_prize, 45);
    assert_eq!(result.new_streak, 1);
    assert_eq!(result.multiplier, 1);
}

#[test]
fn half_right_pays_bottom_tier() {
    let catalog = Catalog::default();
    let result = calculate_prize(catalog.game(GameId::HandSnap), 10, 20, 0, 1);

    assert!(result.won);
    assert_eq!(result.base_prize, 12);
    assert_eq!(result.rake, 1);
    assert_eq!(result.final_prize, 11);
}

#[test]
fn accuracy_tiers() {
    assert_eq!(final_prize(GameId::HandSnap, 19, 20, 0), 45);
    assert_eq!(final_prize(GameId::HandSnap, 17, 20, 0), 34);
    assert_eq!(final_prize(GameId::HandSnap, 14, 20, 0), 23);
    assert_eq!(final_prize(GameId::HandSnap, 13, 20, 0), 11);
    assert_eq!(final_prize(GameId::Showdown, 7, 10, 0), 45);
    assert_eq!(final_prize(GameId::BoardNuts, 13, 15, 0), 51);
}

#[test]
fn below_half_loses_and_resets_streak() {
    let catalog = Catalog::default();

    for (correct, total) in [(9, 20), (1, 3), (49, 100), (0, 5)] {
        let result = calculate_prize(catalog.game(GameId::ChipMath), correct, total, 4, 3);
        assert!(!result.won);
        assert_eq!(result.base_prize, 0);
        assert_eq!(result.rake, 0);
        assert_eq!(result.streak_bonus, 0);
        assert_eq!(result.final_prize, 0);
        assert_eq!(result.new_streak, 0);
        assert_eq!(result.multiplier, 3);
    }
}

#[test]
fn no_questions_is_a_loss() {
    let catalog = Catalog::default();
    let result = calculate_prize(catalog.game(GameId::HandSnap), 0, 0, 2, 1);

    assert!(!result.won);
    assert!(result.accuracy.abs() < f64::EPSILON);
    assert_eq!(result.final_prize, 0);
}

#[test]
fn streak_bonus_grows_then_caps() {
    assert_eq!(final_prize(GameId::HandSnap, 20, 20, 1), 49);
    assert_eq!(final_prize(GameId::HandSnap, 20, 20, 3), 58);
    assert_eq!(final_prize(GameId::HandSnap, 20, 20, 5), 67);
    assert_eq!(final_prize(GameId::HandSnap, 20, 20, 10), 67);
    assert_eq!(final_prize(GameId::HandSnap, 20, 20, u32::MAX), 67);

    let catalog = Catalog::default();
    let result = calculate_prize(catalog.game(GameId::HandSnap), 20, 20, 7, 1);
    assert_eq!(result.streak_bonus, 22);
    assert_eq!(result.new_streak, 8);
}

#[test]
fn winnings_never_exceed_capped_bonus() {
    let catalog = Catalog::default();

    for game in catalog.games() {
        for total in 1..=20 {
            for correct in 0..=total {
                for streak in [0, 1, 4, 9] {
                    let result = calculate_prize(game, correct, total, streak, 1);
                    if result.won {
                        assert_eq!(result.new_streak, streak + 1);
                        assert!(result.base_prize <= game.max_prize);
                        assert_eq!(result.rake, result.base_prize / 10);
                        assert!(result.final_prize <= (result.base_prize - result.rake) * 3 / 2);
                    } else {
                        assert_eq!(result.final_prize, 0);
                        assert_eq!(result.new_streak, 0);
                    }
                }
            }
        }
    }
}

#[test]
fn multiplier_scales_base_prize() {
    let catalog = Catalog::default();
    let result = calculate_prize(catalog.game(GameId::MysteryBox), 5, 5, 0, 3);

    assert_eq!(result.base_prize, 750);
    assert_eq!(result.rake, 75);
    assert_eq!(result.final_prize, 675);
    assert_eq!(result.multiplier, 3);
}

#[test]
fn double_or_nothing() {
    let won = calculate_double_or_nothing(true, 50);
    assert!(won.won);
    assert_eq!(won.base_prize, 100);
    assert_eq!(won.rake, 10);
    assert_eq!(won.final_prize, 90);
    assert_eq!(won.new_streak, 1);
    assert_eq!(won.multiplier, 2);

    let lost = calculate_double_or_nothing(false, 50);
    assert!(!lost.won);
    assert_eq!(lost.final_prize, 0);
    assert_eq!(lost.new_streak, 0);
}

#[test]
fn gauntlet_needs_a_perfect_run() {
    let won = calculate_gauntlet(10, 100);
    assert!(won.won);
    assert_eq!(won.base_prize, 1000);
    assert_eq!(won.rake, 100);
    assert_eq!(won.final_prize, 900);
    assert_eq!(won.new_streak, 1);
    assert_eq!(won.multiplier, 10);

    let lost = calculate_gauntlet(9, 100);
    assert!(!lost.won);
    assert_eq!(lost.final_prize, 0);
    assert!((lost.accuracy - 0.9).abs() < 1e-9);
}

#[test]
fn house_rules_are_configurable() {
    let catalog = Catalog::default();
    let options = ArcadeOptions::default()
        .with_rake_percent(0)
        .with_streak_cap_percent(20)
        .with_win_threshold_percent(80);

    let result = calculate_prize_with(&options, catalog.game(GameId::HandSnap), 20, 20, 5, 1);
    assert_eq!(result.rake, 0);
    assert_eq!(result.streak_bonus, 10);
    assert_eq!(result.final_prize, 60);

    let result = calculate_prize_with(&options, catalog.game(GameId::HandSnap), 15, 20, 0, 1);
    assert!(!result.won);

    let result = calculate_gauntlet_with(&options, 10, 100);
    assert_eq!(result.final_prize, 1000);
}

#[test]
fn mystery_table_boundaries() {
    assert_eq!(mystery_multiplier_for_roll(0.0), 1);
    assert_eq!(mystery_multiplier_for_roll(39.99), 1);
    assert_eq!(mystery_multiplier_for_roll(40.0), 2);
    assert_eq!(mystery_multiplier_for_roll(64.99), 2);
    assert_eq!(mystery_multiplier_for_roll(65.0), 3);
    assert_eq!(mystery_multiplier_for_roll(80.0), 5);
    assert_eq!(mystery_multiplier_for_roll(90.0), 7);
    assert_eq!(mystery_multiplier_for_roll(96.99), 7);
    assert_eq!(mystery_multiplier_for_roll(97.0), 10);
    assert_eq!(mystery_multiplier_for_roll(99.99), 10);
}

#[test]
fn mystery_rolls_follow_the_table() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut counts = [0u32; 11];

    for _ in 0..10_000 {
        let multiplier = roll_mystery_multiplier(&mut rng);
        assert!([1, 2, 3, 5, 7, 10].contains(&multiplier));
        counts[multiplier as usize] += 1;
    }

    assert!((3_600..4_400).contains(&counts[1]), "{counts:?}");
    assert!((2_100..2_900).contains(&counts[2]), "{counts:?}");
    assert!(counts[10] > 150 && counts[10] < 450, "{counts:?}");
}
