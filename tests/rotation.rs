use chrono::{Duration, NaiveDate, TimeZone, Utc};
use diamond_arcade::{
    ArcadeOptions, Catalog, GameId, SeededRandom, daily_featured_games, daily_featured_games_with,
    seed_for_date, time_until_reset,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn seed_uses_zero_based_month() {
    assert_eq!(seed_for_date(date(2024, 1, 1)), "2024-0-1");
    assert_eq!(seed_for_date(date(2024, 12, 31)), "2024-11-31");
}

#[test]
fn empty_seed_stays_at_zero() {
    let draws: Vec<f64> = SeededRandom::new("").take(3).collect();
    assert_eq!(draws, vec![0.0, 0.0, 0.0]);
}

#[test]
fn first_draw_is_fractional_sine_of_hash() {
    let mut random = SeededRandom::new("a");
    let expected = libm::sin(97.0) * 10_000.0;
    assert_eq!(random.next_f64(), expected - libm::floor(expected));

    let mut random = SeededRandom::new("ab");
    let expected = libm::sin(3105.0) * 10_000.0;
    assert_eq!(random.next_f64(), expected - libm::floor(expected));
}

#[test]
fn draws_are_pinned_for_known_dates() {
    let cases: [(&str, [f64; 6]); 3] = [
        (
            "2024-0-1",
            [
                0.673_427_924_343_968_7,
                0.011_181_705_426_679_4,
                0.027_631_892_016_870_552,
                0.439_653_911_316_781_9,
                0.145_906_449_993_617_57,
                0.397_381_597_181_720_3,
            ],
        ),
        (
            "2024-6-4",
            [
                0.162_454_879_354_299_92,
                0.669_170_342_497_636_7,
                0.688_767_153_306_344,
                0.177_319_636_124_593_67,
                0.940_150_545_228_789_3,
                0.259_593_615_472_113,
            ],
        ),
        (
            "2025-11-31",
            [
                0.713_868_611_288_035,
                0.904_487_173_850_611_7,
                0.829_703_636_094_564,
                0.664_133_928_137_744_1,
                0.645_348_620_700_588_1,
                0.733_337_878_353_268,
            ],
        ),
    ];

    for (seed, expected) in cases {
        let draws: Vec<f64> = SeededRandom::new(seed).take(6).collect();
        assert_eq!(draws, expected, "{seed}");
    }
}

#[test]
fn featured_games_are_pinned_for_known_dates() {
    use GameId::*;

    let catalog = Catalog::default();
    let cases = [
        (date(2024, 1, 1), [Showdown, ChipMath, MysteryBox, BoardNuts]),
        (date(2024, 2, 29), [DoubleOrNothing, TheGauntlet, BoardNuts, Showdown]),
        (date(2024, 7, 4), [MysteryBox, TheGauntlet, ChipMath, HandSnap]),
        (date(2025, 12, 31), [HandSnap, Showdown, BoardNuts, ChipMath]),
        (date(2026, 10, 18), [HandSnap, BoardNuts, MysteryBox, ChipMath]),
    ];

    for (day, expected) in cases {
        let featured = daily_featured_games(&catalog, &seed_for_date(day));
        assert_eq!(featured.games, expected, "{day}");
        assert_eq!(featured.bonus_game, expected[0], "{day}");
    }
}

#[test]
fn draws_follow_libm_for_a_decade_of_dates() {
    let start = date(2024, 1, 1);

    for offset in 0..3650 {
        let day = start + Duration::days(offset);
        let seed = seed_for_date(day);

        let hash = seed
            .encode_utf16()
            .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
        let mut state = f64::from(hash);
        let expected: Vec<f64> = (0..8)
            .map(|_| {
                state = libm::sin(state) * 10_000.0;
                state - libm::floor(state)
            })
            .collect();

        let draws: Vec<f64> = SeededRandom::new(&seed).take(8).collect();
        assert_eq!(draws, expected, "{day}");
    }
}

#[test]
fn draws_are_reproducible_and_in_range() {
    let first: Vec<f64> = SeededRandom::new("2024-5-1").take(50).collect();
    let second: Vec<f64> = SeededRandom::new("2024-5-1").take(50).collect();
    assert_eq!(first, second);

    for draw in first {
        assert!((0.0..1.0).contains(&draw), "{draw}");
    }
}

#[test]
fn featured_games_are_stable_for_a_date() {
    let catalog = Catalog::default();
    let seed = seed_for_date(date(2024, 3, 15));

    let first = daily_featured_games(&catalog, &seed);
    let second = daily_featured_games(&catalog, &seed);
    assert_eq!(first, second);
}

#[test]
fn featured_games_are_distinct_with_bonus_first() {
    let catalog = Catalog::default();

    for day in 1..=28 {
        let featured = daily_featured_games(&catalog, &seed_for_date(date(2025, 2, day)));

        assert_eq!(featured.games.len(), 4);
        assert_eq!(featured.bonus_game, featured.games[0]);
        assert_eq!(featured.bonus_multiplier, 2);
        for (i, game) in featured.games.iter().enumerate() {
            assert!(!featured.games[i + 1..].contains(game));
            assert!(featured.is_featured(*game));
        }

        assert_eq!(featured.multiplier_for(featured.bonus_game), 2);
        for game in GameId::ALL {
            if game != featured.bonus_game {
                assert_eq!(featured.multiplier_for(game), 1);
            }
        }
    }
}

#[test]
fn featured_games_rotate_across_days() {
    let catalog = Catalog::default();
    let bonus_games: Vec<GameId> = (1..=31)
        .map(|day| daily_featured_games(&catalog, &seed_for_date(date(2024, 7, day))).bonus_game)
        .collect();

    assert!(bonus_games.iter().any(|game| *game != bonus_games[0]));
}

#[test]
fn featured_count_follows_options() {
    let catalog = Catalog::default();

    let options = ArcadeOptions::default()
        .with_featured_count(10)
        .with_bonus_multiplier(3);
    let featured = daily_featured_games_with(&options, &catalog, "2024-0-1");
    assert_eq!(featured.games.len(), 7);
    assert_eq!(featured.bonus_multiplier, 3);

    let options = ArcadeOptions::default().with_featured_count(0);
    let featured = daily_featured_games_with(&options, &catalog, "2024-0-1");
    assert_eq!(featured.games, vec![featured.bonus_game]);
}

#[test]
fn countdown_to_midnight() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 21, 29, 15).unwrap();
    let countdown = time_until_reset(now);
    assert_eq!(
        (countdown.hours, countdown.minutes, countdown.seconds),
        (2, 30, 45)
    );

    let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let countdown = time_until_reset(now);
    assert_eq!(
        (countdown.hours, countdown.minutes, countdown.seconds),
        (0, 0, 1)
    );

    let countdown = time_until_reset(now + Duration::milliseconds(500));
    assert_eq!(
        (countdown.hours, countdown.minutes, countdown.seconds),
        (0, 0, 0)
    );
}

#[test]
fn countdown_at_midnight_is_a_full_day() {
    let now = Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap();
    let countdown = time_until_reset(now);
    assert_eq!(
        (countdown.hours, countdown.minutes, countdown.seconds),
        (24, 0, 0)
    );

    let mut now = now;
    for _ in 0..48 {
        now += Duration::minutes(37);
        assert!(time_until_reset(now).hours < 24);
    }
}
