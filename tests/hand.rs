use core::cmp::Ordering;

use diamond_arcade::{
    Card, HandError, HandRank, compare_hands, evaluate, evaluate_hand, full_deck, parse_cards,
    shuffle_deck,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn cards(codes: &str) -> Vec<Card> {
    parse_cards(codes).unwrap()
}

fn hole(codes: &str) -> [Card; 2] {
    let cards = cards(codes);
    [cards[0], cards[1]]
}

/// Scores exactly five cards as (category, tiebreak ranks), the textbook way.
fn score_five(five: &[Card]) -> (u8, Vec<u8>) {
    let mut counts = [0u8; 13];
    for card in five {
        counts[usize::from(card.value())] += 1;
    }

    let mut groups: Vec<(u8, u8)> = (0..13u8)
        .filter(|&rank| counts[usize::from(rank)] > 0)
        .map(|rank| (counts[usize::from(rank)], rank))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let mut ranks: Vec<u8> = five.iter().map(Card::value).collect();
    ranks.sort_by(|a, b| b.cmp(a));

    let flush = five.iter().all(|card| card.suit == five[0].suit);
    let straight = if groups.len() == 5 && ranks[0] - ranks[4] == 4 {
        Some(ranks[0])
    } else if ranks == [12, 3, 2, 1, 0] {
        Some(3)
    } else {
        None
    };

    let shape: Vec<u8> = groups.iter().map(|group| group.0).collect();
    let tiebreak: Vec<u8> = groups.iter().map(|group| group.1).collect();

    match (straight, flush, shape.as_slice()) {
        (Some(high), true, _) => (8, vec![high]),
        (_, _, [4, 1]) => (7, tiebreak),
        (_, _, [3, 2]) => (6, tiebreak),
        (_, true, _) => (5, ranks),
        (Some(high), false, _) => (4, vec![high]),
        (_, _, [3, 1, 1]) => (3, tiebreak),
        (_, _, [2, 2, 1]) => (2, tiebreak),
        (_, _, [2, 1, 1, 1]) => (1, tiebreak),
        _ => (0, ranks),
    }
}

/// Best five-card score over every subset of `cards`.
fn brute_force(cards: &[Card]) -> (u8, Vec<u8>) {
    let mut best = None;

    for mask in 0u32..(1 << cards.len()) {
        if mask.count_ones() != 5 {
            continue;
        }
        let five: Vec<Card> = cards
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, card)| *card)
            .collect();
        best = best.max(Some(score_five(&five)));
    }

    best.unwrap()
}

fn category(rank: HandRank) -> u8 {
    match rank {
        HandRank::HighCard => 0,
        HandRank::Pair => 1,
        HandRank::TwoPair => 2,
        HandRank::ThreeOfAKind => 3,
        HandRank::Straight => 4,
        HandRank::Flush => 5,
        HandRank::FullHouse => 6,
        HandRank::FourOfAKind => 7,
        HandRank::StraightFlush | HandRank::RoyalFlush => 8,
    }
}

#[test]
fn royal_flush_scores_ten_thousand() {
    let hand = evaluate_hand(&hole("Ah Kh"), &cards("Qh Jh Th 2c 3d")).unwrap();
    assert_eq!(hand.rank, HandRank::RoyalFlush);
    assert_eq!(hand.value, 10_000);
    assert_eq!(hand.rank.name(), "Royal Flush");
}

#[test]
fn royal_flush_beats_king_high_straight_flush() {
    let royal = evaluate(&cards("Ts Js Qs Ks As 2d 3c"));
    let king_high = evaluate(&cards("9s Ts Js Qs Ks 2d 3c"));

    assert_eq!(king_high.rank, HandRank::StraightFlush);
    assert_eq!(king_high.value, 9_000 + 11);
    assert!(royal > king_high);
}

#[test]
fn wheel_is_five_high_straight() {
    let board = cards("3c 4s 5h 9d Kc");
    let wheel = evaluate_hand(&hole("Ah 2d"), &board).unwrap();
    assert_eq!(wheel.rank, HandRank::Straight);
    assert_eq!(wheel.value, 5_000 + 3);

    assert_eq!(
        compare_hands(&hole("Ah 2d"), &hole("6c 2s"), &board).unwrap(),
        Ordering::Less
    );
}

#[test]
fn steel_wheel_is_straight_flush() {
    let hand = evaluate(&cards("Ad 2d 3d 4d 5d Kc Qh"));
    assert_eq!(hand.rank, HandRank::StraightFlush);
    assert_eq!(hand.value, 9_000 + 3);
}

#[test]
fn two_trips_make_a_full_house() {
    let hand = evaluate(&cards("Kh Kd Kc Qh Qd Qc 2s"));
    assert_eq!(hand.rank, HandRank::FullHouse);
    assert_eq!(hand.value, 7_000 + 11 * 13 + 10);
}

#[test]
fn quads_kicker_is_best_remaining_card() {
    let hand = evaluate(&cards("9h 9d 9c 9s 2h 2d Ac"));
    assert_eq!(hand.rank, HandRank::FourOfAKind);
    assert_eq!(hand.value, 8_000 + 7 * 13 + 12);
    assert_eq!(hand.kickers, vec![12]);
}

#[test]
fn third_pair_can_play_as_kicker() {
    let hand = evaluate(&cards("Ah Ad Kh Kd 5c 5d 3s"));
    assert_eq!(hand.rank, HandRank::TwoPair);
    assert_eq!(hand.value, 3_000 + 12 * 13 + 11);
    assert_eq!(hand.kickers, vec![3]);

    let higher_kicker = evaluate(&cards("Ah Ad Kh Kd 5c 5d 7s"));
    assert_eq!(higher_kicker.kickers, vec![5]);
    assert!(higher_kicker > hand);
}

#[test]
fn flush_uses_top_five_suited_cards() {
    let hand = evaluate(&cards("2h 5h 8h Jh Kh 3h 4c"));
    assert_eq!(hand.rank, HandRank::Flush);
    assert_eq!(hand.value, 6_000 + 11);
    assert_eq!(hand.kickers, vec![11, 9, 6, 3, 1]);
}

#[test]
fn pair_kickers_break_ties() {
    let board = cards("8c 8d 2h 5s Jd");
    assert_eq!(
        compare_hands(&hole("Ah 3c"), &hole("Kh 3d"), &board).unwrap(),
        Ordering::Greater
    );
    assert_eq!(
        compare_hands(&hole("Ah 3c"), &hole("As 3d"), &board).unwrap(),
        Ordering::Equal
    );
}

#[test]
fn category_names_and_codes() {
    assert_eq!(HandRank::HighCard.name(), "High Card");
    assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
    assert_eq!(HandRank::FullHouse.base_value(), 7_000);
    assert_eq!(HandRank::RoyalFlush.base_value(), 10_000);
}

#[test]
fn works_on_flop_and_turn() {
    let flop = evaluate_hand(&hole("Ah Ad"), &cards("Ac 7d 2s")).unwrap();
    assert_eq!(flop.rank, HandRank::ThreeOfAKind);

    let turn = evaluate_hand(&hole("Ah Ad"), &cards("Ac 7d 2s 7h")).unwrap();
    assert_eq!(turn.rank, HandRank::FullHouse);
}

#[test]
fn rejects_bad_boards() {
    assert_eq!(
        evaluate_hand(&hole("Ah Kd"), &cards("2c 3c")).unwrap_err(),
        HandError::BoardSize(2)
    );
    assert_eq!(
        evaluate_hand(&hole("Ah Kd"), &cards("2c 3c 4c 5c 6c 7c")).unwrap_err(),
        HandError::BoardSize(6)
    );

    let ace = cards("Ah")[0];
    assert_eq!(
        evaluate_hand(&hole("Ah Kd"), &cards("Ah 3c 4c")).unwrap_err(),
        HandError::DuplicateCard(ace)
    );
    assert_eq!(
        compare_hands(&hole("Ah Kd"), &hole("Ah Qd"), &cards("2c 3c 4c")).unwrap_err(),
        HandError::DuplicateCard(ace)
    );
}

#[test]
fn ordering_matches_brute_force_on_river() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for _ in 0..2_000 {
        let deck = shuffle_deck(&full_deck(), &mut rng);
        let first = [deck[0], deck[1]];
        let second = [deck[2], deck[3]];
        let board = &deck[4..9];

        let mine = evaluate_hand(&first, board).unwrap();
        let theirs = evaluate_hand(&second, board).unwrap();

        let mut first_cards = first.to_vec();
        first_cards.extend_from_slice(board);
        let mut second_cards = second.to_vec();
        second_cards.extend_from_slice(board);
        let expected_mine = brute_force(&first_cards);
        let expected_theirs = brute_force(&second_cards);

        assert_eq!(category(mine.rank), expected_mine.0, "{first_cards:?}");
        assert_eq!(
            mine.cmp(&theirs),
            expected_mine.cmp(&expected_theirs),
            "{first:?} vs {second:?} on {board:?}"
        );
    }
}

#[test]
fn ordering_matches_brute_force_on_short_boards() {
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    for board_len in [3, 4] {
        for _ in 0..1_000 {
            let deck = shuffle_deck(&full_deck(), &mut rng);
            let first = [deck[0], deck[1]];
            let second = [deck[2], deck[3]];
            let board = &deck[4..4 + board_len];

            let mut first_cards = first.to_vec();
            first_cards.extend_from_slice(board);
            let mut second_cards = second.to_vec();
            second_cards.extend_from_slice(board);

            assert_eq!(
                compare_hands(&first, &second, board).unwrap(),
                brute_force(&first_cards).cmp(&brute_force(&second_cards)),
                "{first:?} vs {second:?} on {board:?}"
            );
        }
    }
}
