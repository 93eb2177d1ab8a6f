//! CLI arcade example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use diamond_arcade::{
    Answer, Arcade, ArcadeOptions, Card, FeaturedGames, GameId, HandChoice, Question, Suit,
    time_until_reset_now,
};

fn main() {
    env_logger::init();

    println!("Diamond Arcade CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let arcade = Arcade::new(ArcadeOptions::default(), seed);
    let featured = arcade.featured_today();

    let mut diamonds: u64 = 200;
    let mut win_streak = 0;
    let mut session_id = 0;

    loop {
        let reset = time_until_reset_now();
        println!(
            "\nDiamonds: {diamonds} | win streak {win_streak} | rotation resets in {:02}:{:02}:{:02}",
            reset.hours, reset.minutes, reset.seconds
        );
        print_games(&arcade, &featured);

        let Some(game_id) = prompt_game(&arcade) else {
            println!("Goodbye.");
            break;
        };
        let game = arcade.game(game_id);

        if diamonds < game.entry_fee {
            println!("Not enough diamonds for {} ({}).", game.name, game.entry_fee);
            continue;
        }
        diamonds -= game.entry_fee;
        session_id += 1;

        let mut session = arcade.start_session(game_id, session_id);
        println!("\n{} {}: {}", game.icon, game.name, game.description);

        for round in 1..=game.questions_count {
            let question = match arcade.question(game_id) {
                Ok(question) => question,
                Err(err) => {
                    println!("Question error: {err}");
                    break;
                }
            };

            println!("\nQuestion {round}/{}", game.questions_count);
            print_question(&question);

            let started = Instant::now();
            let Some(answer) = prompt_answer(&question) else {
                return;
            };
            let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            if session.answer(&question, &answer, elapsed) {
                println!("{}", colorize("Correct!", "32"));
            } else {
                println!("{} {}", colorize("Wrong.", "31"), explain(&question));
            }
        }

        let result = arcade.settle(&session, win_streak, Some(&featured));
        win_streak = result.new_streak;
        diamonds += result.final_prize;

        println!(
            "\n{}/{} correct, score {}",
            session.correct_count, session.total_questions, session.score
        );
        if result.won {
            println!(
                "Won {} (base {} x{}, rake {}, streak bonus {})",
                result.final_prize,
                result.base_prize,
                result.multiplier,
                result.rake,
                result.streak_bonus
            );
        } else {
            println!("No payout this time.");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_game(arcade: &Arcade) -> Option<GameId> {
    loop {
        let input = prompt_line("Game (number or id): ");
        if input == "q" || input == "quit" {
            return None;
        }

        if let Ok(number) = input.parse::<usize>() {
            if let Some(game) = number.checked_sub(1).and_then(|i| arcade.catalog().games().get(i))
            {
                return Some(game.id);
            }
        }
        match arcade.catalog().find(&input) {
            Ok(game) => return Some(game.id),
            Err(err) => println!("{err}"),
        }
    }
}

fn prompt_answer(question: &Question) -> Option<Answer> {
    loop {
        let input = prompt_line("Answer: ");
        if input == "q" || input == "quit" {
            return None;
        }

        let answer = match question {
            Question::HandSnap(_) => input
                .parse::<u8>()
                .ok()
                .and_then(HandChoice::from_number)
                .map(Answer::Hand),
            Question::BoardNuts(_) | Question::ChipMath(_) => input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .map(Answer::Choice),
            Question::Showdown(_) => input
                .split_whitespace()
                .map(|n| n.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
                .collect::<Option<Vec<_>>>()
                .map(Answer::Ranking),
        };

        match answer {
            Some(answer) => return Some(answer),
            None => println!("Could not read that answer."),
        }
    }
}

fn print_games(arcade: &Arcade, featured: &FeaturedGames) {
    for (index, game) in arcade.catalog().games().iter().enumerate() {
        let tag = if game.id == featured.bonus_game {
            colorize(&format!("BONUS x{}", featured.bonus_multiplier), "33")
        } else if featured.is_featured(game.id) {
            colorize("featured", "36")
        } else {
            String::new()
        };
        println!(
            "{:>2}. {} {:<18} fee {:>3} | prize up to {:>4} | {:>2} questions {}",
            index + 1,
            game.icon,
            game.name,
            game.entry_fee,
            game.max_prize,
            game.questions_count,
            tag
        );
    }
}

fn print_question(question: &Question) {
    match question {
        Question::HandSnap(q) => {
            println!("Board: {}", format_cards(&q.board));
            println!("  1) {}", format_cards(&q.hand1));
            println!("  2) {}", format_cards(&q.hand2));
            println!("Which hand wins? (1 or 2)");
        }
        Question::BoardNuts(q) => {
            println!("Board: {}", format_cards(&q.board));
            for (index, option) in q.options.iter().enumerate() {
                println!("  {}) {}", index + 1, format_cards(option));
            }
            println!("Which holding is the nuts?");
        }
        Question::ChipMath(q) => {
            println!("Pot {}, villain bets {}.", q.pot, q.bet);
            for index in 0..q.options.len() {
                if let Some(label) = q.option_label(index) {
                    println!("  {}) {label}", index + 1);
                }
            }
            println!("What equity do you need to call?");
        }
        Question::Showdown(q) => {
            println!("Board: {}", format_cards(&q.board));
            for (index, hand) in q.hands.iter().enumerate() {
                println!("  {}) {}", index + 1, format_cards(hand));
            }
            println!("Rank the hands best to worst (e.g. 3 1 5 2 4)");
        }
    }
}

fn explain(question: &Question) -> String {
    match question {
        Question::HandSnap(q) => format!("Hand {} wins.", q.correct_answer.number()),
        Question::BoardNuts(q) => format!("{} (option {}).", q.explanation, q.correct_index + 1),
        Question::ChipMath(q) => format!("{}.", q.explanation),
        Question::Showdown(q) => {
            let order: Vec<String> = q.correct_order.iter().map(|i| (i + 1).to_string()).collect();
            format!("Order {}: {}.", order.join(" "), q.explanation)
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let face = diamond_arcade::format_card(*card);
    colorize(&face.display, color_code)
}
