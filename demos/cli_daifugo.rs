//! CLI Daifugo example: you sit at seat 0 against three policy-driven seats.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use daifugo::{
    Card, Play, Round, Suit, TABLE_SIZE, Turn, choose_play, deal, is_valid_play,
    is_valid_submission, parse_cards, swap_cards, swap_partner,
};

const HUMAN: usize = 0;

fn main() {
    println!("Daifugo CLI example (type 'q' to quit, 'p' to pass)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut hands = deal(seed);
    swap_all(&mut hands);

    let mut leader = HUMAN;
    loop {
        let Some(winner) = play_round(&mut hands, &mut leader) else {
            println!("Goodbye.");
            return;
        };
        if let Some(seat) = winner {
            println!("Seat {seat} is out of cards and wins!");
            return;
        }
    }
}

/// Plays one round. Returns `None` if the human quit, `Some(Some(seat))`
/// if a seat emptied its hand.
fn play_round(hands: &mut [Vec<Card>; TABLE_SIZE], leader: &mut usize) -> Option<Option<usize>> {
    let mut round = Round::new();
    let mut seat = *leader;
    let mut passes = 0;

    println!("\n--- New round, seat {seat} leads ---");
    while passes < TABLE_SIZE - 1 {
        let turn = if seat == HUMAN {
            human_turn(&round, &hands[seat])?
        } else {
            choose_play(&round, &hands[seat])
        };

        match &turn {
            Turn::Play(play) => {
                println!("Seat {seat} plays {}", format_cards(play.cards()));
                remove_cards(&mut hands[seat], play.cards());
                *leader = seat;
                passes = 0;
            }
            Turn::Pass => {
                println!("Seat {seat} passes");
                passes += 1;
            }
        }
        if round.push(turn).is_err() {
            println!("Seat {seat} cannot open a round with a pass");
            return None;
        }
        if hands[seat].is_empty() {
            return Some(Some(seat));
        }
        seat = (seat + 1) % TABLE_SIZE;
    }
    Some(None)
}

fn human_turn(round: &Round, hand: &[Card]) -> Option<Turn> {
    println!("Your hand: {}", format_cards(hand));
    if let Some(last) = round.last_live_play() {
        let lock = if round.is_on_suit() { " (on-suit)" } else { "" };
        println!("To beat: {}{lock}", format_cards(last.cards()));
    }

    loop {
        let input = prompt_line("Your play: ");
        match input.as_str() {
            "Q" | "QUIT" => return None,
            "P" | "PASS" => {
                if is_valid_play(&Turn::Pass, round) {
                    return Some(Turn::Pass);
                }
                println!("You must lead this round.");
                continue;
            }
            _ => {}
        }

        let cards = match parse_cards(input.split_whitespace()) {
            Ok(cards) => cards,
            Err(err) => {
                println!("Could not read cards: {err}");
                continue;
            }
        };
        if !cards.iter().all(|c| hand.contains(c)) {
            println!("You do not hold all of those cards.");
            continue;
        }
        if !is_valid_submission(&cards, round) {
            println!("That play is not allowed here.");
            continue;
        }
        match Play::new(cards) {
            Ok(play) => return Some(Turn::Play(play)),
            Err(err) => println!("Not a play: {err}"),
        }
    }
}

fn swap_all(hands: &mut [Vec<Card>; TABLE_SIZE]) {
    let mut given = Vec::with_capacity(TABLE_SIZE);
    for (seat, hand) in hands.iter().enumerate() {
        let seat = seat as u8;
        match (swap_cards(hand, seat), swap_partner(seat)) {
            (Ok(cards), Ok(to)) => given.push((seat as usize, to as usize, cards)),
            (Err(err), _) | (_, Err(err)) => println!("Swap skipped for seat {seat}: {err}"),
        }
    }
    for (from, to, cards) in given {
        remove_cards(&mut hands[from], &cards);
        if from == HUMAN || to == HUMAN {
            println!("Seat {from} gives {} to seat {to}", format_cards(&cards));
        }
        hands[to].extend(cards);
    }
    for hand in hands.iter_mut() {
        hand.sort_by_key(|c| (c.rank, c.suit.index()));
    }
}

fn remove_cards(hand: &mut Vec<Card>, cards: &[Card]) {
    hand.retain(|c| !cards.contains(c));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_uppercase()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
