//! A simple turn policy built on the generator and validator.

use crate::card::Card;
use crate::generate::generate_plays;
use crate::play::{Play, Turn};
use crate::round::Round;
use crate::validate::is_valid_play;

/// Picks the cheapest legal turn for `hand` in `round`.
///
/// Among valid plays, the one with the lowest top card wins; ties go to the
/// play shedding more cards, then to generation order. Passes if nothing is
/// valid.
///
/// ```
/// use daifugo::{Play, Round, Turn, choose_play, parse_cards};
///
/// let hand = parse_cards(["4H", "9S", "9D", "2C"]).unwrap();
/// let lead = Play::new(parse_cards(["8C"]).unwrap()).unwrap();
///
/// let Turn::Play(play) = choose_play(&Round::with_lead(lead), &hand) else {
///     panic!("expected a play");
/// };
/// assert_eq!(play.cards(), &parse_cards(["9S"]).unwrap()[..]);
/// ```
#[must_use]
pub fn choose_play(round: &Round, hand: &[Card]) -> Turn {
    generate_plays(hand)
        .into_iter()
        .map(Turn::Play)
        .filter(|turn| is_valid_play(turn, round))
        .min_by_key(|turn| turn.play().map(cost))
        .unwrap_or(Turn::Pass)
}

fn cost(play: &Play) -> (usize, core::cmp::Reverse<usize>) {
    (play.highest().rank.index(), core::cmp::Reverse(play.len()))
}
