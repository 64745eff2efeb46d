//! Engine integration tests.

use daifugo::{
    Card, ParseCardError, Play, PlayError, PlayKind, Rank, Round, RoundEntry, RoundError,
    RuleOptions, StraightLength, Suit, SwapError, Turn, choose_play, deal, generate_plays,
    group_by_rank, group_by_suit, is_valid_play, is_valid_play_with, is_valid_submission,
    new_deck, parse_cards, shuffled_deck, swap_cards, swap_partner, DECK_SIZE, HAND_SIZE,
};

fn cards(tokens: &str) -> Vec<Card> {
    parse_cards(tokens.split_whitespace()).unwrap()
}

fn play(tokens: &str) -> Play {
    Play::new(cards(tokens)).unwrap()
}

fn turn(tokens: &str) -> Turn {
    Turn::Play(play(tokens))
}

fn round(turns: &[&str]) -> Round {
    Round::from_turns(turns.iter().map(|t| {
        if t.is_empty() {
            Turn::Pass
        } else {
            turn(t)
        }
    }))
    .unwrap()
}

fn count_kind(plays: &[Play], kind: PlayKind) -> usize {
    plays.iter().filter(|p| p.kind() == kind).count()
}

#[test]
fn card_tokens_round_trip() {
    for card in new_deck() {
        let token = card.to_string();
        assert_eq!(token.len(), 2);
        assert_eq!(token.parse::<Card>().unwrap(), card);
    }
    assert_eq!(
        "0D".parse::<Card>().unwrap(),
        Card::new(Rank::Ten, Suit::Diamonds)
    );
    assert_eq!("10D".parse::<Card>(), Err(ParseCardError::Length));
    assert_eq!("1D".parse::<Card>(), Err(ParseCardError::Rank('1')));
    assert_eq!("3X".parse::<Card>(), Err(ParseCardError::Suit('X')));
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Length));
}

#[test]
fn ranks_follow_game_order() {
    assert!(Rank::Two > Rank::Ace);
    assert!(Rank::Three < Rank::Four);
    assert!(Rank::Ten < Rank::Jack);
    assert_eq!(Rank::ALL.first(), Some(&Rank::Three));
    assert_eq!(Rank::ALL.last(), Some(&Rank::Two));
}

#[test]
fn grouping_by_rank_and_suit() {
    let hand = cards("7S 9D 7H 7S 0D");
    let by_rank = group_by_rank(&hand);
    assert_eq!(by_rank.get(Rank::Seven), &[Suit::Spades, Suit::Hearts]);
    assert_eq!(by_rank.get(Rank::Nine), &[Suit::Diamonds]);
    assert!(by_rank.get(Rank::Two).is_empty());
    assert_eq!(by_rank.len(), 3);

    let by_suit = group_by_suit(&hand);
    assert_eq!(by_suit.get(Suit::Diamonds), &[Rank::Nine, Rank::Ten]);
    assert_eq!(by_suit.len(), 3);

    assert!(group_by_rank(&[]).is_empty());
    assert!(group_by_suit(&[]).is_empty());
}

#[test]
fn play_classification() {
    assert_eq!(play("4C").kind(), PlayKind::Single);
    assert_eq!(play("8S 8H").kind(), PlayKind::Pair);
    assert_eq!(play("8S 8H 8C").kind(), PlayKind::Triple);
    assert_eq!(play("8S 8H 8C 8D").kind(), PlayKind::Quad);
    assert_eq!(play("KD AD QD JD").kind(), PlayKind::Straight(4));
    assert_eq!(play("KD AD 2D").kind(), PlayKind::Straight(3));

    let run = play("KD AD QD JD");
    assert_eq!(run.cards(), &cards("JD QD KD AD")[..]);
    assert_eq!(run.highest(), Card::new(Rank::Ace, Suit::Diamonds));
    assert_eq!(run.arity(), 0);
    assert_eq!(run.rank(), None);
    assert_eq!(play("8S 8H").rank(), Some(Rank::Eight));

    assert_eq!(Play::new(Vec::new()), Err(PlayError::Empty));
    assert_eq!(
        Play::new(cards("8S 8S")),
        Err(PlayError::DuplicateCard(Card::new(Rank::Eight, Suit::Spades)))
    );
    assert_eq!(
        Play::new(cards("3S 4S 6S")),
        Err(PlayError::Unrecognised { len: 3 })
    );
    assert_eq!(
        Play::new(cards("3S 4H 5S")),
        Err(PlayError::Unrecognised { len: 3 })
    );
    assert_eq!(
        Play::new(cards("AS 2S")),
        Err(PlayError::Unrecognised { len: 2 })
    );
    // No wraparound from two back to three.
    assert!(Play::new(cards("AS 2S 3S")).is_err());
}

#[test]
fn four_of_a_kind_generation_is_complete() {
    let plays = generate_plays(&cards("9S 9H 9D 9C"));
    assert_eq!(count_kind(&plays, PlayKind::Single), 4);
    assert_eq!(count_kind(&plays, PlayKind::Pair), 6);
    assert_eq!(count_kind(&plays, PlayKind::Triple), 4);
    assert_eq!(count_kind(&plays, PlayKind::Quad), 1);
    assert_eq!(plays.len(), 15);
}

#[test]
fn straights_never_cross_a_gap() {
    let plays = generate_plays(&cards("3S 4S 5S JS QS KS"));
    let straights: Vec<Vec<Card>> = plays
        .iter()
        .filter(|p| p.is_straight())
        .map(|p| p.cards().to_vec())
        .collect();
    assert_eq!(straights, vec![cards("3S 4S 5S"), cards("JS QS KS")]);
}

#[test]
fn straights_include_every_sub_run() {
    let plays = generate_plays(&cards("7H 3H 5H 6H 4H"));
    let straights: Vec<Vec<Card>> = plays
        .iter()
        .filter(|p| p.is_straight())
        .map(|p| p.cards().to_vec())
        .collect();
    assert_eq!(
        straights,
        vec![
            cards("3H 4H 5H"),
            cards("3H 4H 5H 6H"),
            cards("3H 4H 5H 6H 7H"),
            cards("4H 5H 6H"),
            cards("4H 5H 6H 7H"),
            cards("5H 6H 7H"),
        ]
    );
}

#[test]
fn generation_on_mixed_hand() {
    let hand = cards("3S 4S 5S 5H 5D 2C");
    let plays = generate_plays(&hand);
    assert_eq!(count_kind(&plays, PlayKind::Single), 6);
    assert_eq!(count_kind(&plays, PlayKind::Pair), 3);
    assert_eq!(count_kind(&plays, PlayKind::Triple), 1);
    assert_eq!(count_kind(&plays, PlayKind::Straight(3)), 1);
    assert_eq!(plays.len(), 11);

    for p in &plays {
        assert!(p.cards().iter().all(|c| hand.contains(c)));
    }
    assert!(generate_plays(&[]).is_empty());
}

#[test]
fn generation_is_deterministic() {
    let hand = cards("0S JS QS 0H 0C 4D");
    assert_eq!(generate_plays(&hand), generate_plays(&hand));
    assert_eq!(hand, cards("0S JS QS 0H 0C 4D"));
}

#[test]
fn pass_needs_a_lead() {
    assert!(!is_valid_play(&Turn::Pass, &Round::new()));
    assert!(is_valid_play(&Turn::Pass, &round(&["3S"])));
    assert!(is_valid_play(&Turn::Pass, &round(&["3S", ""])));
}

#[test]
fn any_play_may_lead() {
    let empty = Round::new();
    assert!(is_valid_play(&turn("3S"), &empty));
    assert!(is_valid_play(&turn("8S 8H 8C"), &empty));
    assert!(is_valid_play(&turn("3S 4S 5S 6S"), &empty));
}

#[test]
fn singles_compare_by_rank() {
    assert!(is_valid_play(&turn("2H"), &round(&["AS"])));
    assert!(!is_valid_play(&turn("AH"), &round(&["2S"])));
    assert!(!is_valid_play(&turn("9H"), &round(&["9S"])));
    assert!(is_valid_play(&turn("JD"), &round(&["0C"])));
}

#[test]
fn pair_lead_gates_arity() {
    let lead = round(&["7S 7H"]);
    assert!(is_valid_play(&turn("8D 8C"), &lead));
    assert!(!is_valid_play(&turn("6D 6C"), &lead));
    assert!(!is_valid_play(&turn("7D 7C"), &lead));
    assert!(!is_valid_play(&turn("2D"), &lead));
    assert!(!is_valid_play(&turn("KD KC KH"), &lead));
    assert!(!is_valid_play(&turn("9D 0D JD"), &lead));
    assert!(!is_valid_submission(&cards("9D KC"), &lead));
}

#[test]
fn n_of_a_kind_beats_last_live_play() {
    let r = round(&["7S 7H", "9D 9C", ""]);
    assert!(!is_valid_play(&turn("8D 8C"), &r));
    assert!(is_valid_play(&turn("0D 0C"), &r));
}

#[test]
fn n_of_a_kind_ignores_suits() {
    let r = round(&["5S 5H", "6S 6H"]);
    assert!(!r.is_on_suit());
    assert!(is_valid_play(&turn("7D 7C"), &r));
}

#[test]
fn single_lead_rejects_multi_card_plays() {
    let lead = round(&["5S"]);
    assert!(!is_valid_play(&turn("6S 7S 8S"), &lead));
    assert!(!is_valid_play(&turn("6S 6H"), &lead));
}

#[test]
fn straight_lead_needs_a_higher_straight() {
    let lead = round(&["3S 4S 5S"]);
    assert!(is_valid_play(&turn("4H 5H 6H"), &lead));
    assert!(!is_valid_play(&turn("3H 4H 5H"), &lead));
    assert!(!is_valid_play(&turn("9H"), &lead));
    assert!(!is_valid_play(&turn("9H 9D 9S"), &lead));
    assert!(!is_valid_submission(&cards("6H 8H 9H"), &lead));
}

#[test]
fn straight_length_rule() {
    let lead = round(&["3S 4S 5S 6S 7S"]);
    let short = turn("9H 0H JH");

    assert!(is_valid_play(&short, &lead));

    let strict = RuleOptions::default().with_straight_length(StraightLength::Match);
    assert!(!is_valid_play_with(&short, &lead, &strict));
    assert!(is_valid_play_with(&turn("7H 8H 9H 0H JH"), &lead, &strict));
}

#[test]
fn on_suit_round_forces_suit() {
    let r = round(&["5S", "6S"]);
    assert!(r.is_on_suit());
    assert!(!is_valid_play(&turn("7H"), &r));
    assert!(is_valid_play(&turn("7S"), &r));
    assert!(!is_valid_play(&turn("6S"), &r));

    let relaxed = RuleOptions::default().with_suit_lock(false);
    assert!(is_valid_play_with(&turn("7H"), &r, &relaxed));
}

#[test]
fn on_suit_is_decided_by_first_response() {
    let r = round(&["5S", "", "6H"]);
    assert!(!r.is_on_suit());
    assert!(is_valid_play(&turn("7D"), &r));

    let locked = round(&["5S", "", "6S", "", "8S"]);
    assert!(locked.is_on_suit());
    assert!(!is_valid_play(&turn("9H"), &locked));
    assert!(is_valid_play(&turn("9S"), &locked));

    assert!(!round(&["5S"]).is_on_suit());
    assert!(!round(&["5S", ""]).is_on_suit());
}

#[test]
fn on_suit_straights_compare_top_cards() {
    let r = round(&["3D 4D 5D", "6D 7D 8D"]);
    assert!(r.is_on_suit());
    assert!(!is_valid_play(&turn("7C 8C 9C"), &r));
    assert!(is_valid_play(&turn("9D 0D JD"), &r));
}

#[test]
fn round_accessors() {
    assert_eq!(
        Round::from_turns([Turn::Pass]),
        Err(RoundError::PassBeforeLead)
    );

    let mut r = Round::new();
    assert_eq!(r.push(Turn::Pass), Err(RoundError::PassBeforeLead));
    assert!(r.last_live_play().is_none());

    r.push(turn("4C")).unwrap();
    r.push(turn("6C")).unwrap();
    r.push(Turn::Pass).unwrap();
    r.push(Turn::Pass).unwrap();

    assert_eq!(r.len(), 4);
    assert_eq!(r.lead(), Some(&play("4C")));
    assert_eq!(r.last_live_play(), Some(&play("6C")));
    assert!(matches!(r.entries()[0], RoundEntry::Lead(_)));
    assert!(matches!(r.entries()[1], RoundEntry::Follow(_)));
    assert_eq!(r.entries()[3], RoundEntry::Passed);
    assert_eq!(Turn::Pass.arity(), 0);
    assert_eq!(turn("QS QH QD").arity(), 3);
}

#[test]
fn submissions_from_untrusted_players() {
    let r = round(&["5S"]);
    assert!(is_valid_submission(&cards("9C"), &r));
    assert!(!is_valid_submission(&[], &r));
    assert!(!is_valid_submission(&cards("9C 9C"), &Round::new()));
    assert!(!is_valid_submission(&cards("3S 4H 9D"), &Round::new()));
}

#[test]
fn dealing_is_seeded() {
    let hands = deal(42);
    assert_eq!(hands, deal(42));
    assert_ne!(shuffled_deck(1), shuffled_deck(2));

    let mut all: Vec<Card> = hands.iter().flatten().copied().collect();
    assert_eq!(all.len(), DECK_SIZE);
    assert!(hands.iter().all(|h| h.len() == HAND_SIZE));
    all.sort_by_key(|c| c.index());
    all.dedup();
    assert_eq!(all.len(), DECK_SIZE);
}

#[test]
fn swap_rules_per_seat() {
    let hand = cards("3S 2H 5D KD 2C 4C");
    assert_eq!(swap_cards(&hand, 0).unwrap(), cards("2H 2C"));
    assert_eq!(swap_cards(&hand, 1).unwrap(), cards("2H"));
    assert_eq!(swap_cards(&hand, 2).unwrap(), cards("3S"));
    assert_eq!(swap_cards(&hand, 3).unwrap(), cards("3S 4C"));
    assert_eq!(hand, cards("3S 2H 5D KD 2C 4C"));

    assert_eq!(swap_cards(&hand, 4), Err(SwapError::InvalidSeat(4)));
    assert_eq!(
        swap_cards(&cards("3S"), 0),
        Err(SwapError::NotEnoughCards)
    );

    assert_eq!(swap_partner(0), Ok(3));
    assert_eq!(swap_partner(1), Ok(2));
    assert_eq!(swap_partner(2), Ok(1));
    assert_eq!(swap_partner(3), Ok(0));
    assert_eq!(swap_partner(9), Err(SwapError::InvalidSeat(9)));
}

#[test]
fn policy_picks_cheapest_valid_play() {
    let hand = cards("4S 5S 6S 6H 9D");

    // Opening: lowest top card, shedding more on ties.
    assert_eq!(choose_play(&Round::new(), &hand), turn("4S"));

    assert_eq!(choose_play(&round(&["5D"]), &hand), turn("6S"));
    assert_eq!(choose_play(&round(&["5D 5C"]), &hand), turn("6S 6H"));
    assert_eq!(choose_play(&round(&["3H 4H 5H"]), &hand), turn("4S 5S 6S"));
    assert_eq!(choose_play(&round(&["2D"]), &hand), Turn::Pass);
    assert_eq!(choose_play(&round(&["7D", "8D"]), &hand), turn("9D"));
}
