//! Serialization tests for the persisted log format.

use daifugo::{Card, Play, Turn, parse_cards};

#[test]
fn cards_serialize_as_tokens() {
    let cards = parse_cards(["0D", "2S", "3C"]).unwrap();
    let json = serde_json::to_string(&cards).unwrap();
    assert_eq!(json, r#"["0D","2S","3C"]"#);
    assert_eq!(serde_json::from_str::<Vec<Card>>(&json).unwrap(), cards);
    assert!(serde_json::from_str::<Card>(r#""10D""#).is_err());
}

#[test]
fn turns_serialize_as_optional_plays() {
    let straight = Play::new(parse_cards(["5H", "3H", "4H"]).unwrap()).unwrap();
    let turns = vec![Turn::Play(straight), Turn::Pass];

    let json = serde_json::to_string(&turns).unwrap();
    assert_eq!(json, r#"[["3H","4H","5H"],null]"#);
    assert_eq!(serde_json::from_str::<Vec<Turn>>(&json).unwrap(), turns);
}

#[test]
fn malformed_plays_are_refused() {
    assert!(serde_json::from_str::<Play>(r#"["3H","4S","9D"]"#).is_err());
    assert!(serde_json::from_str::<Play>("[]").is_err());
}
