use super::*;

fn dog_response() -> AnalysisResponse {
    AnalysisResponse::from_json(
        r#"{
            "detected": ["DOG"],
            "detectedTiles": [{"word": "DOG", "icon": "/acc/dog.svg"}],
            "suggested_words": ["I", "SEE", "DOG"],
            "icons": ["/acc/I.svg", "/acc/see.svg", "/acc/dog.svg"],
            "sentence": "I see dog"
        }"#,
    )
    .unwrap()
}

fn words(tiles: &[Tile]) -> Vec<&str> {
    tiles.iter().map(|t| t.word.as_str()).collect()
}

#[test]
fn parses_full_response() {
    let r = dog_response();
    assert_eq!(r.detected, ["DOG"]);
    assert_eq!(r.sentence, "I see dog");
    assert_eq!(r.detected_tiles.as_ref().map(Vec::len), Some(1));
}

#[test]
fn missing_fields_default() {
    let r = AnalysisResponse::from_json("{}").unwrap();
    assert!(r.detected.is_empty());
    assert!(r.detected_tiles.is_none());
    assert!(r.suggested_tiles().is_empty());
    assert!(r.detected_tiles().is_empty());
}

#[test]
fn detected_tiles_prefers_structured_list() {
    let tiles = dog_response().detected_tiles();
    assert_eq!(tiles, [Tile::new("DOG", "/acc/dog.svg")]);
}

#[test]
fn detected_tiles_falls_back_to_matching_suggestions() {
    let r = AnalysisResponse {
        detected: vec!["PIZZA".into(), "PERSON".into()],
        detected_tiles: Some(vec![]),
        suggested_words: vec!["I".into(), "WANT".into(), "PIZZA".into()],
        icons: vec!["/i.svg".into(), "/want.svg".into(), "/pizza.svg".into()],
        sentence: String::new(),
    };
    let tiles = r.detected_tiles();
    assert_eq!(tiles, [Tile::new("PIZZA", "/pizza.svg"), Tile::unknown("PERSON")]);
}

#[test]
fn detected_fallback_with_short_icon_list_is_unknown() {
    let r = AnalysisResponse {
        detected: vec!["DOG".into()],
        suggested_words: vec!["I".into(), "SEE".into(), "DOG".into()],
        icons: vec!["/i.svg".into()],
        ..AnalysisResponse::default()
    };
    assert_eq!(r.detected_tiles(), [Tile::unknown("DOG")]);
}

#[test]
fn suggested_tiles_zip_in_order() {
    let tiles = dog_response().suggested_tiles();
    assert_eq!(words(&tiles), ["I", "SEE", "DOG"]);
    assert_eq!(tiles[1].icon, "/acc/see.svg");
}

#[test]
fn suggested_tiles_default_icon_on_mismatch() {
    let r = AnalysisResponse {
        suggested_words: vec!["I".into(), "SEE".into(), "NOTHING".into()],
        icons: vec!["/i.svg".into(), String::new()],
        ..AnalysisResponse::default()
    };
    let tiles = r.suggested_tiles();
    assert_eq!(tiles[0].icon, "/i.svg");
    assert_eq!(tiles[1].icon, UNKNOWN_ICON);
    assert_eq!(tiles[2].icon, UNKNOWN_ICON);
}

#[test]
fn rejects_wrong_shapes() {
    assert!(AnalysisResponse::from_json(r#"{"detected": "DOG"}"#).is_err());
    assert!(AnalysisResponse::from_json("[]").is_err());
}
