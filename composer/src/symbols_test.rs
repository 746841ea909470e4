use super::*;

#[test]
fn builtin_covers_every_core_word() {
    let map = SymbolMap::builtin();
    for word in CORE_WORDS {
        assert_ne!(map.icon_for(word), UNKNOWN_ICON, "{word} has no builtin icon");
    }
}

#[test]
fn core_words_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for word in CORE_WORDS {
        assert!(seen.insert(word), "{word} listed twice");
    }
}

#[test]
fn unmapped_word_is_unknown() {
    assert_eq!(SymbolMap::builtin().icon_for("GIRAFFE"), UNKNOWN_ICON);
    assert_eq!(SymbolMap::new().icon_for("GO"), UNKNOWN_ICON);
}

#[test]
fn lookup_falls_back_to_uppercase() {
    let map = SymbolMap::builtin();
    assert_eq!(map.icon_for("go"), "/acc/symbols/go_,_to.svg");
}

#[test]
fn from_json_reads_flat_object() {
    let map = SymbolMap::from_json(r#"{"DOG":"/acc/dog.svg","CAT":"/acc/cat.svg"}"#).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.icon_for("DOG"), "/acc/dog.svg");
}

#[test]
fn from_json_rejects_non_object() {
    assert!(SymbolMap::from_json(r#"["DOG"]"#).is_err());
    assert!(SymbolMap::from_json(r#"{"DOG": 3}"#).is_err());
}

#[test]
fn from_response_takes_icon_table() {
    let response: CoreWordsResponse = serde_json::from_str(
        r#"{"core_words":["I","GO"],"icons":{"I":"/acc/i.svg","GO":"/acc/go.svg"},"total_words":2,"total_icons":2}"#,
    )
    .unwrap();
    assert_eq!(response.core_words, ["I", "GO"]);
    let map = SymbolMap::from_response(response);
    assert_eq!(map.icon_for("GO"), "/acc/go.svg");
}

#[test]
fn response_fields_default_when_absent() {
    let response: CoreWordsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.core_words.is_empty());
    assert!(response.icons.is_empty());
}

#[test]
fn tile_resolves_icon() {
    let map = SymbolMap::builtin();
    assert_eq!(map.tile("SEE"), Tile::new("SEE", "/acc/symbols/eyes.svg"));
    assert_eq!(map.tile("ZEBRA"), Tile::unknown("ZEBRA"));
}

#[test]
fn insert_overrides_entry() {
    let mut map = SymbolMap::builtin();
    map.insert("GO", "/custom/go.svg");
    assert_eq!(map.icon_for("GO"), "/custom/go.svg");
}
