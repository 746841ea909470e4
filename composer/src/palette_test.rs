use super::*;
use crate::consts::{MIME_JSON, MIME_TEXT, UNKNOWN_ICON};

fn palettes() -> Palettes {
    Palettes::new(&SymbolMap::builtin())
}

#[test]
fn core_vocabulary_follows_word_order() {
    let tiles = core_vocabulary(&SymbolMap::builtin());
    assert_eq!(tiles.len(), CORE_WORDS.len());
    assert_eq!(tiles[0].word, "I");
    assert_eq!(tiles[3], Tile::new("GO", "/acc/symbols/go_,_to.svg"));
    assert_eq!(tiles.last().map(|t| t.word.as_str()), Some("HERE"));
}

#[test]
fn core_vocabulary_without_symbols_is_all_unknown() {
    let tiles = core_vocabulary(&SymbolMap::new());
    assert!(tiles.iter().all(|t| t.icon == UNKNOWN_ICON));
}

#[test]
fn new_palettes_have_no_suggestions_or_detections() {
    let p = palettes();
    assert!(p.tiles(PaletteKind::Suggestions).is_empty());
    assert!(p.tiles(PaletteKind::Detected).is_empty());
}

#[test]
fn set_symbols_reresolves_core_icons() {
    let mut p = Palettes::new(&SymbolMap::new());
    p.set_symbols(&SymbolMap::builtin());
    assert_eq!(p.tile(PaletteSlot::new(PaletteKind::Core, 3)).map(|t| t.icon.as_str()), Some("/acc/symbols/go_,_to.svg"));
}

#[test]
fn tile_out_of_range_is_none() {
    assert_eq!(palettes().tile(PaletteSlot::new(PaletteKind::Detected, 0)), None);
}

#[test]
fn find_ignores_case() {
    let p = palettes();
    assert_eq!(p.find(PaletteKind::Core, "thank you"), Some(36));
    assert_eq!(p.find(PaletteKind::Core, "ZEBRA"), None);
}

#[test]
fn drag_payload_encodes_structured_and_plain() {
    let p = palettes();
    let data = p.drag_payload(PaletteSlot::new(PaletteKind::Core, 3)).unwrap().encode();
    assert!(data.get_data(MIME_JSON).unwrap().contains("\"word\":\"GO\""));
    assert_eq!(data.get_data(MIME_TEXT), Some("GO"));
}

#[test]
fn drag_payload_of_missing_tile_is_none() {
    assert!(palettes().drag_payload(PaletteSlot::new(PaletteKind::Suggestions, 0)).is_none());
}

#[test]
fn kind_parses_names() {
    assert_eq!("core".parse::<PaletteKind>(), Ok(PaletteKind::Core));
    assert_eq!("Suggested".parse::<PaletteKind>(), Ok(PaletteKind::Suggestions));
    assert_eq!("detected".parse::<PaletteKind>(), Ok(PaletteKind::Detected));
    assert!("fringe".parse::<PaletteKind>().is_err());
}

#[test]
fn kind_display_matches_name() {
    assert_eq!(PaletteKind::Suggestions.to_string(), "suggested");
}
