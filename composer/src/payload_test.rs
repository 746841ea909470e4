use super::*;

fn go() -> Tile {
    Tile::new("GO", "/acc/symbols/go_,_to.svg")
}

// =============================================================
// TransferData
// =============================================================

#[test]
fn transfer_data_empty_value_reads_as_absent() {
    let mut data = TransferData::new(DropEffect::Copy);
    data.set_data(MIME_JSON, "");
    assert_eq!(data.get_data(MIME_JSON), None);
}

#[test]
fn transfer_data_set_replaces_value() {
    let mut data = TransferData::new(DropEffect::Move);
    data.set_data(MIME_TEXT, "1");
    data.set_data(MIME_TEXT, "2");
    assert_eq!(data.get_data(MIME_TEXT), Some("2"));
}

#[test]
fn drop_effect_names() {
    assert_eq!(DropEffect::Copy.as_str(), "copy");
    assert_eq!(DropEffect::Move.as_str(), "move");
}

// =============================================================
// encode
// =============================================================

#[test]
fn external_sets_json_and_plain_word() {
    let data = DragPayload::External(go()).encode();
    let json: serde_json::Value = serde_json::from_str(data.get_data(MIME_JSON).unwrap()).unwrap();
    assert_eq!(json, serde_json::json!({ "word": "GO", "icon": "/acc/symbols/go_,_to.svg" }));
    assert_eq!(data.get_data(MIME_TEXT), Some("GO"));
    assert_eq!(data.effect_allowed(), DropEffect::Copy);
}

#[test]
fn internal_sets_only_plain_index() {
    let data = DragPayload::Internal(12).encode();
    assert_eq!(data.types().collect::<Vec<_>>(), [MIME_TEXT]);
    assert_eq!(data.get_data(MIME_TEXT), Some("12"));
    assert_eq!(data.effect_allowed(), DropEffect::Move);
}

// =============================================================
// decode
// =============================================================

#[test]
fn decode_external_recovers_tile() {
    let data = DragPayload::External(go()).encode();
    assert_eq!(DragPayload::decode(&data), Some(DragPayload::External(go())));
}

#[test]
fn decode_internal_recovers_index() {
    let data = DragPayload::Internal(3).encode();
    assert_eq!(DragPayload::decode(&data), Some(DragPayload::Internal(3)));
}

#[test]
fn decode_malformed_json_with_word_is_no_payload() {
    let mut data = TransferData::new(DropEffect::Copy);
    data.set_data(MIME_JSON, "{not json");
    data.set_data(MIME_TEXT, "GO");
    assert_eq!(DragPayload::decode(&data), None);
}

#[test]
fn decode_malformed_json_falls_through_to_index() {
    let mut data = TransferData::new(DropEffect::Move);
    data.set_data(MIME_JSON, "[1, 2]");
    data.set_data(MIME_TEXT, "4");
    assert_eq!(DragPayload::decode(&data), Some(DragPayload::Internal(4)));
}

#[test]
fn decode_blank_word_record_is_malformed() {
    let mut data = TransferData::new(DropEffect::Copy);
    data.set_data(MIME_JSON, r#"{"word":"","icon":"/x.svg"}"#);
    assert_eq!(DragPayload::decode(&data), None);
}

#[test]
fn decode_plain_word_only_is_no_payload() {
    let mut data = TransferData::new(DropEffect::Copy);
    data.set_data(MIME_TEXT, "HELLO");
    assert_eq!(DragPayload::decode(&data), None);
}

#[test]
fn decode_empty_store_is_no_payload() {
    assert_eq!(DragPayload::decode(&TransferData::default()), None);
}

#[test]
fn decode_ignores_extra_record_fields() {
    let mut data = TransferData::new(DropEffect::Copy);
    data.set_data(MIME_JSON, r#"{"word":"CUP","icon":"/acc/cup.svg","score":0.9}"#);
    assert_eq!(DragPayload::decode(&data), Some(DragPayload::External(Tile::new("CUP", "/acc/cup.svg"))));
}

#[test]
fn parse_structured_reports_blank_word() {
    let err = parse_structured(r#"{"word":"  ","icon":"/x.svg"}"#).unwrap_err();
    assert!(matches!(err, PayloadError::BlankWord));
}

#[test]
fn tile_accessor_only_for_external() {
    assert_eq!(DragPayload::External(go()).tile(), Some(&go()));
    assert_eq!(DragPayload::Internal(0).tile(), None);
}
