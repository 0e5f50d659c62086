use chrono::{TimeZone, Utc};
use lostfound::codec;
use lostfound::item::{demo_items, Item, ItemType, NewItem};

const RECORD: &str = r#"{"id":5,"type":"found","name":"Umbrella","location":"Gym","date":"2024-01-09","description":"Black","reporterName":"","contact":"x@campus.edu","timestamp":"2024-01-09T08:00:00Z"}"#;

#[test]
fn test_round_trip_preserves_items() {
    let items = demo_items();
    assert_eq!(codec::decode(&codec::encode(&items).unwrap()), items);
    assert_eq!(codec::decode(&codec::encode_compact(&items).unwrap()), items);
}

#[test]
fn test_encode_is_pretty_array() {
    let text = codec::encode(&demo_items()).unwrap();
    assert!(text.starts_with('['));
    assert!(text.contains("\n  {"));
    assert!(text.contains("\"reporterName\": \"Rahul\""));
    assert!(text.contains("\"type\": \"lost\""));
}

#[test]
fn test_blank_text_decodes_to_nothing() {
    assert!(codec::decode("").is_empty());
    assert!(codec::decode("  \n\t ").is_empty());
}

#[test]
fn test_single_object_document() {
    let items = codec::decode(RECORD);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, ItemType::Found);
    assert_eq!(items[0].reporter_display(), "Anonymous");
}

#[test]
fn test_broken_array_yields_empty_list() {
    assert!(codec::decode("[{\"id\": 1,").is_empty());
}

#[test]
fn test_line_mode_skips_bad_records() {
    let text = format!("garbage line\n{RECORD}\n\n{{\"id\":6,\"type\":\"lost\",\"name\":\"\",\"date\":\"2024-01-09\",\"timestamp\":\"2024-01-09T08:00:00Z\"}}\nnot json either");
    // Leading text keeps the decoder in line mode
    let items = codec::decode(&text);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 5);
}

#[test]
fn test_missing_optional_fields_default_to_empty() {
    let text = r#"[{"id":9,"type":"lost","name":"Pen","date":"2024-02-01","timestamp":"2024-02-01T10:00:00Z"}]"#;
    let items = codec::decode(text);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].location, "");
    assert_eq!(items[0].contact, "");
}

#[test]
fn test_bad_record_in_array_keeps_the_rest() {
    let text = r#"[
        {"id":10,"type":"lost","name":"Keys","date":"2024-03-02","timestamp":"2024-03-02T09:00:00Z"},
        {"id":11,"type":"found","name":"Pen","date":"2024-03-02"}
    ]"#;

    let decoded = codec::decode_report(text);
    assert_eq!(decoded.items.len(), 1);
    assert_eq!(decoded.items[0].name, "Keys");
    assert_eq!(decoded.skipped, 1);
    assert!(!decoded.is_unusable());
}

#[test]
fn test_array_of_only_bad_records_is_unusable() {
    let text = r#"[{"id":11,"type":"found","name":"Pen"},{"id":"twelve"}]"#;

    let decoded = codec::decode_report(text);
    assert!(decoded.items.is_empty());
    assert_eq!(decoded.skipped, 2);
    assert!(decoded.is_unusable());
}

#[test]
fn test_empty_list_round_trips() {
    let text = codec::encode(&[]).unwrap();
    assert_eq!(text.trim(), "[]");

    let decoded = codec::decode_report(&text);
    assert!(decoded.items.is_empty());
    assert!(!decoded.is_unusable());
}

#[test]
fn test_round_trip_keeps_unusual_values() {
    let mut anonymous = sample(i64::MAX, "Calculator");
    anonymous.reporter_name.clear();
    let mut unicode = sample(-5, "学生证");
    unicode.location = "Café Münster".to_string();
    unicode.description = "Étui rouge, ключи 🔑".to_string();
    let items = vec![anonymous, unicode];

    assert_eq!(codec::decode(&codec::encode(&items).unwrap()), items);
    assert_eq!(codec::decode(&codec::encode_compact(&items).unwrap()), items);

    let decoded = codec::decode(&codec::encode(&items).unwrap());
    assert_eq!(decoded[0].id, i64::MAX);
    assert_eq!(decoded[0].reporter_display(), "Anonymous");
    assert_eq!(decoded[1].id, -5);
}

fn sample(id: i64, name: &str) -> Item {
    NewItem {
        item_type: ItemType::Lost,
        name: name.to_string(),
        location: "Library".to_string(),
        date: "2024-05-20".to_string(),
        description: "Found by the copier".to_string(),
        reporter_name: "Sam".to_string(),
        contact: "sam@campus.edu".to_string(),
    }
    .into_item(id, Utc.with_ymd_and_hms(2024, 5, 20, 14, 30, 0).unwrap())
    .unwrap()
}
