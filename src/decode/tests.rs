//! Decoder tests

use super::*;
use serde_json::json;

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_array_of_objects() {
    let body = r#"[{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]"#;
    let records = JsonDecoder::new().decode(body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], "Alice");
}

#[test]
fn test_json_single_object_becomes_one_record() {
    let body = r#"{"id": 1, "name": "Alice"}"#;
    let records = JsonDecoder::new().decode(body).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0], json!({"id": 1, "name": "Alice"}));
}

#[test]
fn test_json_single_key_wrapper_unwraps() {
    let body = r#"{"players": [{"id": 1}, {"id": 2}]}"#;
    let records = JsonDecoder::new().decode(body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["id"], 2);
}

#[test]
fn test_json_multi_key_object_is_one_record() {
    let body = r#"{"players": [{"id": 1}], "season": 2024}"#;
    let records = JsonDecoder::new().decode(body).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_json_invalid_is_input_error() {
    let err = JsonDecoder::new().decode("{not json").unwrap_err();
    assert!(matches!(err, crate::error::Error::Input { .. }));
}

#[test]
fn test_json_preserves_key_order() {
    let body = r#"[{"zeta": 1, "alpha": 2, "mid": 3}]"#;
    let records = JsonDecoder::new().decode(body).unwrap();

    let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

// ============================================================================
// CSV
// ============================================================================

#[test]
fn test_csv_with_header() {
    let body = "id,active\n1,true\n2,false\n";
    let records = CsvDecoder::new().decode(body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], json!(1));
    assert_eq!(records[0]["active"], json!(true));
    assert_eq!(records[1]["active"], json!(false));
}

#[test]
fn test_csv_without_header() {
    let body = "1,Alice\n2,Bob\n";
    let records = CsvDecoder::with_options(',', false).decode(body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["column_0"], json!(1));
    assert_eq!(records[0]["column_1"], json!("Alice"));
}

#[test]
fn test_csv_quoted_fields() {
    let body = "name,notes\n\"O'Brien\",\"said \"\"hi\"\", left\"\n";
    let records = CsvDecoder::new().decode(body).unwrap();

    assert_eq!(records[0]["name"], json!("O'Brien"));
    assert_eq!(records[0]["notes"], json!("said \"hi\", left"));
}

#[test]
fn test_csv_empty_cell_is_null() {
    let body = "a,b\n1,\n2,x\n";
    let records = CsvDecoder::new().decode(body).unwrap();

    assert_eq!(records[0]["b"], json!(null));
    assert_eq!(records[1]["b"], json!("x"));
}

#[test]
fn test_csv_scalar_parsing() {
    let body = "i,f,s\n42,2.5,hello\n";
    let records = CsvDecoder::new().decode(body).unwrap();

    assert_eq!(records[0]["i"], json!(42));
    assert_eq!(records[0]["f"], json!(2.5));
    assert_eq!(records[0]["s"], json!("hello"));
}

#[test]
fn test_csv_short_row_padded_with_nulls() {
    let body = "a,b,c\n1,2\n";
    let records = CsvDecoder::new().decode(body).unwrap();
    assert_eq!(records[0]["c"], json!(null));
}

#[test]
fn test_csv_overlong_row_is_error() {
    let body = "a,b\n1,2,3\n";
    let err = CsvDecoder::new().decode(body).unwrap_err();
    assert!(matches!(err, crate::error::Error::CsvParse { .. }));
}

#[test]
fn test_csv_empty_body_yields_no_records() {
    assert!(CsvDecoder::new().decode("").unwrap().is_empty());
}

// ============================================================================
// Format detection
// ============================================================================

#[test]
fn test_format_from_path() {
    use std::path::Path;

    assert_eq!(
        InputFormat::from_path(Path::new("data.json")),
        InputFormat::Json
    );
    assert_eq!(
        InputFormat::from_path(Path::new("data.JSON")),
        InputFormat::Json
    );
    assert_eq!(
        InputFormat::from_path(Path::new("data.csv")),
        InputFormat::Csv
    );
    assert_eq!(
        InputFormat::from_path(Path::new("data.txt")),
        InputFormat::Csv
    );
}
