//! SQL generation tests

use super::*;
use crate::schema::{FieldSchema, SchemaBuilder, SqlType, TableSchema};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn players_schema() -> TableSchema {
    let mut schema = TableSchema::new();
    schema.push(FieldSchema::new("name", SqlType::Text, false));
    schema.push(FieldSchema::new("goals", SqlType::Integer, true));
    schema
}

#[test]
fn test_render_create_table() {
    let sql = render_create_table("players", &players_schema()).unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE players (\n    name TEXT NOT NULL,\n    goals INTEGER\n);"
    );
}

#[test_case("1bad-name")]
#[test_case("1players")]
#[test_case("bad name")]
#[test_case("")]
#[test_case("drop;table")]
fn test_invalid_table_name(name: &str) {
    let err = render_create_table(name, &players_schema()).unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidTableName { .. }));
}

#[test_case("players")]
#[test_case("_private")]
#[test_case("t2")]
fn test_valid_table_name(name: &str) {
    assert!(is_valid_identifier(name));
}

#[test]
fn test_render_inserts_with_null_for_missing() {
    let schema = players_schema();
    let records = vec![
        json!({"name": "Alice", "goals": 3}),
        json!({"name": "Bob", "goals": null}),
        json!({"name": "Carol"}),
    ];

    let coerced = coerce_rows(&schema, &records);
    assert!(coerced.skipped.is_empty());

    let inserts = render_inserts("players", &schema, &coerced.rows);
    assert_eq!(
        inserts,
        vec![
            "INSERT INTO players (name, goals) VALUES ('Alice', 3);",
            "INSERT INTO players (name, goals) VALUES ('Bob', NULL);",
            "INSERT INTO players (name, goals) VALUES ('Carol', NULL);",
        ]
    );
}

#[test]
fn test_quote_escaping() {
    let mut schema = TableSchema::new();
    schema.push(FieldSchema::new("name", SqlType::Text, false));

    let coerced = coerce_rows(&schema, &[json!({"name": "O'Brien"})]);
    let inserts = render_inserts("people", &schema, &coerced.rows);
    assert_eq!(
        inserts[0],
        "INSERT INTO people (name) VALUES ('O''Brien');"
    );
}

#[test]
fn test_boolean_renders_as_one_zero() {
    let mut schema = TableSchema::new();
    schema.push(FieldSchema::new("active", SqlType::Boolean, false));

    let coerced = coerce_rows(&schema, &[json!({"active": true}), json!({"active": false})]);
    let inserts = render_inserts("t", &schema, &coerced.rows);
    assert_eq!(inserts[0], "INSERT INTO t (active) VALUES (1);");
    assert_eq!(inserts[1], "INSERT INTO t (active) VALUES (0);");
}

#[test]
fn test_date_renders_quoted() {
    let mut schema = TableSchema::new();
    schema.push(FieldSchema::new("joined", SqlType::Date, false));

    let coerced = coerce_rows(&schema, &[json!({"joined": "2024-01-15"})]);
    assert_eq!(
        coerced.rows[0][0],
        SqlValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    );

    let inserts = render_inserts("t", &schema, &coerced.rows);
    assert_eq!(inserts[0], "INSERT INTO t (joined) VALUES ('2024-01-15');");
}

#[test]
fn test_incompatible_value_skips_record_and_continues() {
    let schema = players_schema();
    let records = vec![
        json!({"name": "Alice", "goals": 3}),
        json!({"name": "Bad", "goals": "lots"}),
        json!({"name": "Carol", "goals": 1}),
    ];

    let coerced = coerce_rows(&schema, &records);
    assert_eq!(coerced.rows.len(), 2);
    assert_eq!(coerced.skipped.len(), 1);
    assert_eq!(coerced.skipped[0].index, 1);
    assert!(coerced.skipped[0].reason.contains("goals"));
}

// ============================================================================
// Coercion rules
// ============================================================================

#[test_case(SqlType::Integer, json!(7), SqlValue::Integer(7))]
#[test_case(SqlType::Integer, json!("42"), SqlValue::Integer(42))]
#[test_case(SqlType::Integer, json!(3.0), SqlValue::Integer(3))]
#[test_case(SqlType::Real, json!(2.5), SqlValue::Real(2.5))]
#[test_case(SqlType::Real, json!(2), SqlValue::Real(2.0))]
#[test_case(SqlType::Boolean, json!("true"), SqlValue::Boolean(true))]
#[test_case(SqlType::Boolean, json!(0), SqlValue::Boolean(false))]
#[test_case(SqlType::Text, json!(99), SqlValue::Text("99".to_string()))]
fn test_coerce_accepts(sql_type: SqlType, value: serde_json::Value, expected: SqlValue) {
    let mut schema = TableSchema::new();
    schema.push(FieldSchema::new("v", sql_type, true));

    let row = coerce_record(&schema, &json!({"v": value})).unwrap();
    assert_eq!(row[0], expected);
}

#[test_case(SqlType::Integer, json!("abc"))]
#[test_case(SqlType::Integer, json!(2.5))]
#[test_case(SqlType::Real, json!("abc"))]
#[test_case(SqlType::Boolean, json!("maybe"))]
#[test_case(SqlType::Boolean, json!(2))]
#[test_case(SqlType::Date, json!("not-a-date"))]
#[test_case(SqlType::Date, json!(20240115))]
fn test_coerce_rejects(sql_type: SqlType, value: serde_json::Value) {
    let mut schema = TableSchema::new();
    schema.push(FieldSchema::new("v", sql_type, true));

    let err = coerce_record(&schema, &json!({"v": value})).unwrap_err();
    assert!(err.is_recoverable());
}

// ============================================================================
// Round-trip: emitted literals reparse to the source values
// ============================================================================

#[test]
fn test_literal_round_trip() {
    let records = vec![
        json!({"name": "Alice", "goals": 3, "rating": 4.5, "joined": "2024-01-15", "active": true}),
        json!({"name": "O'Brien", "goals": null, "rating": 2.0, "joined": "2023-06-01", "active": false}),
    ];

    let schema = SchemaBuilder::new().build(&records).unwrap();
    let coerced = coerce_rows(&schema, &records);

    for (row, record) in coerced.rows.iter().zip(&records) {
        for (value, field) in row.iter().zip(schema.iter()) {
            let literal = value.to_literal();
            let source = record.get(&field.source);
            match source {
                None | Some(serde_json::Value::Null) => assert_eq!(literal, "NULL"),
                Some(serde_json::Value::String(s)) => {
                    let unquoted = literal.trim_matches('\'').replace("''", "'");
                    assert_eq!(&unquoted, s);
                }
                Some(serde_json::Value::Bool(b)) => {
                    assert_eq!(literal, if *b { "1" } else { "0" });
                }
                Some(other) => assert_eq!(literal.parse::<f64>().unwrap(), other.as_f64().unwrap()),
            }
        }
    }
}
