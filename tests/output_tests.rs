// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_query_generator::{
    error::GenerationError,
    generator::generate,
    output::{
        OutputFormat, OutputOptions, format_batch, format_error, format_generated, format_schema,
        format_suggestions
    },
    schema::{Column, Schema, Table},
    suggest::suggest
};

fn opts(format: OutputFormat, verbose: bool) -> OutputOptions {
    OutputOptions {
        format,
        colored: false,
        verbose
    }
}

fn users() -> Schema {
    Schema::new(vec![Table::new(
        "users",
        vec![Column::new("id"), Column::new("email")]
    )])
}

#[test]
fn test_json_is_compact_wire_shape() {
    let query = generate("count users", &users()).unwrap();
    let output = format_generated(&query, &opts(OutputFormat::Json, false));
    assert_eq!(
        output,
        r#"{"queryText":"SELECT COUNT(*) FROM users","explanation":"This query counts the total number of records in the users table."}"#
    );
}

#[test]
fn test_json_verbose_adds_details() {
    let query = generate("top 2 users", &users()).unwrap();
    let output = format_generated(&query, &opts(OutputFormat::Json, true));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["intent"], "top_n");
    assert_eq!(value["table"], "users");
    assert_eq!(value["queryText"], "SELECT email FROM users ORDER BY email DESC LIMIT 2");
}

#[test]
fn test_yaml_output() {
    let query = generate("count users", &users()).unwrap();
    let output = format_generated(&query, &opts(OutputFormat::Yaml, false));
    assert!(output.contains("queryText:"));
    assert!(output.contains("explanation:"));
}

#[test]
fn test_text_output() {
    let query = generate("list users", &users()).unwrap();
    let output = format_generated(&query, &opts(OutputFormat::Text, false));
    assert!(output.contains("SQL Query:\n  SELECT id, email FROM users LIMIT 10\n"));
    assert!(output.contains("Explanation:\n"));
    assert!(!output.contains("Intent:"));
}

#[test]
fn test_text_output_verbose() {
    let query = generate("list users", &users()).unwrap();
    let output = format_generated(&query, &opts(OutputFormat::Text, true));
    assert!(output.contains("Intent: Default"));
    assert!(output.contains("Table: users"));
}

#[test]
fn test_error_json_document() {
    let output = format_error(
        &GenerationError::EmptyQuestion,
        &opts(OutputFormat::Json, false)
    );
    assert_eq!(output, r#"{"error":"Question must not be empty"}"#);
}

#[test]
fn test_error_text() {
    let output = format_error(
        &GenerationError::InvalidSchema("bad".to_string()),
        &opts(OutputFormat::Text, false)
    );
    assert_eq!(output, "Error: Invalid schema: bad\n");
}

#[test]
fn test_batch_json_mixes_results_and_errors() {
    let schema = users();
    let questions = vec!["count users".to_string(), String::new()];
    let results: Vec<_> = questions.iter().map(|q| generate(q, &schema)).collect();
    let output = format_batch(&questions, &results, &opts(OutputFormat::Json, false));
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value[0]["question"], "count users");
    assert_eq!(value[0]["queryText"], "SELECT COUNT(*) FROM users");
    assert_eq!(value[0]["intent"], "count");
    assert_eq!(value[1]["error"], "Question must not be empty");
}

#[test]
fn test_batch_text_numbers_questions() {
    let schema = users();
    let questions = vec!["count users".to_string(), "list users".to_string()];
    let results: Vec<_> = questions.iter().map(|q| generate(q, &schema)).collect();
    let output = format_batch(&questions, &results, &opts(OutputFormat::Text, false));
    assert!(output.contains("Question #1: count users"));
    assert!(output.contains("Question #2: list users"));
}

#[test]
fn test_suggestions_text() {
    let suggestions = suggest(&users(), 2);
    let output = format_suggestions(&suggestions, &opts(OutputFormat::Text, true));
    assert!(output.starts_with("Suggested Queries\n\n"));
    assert!(output.contains("  - Count the records in users [Count]"));
}

#[test]
fn test_suggestions_text_empty() {
    let output = format_suggestions(&[], &opts(OutputFormat::Text, false));
    assert!(output.contains("No suggestions"));
}

#[test]
fn test_schema_json() {
    let output = format_schema(&users(), &opts(OutputFormat::Json, false));
    assert_eq!(
        output,
        r#"[{"tableName":"users","columns":[{"name":"id"},{"name":"email"}]}]"#
    );
}

#[test]
fn test_schema_text() {
    let output = format_schema(&users(), &opts(OutputFormat::Text, false));
    assert!(output.starts_with("Database Schema:"));
}
