// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use clap::Parser;
use sql_query_generator::{
    cli::{Cli, Commands, Dialect, Format, SchemaFormatArg},
    suggest::DEFAULT_SUGGESTION_LIMIT
};

#[test]
fn test_generate_with_inline_schema() {
    let cli = Cli::try_parse_from([
        "sql-query-generator",
        "generate",
        "-q",
        "count users",
        "-s",
        "[]"
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            query,
            schema,
            output
        } => {
            assert_eq!(query, "count users");
            assert_eq!(schema.source.schema.as_deref(), Some("[]"));
            assert!(schema.source.schema_file.is_none());
            assert!(matches!(schema.schema_format, SchemaFormatArg::Auto));
            assert!(matches!(schema.dialect, Dialect::Generic));
            assert!(matches!(output.format, Format::Json));
            assert!(!output.verbose);
            assert!(!output.no_color);
        }
        other => panic!("unexpected command: {other:?}")
    }
}

#[test]
fn test_generate_requires_schema() {
    let result = Cli::try_parse_from(["sql-query-generator", "generate", "-q", "count"]);
    assert!(result.is_err());
}

#[test]
fn test_schema_sources_conflict() {
    let result = Cli::try_parse_from([
        "sql-query-generator",
        "generate",
        "-q",
        "count",
        "-s",
        "[]",
        "--schema-file",
        "schema.json"
    ]);
    assert!(result.is_err());
}

#[test]
fn test_batch_options() {
    let cli = Cli::try_parse_from([
        "sql-query-generator",
        "batch",
        "-i",
        "-",
        "--schema-file",
        "schema.sql",
        "--dialect",
        "postgresql",
        "-f",
        "yaml",
        "--no-color"
    ])
    .unwrap();

    assert!(!cli.command.verbose());
    match cli.command {
        Commands::Batch {
            input,
            schema,
            output
        } => {
            assert_eq!(input.to_str(), Some("-"));
            assert!(matches!(schema.dialect, Dialect::Postgresql));
            assert!(matches!(output.format, Format::Yaml));
            assert!(output.no_color);
        }
        other => panic!("unexpected command: {other:?}")
    }
}

#[test]
fn test_suggest_default_limit() {
    let cli =
        Cli::try_parse_from(["sql-query-generator", "suggest", "-s", "[]", "-v"]).unwrap();

    assert!(cli.command.verbose());
    match cli.command {
        Commands::Suggest { limit, .. } => assert_eq!(limit, DEFAULT_SUGGESTION_LIMIT),
        other => panic!("unexpected command: {other:?}")
    }
}

#[test]
fn test_inspect_schema_format() {
    let cli = Cli::try_parse_from([
        "sql-query-generator",
        "inspect",
        "--schema-file",
        "schema.txt",
        "--schema-format",
        "yaml"
    ])
    .unwrap();

    match cli.command {
        Commands::Inspect { schema, .. } => {
            assert!(matches!(schema.schema_format, SchemaFormatArg::Yaml));
        }
        other => panic!("unexpected command: {other:?}")
    }
}

#[test]
fn test_invalid_format_rejected() {
    let result = Cli::try_parse_from([
        "sql-query-generator",
        "generate",
        "-q",
        "count",
        "-s",
        "[]",
        "-f",
        "xml"
    ]);
    assert!(result.is_err());
}
