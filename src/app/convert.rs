//! Type conversion functions for CLI to internal types.
//!
//! This module translates CLI-facing types (from the `cli` module) to the
//! internal types used by the schema loader, generator and formatter.

use std::path::Path;

use super::types::{BatchParams, GenerateParams, InspectParams, SchemaInput, SuggestParams};
use crate::{
    cli::{Dialect, Format, OutputArgs, SchemaArgs, SchemaFormatArg},
    output::{OutputFormat, OutputOptions},
    schema::{SchemaFormat, SqlDialect}
};

/// Converts a CLI dialect enum to the internal SQL dialect type.
///
/// # Example
///
/// ```
/// use sql_query_generator::{app::convert_dialect, cli::Dialect, schema::SqlDialect};
///
/// assert_eq!(convert_dialect(Dialect::Mysql), SqlDialect::MySQL);
/// ```
pub fn convert_dialect(dialect: Dialect) -> SqlDialect {
    match dialect {
        Dialect::Generic => SqlDialect::Generic,
        Dialect::Mysql => SqlDialect::MySQL,
        Dialect::Postgresql => SqlDialect::PostgreSQL,
        Dialect::Sqlite => SqlDialect::SQLite,
        Dialect::Clickhouse => SqlDialect::ClickHouse
    }
}

/// Converts a CLI format enum to the internal output format type.
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml,
        Format::Text => OutputFormat::Text
    }
}

/// Resolves the schema document format.
///
/// `auto` looks at the file extension; inline and stdin schemas are JSON.
pub fn convert_schema_format(format: SchemaFormatArg, path: Option<&str>) -> SchemaFormat {
    match format {
        SchemaFormatArg::Json => SchemaFormat::Json,
        SchemaFormatArg::Yaml => SchemaFormat::Yaml,
        SchemaFormatArg::Sql => SchemaFormat::Sql,
        SchemaFormatArg::Auto => match path {
            Some(p) if p != "-" => SchemaFormat::from_path(Path::new(p)),
            _ => SchemaFormat::Json
        }
    }
}

/// Creates output options from CLI output arguments.
pub fn convert_output(args: &OutputArgs) -> OutputOptions {
    OutputOptions {
        format:  convert_format(args.format),
        colored: !args.no_color,
        verbose: args.verbose
    }
}

/// Creates a schema input description from CLI schema arguments.
pub fn convert_schema(args: SchemaArgs) -> SchemaInput {
    SchemaInput {
        inline:  args.source.schema,
        path:    args
            .source
            .schema_file
            .map(|p| p.display().to_string()),
        format:  args.schema_format,
        dialect: args.dialect
    }
}

pub fn generate_params(query: String, schema: SchemaArgs, output: &OutputArgs) -> GenerateParams {
    GenerateParams {
        question: query,
        schema:   convert_schema(schema),
        output:   convert_output(output)
    }
}

pub fn batch_params(input: &Path, schema: SchemaArgs, output: &OutputArgs) -> BatchParams {
    BatchParams {
        input_path: input.display().to_string(),
        schema:     convert_schema(schema),
        output:     convert_output(output)
    }
}

pub fn suggest_params(schema: SchemaArgs, limit: usize, output: &OutputArgs) -> SuggestParams {
    SuggestParams {
        schema: convert_schema(schema),
        limit,
        output: convert_output(output)
    }
}

pub fn inspect_params(schema: SchemaArgs, output: &OutputArgs) -> InspectParams {
    InspectParams {
        schema: convert_schema(schema),
        output: convert_output(output)
    }
}
