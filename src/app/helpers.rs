//! Helper functions for CLI operations.
//!
//! Input reading, schema loading and logging setup shared by the commands.

use std::{
    fs::read_to_string,
    io::{self, Read}
};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::{
    convert::{convert_dialect, convert_schema_format},
    types::SchemaInput
};
use crate::{
    error::{AppResult, GenerationError, config_error, file_read_error},
    schema::Schema
};

/// Reads input from a file or stdin.
///
/// # Arguments
///
/// * `path` - File path or "-" for stdin
///
/// # Errors
///
/// Returns an error if the file cannot be read or stdin fails.
pub fn read_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Returns the raw schema document named by the input.
///
/// # Errors
///
/// Returns a configuration error if no source was given, or a read error
/// if the schema file cannot be read.
pub fn read_schema_source(input: &SchemaInput) -> AppResult<String> {
    match (&input.inline, &input.path) {
        (Some(inline), _) => Ok(inline.clone()),
        (None, Some(path)) => read_input(path),
        (None, None) => Err(config_error("A schema is required (use --schema or --schema-file)"))
    }
}

/// Parses a raw schema document according to the input's format options.
pub fn parse_schema(input: &SchemaInput, raw: &str) -> Result<Schema, GenerationError> {
    let format = convert_schema_format(input.format, input.path.as_deref());
    let schema = Schema::parse(raw, format, convert_dialect(input.dialect))?;
    debug!(format = ?format, tables = schema.tables.len(), "schema loaded");
    Ok(schema)
}

/// Splits a questions document into trimmed, non-blank lines.
pub fn split_questions(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown unless
/// `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "sql_query_generator=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    // A subscriber may already be installed when called twice in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
