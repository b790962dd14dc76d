use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::suggest::DEFAULT_SUGGESTION_LIMIT;

/// SQL Query Generator - Turn natural-language questions into SQL queries
#[derive(Parser, Debug)]
#[command(name = "sql-query-generator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a SQL query for one question
    Generate {
        /// Natural-language question
        #[arg(short, long)]
        query: String,

        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        output: OutputArgs
    },

    /// Generate SQL queries for a file of questions, one per line
    Batch {
        /// Path to questions file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        output: OutputArgs
    },

    /// Suggest example questions for a schema
    Suggest {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Maximum number of suggestions
        #[arg(short = 'n', long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,

        #[command(flatten)]
        output: OutputArgs
    },

    /// Show the schema as the generator sees it
    Inspect {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        output: OutputArgs
    }
}

impl Commands {
    /// Whether verbose output (and debug logging) was requested
    pub fn verbose(&self) -> bool {
        match self {
            Self::Generate { output, .. }
            | Self::Batch { output, .. }
            | Self::Suggest { output, .. }
            | Self::Inspect { output, .. } => output.verbose
        }
    }
}

/// Where the schema comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SchemaSource {
    /// Inline schema document, e.g. '[{"tableName":"users","columns":[{"name":"id"}]}]'
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Path to schema file (use - for stdin)
    #[arg(long)]
    pub schema_file: Option<PathBuf>
}

/// Schema source and parsing options
#[derive(Args, Debug, Clone)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub source: SchemaSource,

    /// Schema document format (auto detects from file extension)
    #[arg(long, value_enum, default_value = "auto")]
    pub schema_format: SchemaFormatArg,

    /// SQL dialect for DDL schemas
    #[arg(long, value_enum, default_value = "generic")]
    pub dialect: Dialect
}

/// Output options
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: Format,

    /// Include intent and table details, enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaFormatArg {
    Auto,
    Json,
    Yaml,
    Sql
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Dialect {
    Generic,
    Mysql,
    Postgresql,
    Sqlite,
    Clickhouse
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
    Text
}
