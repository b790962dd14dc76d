//! # SQL Query Generator
//!
//! Rule-based translation of natural-language questions into SQL.
//!
//! `sql-query-generator` reads a table schema (JSON, YAML or SQL DDL), picks
//! the table a question talks about, classifies the question by keyword and
//! fills in a fixed SQL template. No database connection or language model
//! is involved: the same question and schema always produce the same query.
//!
//! # Quick Start
//!
//! ```bash
//! # One question, inline schema
//! sql-query-generator generate -q "Count the users" \
//!     -s '[{"tableName":"users","columns":[{"name":"id"},{"name":"name"}]}]'
//! # {"queryText":"SELECT COUNT(*) FROM users","explanation":"..."}
//!
//! # Schema from DDL, human-readable output
//! sql-query-generator generate -q "top 3 orders" --schema-file schema.sql -f text
//!
//! # Many questions, one per line
//! sql-query-generator batch -i questions.txt --schema-file schema.json
//!
//! # Example questions for a schema
//! sql-query-generator suggest --schema-file schema.yaml -f text
//! ```
//!
//! # Intents
//!
//! Checked in this order; the first match wins.
//!
//! | Intent | Trigger | Query |
//! |--------|---------|-------|
//! | count | `count` | `SELECT COUNT(*) FROM t` |
//! | average | `average`, `avg`, `mean` | `SELECT AVG(c) FROM t` |
//! | top_n | `top`, `highest` | `SELECT c FROM t ORDER BY c DESC LIMIT n` |
//! | group_by | `group by` | `SELECT g, COUNT(a) FROM t GROUP BY g` |
//! | default | anything else | `SELECT * FROM t LIMIT 10` |
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Environment variables (`SQL_GENERATOR_TOP_LIMIT`,
//!    `SQL_GENERATOR_PREVIEW_LIMIT`, `SQL_GENERATOR_DISABLED`)
//! 2. `.sql-generator.toml` in current directory
//! 3. `~/.config/sql-generator/config.toml`
//!
//! ```toml
//! [generator]
//! top_limit = 5
//! preview_limit = 10
//! disabled = ["group_by"]
//! ```
//!
//! # Exit Codes
//!
//! - `0` - Query generated
//! - `1` - Invalid schema, empty question or unreadable input; the error is
//!   written to stderr (as `{"error": "..."}` in JSON mode)
//! - `2` - Invalid command-line usage

use std::process;

use clap::Parser;
use sql_query_generator::{
    app::{init_logging, run_command},
    cli::Cli,
    config::Config,
    error::AppResult
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    init_logging(cli.command.verbose());
    let config = Config::load()?;
    let output = run_command(cli.command, &config)?;
    for line in &output.stdout {
        println!("{}", line.trim_end_matches('\n'));
    }
    for line in &output.stderr {
        eprintln!("{}", line.trim_end_matches('\n'));
    }
    Ok(output.exit_code)
}
