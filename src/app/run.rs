//! Command execution logic.
//!
//! Each `run_*` function loads the schema, drives the generator and returns
//! the formatted [`CommandOutput`]. Generation failures become an error
//! document on stderr with exit code 1; I/O and configuration failures are
//! returned as [`AppError`](crate::error::AppError).

use tracing::{debug, warn};

use super::{
    convert::{batch_params, generate_params, inspect_params, suggest_params},
    helpers::{parse_schema, read_input, read_schema_source, split_questions},
    types::{
        BatchParams, CommandOutput, EXIT_FAILURE, EXIT_SUCCESS, GenerateParams, InspectParams,
        SchemaInput, SuggestParams
    }
};
use crate::{
    cli::Commands,
    config::Config,
    error::{AppResult, GenerationError, config_error},
    generator::Generator,
    output::{
        OutputOptions, format_batch, format_error, format_generated, format_schema,
        format_suggestions
    },
    schema::Schema,
    suggest::suggest
};

/// Executes a parsed CLI command with the loaded configuration.
///
/// # Errors
///
/// Returns an error if an input file cannot be read or the inputs conflict
/// (both schema and questions from stdin).
///
/// # Example
///
/// ```no_run
/// use clap::Parser;
/// use sql_query_generator::{app::run_command, cli::Cli, config::Config};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let cli = Cli::parse();
/// let output = run_command(cli.command, &Config::default())?;
/// for line in &output.stdout {
///     println!("{}", line);
/// }
/// # Ok(())
/// # }
/// ```
pub fn run_command(command: Commands, config: &Config) -> AppResult<CommandOutput> {
    let generator = Generator::with_config(&config.generator);
    debug!(intents = ?generator.intents(), "generator ready");
    match command {
        Commands::Generate {
            query,
            schema,
            output
        } => run_generate(generate_params(query, schema, &output), &generator),
        Commands::Batch {
            input,
            schema,
            output
        } => run_batch(batch_params(&input, schema, &output), &generator),
        Commands::Suggest {
            schema,
            limit,
            output
        } => run_suggest(suggest_params(schema, limit, &output)),
        Commands::Inspect { schema, output } => run_inspect(inspect_params(schema, &output))
    }
}

/// Generates the query for a single question.
///
/// # Errors
///
/// Returns an error if the schema file cannot be read.
pub fn run_generate(params: GenerateParams, generator: &Generator) -> AppResult<CommandOutput> {
    let result = load_schema(&params.schema)?
        .and_then(|schema| generator.generate(&params.question, &schema));
    Ok(match result {
        Ok(query) => {
            debug!(intent = %query.intent, table = %query.table, "query generated");
            CommandOutput::success(format_generated(&query, &params.output))
        }
        Err(err) => failure(&err, &params.output)
    })
}

/// Generates queries for every non-blank line of the questions input.
///
/// The exit code is 1 if any question failed; the other results are still
/// written.
///
/// # Errors
///
/// Returns an error if an input cannot be read, or if both the schema and
/// the questions are to be read from stdin.
pub fn run_batch(params: BatchParams, generator: &Generator) -> AppResult<CommandOutput> {
    if params.input_path == "-" && params.schema.path.as_deref() == Some("-") {
        return Err(config_error(
            "Schema and questions cannot both be read from stdin"
        ));
    }
    let content = read_input(&params.input_path)?;
    let questions = split_questions(&content);
    let schema = match load_schema(&params.schema)? {
        Ok(schema) => schema,
        Err(err) => return Ok(failure(&err, &params.output))
    };
    debug!(questions = questions.len(), "running batch");
    let results = generator.generate_batch(&questions, &schema);
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!(failed, total = results.len(), "some questions could not be answered");
    }
    Ok(CommandOutput {
        exit_code: if failed > 0 { EXIT_FAILURE } else { EXIT_SUCCESS },
        stdout:    vec![format_batch(&questions, &results, &params.output)],
        stderr:    Vec::new()
    })
}

/// Suggests example questions for the schema.
///
/// # Errors
///
/// Returns an error if the schema file cannot be read.
pub fn run_suggest(params: SuggestParams) -> AppResult<CommandOutput> {
    Ok(match load_schema(&params.schema)? {
        Ok(schema) => {
            let suggestions = suggest(&schema, params.limit);
            CommandOutput::success(format_suggestions(&suggestions, &params.output))
        }
        Err(err) => failure(&err, &params.output)
    })
}

/// Prints the schema as the generator sees it.
///
/// # Errors
///
/// Returns an error if the schema file cannot be read.
pub fn run_inspect(params: InspectParams) -> AppResult<CommandOutput> {
    Ok(match load_schema(&params.schema)? {
        Ok(schema) => CommandOutput::success(format_schema(&schema, &params.output)),
        Err(err) => failure(&err, &params.output)
    })
}

/// Read errors are fatal; parse errors are reported as generation failures.
fn load_schema(input: &SchemaInput) -> AppResult<Result<Schema, GenerationError>> {
    let raw = read_schema_source(input)?;
    Ok(parse_schema(input, &raw))
}

fn failure(err: &GenerationError, opts: &OutputOptions) -> CommandOutput {
    debug!(error = %err, "generation failed");
    CommandOutput::failure(format_error(err, opts))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::{
        cli::{Dialect, SchemaFormatArg},
        output::OutputFormat
    };

    const SCHEMA: &str = r#"[
        {"tableName": "users", "columns": [{"name": "id"}, {"name": "name"}]},
        {"tableName": "orders", "columns": [{"name": "id"}, {"name": "amount"}]}
    ]"#;

    fn inline(schema: &str) -> SchemaInput {
        SchemaInput {
            inline:  Some(schema.to_string()),
            path:    None,
            format:  SchemaFormatArg::Auto,
            dialect: Dialect::Generic
        }
    }

    fn plain() -> OutputOptions {
        OutputOptions {
            format:  OutputFormat::Json,
            colored: false,
            verbose: false
        }
    }

    #[test]
    fn test_run_generate_success() {
        let params = GenerateParams {
            question: "Count the orders".to_string(),
            schema:   inline(SCHEMA),
            output:   plain()
        };
        let output = run_generate(params, &Generator::new()).unwrap();
        assert_eq!(output.exit_code, EXIT_SUCCESS);
        assert!(output.stdout[0].contains("SELECT COUNT(*) FROM orders"));
    }

    #[test]
    fn test_run_generate_invalid_schema() {
        let params = GenerateParams {
            question: "count users".to_string(),
            schema:   inline("not json"),
            output:   plain()
        };
        let output = run_generate(params, &Generator::new()).unwrap();
        assert_eq!(output.exit_code, EXIT_FAILURE);
        assert!(output.stdout.is_empty());
        assert!(output.stderr[0].starts_with("{\"error\":"));
    }

    #[test]
    fn test_run_generate_empty_question() {
        let params = GenerateParams {
            question: String::new(),
            schema:   inline(SCHEMA),
            output:   plain()
        };
        let output = run_generate(params, &Generator::new()).unwrap();
        assert_eq!(output.exit_code, EXIT_FAILURE);
        assert!(output.stderr[0].contains("Question must not be empty"));
    }

    #[test]
    fn test_run_generate_missing_schema_file() {
        let params = GenerateParams {
            question: "count users".to_string(),
            schema:   SchemaInput {
                inline:  None,
                path:    Some("/nonexistent/schema.json".to_string()),
                format:  SchemaFormatArg::Auto,
                dialect: Dialect::Generic
            },
            output:   plain()
        };
        assert!(run_generate(params, &Generator::new()).is_err());
    }

    #[test]
    fn test_run_batch_keeps_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "count users\n\naverage amount in orders").unwrap();
        let params = BatchParams {
            input_path: file.path().display().to_string(),
            schema:     inline(SCHEMA),
            output:     plain()
        };
        let output = run_batch(params, &Generator::new()).unwrap();
        assert_eq!(output.exit_code, EXIT_SUCCESS);
        let entries: serde_json::Value = serde_json::from_str(&output.stdout[0]).unwrap();
        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["queryText"], "SELECT COUNT(*) FROM users");
        assert_eq!(entries[1]["queryText"], "SELECT AVG(amount) FROM orders");
    }

    #[test]
    fn test_run_batch_rejects_double_stdin() {
        let params = BatchParams {
            input_path: "-".to_string(),
            schema:     SchemaInput {
                inline:  None,
                path:    Some("-".to_string()),
                format:  SchemaFormatArg::Auto,
                dialect: Dialect::Generic
            },
            output:     plain()
        };
        assert!(run_batch(params, &Generator::new()).is_err());
    }

    #[test]
    fn test_run_suggest_limit() {
        let params = SuggestParams {
            schema: inline(SCHEMA),
            limit:  3,
            output: plain()
        };
        let output = run_suggest(params).unwrap();
        let suggestions: serde_json::Value = serde_json::from_str(&output.stdout[0]).unwrap();
        assert_eq!(suggestions.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_run_inspect_json() {
        let params = InspectParams {
            schema: inline(SCHEMA),
            output: plain()
        };
        let output = run_inspect(params).unwrap();
        assert_eq!(output.exit_code, EXIT_SUCCESS);
        assert!(output.stdout[0].contains("\"tableName\":\"orders\""));
    }
}
