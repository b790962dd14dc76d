//! Application types for CLI commands.
//!
//! This module defines the parameters each command runs with and the
//! output it produces, so command logic can be exercised without a process.

use crate::{
    cli::{Dialect, SchemaFormatArg},
    output::OutputOptions
};

/// Process exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code when generation failed or an input was rejected
pub const EXIT_FAILURE: i32 = 1;

/// Where to read the schema from and how to parse it.
///
/// Exactly one of `inline` and `path` is expected; the CLI enforces this.
#[derive(Debug, Clone)]
pub struct SchemaInput {
    /// Schema document passed on the command line.
    pub inline:  Option<String>,
    /// Path to a schema file or "-" for stdin.
    pub path:    Option<String>,
    pub format:  SchemaFormatArg,
    pub dialect: Dialect
}

/// Parameters for the generate command.
///
/// # Example
///
/// ```
/// use sql_query_generator::{
///     app::{GenerateParams, SchemaInput},
///     cli::{Dialect, SchemaFormatArg},
///     output::OutputOptions
/// };
///
/// let params = GenerateParams {
///     question: "count users".to_string(),
///     schema:   SchemaInput {
///         inline:  Some("[]".to_string()),
///         path:    None,
///         format:  SchemaFormatArg::Auto,
///         dialect: Dialect::Generic
///     },
///     output:   OutputOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub question: String,
    pub schema:   SchemaInput,
    pub output:   OutputOptions
}

/// Parameters for the batch command.
#[derive(Debug, Clone)]
pub struct BatchParams {
    /// Path to questions file or "-" for stdin.
    pub input_path: String,
    pub schema:     SchemaInput,
    pub output:     OutputOptions
}

/// Parameters for the suggest command.
#[derive(Debug, Clone)]
pub struct SuggestParams {
    pub schema: SchemaInput,
    pub limit:  usize,
    pub output: OutputOptions
}

/// Parameters for the inspect command.
#[derive(Debug, Clone)]
pub struct InspectParams {
    pub schema: SchemaInput,
    pub output: OutputOptions
}

/// Output from CLI command execution.
///
/// Represents the final output ready for display, including the exit
/// code and the lines destined for stdout and stderr.
///
/// # Example
///
/// ```
/// use sql_query_generator::app::CommandOutput;
///
/// let output = CommandOutput::success("{}".to_string());
/// assert_eq!(output.exit_code, 0);
/// assert!(output.stderr.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code for the process.
    pub exit_code: i32,
    /// Lines to print to stdout.
    pub stdout:    Vec<String>,
    /// Lines to print to stderr.
    pub stderr:    Vec<String>
}

impl CommandOutput {
    pub fn success(stdout: String) -> Self {
        Self {
            exit_code: EXIT_SUCCESS,
            stdout:    vec![stdout],
            stderr:    Vec::new()
        }
    }

    pub fn failure(stderr: String) -> Self {
        Self {
            exit_code: EXIT_FAILURE,
            stdout:    Vec::new(),
            stderr:    vec![stderr]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_success() {
        let output = CommandOutput::success("ok".to_string());
        assert_eq!(output.exit_code, EXIT_SUCCESS);
        assert_eq!(output.stdout, vec!["ok"]);
    }

    #[test]
    fn test_command_output_failure() {
        let output = CommandOutput::failure("bad".to_string());
        assert_eq!(output.exit_code, EXIT_FAILURE);
        assert!(output.stdout.is_empty());
        assert_eq!(output.stderr, vec!["bad"]);
    }
}
