//! Application logic for the SQL Query Generator CLI.
//!
//! This module contains the command logic separated from the main entry
//! point so that it can be tested without spawning a process.
//!
//! # Module Structure
//!
//! - `types` - Command parameters and output types
//! - `convert` - CLI to internal type conversions
//! - `helpers` - Input reading, schema loading and logging setup
//! - `run` - Command execution

mod convert;
mod helpers;
mod run;
mod types;

pub use convert::{convert_dialect, convert_format, convert_output, convert_schema_format};
pub use helpers::{init_logging, parse_schema, read_input, read_schema_source, split_questions};
pub use run::{run_batch, run_command, run_generate, run_inspect, run_suggest};
pub use types::{
    BatchParams, CommandOutput, EXIT_FAILURE, EXIT_SUCCESS, GenerateParams, InspectParams,
    SchemaInput, SuggestParams
};
