//! Natural-language to SQL query generation.
//!
//! The generator is a pure function of a question and a [`Schema`]: it picks
//! a target table, classifies the question into an [`Intent`] and renders the
//! query text with an explanation. Nothing here performs I/O or logging.
//!
//! # Pipeline
//!
//! ```text
//! ┌───────────┐   ┌──────────────┐   ┌──────────────┐   ┌────────────────┐
//! │ Question  │──▶│ lower-case   │──▶│ Target table │──▶│ First matching │
//! └───────────┘   └──────────────┘   │ + columns    │   │ Pattern builds │
//!                                    └──────────────┘   └────────────────┘
//! ```
//!
//! # Target Selection
//!
//! The first table (in schema order) whose lower-cased name appears in the
//! question wins; otherwise the first table, or `unknown_table` for an empty
//! schema. Columns come from the first table with exactly that name, falling
//! back to the wildcard `*`.
//!
//! # Intents
//!
//! Patterns are checked in priority order and the first match builds the
//! query:
//!
//! | Priority | Intent | Trigger | Query |
//! |----------|--------|---------|-------|
//! | 1 | Count | `count` | `SELECT COUNT(*) FROM t` |
//! | 2 | Average | `average`, `avg`, `mean` | `SELECT AVG(c) FROM t` |
//! | 3 | TopN | `top`, `highest` | `SELECT ... FROM t ORDER BY c DESC LIMIT n` |
//! | 4 | GroupBy | `group by` | `SELECT g, COUNT(a) FROM t GROUP BY g` |
//! | 5 | Default | anything else | `SELECT ... FROM t LIMIT 10` |
//!
//! # Example
//!
//! ```
//! use sql_query_generator::{generator::generate, schema::Schema};
//!
//! let schema = Schema::from_json(
//!     r#"[{"tableName": "products", "columns": [{"name": "id"}, {"name": "price"}]}]"#
//! )
//! .unwrap();
//!
//! let query = generate("show top 3 products", &schema).unwrap();
//! assert_eq!(
//!     query.query_text,
//!     "SELECT price FROM products ORDER BY price DESC LIMIT 3"
//! );
//! ```

mod patterns;
mod types;

use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
pub use types::{GeneratedQuery, Intent, Target};

use crate::{config::GeneratorConfig, error::GenerationError, schema::Schema};

/// Table name used when the schema has no tables
pub const UNKNOWN_TABLE: &str = "unknown_table";

/// Column used when the target table has no known columns
pub const WILDCARD: &str = "*";

/// Column name skipped by the aggregation and ordering heuristics
pub const ID_COLUMN: &str = "id";

/// First standalone run of ASCII decimal digits
static LIMIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]+)\b").expect("valid regex"));

/// A question shape the generator recognises.
///
/// Implementations receive the question already lower-cased.
pub trait Pattern: Send + Sync {
    /// Intent produced when this pattern wins
    fn intent(&self) -> Intent;

    /// Whether the question triggers this pattern
    fn matches(&self, question: &str) -> bool;

    /// Render the query for the selected target
    fn build(&self, question: &str, target: &Target<'_>) -> GeneratedQuery;
}

/// Ordered pattern list with a guaranteed fallback.
///
/// # Example
///
/// ```
/// use sql_query_generator::{
///     config::GeneratorConfig,
///     generator::{Generator, Intent},
///     schema::Schema
/// };
///
/// let config = GeneratorConfig {
///     disabled: vec!["count".into()],
///     ..Default::default()
/// };
/// let generator = Generator::with_config(&config);
/// let query = generator.generate("count users", &Schema::default()).unwrap();
///
/// assert_eq!(query.intent, Intent::Default);
/// ```
pub struct Generator {
    patterns: Vec<Box<dyn Pattern>>,
    fallback: patterns::ListingPattern
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator with every intent enabled and the stock limits
    pub fn new() -> Self {
        Self::with_config(&GeneratorConfig::default())
    }

    /// Generator honouring disabled intents and limit overrides
    ///
    /// # Notes
    ///
    /// - Unknown intent identifiers in `disabled` are ignored
    /// - The Default listing cannot be disabled and is always tried last
    pub fn with_config(config: &GeneratorConfig) -> Self {
        let candidates: Vec<Box<dyn Pattern>> = vec![
            Box::new(patterns::CountPattern),
            Box::new(patterns::AveragePattern),
            Box::new(patterns::TopNPattern {
                default_limit: config.top_limit
            }),
            Box::new(patterns::GroupByPattern),
        ];
        let enabled = candidates
            .into_iter()
            .filter(|p| {
                !config
                    .disabled
                    .iter()
                    .any(|id| Intent::from_id(id) == Some(p.intent()))
            })
            .collect();
        Self {
            patterns: enabled,
            fallback: patterns::ListingPattern {
                limit: config.preview_limit
            }
        }
    }

    /// Intents in the order they are tried
    pub fn intents(&self) -> Vec<Intent> {
        self.patterns
            .iter()
            .map(|p| p.intent())
            .chain([self.fallback.intent()])
            .collect()
    }

    /// Classify a question without building a query
    pub fn classify(&self, question: &str) -> Intent {
        let question = question.to_lowercase();
        self.patterns
            .iter()
            .find(|p| p.matches(&question))
            .map_or_else(|| self.fallback.intent(), |p| p.intent())
    }

    /// Generate a query for one question
    ///
    /// Any non-empty question produces a query; one that triggers no pattern
    /// gets the Default listing.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::EmptyQuestion`] for an empty question
    pub fn generate(
        &self,
        question: &str,
        schema: &Schema
    ) -> Result<GeneratedQuery, GenerationError> {
        if question.is_empty() {
            return Err(GenerationError::EmptyQuestion);
        }
        let question = question.to_lowercase();
        let target = select_target(&question, schema);
        let query = match self.patterns.iter().find(|p| p.matches(&question)) {
            Some(pattern) => pattern.build(&question, &target),
            None => self.fallback.build(&question, &target)
        };
        Ok(query)
    }

    /// Generate queries for many questions against one schema (parallel)
    ///
    /// Results keep the order of `questions`.
    pub fn generate_batch<S>(
        &self,
        questions: &[S],
        schema: &Schema
    ) -> Vec<Result<GeneratedQuery, GenerationError>>
    where
        S: AsRef<str> + Sync
    {
        questions
            .par_iter()
            .map(|q| self.generate(q.as_ref(), schema))
            .collect()
    }
}

/// Generate with the stock generator
///
/// # Errors
///
/// Returns [`GenerationError::EmptyQuestion`] for an empty question
pub fn generate(question: &str, schema: &Schema) -> Result<GeneratedQuery, GenerationError> {
    Generator::new().generate(question, schema)
}

/// Parse a JSON schema and generate in one step
///
/// # Errors
///
/// Returns [`GenerationError::InvalidSchema`] for a malformed schema document
pub fn generate_from_json(
    question: &str,
    schema_json: &str
) -> Result<GeneratedQuery, GenerationError> {
    let schema = Schema::from_json(schema_json)?;
    generate(question, &schema)
}

/// Pick the target table and its columns for a lower-cased question
pub fn select_target<'a>(question: &str, schema: &'a Schema) -> Target<'a> {
    let table = schema
        .tables
        .iter()
        .find(|t| question.contains(&t.name.to_lowercase()))
        .or_else(|| schema.tables.first())
        .map(|t| t.name.as_str())
        .unwrap_or(UNKNOWN_TABLE);
    let mut columns = schema
        .table(table)
        .map(|t| t.column_names())
        .unwrap_or_default();
    if columns.is_empty() {
        columns.push(WILDCARD);
    }
    Target { table, columns }
}

/// First column not named `id`, else the first column
pub fn first_non_id_column<'a>(columns: &[&'a str]) -> &'a str {
    columns
        .iter()
        .find(|c| **c != ID_COLUMN)
        .or_else(|| columns.first())
        .copied()
        .unwrap_or(WILDCARD)
}

/// First standalone run of ASCII decimal digits
///
/// Digits from other scripts are not counted. Values too large for `u64` saturate to `u64::MAX`.
pub fn extract_limit(question: &str) -> Option<u64> {
    let digits = LIMIT_REGEX.captures(question)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u64::MAX))
}
