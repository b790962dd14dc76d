use colored::Colorize;
use serde::Serialize;

use crate::{
    error::GenerationError,
    generator::{GeneratedQuery, Intent},
    schema::Schema,
    suggest::Suggestion
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-line JSON, the format existing callers parse
    #[default]
    Json,
    Yaml,
    Text
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Json,
            colored: true,
            verbose: false
        }
    }
}

/// Generated query with classification details, used in verbose mode
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult<'a> {
    pub query_text:  &'a str,
    pub explanation: &'a str,
    pub intent:      Intent,
    pub table:       &'a str
}

impl<'a> From<&'a GeneratedQuery> for DetailedResult<'a> {
    fn from(query: &'a GeneratedQuery) -> Self {
        Self {
            query_text:  &query.query_text,
            explanation: &query.explanation,
            intent:      query.intent,
            table:       &query.table
        }
    }
}

/// Error document written to stderr
#[derive(Debug, Serialize)]
pub struct ErrorDocument {
    pub error: String
}

/// One line of batch output
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BatchEntry<'a> {
    Generated {
        question: &'a str,
        #[serde(flatten)]
        result:   DetailedResult<'a>
    },
    Failed {
        question: &'a str,
        error:    String
    }
}

/// Format a single generated query
pub fn format_generated(query: &GeneratedQuery, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json if opts.verbose => {
            serde_json::to_string(&DetailedResult::from(query)).unwrap_or_default()
        }
        OutputFormat::Json => serde_json::to_string(query).unwrap_or_default(),
        OutputFormat::Yaml if opts.verbose => {
            serde_yaml::to_string(&DetailedResult::from(query)).unwrap_or_default()
        }
        OutputFormat::Yaml => serde_yaml::to_string(query).unwrap_or_default(),
        OutputFormat::Text => format_text_query(query, opts)
    }
}

/// Format batch results, keeping input order
pub fn format_batch(
    questions: &[String],
    results: &[Result<GeneratedQuery, GenerationError>],
    opts: &OutputOptions
) -> String {
    let entries: Vec<BatchEntry<'_>> = questions
        .iter()
        .zip(results)
        .map(|(question, result)| match result {
            Ok(query) => BatchEntry::Generated {
                question: question.as_str(),
                result:   DetailedResult::from(query)
            },
            Err(err) => BatchEntry::Failed {
                question: question.as_str(),
                error:    err.to_string()
            }
        })
        .collect();
    match opts.format {
        OutputFormat::Json => serde_json::to_string(&entries).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&entries).unwrap_or_default(),
        OutputFormat::Text => {
            let mut output = String::new();
            for (i, (question, result)) in questions.iter().zip(results).enumerate() {
                let header = format!("Question #{}: {}", i + 1, question);
                if opts.colored {
                    output.push_str(&header.cyan().bold().to_string());
                } else {
                    output.push_str(&header);
                }
                output.push('\n');
                match result {
                    Ok(query) => output.push_str(&format_text_query(query, opts)),
                    Err(err) => output.push_str(&format_text_error(err, opts))
                }
                output.push('\n');
            }
            output
        }
    }
}

/// Format a generation failure for stderr
pub fn format_error(err: &GenerationError, opts: &OutputOptions) -> String {
    let document = ErrorDocument {
        error: err.to_string()
    };
    match opts.format {
        OutputFormat::Json => serde_json::to_string(&document).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(&document).unwrap_or_default(),
        OutputFormat::Text => format_text_error(err, opts)
    }
}

/// Format suggested questions
pub fn format_suggestions(suggestions: &[Suggestion], opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string(suggestions).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(suggestions).unwrap_or_default(),
        OutputFormat::Text => {
            if suggestions.is_empty() {
                return "No suggestions: schema has no tables\n".to_string();
            }
            let mut output = String::new();
            let title = "Suggested Queries";
            if opts.colored {
                output.push_str(&title.bold().to_string());
            } else {
                output.push_str(title);
            }
            output.push_str("\n\n");
            for suggestion in suggestions {
                if opts.verbose {
                    output.push_str(&format!(
                        "  - {} [{}]\n",
                        suggestion.question, suggestion.intent
                    ));
                } else {
                    output.push_str(&format!("  - {}\n", suggestion.question));
                }
            }
            output
        }
    }
}

/// Format a parsed schema
pub fn format_schema(schema: &Schema, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string(schema).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(schema).unwrap_or_default(),
        OutputFormat::Text => schema.to_summary()
    }
}

fn format_text_query(query: &GeneratedQuery, opts: &OutputOptions) -> String {
    let mut output = String::new();
    push_label(&mut output, "SQL Query:", opts);
    output.push_str(&format!("  {}\n", query.query_text));
    push_label(&mut output, "Explanation:", opts);
    output.push_str(&format!("  {}\n", query.explanation));
    if opts.verbose {
        output.push_str(&format!("Intent: {}\n", query.intent));
        output.push_str(&format!("Table: {}\n", query.table));
    }
    output
}

fn format_text_error(err: &GenerationError, opts: &OutputOptions) -> String {
    let message = format!("Error: {}", err);
    if opts.colored {
        format!("{}\n", message.red().bold())
    } else {
        format!("{}\n", message)
    }
}

fn push_label(output: &mut String, label: &str, opts: &OutputOptions) {
    if opts.colored {
        output.push_str(&label.green().bold().to_string());
    } else {
        output.push_str(label);
    }
    output.push('\n');
}
