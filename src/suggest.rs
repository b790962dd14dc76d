//! Example questions derived from a schema.
//!
//! Each candidate question is worded for one intent and one table. Table or
//! column names that themselves contain a trigger word (`accounts`, `laptops`)
//! can make the stock [`Generator`] read a question differently, so every
//! candidate is checked against it and dropped unless it classifies as the
//! intent and targets the table it is listed under.

use serde::Serialize;

use crate::{
    generator::{Generator, ID_COLUMN, Intent, first_non_id_column, select_target},
    schema::{Schema, Table}
};

/// Default number of suggestions returned
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// A suggested question for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub question: String,
    pub intent:   Intent,
    pub table:    String
}

/// Build up to `limit` suggestions, table by table in schema order
pub fn suggest(schema: &Schema, limit: usize) -> Vec<Suggestion> {
    let generator = Generator::new();
    schema
        .tables
        .iter()
        .flat_map(suggest_for_table)
        .filter(|s| is_read_as_labelled(&generator, schema, s))
        .take(limit)
        .collect()
}

fn is_read_as_labelled(generator: &Generator, schema: &Schema, suggestion: &Suggestion) -> bool {
    let question = suggestion.question.to_lowercase();
    generator.classify(&question) == suggestion.intent
        && select_target(&question, schema).table == suggestion.table
}

fn suggest_for_table(table: &Table) -> Vec<Suggestion> {
    let name = table.name.as_str();
    let columns = table.column_names();
    let has_measure = columns.iter().any(|c| *c != ID_COLUMN);
    let column = first_non_id_column(&columns);
    let make = |question: String, intent: Intent| Suggestion {
        question,
        intent,
        table: name.to_string()
    };

    let mut out = vec![make(format!("Count the records in {name}"), Intent::Count)];
    if has_measure {
        out.push(make(
            format!("What is the average {column} in {name}?"),
            Intent::Average
        ));
    }
    let by = if has_measure {
        format!(" by {column}")
    } else {
        String::new()
    };
    out.push(make(format!("Show the top 5 {name}{by}"), Intent::TopN));
    if has_measure {
        out.push(make(format!("Group by {column} in {name}"), Intent::GroupBy));
    }
    out.push(make(format!("List everything in {name}"), Intent::Default));
    out
}
