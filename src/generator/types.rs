//! Type definitions for the query generator.
//!
//! - [`Intent`] - Classified category of a question
//! - [`Target`] - Table and columns a query is built against
//! - [`GeneratedQuery`] - Query text plus explanation

use serde::Serialize;

/// Classified category of a natural-language question.
///
/// Variants are listed in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// `SELECT COUNT(*)`
    Count,
    /// `SELECT AVG(col)`
    Average,
    /// Ordered listing with a row limit
    TopN,
    /// Per-group counts
    GroupBy,
    /// Plain listing of the first rows
    Default
}

impl Intent {
    /// All intents in priority order
    pub const ALL: [Intent; 5] = [
        Self::Count,
        Self::Average,
        Self::TopN,
        Self::GroupBy,
        Self::Default
    ];

    /// Stable identifier used in configuration
    pub fn id(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Average => "average",
            Self::TopN => "top_n",
            Self::GroupBy => "group_by",
            Self::Default => "default"
        }
    }

    /// Look up an intent by identifier, ignoring case
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.id().eq_ignore_ascii_case(id.trim()))
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count => write!(f, "Count"),
            Self::Average => write!(f, "Average"),
            Self::TopN => write!(f, "TopN"),
            Self::GroupBy => write!(f, "GroupBy"),
            Self::Default => write!(f, "Default")
        }
    }
}

/// Table and columns selected for a question.
///
/// `columns` is never empty: a table without known columns is represented by
/// the single wildcard `*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target<'a> {
    pub table:   &'a str,
    pub columns: Vec<&'a str>
}

/// Generated query and its plain-English explanation.
///
/// Serializes to exactly `{"queryText": ..., "explanation": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuery {
    pub query_text:  String,
    pub explanation: String,
    #[serde(skip)]
    pub intent:      Intent,
    #[serde(skip)]
    pub table:       String
}
