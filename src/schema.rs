//! Database schema representation and boundary validation.
//!
//! A schema is an ordered list of tables, each with an ordered list of
//! columns. It arrives as JSON, YAML or SQL DDL and is validated here, before
//! it reaches the generator, so that a malformed document fails with
//! [`GenerationError`] instead of producing a silent default.
//!
//! # Document Shape
//!
//! ```json
//! [
//!   {
//!     "tableName": "users",
//!     "columns": [{ "name": "id", "type": "integer" }, { "name": "email" }]
//!   }
//! ]
//! ```
//!
//! Additional fields are accepted and ignored. A column `type` is kept when it
//! is a string and dropped otherwise; the generator never looks at it.
//!
//! # Example
//!
//! ```
//! use sql_query_generator::schema::Schema;
//!
//! let schema = Schema::from_json(
//!     r#"[{"tableName": "users", "columns": [{"name": "id"}, {"name": "email"}]}]"#
//! )
//! .unwrap();
//!
//! let users = schema.table("users").unwrap();
//! assert_eq!(users.columns.len(), 2);
//! assert!(schema.to_summary().contains("users"));
//! ```

mod ddl;

use std::path::Path;

pub use ddl::SqlDialect;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GenerationError, invalid_schema};

/// Column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name:      String,
    /// Declared type, informational only
    #[serde(
        rename = "type",
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_type: Option<String>
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            data_type: None
        }
    }

    pub fn with_type(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            data_type: Some(data_type.into())
        }
    }
}

/// Table descriptor with columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(rename = "tableName")]
    pub name:    String,
    pub columns: Vec<Column>
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns
        }
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Ordered collection of tables.
///
/// Input order is significant: table selection is first-match-wins, so tables
/// are never sorted and duplicate names are kept as given.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub tables: Vec<Table>
}

/// Serialized representation of a schema document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemaFormat {
    #[default]
    Json,
    Yaml,
    Sql
}

impl SchemaFormat {
    /// Detect format from file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("sql" | "ddl") => Self::Sql,
            _ => Self::Json
        }
    }
}

impl Schema {
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Parse a JSON sequence of table descriptors
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidSchema`] when the document is not a
    /// sequence or a table/column is missing a required field
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        serde_json::from_str(json).map_err(|e| invalid_schema(e.to_string()))
    }

    /// Parse a YAML sequence of table descriptors
    ///
    /// # Errors
    ///
    /// Same conditions as [`Schema::from_json`]
    pub fn from_yaml(yaml: &str) -> Result<Self, GenerationError> {
        serde_yaml::from_str(yaml).map_err(|e| invalid_schema(e.to_string()))
    }

    /// Parse `CREATE TABLE` statements
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidSchema`] if the SQL does not parse
    pub fn from_sql(sql: &str, dialect: SqlDialect) -> Result<Self, GenerationError> {
        ddl::parse_tables(sql, dialect).map(Self::new)
    }

    /// Parse a schema document in the given format
    pub fn parse(
        input: &str,
        format: SchemaFormat,
        dialect: SqlDialect
    ) -> Result<Self, GenerationError> {
        match format {
            SchemaFormat::Json => Self::from_json(input),
            SchemaFormat::Yaml => Self::from_yaml(input),
            SchemaFormat::Sql => Self::from_sql(input, dialect)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// First table whose name matches exactly
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Human-readable listing of tables and columns
    pub fn to_summary(&self) -> String {
        let mut summary = String::from("Database Schema:\n\n");
        if self.tables.is_empty() {
            summary.push_str("(no tables)\n");
            return summary;
        }
        for table in &self.tables {
            summary.push_str(&format!("Table: {}\n", table.name));
            summary.push_str("Columns:\n");
            if table.columns.is_empty() {
                summary.push_str("  (none)\n");
            }
            for col in &table.columns {
                match &col.data_type {
                    Some(data_type) => {
                        summary.push_str(&format!("  - {} {}\n", col.name, data_type))
                    }
                    None => summary.push_str(&format!("  - {}\n", col.name))
                }
            }
            summary.push('\n');
        }
        summary
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
}
