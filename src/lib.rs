//! # SQL Query Generator Library
//!
//! Turns a natural-language question plus a table schema into a single SQL
//! query and a one-sentence explanation.
//!
//! ```
//! use sql_query_generator::{generator::generate, schema::Schema};
//!
//! let schema = Schema::from_json(
//!     r#"[{"tableName":"orders","columns":[{"name":"id"},{"name":"amount"}]}]"#
//! )
//! .unwrap();
//! let query = generate("What is the average amount of orders?", &schema).unwrap();
//!
//! assert_eq!(query.query_text, "SELECT AVG(amount) FROM orders");
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod schema;
pub mod suggest;
