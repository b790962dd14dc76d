//! SQL DDL ingestion.
//!
//! Reads `CREATE TABLE` statements into [`Table`] descriptors in declaration
//! order. Every other statement (indexes, inserts, comments) is skipped.

use sqlparser::{
    ast::Statement,
    dialect::{
        ClickHouseDialect, Dialect, GenericDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect
    },
    parser::Parser
};

use super::{Column, Table};
use crate::error::{GenerationError, invalid_schema};

/// SQL dialect for parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SqlDialect {
    #[default]
    Generic,
    MySQL,
    PostgreSQL,
    SQLite,
    ClickHouse
}

impl SqlDialect {
    /// Convert to sqlparser dialect for parsing
    pub fn into_parser_dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::Generic => Box::new(GenericDialect {}),
            Self::MySQL => Box::new(MySqlDialect {}),
            Self::PostgreSQL => Box::new(PostgreSqlDialect {}),
            Self::SQLite => Box::new(SQLiteDialect {}),
            Self::ClickHouse => Box::new(ClickHouseDialect {})
        }
    }
}

pub(super) fn parse_tables(sql: &str, dialect: SqlDialect) -> Result<Vec<Table>, GenerationError> {
    let parser_dialect = dialect.into_parser_dialect();
    let statements = Parser::parse_sql(parser_dialect.as_ref(), sql)
        .map_err(|e| invalid_schema(e.to_string()))?;
    Ok(statements.into_iter().filter_map(table_from_statement).collect())
}

fn table_from_statement(stmt: Statement) -> Option<Table> {
    let Statement::CreateTable(create) = stmt else {
        return None;
    };
    let columns = create
        .columns
        .into_iter()
        .map(|column| Column::with_type(column.name.value, column.data_type.to_string()))
        .collect();
    Some(Table::new(unquote(&create.name.to_string()), columns))
}

fn unquote(name: &str) -> String {
    name.trim_matches(|c| matches!(c, '"' | '`' | '[' | ']'))
        .to_string()
}
