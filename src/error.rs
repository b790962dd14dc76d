pub use masterror::{AppError, AppResult};

/// Failure raised when the question or schema cannot be used for generation.
///
/// Once inputs are well formed generation always succeeds, so this is the
/// only error the generator itself produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Schema is not a sequence of `{ tableName, columns: [{ name }] }`
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Question must not be empty")]
    EmptyQuestion
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create schema error from a parser message, keeping position info if any
pub fn invalid_schema(message: impl Into<String>) -> GenerationError {
    let msg = message.into();
    GenerationError::InvalidSchema(format_position(&msg))
}

/// Format parser error with position highlighting
fn format_position(message: &str) -> String {
    // sqlparser: "... at Line: X, Column: Y"
    // serde_json / serde_yaml: "... at line X column Y"
    if let Some(pos) = extract_position(message) {
        format!("{} (line {}, column {})", message, pos.line, pos.column)
    } else {
        message.to_string()
    }
}

struct Position {
    line:   usize,
    column: usize
}

fn extract_position(message: &str) -> Option<Position> {
    let markers = [("Line: ", ", Column"), ("line ", " column")];
    for (line_marker, col_marker) in markers {
        let Some(line_start) = message.find(line_marker) else {
            continue;
        };
        let rest = &message[line_start + line_marker.len()..];
        let Some(col_start) = rest.find(col_marker) else {
            continue;
        };
        let line_str = &rest[..col_start];
        // sqlparser versions differ on "Column 5" vs "Column: 5"
        let col_rest = rest[col_start + col_marker.len()..].trim_start_matches([':', ' ']);
        let col_end = col_rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(col_rest.len());

        if let (Ok(line), Ok(column)) = (line_str.parse(), col_rest[..col_end].parse()) {
            return Some(Position { line, column });
        }
    }

    None
}
