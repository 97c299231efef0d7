//! Domain Errors

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors raised by storage and import/export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The persistent slot rejected a write (quota, privacy mode)
    Storage(String),
    /// Text could not be parsed as JSON todo data
    Parse(String),
    /// The imported document is valid JSON but its top level is not a list
    NotAList,
    /// Browser storage could not be obtained at all
    Unavailable(String),
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::Storage(msg) => write!(f, "Storage error: {}", msg),
            TodoError::Parse(msg) => write!(f, "Invalid JSON: {}", msg),
            TodoError::NotAList => write!(f, "File content is not a valid list of todos"),
            TodoError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for TodoError {}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        TodoError::Parse(err.to_string())
    }
}
