//! Todo Entity
//!
//! A single task record as persisted in local storage and backup files.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One task. Field order is the serialized order: `id`, `text`, `completed`.
///
/// Deserialization never fails for a single entry: stored data and backups
/// may hold entries written by hand or by other tools, and one odd entry must
/// not cost the rest of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,
    /// Task text (trimmed, non-empty when created through the UI)
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create a new open task
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Read one entry of a stored or imported list.
    ///
    /// Objects supply `id`, `text` and `completed`; missing fields default
    /// and other JSON types are converted. Any non-object entry becomes an
    /// item whose text is the value itself.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                id: fields.remove("id").map(value_text).unwrap_or_default(),
                text: fields.remove("text").map(value_text).unwrap_or_default(),
                completed: fields.remove("completed").is_some_and(|v| truthy(&v)),
            },
            other => Self {
                id: String::new(),
                text: value_text(other),
                completed: false,
            },
        }
    }
}

impl<'de> Deserialize<'de> for Todo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Todo::from_value)
    }
}

/// Strings as-is, `null` as empty, anything else as its JSON text
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Browser truthiness, which is how the page has always read `completed`
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pick a fresh id from a millisecond timestamp.
///
/// Two adds within the same millisecond would collide, so the value is bumped
/// until it is unused in `existing`.
pub fn next_id(now_millis: i64, existing: &[Todo]) -> String {
    let mut candidate = now_millis;
    loop {
        let id = candidate.to_string();
        if !existing.iter().any(|todo| todo.id == id) {
            return id;
        }
        candidate += 1;
    }
}
