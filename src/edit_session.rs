//! Inline Edit Session
//!
//! Tracks the one item whose label is currently an input field.
//! Both Enter and blur end the session, and the second of the two must not
//! apply the edit again, so commit is idempotent.

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Write the new text
    Apply { id: String, text: String },
    /// Empty or unchanged; just re-render
    Discard,
    /// The session was already committed
    AlreadyCommitted,
}

/// Key presses the edit input reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Commit,
    Cancel,
}

/// Map a key press in the edit input.
///
/// Keys pressed while an input method is composing belong to the IME (Enter
/// there picks a candidate) and are ignored.
pub fn edit_key(key: &str, is_composing: bool) -> Option<EditKey> {
    if is_composing {
        return None;
    }
    match key {
        "Enter" => Some(EditKey::Commit),
        "Escape" => Some(EditKey::Cancel),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    item_id: String,
    original_text: String,
    committed: bool,
}

impl EditSession {
    pub fn start(item_id: impl Into<String>, original_text: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            original_text: original_text.into(),
            committed: false,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn commit(&mut self, value: &str) -> EditOutcome {
        if self.committed {
            return EditOutcome::AlreadyCommitted;
        }
        self.committed = true;

        let text = value.trim();
        if text.is_empty() || text == self.original_text {
            EditOutcome::Discard
        } else {
            EditOutcome::Apply {
                id: self.item_id.clone(),
                text: text.to_string(),
            }
        }
    }
}
