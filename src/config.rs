//! App Configuration
//!
//! Fixed settings. There are no runtime configuration sources.

/// localStorage key; shared with data saved by earlier versions of the page
pub const STORAGE_KEY: &str = "advancedPureStaticTodos";

/// Backup files are named `<prefix>-YYYY-MM-DD.json`
pub const EXPORT_PREFIX: &str = "todo-backup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_key: String,
    pub export_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            export_prefix: EXPORT_PREFIX.to_string(),
        }
    }
}
