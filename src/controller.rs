//! Controller
//!
//! Owns the repository, the active filter and the edit session. UI events
//! arrive as `Msg`s; each one runs to completion and returns an `Update`
//! with the freshly rendered list plus anything the UI must do on the side.

use crate::config::AppConfig;
use crate::domain::{Filter, Todo, TodoResult};
use crate::edit_session::{EditOutcome, EditSession};
use crate::repository::{Storage, TodoRepository, TodoStore};
use crate::transfer::{self, ExportFile};
use crate::view_model::{self, RowAction, TodoListView};

pub const EDIT_COMPLETED_WARNING: &str = "Uncheck the item before editing it.";

/// How an edit was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    /// Double-click on the label; silently ignored for completed items
    DoubleClick,
    /// Edit button; warns for completed items
    EditButton,
}

/// User intents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Add(String),
    Toggle(String),
    Delete(String),
    StartEdit { id: String, trigger: EditTrigger },
    /// Sent on Enter and on blur; only the first one for a session counts
    CommitEdit { id: String, value: String },
    CancelEdit,
    SetFilter(Filter),
    ClearCompleted,
    Export,
    /// Contents of the chosen backup file
    Import(String),
    /// The backup file could not be read
    ImportReadFailed(String),
}

impl From<RowAction> for Msg {
    fn from(action: RowAction) -> Self {
        match action {
            RowAction::Toggle(id) => Msg::Toggle(id),
            RowAction::StartEdit(id) => Msg::StartEdit {
                id,
                trigger: EditTrigger::EditButton,
            },
            RowAction::Delete(id) => Msg::Delete(id),
        }
    }
}

/// Message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Warning(text) | Notice::Error(text) => text,
        }
    }
}

/// Outcome of one message
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub view: TodoListView,
    pub filter: Filter,
    /// Item whose label is an input field
    pub editing: Option<String>,
    pub notice: Option<Notice>,
    pub download: Option<ExportFile>,
    /// The new-item input should be emptied
    pub clear_input: bool,
}

pub struct Controller<S: Storage> {
    repo: TodoRepository<S>,
    export_prefix: String,
    filter: Filter,
    session: Option<EditSession>,
}

impl<S: Storage> Controller<S> {
    pub fn new(storage: S, config: &AppConfig) -> Self {
        Self::with_repository(
            TodoRepository::new(TodoStore::new(storage, config.storage_key.clone())),
            config,
        )
    }

    pub fn with_repository(repo: TodoRepository<S>, config: &AppConfig) -> Self {
        Self {
            repo,
            export_prefix: config.export_prefix.clone(),
            filter: Filter::default(),
            session: None,
        }
    }

    #[cfg(test)]
    pub fn repository(&self) -> &TodoRepository<S> {
        &self.repo
    }

    /// Id of the item being edited, if a session is open
    pub fn editing(&self) -> Option<&str> {
        self.session
            .as_ref()
            .filter(|session| !session.is_committed())
            .map(|session| session.item_id())
    }

    /// Render the stored collection without changing anything
    pub fn refresh(&self) -> Update {
        self.finish(self.repo.list(), None)
    }

    pub fn update(&mut self, msg: Msg) -> Update {
        match msg {
            Msg::Add(text) => {
                let accepted = !text.trim().is_empty();
                let mut update = self.apply(|repo| repo.add(&text));
                update.clear_input = accepted && update.notice.is_none();
                update
            }
            Msg::Toggle(id) => self.apply(|repo| repo.toggle(&id)),
            Msg::Delete(id) => self.apply(|repo| repo.delete(&id)),
            Msg::ClearCompleted => self.apply(|repo| repo.clear_completed()),
            Msg::SetFilter(filter) => {
                self.filter = filter;
                self.refresh()
            }
            Msg::StartEdit { id, trigger } => self.start_edit(&id, trigger),
            Msg::CommitEdit { id, value } => self.commit_edit(&id, &value),
            Msg::CancelEdit => {
                self.session = None;
                self.refresh()
            }
            Msg::Export => self.export(),
            Msg::Import(contents) => self.import(&contents),
            Msg::ImportReadFailed(reason) => {
                log::error!("Failed to read backup file: {}", reason);
                let todos = self.repo.list();
                self.finish(todos, Some(Notice::Error(format!("Import failed: {}", reason))))
            }
        }
    }

    fn apply<F>(&self, op: F) -> Update
    where
        F: FnOnce(&TodoRepository<S>) -> TodoResult<Vec<Todo>>,
    {
        match op(&self.repo) {
            Ok(todos) => self.finish(todos, None),
            Err(e) => {
                log::error!("Failed to save todos: {}", e);
                let todos = self.repo.list();
                self.finish(todos, Some(Notice::Error(e.to_string())))
            }
        }
    }

    fn start_edit(&mut self, id: &str, trigger: EditTrigger) -> Update {
        let todos = self.repo.list();
        let notice = match todos.iter().find(|todo| todo.id == id) {
            Some(todo) if todo.completed => match trigger {
                EditTrigger::EditButton => Some(Notice::Warning(EDIT_COMPLETED_WARNING.to_string())),
                EditTrigger::DoubleClick => None,
            },
            Some(todo) => {
                self.session = Some(EditSession::start(todo.id.clone(), todo.text.clone()));
                None
            }
            None => None,
        };
        self.finish(todos, notice)
    }

    fn commit_edit(&mut self, id: &str, value: &str) -> Update {
        let outcome = match self.session.as_mut() {
            Some(session) if session.item_id() == id => session.commit(value),
            _ => {
                log::debug!("Ignoring commit for {} without an open session", id);
                EditOutcome::AlreadyCommitted
            }
        };

        match outcome {
            EditOutcome::Apply { id, text } => self.apply(|repo| repo.edit(&id, &text)),
            EditOutcome::Discard | EditOutcome::AlreadyCommitted => self.refresh(),
        }
    }

    fn export(&self) -> Update {
        let today = chrono::Utc::now().date_naive();
        match transfer::export(self.repo.store(), &self.export_prefix, today) {
            Ok(file) => {
                log::info!("Exporting {} todos to {}", file.count, file.file_name);
                let notice = Notice::Info(format!("Exported {}.", view_model::pluralize(file.count, "todo")));
                let mut update = self.finish(self.repo.list(), Some(notice));
                update.download = Some(file);
                update
            }
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.finish(self.repo.list(), Some(Notice::Error(format!("Export failed: {}", e))))
            }
        }
    }

    fn import(&mut self, contents: &str) -> Update {
        match transfer::import(self.repo.store(), contents) {
            Ok(todos) => {
                self.session = None;
                let notice = Notice::Info(format!("Imported {}. Data restored.", view_model::pluralize(todos.len(), "todo")));
                self.finish(todos, Some(notice))
            }
            Err(e) => {
                log::error!("Import failed: {}", e);
                let todos = self.repo.list();
                self.finish(todos, Some(Notice::Error(format!("Import failed: {}", e))))
            }
        }
    }

    fn finish(&self, todos: Vec<Todo>, notice: Option<Notice>) -> Update {
        Update {
            view: view_model::render(&todos, self.filter),
            filter: self.filter,
            editing: self.editing().map(str::to_string),
            notice,
            download: None,
            clear_input: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TodoError;
    use crate::repository::MemoryStorage;

    /// Reads succeed, every write is refused
    struct FullStorage {
        inner: MemoryStorage,
    }

    impl Storage for FullStorage {
        fn get_item(&self, key: &str) -> TodoResult<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&self, _key: &str, _value: &str) -> TodoResult<()> {
            Err(TodoError::Storage("QuotaExceededError".to_string()))
        }
    }

    const STORED: &str = r#"[{"id":"2","text":"walk dog","completed":false},{"id":"1","text":"buy milk","completed":true}]"#;

    fn setup_full() -> Controller<FullStorage> {
        let inner = MemoryStorage::new();
        inner.set_item(crate::config::STORAGE_KEY, STORED).unwrap();
        Controller::new(FullStorage { inner }, &AppConfig::default())
    }

    fn assert_write_failed(update: &Update) {
        match &update.notice {
            Some(Notice::Error(text)) => assert!(text.contains("QuotaExceededError"), "{}", text),
            other => panic!("expected error notice, got {:?}", other),
        }
        assert_eq!(row_texts(update), vec!["walk dog", "buy milk"]);
        assert_eq!(update.view.is_completed("1"), Some(true));
        assert_eq!(update.view.is_completed("2"), Some(false));
    }

    fn setup() -> Controller<MemoryStorage> {
        Controller::new(MemoryStorage::new(), &AppConfig::default())
    }

    fn row_texts(update: &Update) -> Vec<&str> {
        update.view.rows.iter().map(|r| r.text.as_str()).collect()
    }

    fn id_of(update: &Update, text: &str) -> String {
        update.view.rows.iter().find(|r| r.text == text).expect("row should exist").id.clone()
    }

    fn writes(ctrl: &Controller<MemoryStorage>) -> usize {
        ctrl.repository().store().storage().writes()
    }

    #[test]
    fn test_full_scenario() {
        let mut ctrl = setup();
        let update = ctrl.refresh();
        assert!(update.view.show_empty);

        ctrl.update(Msg::Add("buy milk".to_string()));
        let update = ctrl.update(Msg::Add("walk dog".to_string()));
        assert_eq!(row_texts(&update), vec!["walk dog", "buy milk"]);
        assert!(update.clear_input);

        let milk = id_of(&update, "buy milk");
        ctrl.update(Msg::Toggle(milk));

        let update = ctrl.update(Msg::SetFilter(Filter::Completed));
        assert_eq!(row_texts(&update), vec!["buy milk"]);
        assert_eq!(update.filter, Filter::Completed);

        let update = ctrl.update(Msg::SetFilter(Filter::Active));
        assert_eq!(row_texts(&update), vec!["walk dog"]);

        let update = ctrl.update(Msg::ClearCompleted);
        assert_eq!(row_texts(&update), vec!["walk dog"]);
        assert_eq!(update.view.total, 1);
    }

    #[test]
    fn test_failed_add_keeps_input_and_list() {
        let mut ctrl = setup_full();
        let update = ctrl.update(Msg::Add("call mom".to_string()));
        assert_write_failed(&update);
        assert!(!update.clear_input);
    }

    #[test]
    fn test_failed_toggle_shows_stored_state() {
        let mut ctrl = setup_full();
        assert_write_failed(&ctrl.update(Msg::Toggle("1".to_string())));
        assert_write_failed(&ctrl.update(Msg::Toggle("2".to_string())));
    }

    #[test]
    fn test_failed_edit_shows_stored_text() {
        let mut ctrl = setup_full();
        ctrl.update(Msg::StartEdit { id: "2".to_string(), trigger: EditTrigger::DoubleClick });
        let update = ctrl.update(Msg::CommitEdit { id: "2".to_string(), value: "walk cat".to_string() });
        assert_write_failed(&update);
        assert_eq!(update.editing, None);
    }

    #[test]
    fn test_failed_delete_and_clear_show_stored_list() {
        let mut ctrl = setup_full();
        assert_write_failed(&ctrl.update(Msg::Delete("2".to_string())));
        assert_write_failed(&ctrl.update(Msg::ClearCompleted));
    }

    #[test]
    fn test_blank_add_keeps_input() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::Add("   ".to_string()));
        assert!(!update.clear_input);
        assert!(update.view.show_empty);
        assert_eq!(writes(&ctrl), 0);
    }

    #[test]
    fn test_edit_commit_once_on_enter_then_blur() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::Add("buy milk".to_string()));
        let id = id_of(&update, "buy milk");

        let update = ctrl.update(Msg::StartEdit { id: id.clone(), trigger: EditTrigger::DoubleClick });
        assert_eq!(update.editing.as_deref(), Some(id.as_str()));

        let update = ctrl.update(Msg::CommitEdit { id: id.clone(), value: "buy oat milk".to_string() });
        assert_eq!(row_texts(&update), vec!["buy oat milk"]);
        assert_eq!(update.editing, None);
        let after_enter = writes(&ctrl);

        let update = ctrl.update(Msg::CommitEdit { id, value: "buy oat milk".to_string() });
        assert_eq!(row_texts(&update), vec!["buy oat milk"]);
        assert_eq!(writes(&ctrl), after_enter);
    }

    #[test]
    fn test_edit_unchanged_text_discarded() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::Add("buy milk".to_string()));
        let id = id_of(&update, "buy milk");
        let before = writes(&ctrl);

        ctrl.update(Msg::StartEdit { id: id.clone(), trigger: EditTrigger::EditButton });
        let update = ctrl.update(Msg::CommitEdit { id, value: "buy milk ".to_string() });
        assert_eq!(row_texts(&update), vec!["buy milk"]);
        assert_eq!(writes(&ctrl), before);
    }

    #[test]
    fn test_commit_without_session_ignored() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::Add("buy milk".to_string()));
        let id = id_of(&update, "buy milk");

        let update = ctrl.update(Msg::CommitEdit { id, value: "hijacked".to_string() });
        assert_eq!(row_texts(&update), vec!["buy milk"]);
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::Add("buy milk".to_string()));
        let id = id_of(&update, "buy milk");

        ctrl.update(Msg::StartEdit { id: id.clone(), trigger: EditTrigger::DoubleClick });
        let update = ctrl.update(Msg::CancelEdit);
        assert_eq!(update.editing, None);

        let update = ctrl.update(Msg::CommitEdit { id, value: "changed".to_string() });
        assert_eq!(row_texts(&update), vec!["buy milk"]);
    }

    #[test]
    fn test_completed_item_cannot_enter_edit() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::Add("buy milk".to_string()));
        let id = id_of(&update, "buy milk");
        ctrl.update(Msg::Toggle(id.clone()));

        let update = ctrl.update(Msg::StartEdit { id: id.clone(), trigger: EditTrigger::DoubleClick });
        assert_eq!(update.editing, None);
        assert_eq!(update.notice, None);

        let update = ctrl.update(RowAction::StartEdit(id).into());
        assert_eq!(update.editing, None);
        assert_eq!(update.notice, Some(Notice::Warning(EDIT_COMPLETED_WARNING.to_string())));
    }

    #[test]
    fn test_export_offers_download() {
        let mut ctrl = setup();
        ctrl.update(Msg::Add("buy milk".to_string()));

        let update = ctrl.update(Msg::Export);
        let file = update.download.expect("export should produce a file");
        assert_eq!(file.count, 1);
        assert!(file.file_name.starts_with("todo-backup-"));
        assert!(file.file_name.ends_with(".json"));
        assert_eq!(update.notice, Some(Notice::Info("Exported 1 todo.".to_string())));
    }

    #[test]
    fn test_import_not_a_list_rejected() {
        let mut ctrl = setup();
        ctrl.update(Msg::Add("walk dog".to_string()));

        let update = ctrl.update(Msg::Import(r#"{"not":"a list"}"#.to_string()));
        assert_eq!(row_texts(&update), vec!["walk dog"]);
        match update.notice {
            Some(Notice::Error(text)) => assert!(text.starts_with("Import failed")),
            other => panic!("expected error notice, got {:?}", other),
        }
    }

    #[test]
    fn test_import_replaces_collection() {
        let mut ctrl = setup();
        ctrl.update(Msg::Add("walk dog".to_string()));

        let contents = r#"[{"id":"1","text":"restored","completed":true},{"text":"no id"}]"#.to_string();
        let update = ctrl.update(Msg::Import(contents));
        assert_eq!(row_texts(&update), vec!["restored", "no id"]);
        assert_eq!(
            update.notice,
            Some(Notice::Info("Imported 2 todos. Data restored.".to_string()))
        );
    }

    #[test]
    fn test_import_read_failure_reports() {
        let mut ctrl = setup();
        let update = ctrl.update(Msg::ImportReadFailed("NotReadableError".to_string()));
        assert_eq!(update.notice.as_ref().map(Notice::text), Some("Import failed: NotReadableError"));
    }

    #[test]
    fn test_filter_not_persisted() {
        let storage = MemoryStorage::new();
        storage.set_item(crate::config::STORAGE_KEY, r#"[{"id":"1","text":"a","completed":true}]"#).unwrap();
        let mut ctrl = Controller::new(storage, &AppConfig::default());
        let update = ctrl.update(Msg::SetFilter(Filter::Active));
        assert_eq!(writes(&ctrl), 1);
        assert_eq!(update.filter, Filter::Active);
        assert!(update.view.rows.is_empty());
        assert!(!update.view.show_empty);
    }
}
