//! Todo List App
//!
//! Root component: builds the controller over browser storage and lays out
//! the form, filters, list and backup controls.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTodoForm, TodoList, TransferBar};
use crate::config::AppConfig;
use crate::context::{AppContext, AppController};
use crate::repository::{BrowserStorage, MemoryStorage, Storage};
use crate::state::AppState;

/// Browser storage, or an in-memory fallback with a warning to show
fn open_storage() -> (Box<dyn Storage>, Option<String>) {
    match BrowserStorage::open() {
        Ok(storage) => (Box::new(storage), None),
        Err(e) => {
            log::warn!("Falling back to in-memory storage: {}", e);
            (
                Box::new(MemoryStorage::new()),
                Some(format!("{}. Changes will be lost on reload.", e)),
            )
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    let (storage, storage_warning) = open_storage();

    let controller = AppController::new(storage, &config);
    let initial = controller.refresh();
    log::info!("Loaded {} todos from '{}'", initial.view.total, config.storage_key);

    // Provide context to all children
    provide_context(AppContext::new(Store::new(AppState::from_update(&initial)), controller));

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>

            {storage_warning.map(|warning| view! {
                <p class="storage-warning">{warning}</p>
            })}

            <NewTodoForm />
            <FilterBar />
            <TodoList />
            <TransferBar />
        </main>
    }
}
