//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! is the source of truth; this store mirrors its latest `Update`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::Update;
use crate::domain::Filter;
use crate::view_model::TodoListView;

/// Rendered state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible rows and counters
    pub view: TodoListView,
    /// Active filter button
    pub filter: Filter,
    /// Item showing an input instead of its label
    pub editing: Option<String>,
}

impl AppState {
    pub fn from_update(update: &Update) -> Self {
        Self {
            view: update.view.clone(),
            filter: update.filter,
            editing: update.editing.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copy a controller update into the store
pub fn store_apply_update(store: &AppStore, update: &Update) {
    *store.view().write() = update.view.clone();
    *store.filter().write() = update.filter;
    *store.editing().write() = update.editing.clone();
}
