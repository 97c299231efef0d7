//! Todo List Component
//!
//! Empty-state message and the visible rows.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::state::AppStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <p
            id="empty-message"
            class="empty-message"
            style:display=move || if store.view().get().show_empty { "block" } else { "none" }
        >
            "Nothing to do yet. Add your first todo above."
        </p>

        // Keyed on every field so any change rebuilds the row
        <ul id="todo-list" class="todo-list">
            <For
                each=move || store.view().get().rows
                key=|row| (row.id.clone(), row.text.clone(), row.completed)
                children=move |row| view! { <TodoItem row=row /> }
            />
        </ul>
    }
}
