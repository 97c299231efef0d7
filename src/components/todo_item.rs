//! Todo Item Component
//!
//! One row: checkbox, label (or edit input), edit and delete buttons.

use leptos::ev::{FocusEvent, KeyboardEvent};
use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::{EditTrigger, Msg};
use crate::edit_session::{edit_key, EditKey};
use crate::state::AppStateStoreFields;
use crate::view_model::TodoRow;

/// A single row in the list
#[component]
pub fn TodoItem(row: TodoRow) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let completed = row.completed;
    let toggle = row.toggle_action();
    let toggle_id = row.id.clone();
    let edit = row.edit_action();
    let delete = row.delete_action();

    let editing_id = row.id.clone();
    let is_editing = move || store.editing().get().as_deref() == Some(editing_id.as_str());

    let id = row.id.clone();
    let text = row.text.clone();

    view! {
        <li class={if completed { "todo-item completed" } else { "todo-item" }}>
            <div class="todo-content">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=completed
                        on:change=move |ev| {
                            // A failed save leaves the row key unchanged, so the
                            // row is not rebuilt; put the box back to what is stored.
                            let input: web_sys::HtmlInputElement = event_target(&ev);
                            let stored = ctx
                                .dispatch(toggle.clone().into())
                                .and_then(|update| update.view.is_completed(&toggle_id));
                            if let Some(completed) = stored {
                                input.set_checked(completed);
                            }
                        }
                    />
                    <span class="checkmark"></span>
                </label>

                {move || if is_editing() {
                    view! { <TodoEditInput id=id.clone() text=text.clone() /> }.into_any()
                } else {
                    let id = id.clone();
                    view! {
                        <span
                            class="todo-text"
                            on:dblclick=move |_| {
                                ctx.dispatch(Msg::StartEdit {
                                    id: id.clone(),
                                    trigger: EditTrigger::DoubleClick,
                                });
                            }
                        >
                            {text.clone()}
                        </span>
                    }.into_any()
                }}
            </div>

            <div class="todo-actions">
                <button
                    class="action-button edit-button"
                    on:click=move |_| {
                        ctx.dispatch(edit.clone().into());
                    }
                >
                    "Edit"
                </button>
                <button
                    class="action-button delete-button"
                    on:click=move |_| {
                        ctx.dispatch(delete.clone().into());
                    }
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

/// Inline editor shown in place of the label.
///
/// Enter commits and suppresses the blur that follows when the input is
/// removed; Escape cancels. Keys are ignored while an IME is composing.
#[component]
fn TodoEditInput(id: String, text: String) -> impl IntoView {
    let ctx = use_app_context();
    let input_ref = NodeRef::<html::Input>::new();
    let finished = StoredValue::new(false);

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let blur_id = id.clone();
    // Blur can arrive while the input is being torn down after Enter, when
    // `finished` is already disposed.
    let on_blur = move |ev: FocusEvent| {
        if finished.try_get_value().unwrap_or(true) {
            return;
        }
        let _ = finished.try_set_value(true);
        ctx.dispatch(Msg::CommitEdit {
            id: blur_id.clone(),
            value: event_target_value(&ev),
        });
    };

    let on_keydown = move |ev: KeyboardEvent| match edit_key(&ev.key(), ev.is_composing()) {
        Some(EditKey::Commit) => {
            ev.prevent_default();
            let _ = finished.try_set_value(true);
            ctx.dispatch(Msg::CommitEdit {
                id: id.clone(),
                value: event_target_value(&ev),
            });
        }
        Some(EditKey::Cancel) => {
            let _ = finished.try_set_value(true);
            ctx.dispatch(Msg::CancelEdit);
        }
        None => {}
    };

    view! {
        <input
            type="text"
            class="edit-input"
            node_ref=input_ref
            prop:value=text
            on:blur=on_blur
            on:keydown=on_keydown
        />
    }
}
