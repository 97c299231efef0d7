//! New Todo Form Component
//!
//! Text input plus Add button. Enter submits the form.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Msg;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let add_todo = move |ev: SubmitEvent| {
        ev.prevent_default();
        let cleared = ctx
            .dispatch(Msg::Add(new_text.get_untracked()))
            .is_some_and(|update| update.clear_input);
        if cleared {
            set_new_text.set(String::new());
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                id="new-todo"
                placeholder="What needs to be done?"
                autofocus
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" id="add-button">"Add"</button>
        </form>
    }
}
