//! Transfer Bar Component
//!
//! Export and Import of the backup file.

use leptos::ev::Event;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::controller::Msg;

#[component]
pub fn TransferBar() -> impl IntoView {
    let ctx = use_app_context();
    let file_input = NodeRef::<html::Input>::new();

    let on_file_chosen = move |ev: Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Allow choosing the same file again
        input.set_value("");
        let Some(file) = file else {
            return;
        };

        spawn_local(async move {
            let msg = match commands::read_file_text(file).await {
                Ok(contents) => Msg::Import(contents),
                Err(e) => Msg::ImportReadFailed(e),
            };
            ctx.dispatch(msg);
        });
    };

    view! {
        <div class="transfer-bar">
            <button
                id="export-data"
                on:click=move |_| {
                    ctx.dispatch(Msg::Export);
                }
            >
                "Export"
            </button>
            <button
                id="import-data"
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                "Import"
            </button>
            <input
                type="file"
                id="import-file"
                accept=".json,application/json"
                style="display: none;"
                node_ref=file_input
                on:change=on_file_chosen
            />
        </div>
    }
}
