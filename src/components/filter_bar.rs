//! Filter Bar Component
//!
//! All/Active/Completed toggles, remaining count and Clear completed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::Msg;
use crate::domain::Filter;
use crate::state::AppStateStoreFields;
use crate::view_model::pluralize;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let items_left = move || format!("{} left", pluralize(store.view().get().active_count, "item"));

    view! {
        <div class="filter-bar">
            <div class="filter-buttons">
                {Filter::ALL.into_iter().map(move |filter| {
                    let is_selected = move || store.filter().get() == filter;
                    view! {
                        <button
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| {
                                ctx.dispatch(Msg::SetFilter(filter));
                            }
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <span class="todo-count">{items_left}</span>

            <button
                id="clear-completed"
                prop:disabled=move || store.view().get().completed_count == 0
                on:click=move |_| {
                    ctx.dispatch(Msg::ClearCompleted);
                }
            >
                "Clear completed"
            </button>
        </div>
    }
}
