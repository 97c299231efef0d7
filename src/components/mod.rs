//! UI Components
//!
//! Leptos components materializing the list view model.

mod filter_bar;
mod new_todo_form;
mod todo_item;
mod todo_list;
mod transfer_bar;

pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use transfer_bar::TransferBar;
