//! Repository Layer
//!
//! Storage abstraction, the collection store and the item repository.

mod storage;
mod todo_repo;
mod todo_store;


pub use storage::{BrowserStorage, MemoryStorage, Storage};
pub use todo_repo::TodoRepository;
pub use todo_store::TodoStore;
