//! Domain Layer
//!
//! Todo entity, filter predicate and error types.
//! This layer has NO browser dependencies (except serde for serialization).

mod error;
mod filter;
mod todo;

pub use error::{TodoError, TodoResult};
pub use filter::Filter;
pub use todo::{next_id, Todo};
