//! Repository Layer
//!
//! Data access abstractions and implementations.

mod memory;
mod rest;
mod suggested_task_repo;
mod task_repo;
mod traits;
mod user_repo;

#[cfg(test)]
mod tests;

pub use memory::MemoryTableClient;
pub use rest::{RestConfig, RestTableClient};
pub use suggested_task_repo::SuggestedTaskRepository;
pub use task_repo::TaskRepository;
pub use traits::{column_text, decode_row, decode_rows, single_row, to_row, Filter, Repository, Row, TableClient};
pub use user_repo::UserRepository;
