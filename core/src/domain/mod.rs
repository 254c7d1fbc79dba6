//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO I/O; rows are decoded here but fetched elsewhere.

mod entity;
mod fields;
mod suggested_task;
mod task;
mod user;

pub use entity::{DomainError, DomainResult, Entity};
pub use suggested_task::{SuggestedTask, SuggestedTaskId};
pub use task::{NewTask, Priority, Task, TaskDraft, TaskId, TaskStatus};
pub use user::{FamilyId, User, UserId};
