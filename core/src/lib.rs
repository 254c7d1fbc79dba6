//! Chore Core
//!
//! Task lifecycle and family-scoped data access for the chore board.
//!
//! Layered architecture:
//! - domain: Entities, status/priority rules and errors
//! - repository: Table client abstraction plus REST and in-memory clients
//! - service: Use cases (family resolution, tasks, suggestions, users)
//! - notice: Ephemeral success/error messages for front ends

pub mod domain;
pub mod notice;
pub mod repository;
pub mod service;
mod session;

pub use domain::{
    DomainError, DomainResult, FamilyId, Priority, SuggestedTask, SuggestedTaskId, Task, TaskDraft, TaskId,
    TaskStatus, User, UserId,
};
pub use notice::{Notice, NoticeBoard, NoticeKind, DEFAULT_NOTICE_TTL};
pub use repository::{MemoryTableClient, RestConfig, RestTableClient, TableClient};
pub use service::ChoreServices;
pub use session::Session;
