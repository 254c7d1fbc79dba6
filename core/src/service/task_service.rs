//! Task use-case service.
//!
//! # Responsibility
//! - Resolve the acting user's family before listing or creating tasks.
//! - Turn single-row lookups into `NotFound` when nothing matches.
//!
//! # Invariants
//! - New tasks always start `Pending` with a priority and creation time set,
//!   whichever path creates them.
//! - Updates overwrite one field unconditionally; there is no version check.

use std::sync::Arc;

use crate::domain::{
    DomainError, DomainResult, NewTask, Priority, SuggestedTask, Task, TaskDraft, TaskId, TaskStatus,
};
use crate::repository::{Repository, TableClient, TaskRepository};
use crate::service::family::FamilyResolver;
use crate::session::Session;

pub struct TaskService {
    repo: TaskRepository,
    families: Arc<FamilyResolver>,
}

impl TaskService {
    pub fn new(client: Arc<dyn TableClient>, families: Arc<FamilyResolver>) -> Self {
        Self {
            repo: TaskRepository::new(client),
            families,
        }
    }

    /// Creates a pending task for the session's family.
    ///
    /// Blank name or description fails with `Validation` before any backend
    /// call is made.
    pub async fn create(&self, session: &Session, draft: TaskDraft) -> DomainResult<Task> {
        draft.validate()?;
        let family_id = self.families.resolve(session.user_id()).await?;
        let task = self.repo.insert(&NewTask::from_draft(family_id, draft)).await?;
        log::info!("created task {} ({}) for family {}", task.id, task.name, family_id);
        Ok(task)
    }

    /// Accepts a suggestion: copies its name and description into a new
    /// pending task. The suggestion itself is untouched.
    pub async fn create_from_suggestion(&self, session: &Session, suggestion: &SuggestedTask) -> DomainResult<Task> {
        let family_id = self.families.resolve(session.user_id()).await?;
        let task = self.repo.insert(&NewTask::from_suggestion(family_id, suggestion)).await?;
        log::info!(
            "accepted suggestion {} as task {} for family {}",
            suggestion.id,
            task.id,
            family_id
        );
        Ok(task)
    }

    /// Tasks of the session's family in `status`. Order is unspecified.
    pub async fn list(&self, session: &Session, status: TaskStatus) -> DomainResult<Vec<Task>> {
        let family_id = self.families.resolve(session.user_id()).await?;
        self.repo.list_by_family_status(family_id, status).await
    }

    pub async fn get(&self, id: TaskId) -> DomainResult<Task> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("task {id}")))
    }

    /// Overwrites the status. A missing id is not an error.
    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> DomainResult<()> {
        let affected = self.repo.update_status(id, status).await?;
        log::info!("task {} status -> {} ({} row(s))", id, status, affected);
        Ok(())
    }

    /// Overwrites the priority. A missing id is not an error.
    pub async fn update_priority(&self, id: TaskId, priority: Priority) -> DomainResult<()> {
        let affected = self.repo.update_priority(id, priority).await?;
        log::info!("task {} priority -> {} ({} row(s))", id, priority, affected);
        Ok(())
    }

    /// Moves a task one step along Pending -> In progress -> Completed.
    pub async fn advance(&self, id: TaskId) -> DomainResult<Task> {
        let mut task = self.get(id).await?;
        let next = task
            .status
            .next()
            .ok_or_else(|| DomainError::Validation(format!("task {id} is already completed")))?;
        self.update_status(id, next).await?;
        task.status = next;
        Ok(task)
    }

    /// Bumps priority low -> medium -> high -> low.
    pub async fn cycle_priority(&self, id: TaskId) -> DomainResult<Task> {
        let mut task = self.get(id).await?;
        let next = task.priority.next();
        self.update_priority(id, next).await?;
        task.priority = next;
        Ok(task)
    }

    /// Deletes for good. Deleting a missing id succeeds.
    pub async fn delete(&self, id: TaskId) -> DomainResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            log::debug!("delete of task {} matched no row", id);
        } else {
            log::info!("deleted task {}", id);
        }
        Ok(())
    }
}
