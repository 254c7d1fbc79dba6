//! Task Repository
//!
//! Table operations on `tasks`. Family scoping is the caller's job: this
//! layer filters by whatever family key it is handed.

use std::sync::Arc;

use serde_json::Value;

use super::traits::{decode_row, decode_rows, to_row, Filter, Repository, Row, TableClient};
use crate::domain::{DomainError, DomainResult, Entity, FamilyId, NewTask, Priority, Task, TaskId, TaskStatus};

/// Columns read by the task list
const LIST_COLUMNS: &str = "id,name,description,status,priority,date_created";

pub struct TaskRepository {
    client: Arc<dyn TableClient>,
}

impl TaskRepository {
    pub fn new(client: Arc<dyn TableClient>) -> Self {
        Self { client }
    }

    /// Insert a task and return the row as stored
    pub async fn insert(&self, task: &NewTask) -> DomainResult<Task> {
        let stored = self.client.insert(Task::TABLE, to_row(task)?).await?;
        let row = stored
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::InvalidRow("insert into tasks returned no row".to_string()))?;
        decode_row(row)
    }

    /// Tasks of one family with exactly this status, in backend order
    pub async fn list_by_family_status(&self, family_id: FamilyId, status: TaskStatus) -> DomainResult<Vec<Task>> {
        let filter = Filter::eq("family_id", family_id).and_eq("status", status.as_str());
        let rows = self.client.select(Task::TABLE, LIST_COLUMNS, &filter).await?;
        decode_rows(rows)
    }

    pub async fn update_status(&self, id: TaskId, status: TaskStatus) -> DomainResult<u64> {
        self.update_field(id, "status", status.as_str()).await
    }

    pub async fn update_priority(&self, id: TaskId, priority: Priority) -> DomainResult<u64> {
        self.update_field(id, "priority", priority.as_str()).await
    }

    /// Remove a task for good; zero rows affected is not an error
    pub async fn delete(&self, id: TaskId) -> DomainResult<u64> {
        self.client.delete(Task::TABLE, &Filter::eq("id", id)).await
    }

    async fn update_field(&self, id: TaskId, column: &str, value: &str) -> DomainResult<u64> {
        let mut patch = Row::new();
        patch.insert(column.to_string(), Value::from(value));
        self.client.update(Task::TABLE, &Filter::eq("id", id), patch).await
    }
}

impl Repository<Task> for TaskRepository {
    fn client(&self) -> &dyn TableClient {
        self.client.as_ref()
    }
}
