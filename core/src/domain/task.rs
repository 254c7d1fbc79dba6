//! Task Entity
//!
//! Represents one unit of household work, scoped to a family.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::fields::{null_as_default, optional_timestamp};
use super::suggested_task::SuggestedTask;
use super::user::FamilyId;

/// Backend identifier of a task row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// Where a task sits in its lifecycle
///
/// Views move tasks forward only (Pending -> In progress -> Completed), but
/// any status may be written directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    /// Created, not started
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    /// Someone is on it
    #[serde(rename = "In progress")]
    InProgress,
    /// Done
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    /// Exact string stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Parse the stored column value. Matching is exact.
    pub fn parse(s: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown task status {s:?}")))
    }

    /// URL-style name: `pending`, `in-progress`, `completed`
    pub fn slug(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Parse a slug, case-insensitively. `in_progress` and `in progress` are
    /// accepted as well.
    pub fn from_slug(slug: &str) -> DomainResult<Self> {
        let normalized = slug.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|status| status.slug() == normalized)
            .ok_or_else(|| DomainError::Validation(format!("unknown task status {slug:?}")))
    }

    /// Next step on the forward path, `None` once completed
    pub fn next(&self) -> Option<Self> {
        match self {
            TaskStatus::Pending => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Completed),
            TaskStatus::Completed => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency; cycles low -> medium -> high -> low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a priority name, case-insensitively.
    pub fn parse(s: &str) -> DomainResult<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == lowered)
            .ok_or_else(|| DomainError::Validation(format!("unknown priority {s:?}")))
    }

    /// Next priority in the cycle. There is no terminal value.
    pub fn next(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task row as read back from the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the backend
    pub id: TaskId,
    /// Short name, e.g. "Grocery Run"
    pub name: String,
    /// Free-form details
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Urgency; older rows may have none stored
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: Priority,
    /// Set once at insert time
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub date_created: Option<DateTime<Utc>>,
    /// Owning family. Absent when the query did not select the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_id: Option<FamilyId>,
}

impl Entity for Task {
    type Id = TaskId;

    const TABLE: &'static str = "tasks";

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Caller input for creating a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub priority: Priority,
}

impl TaskDraft {
    /// Create a draft with the default priority
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority: Priority::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Name and description must both be non-blank.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("Task name is required.".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::Validation("Task description is required.".to_string()));
        }
        Ok(())
    }
}

/// Insert payload for the `tasks` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub family_id: FamilyId,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub date_created: DateTime<Utc>,
}

impl NewTask {
    /// New pending task stamped with the current instant
    pub fn from_draft(family_id: FamilyId, draft: TaskDraft) -> Self {
        Self {
            family_id,
            name: draft.name,
            description: draft.description,
            status: TaskStatus::Pending,
            priority: draft.priority,
            date_created: Utc::now(),
        }
    }

    /// New pending task copied from a suggestion. Only name and description
    /// carry over; priority starts at the default.
    pub fn from_suggestion(family_id: FamilyId, suggestion: &SuggestedTask) -> Self {
        Self::from_draft(
            family_id,
            TaskDraft::new(suggestion.name.clone(), suggestion.description.clone()),
        )
    }
}
