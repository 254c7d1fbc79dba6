//! Suggestion catalog service.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, SuggestedTask, SuggestedTaskId};
use crate::repository::{Repository, SuggestedTaskRepository, TableClient};

pub struct SuggestionService {
    repo: SuggestedTaskRepository,
}

impl SuggestionService {
    pub fn new(client: Arc<dyn TableClient>) -> Self {
        Self {
            repo: SuggestedTaskRepository::new(client),
        }
    }

    /// The whole catalog; not scoped by family
    pub async fn list(&self) -> DomainResult<Vec<SuggestedTask>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: SuggestedTaskId) -> DomainResult<SuggestedTask> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("suggested task {id}")))
    }
}
