//! Suggested Task Repository
//!
//! The suggestion catalog is global: no family filter applies.

use std::sync::Arc;

use super::traits::{decode_rows, Filter, Repository, TableClient};
use crate::domain::{DomainResult, Entity, SuggestedTask};

pub struct SuggestedTaskRepository {
    client: Arc<dyn TableClient>,
}

impl SuggestedTaskRepository {
    pub fn new(client: Arc<dyn TableClient>) -> Self {
        Self { client }
    }

    /// Every suggestion, unpaginated
    pub async fn list(&self) -> DomainResult<Vec<SuggestedTask>> {
        let rows = self
            .client
            .select(SuggestedTask::TABLE, "*", &Filter::all())
            .await?;
        decode_rows(rows)
    }
}

impl Repository<SuggestedTask> for SuggestedTaskRepository {
    fn client(&self) -> &dyn TableClient {
        self.client.as_ref()
    }
}
