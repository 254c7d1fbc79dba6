//! User Repository
//!
//! Read-only access to `users`.

use std::sync::Arc;

use serde::Deserialize;

use super::traits::{decode_row, single_row, Filter, Repository, TableClient};
use crate::domain::{DomainResult, Entity, FamilyId, User, UserId};

#[derive(Deserialize)]
struct FamilyColumn {
    #[serde(default)]
    family_id: Option<FamilyId>,
}

pub struct UserRepository {
    client: Arc<dyn TableClient>,
}

impl UserRepository {
    pub fn new(client: Arc<dyn TableClient>) -> Self {
        Self { client }
    }

    /// Family key of a user. `None` when the user is missing or has no family.
    pub async fn find_family_id(&self, user_id: UserId) -> DomainResult<Option<FamilyId>> {
        let rows = self
            .client
            .select(User::TABLE, "family_id", &Filter::eq("id", user_id))
            .await?;
        let column: Option<FamilyColumn> = single_row(User::TABLE, &user_id.to_string(), rows)?
            .map(decode_row::<FamilyColumn>)
            .transpose()?;
        Ok(column.and_then(|c| c.family_id))
    }
}

impl Repository<User> for UserRepository {
    fn client(&self) -> &dyn TableClient {
        self.client.as_ref()
    }
}
