//! User lookup service.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, User, UserId};
use crate::repository::{Repository, TableClient, UserRepository};

pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    pub fn new(client: Arc<dyn TableClient>) -> Self {
        Self {
            repo: UserRepository::new(client),
        }
    }

    pub async fn get(&self, id: UserId) -> DomainResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}
