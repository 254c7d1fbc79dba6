//! Family Resolution
//!
//! Maps a user to the family key that scopes every task list and insert.
//! The mapping never changes once a user is provisioned, so resolved keys may
//! be cached for the life of the resolver.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{DomainError, DomainResult, FamilyId, UserId};
use crate::repository::{TableClient, UserRepository};

pub struct FamilyResolver {
    users: UserRepository,
    cache: Option<RwLock<HashMap<UserId, FamilyId>>>,
}

impl FamilyResolver {
    /// `cache = false` makes every call a backend round trip.
    pub fn new(client: Arc<dyn TableClient>, cache: bool) -> Self {
        Self {
            users: UserRepository::new(client),
            cache: cache.then(|| RwLock::new(HashMap::new())),
        }
    }

    /// Family key of `user_id`
    ///
    /// Fails with `NotFound` when the user does not exist or has no family,
    /// and with `BackendUnavailable` when the lookup itself fails. No retry.
    pub async fn resolve(&self, user_id: UserId) -> DomainResult<FamilyId> {
        if let Some(cache) = &self.cache {
            if let Some(family_id) = cache.read().await.get(&user_id) {
                return Ok(*family_id);
            }
        }

        let family_id = self
            .users
            .find_family_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("family of user {user_id}")))?;
        log::debug!("user {} belongs to family {}", user_id, family_id);

        if let Some(cache) = &self.cache {
            cache.write().await.insert(user_id, family_id);
        }
        Ok(family_id)
    }

    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }
}
