//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep front ends decoupled from table details.

mod family;
mod suggestion_service;
mod task_service;
mod user_service;

use std::sync::Arc;

pub use family::FamilyResolver;
pub use suggestion_service::SuggestionService;
pub use task_service::TaskService;
pub use user_service::UserService;

use crate::repository::TableClient;

/// Every service, sharing one table client and one family resolver
pub struct ChoreServices {
    pub tasks: TaskService,
    pub suggestions: SuggestionService,
    pub users: UserService,
    pub families: Arc<FamilyResolver>,
}

impl ChoreServices {
    pub fn new(client: Arc<dyn TableClient>, cache_family: bool) -> Self {
        let families = Arc::new(FamilyResolver::new(client.clone(), cache_family));
        Self {
            tasks: TaskService::new(client.clone(), families.clone()),
            suggestions: SuggestionService::new(client.clone()),
            users: UserService::new(client),
            families,
        }
    }
}
