//! Application Context
//!
//! Everything a command needs: services over one backend, the acting
//! session, and the notice shown after the command ran.

use std::sync::Arc;

use chore_core::{ChoreServices, MemoryTableClient, NoticeBoard, RestConfig, RestTableClient, Session, TableClient};

use crate::config::{load_fixture, AppConfig, BackendSettings, ConfigError};

pub struct AppContext {
    pub services: ChoreServices,
    pub session: Session,
    pub notices: NoticeBoard,
}

impl AppContext {
    pub fn new(client: Arc<dyn TableClient>, session: Session, cache_family: bool) -> Self {
        Self {
            services: ChoreServices::new(client, cache_family),
            session,
            notices: NoticeBoard::default(),
        }
    }

    /// Build the backend client the config asks for
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let client: Arc<dyn TableClient> = match &config.backend {
            BackendSettings::Rest { url, api_key, timeout } => {
                let rest = RestConfig::new(url.clone(), api_key.clone()).with_timeout(*timeout);
                Arc::new(RestTableClient::new(&rest)?)
            }
            BackendSettings::Memory { fixture: Some(path) } => {
                Arc::new(MemoryTableClient::with_tables(load_fixture(path)?))
            }
            BackendSettings::Memory { fixture: None } => Arc::new(MemoryTableClient::new()),
        };

        log::debug!(
            "backend ready ({}), family cache {}",
            match config.backend {
                BackendSettings::Rest { .. } => "rest",
                BackendSettings::Memory { .. } => "memory",
            },
            if config.cache_family { "on" } else { "off" }
        );

        Ok(Self::new(client, Session::new(config.user_id), config.cache_family))
    }
}
