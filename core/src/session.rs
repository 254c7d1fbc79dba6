//! Acting-user context passed to every user-scoped operation.

use crate::domain::UserId;

/// Who is acting. There is no authentication behind it; the front end
/// builds one from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    user_id: UserId,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
