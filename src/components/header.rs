//! Board header

use chore_core::User;

pub const APP_TITLE: &str = "CHORE BOARD";

/// Title line, plus who is acting when known
pub fn render_header(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("{APP_TITLE}  ({}, family {})", user.display_name(), user.family_id),
        None => APP_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chore_core::{FamilyId, UserId};

    #[test]
    fn test_header_with_user() {
        let user = User {
            id: UserId(1),
            family_id: FamilyId(100),
            name: Some("Ana".to_string()),
            email: None,
        };
        assert_eq!(render_header(Some(&user)), "CHORE BOARD  (Ana, family 100)");
    }

    #[test]
    fn test_header_without_user() {
        assert_eq!(render_header(None), "CHORE BOARD");
    }
}
