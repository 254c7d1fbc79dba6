//! User Entity
//!
//! Users are provisioned by the backend; this system only reads them.
//! Each user belongs to exactly one family, the tenancy boundary for tasks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Backend identifier of a user row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Family grouping key; immutable once a user is provisioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(UserId)
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A household member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Family this user belongs to
    pub family_id: FamilyId,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Contact address
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Name to show in headers, falling back to the numeric id.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("user #{}", self.id),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    const TABLE: &'static str = "users";

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_with_extra_columns() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "family_id": 7, "name": "Ana", "email": null, "avatar": "x.png"}"#,
        )
        .unwrap();
        assert_eq!(user.id(), UserId(1));
        assert_eq!(user.family_id, FamilyId(7));
        assert_eq!(user.display_name(), "Ana");
    }

    #[test]
    fn test_display_name_fallback() {
        let user: User = serde_json::from_str(r#"{"id": 4, "family_id": 2}"#).unwrap();
        assert_eq!(user.display_name(), "user #4");
    }

    #[test]
    fn test_user_id_from_str() {
        assert_eq!(" 12 ".parse::<UserId>().unwrap(), UserId(12));
        assert!("twelve".parse::<UserId>().is_err());
    }
}
