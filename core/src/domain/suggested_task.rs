//! Suggested Task Entity
//!
//! Global catalog of task templates. Read-only; accepting one copies it into
//! a new family task.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::fields::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestedTaskId(pub i64);

impl fmt::Display for SuggestedTaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SuggestedTaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SuggestedTaskId)
    }
}

/// A task template from the suggestion catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTask {
    pub id: SuggestedTaskId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Rough cost in the household's currency
    #[serde(default)]
    pub estimated_cost: Option<f64>,
}

impl SuggestedTask {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: SuggestedTaskId(id),
            name: name.into(),
            description: description.into(),
            estimated_cost: None,
        }
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.estimated_cost = Some(cost);
        self
    }
}

impl Entity for SuggestedTask {
    type Id = SuggestedTaskId;

    const TABLE: &'static str = "suggested_tasks";

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_creation() {
        let suggestion = SuggestedTask::new(5, "Mow lawn", "Front yard").with_cost(20.0);
        assert_eq!(suggestion.id(), SuggestedTaskId(5));
        assert_eq!(suggestion.estimated_cost, Some(20.0));
    }

    #[test]
    fn test_suggestion_decodes_integer_cost() {
        let suggestion: SuggestedTask =
            serde_json::from_str(r#"{"id": 5, "name": "Mow lawn", "description": "Front yard", "estimated_cost": 20}"#)
                .unwrap();
        assert_eq!(suggestion.estimated_cost, Some(20.0));
    }
}
