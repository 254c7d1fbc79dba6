//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! Every entity lives in exactly one remote table and has a unique ID.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync;

    /// Name of the remote table holding rows of this entity
    const TABLE: &'static str;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Every data access operation surfaces these unchanged to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A single-row query matched no row
    #[error("Not found: {0}")]
    NotFound(String),
    /// Caller-supplied input failed a precondition
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The remote call itself failed (transport, timeout or server rejection)
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    /// A single-row query matched more than one row
    #[error("Ambiguous result: {0}")]
    AmbiguousResult(String),
    /// A backend row could not be decoded into a domain type
    #[error("Invalid row: {0}")]
    InvalidRow(String),
}

impl DomainError {
    /// Whether the failure came from the remote call rather than the data.
    pub fn is_backend_fault(&self) -> bool {
        matches!(self, DomainError::BackendUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::NotFound("task 999".to_string());
        assert_eq!(err.to_string(), "Not found: task 999");

        let err = DomainError::Validation("Task name is required.".to_string());
        assert_eq!(err.to_string(), "Invalid input: Task name is required.");
    }

    #[test]
    fn test_backend_fault_classification() {
        assert!(DomainError::BackendUnavailable("timeout".into()).is_backend_fault());
        assert!(!DomainError::NotFound("user 3".into()).is_backend_fault());
    }
}
