//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]`. Adapters map the variants onto their transport (HTTP status
//! codes for the axum adapter).

use crate::kind::Kind;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// The request payload failed validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A record (or a referenced record) does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Payload validation failures.
///
/// The `Display` output is part of the public API contract: clients match on
/// these exact strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The body is not a JSON object.
    #[error("Not a JSON")]
    NotAJson,

    /// A required field is absent.
    #[error("Missing {0}")]
    Missing(&'static str),

    /// A field is present but holds a value of the wrong type.
    #[error("Invalid {0}")]
    Invalid(&'static str),
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {id} not found")]
pub struct NotFoundError {
    pub kind: Kind,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(kind: Kind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_contract_messages() {
        assert_eq!(ValidationError::NotAJson.to_string(), "Not a JSON");
        assert_eq!(ValidationError::Missing("name").to_string(), "Missing name");
        assert_eq!(
            ValidationError::Invalid("latitude").to_string(),
            "Invalid latitude"
        );
    }

    #[test]
    fn should_describe_missing_record() {
        let err = NotFoundError::new(Kind::Place, "abc");
        assert_eq!(err.to_string(), "Place abc not found");
    }

    #[test]
    fn should_convert_validation_error_into_hbnb_error() {
        let err: HbnbError = ValidationError::Missing("text").into();
        assert!(matches!(
            err,
            HbnbError::Validation(ValidationError::Missing("text"))
        ));
    }
}
