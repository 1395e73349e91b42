//! Common error types used across the workspace.
//!
//! Every layer converts its own failures into [`QuickBiteError`] so the HTTP
//! boundary can tell "not found" apart from "bad input" and "storage broke".

/// Top-level error shared by services, ports and adapters.
#[derive(Debug, thiserror::Error)]
pub enum QuickBiteError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by caller-supplied data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("price is required")]
    MissingPrice,

    #[error("price must be a number, got {0:?}")]
    InvalidPrice(String),
}

/// The requested record does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    /// Not-found error for a menu item addressed by `id`.
    #[must_use]
    pub fn item(id: impl ToString) -> Self {
        Self {
            entity: "Item",
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_item_not_found_message() {
        let err = NotFoundError::item(42);
        assert_eq!(err.to_string(), "Item not found");
        assert_eq!(err.id, "42");
    }

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: QuickBiteError = ValidationError::EmptyTitle.into();
        assert!(matches!(
            err,
            QuickBiteError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[test]
    fn should_keep_source_for_storage_errors() {
        let io = std::io::Error::other("disk on fire");
        let err = QuickBiteError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk on fire");
    }
}
