//! Business logic services (use cases) for the CRUD resources.
//!
//! Services validate request bodies, fill defaults, and translate
//! repository failures into `ResourceError`. They depend on repository
//! traits (ports) -- never on concrete infrastructure implementations.

pub mod activity;
pub mod category;
pub mod group;
pub mod record;
pub mod tag;

use actrack_types::error::{RepositoryError, ResourceError};

/// Translate a repository failure for an entity of kind `kind`.
///
/// `NotFound` maps to the entity's not-found error, uniqueness conflicts
/// to `Conflict`; anything else is a storage failure.
pub(crate) fn repo_err(kind: &'static str) -> impl Fn(RepositoryError) -> ResourceError {
    move |e| match e {
        RepositoryError::NotFound => ResourceError::NotFound(kind),
        RepositoryError::Conflict(msg) => ResourceError::Conflict(msg),
        other => {
            tracing::error!(kind, error = %other, "repository operation failed");
            ResourceError::Storage(other.to_string())
        }
    }
}

/// Trim a required text field, rejecting missing or blank values.
pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, ResourceError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ResourceError::Validation(format!("{field} is required"))),
    }
}

/// Normalize an optional text field: blank strings become `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims() {
        assert_eq!(required_text(Some("  study ".into()), "name").unwrap(), "study");
    }

    #[test]
    fn required_text_rejects_blank() {
        let err = required_text(Some("   ".into()), "name").unwrap_err();
        assert_eq!(err.to_string(), "name is required");
        assert!(required_text(None, "name").is_err());
    }

    #[test]
    fn optional_text_clears_blank() {
        assert_eq!(optional_text(Some("".into())), None);
        assert_eq!(optional_text(Some(" x ".into())), Some("x".to_string()));
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn repo_err_mapping() {
        let map = repo_err("Tag");
        assert!(matches!(map(RepositoryError::NotFound), ResourceError::NotFound("Tag")));
        assert!(matches!(
            map(RepositoryError::Conflict("dup".into())),
            ResourceError::Conflict(_)
        ));
        assert!(matches!(
            map(RepositoryError::Query("boom".into())),
            ResourceError::Storage(_)
        ));
    }
}
