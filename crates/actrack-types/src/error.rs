use thiserror::Error;

/// Errors surfaced by the presence session manager.
///
/// The messages are shown to API clients verbatim.
#[derive(Debug, Error)]
pub enum PresenceError {
    /// The group has no usable presence credential.
    #[error("{0}")]
    Configuration(String),

    /// Another session is already connected.
    #[error("{0}")]
    Conflict(String),

    /// No session exists for the group.
    #[error("{0}")]
    NotFound(String),

    /// The presence client failed.
    #[error("{0}")]
    ExternalService(String),

    /// Group lookup failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl PresenceError {
    pub fn no_credential(group: &str) -> Self {
        PresenceError::Configuration(format!("No CLIENT_ID for group {group}"))
    }

    pub fn session_active() -> Self {
        PresenceError::Conflict("Another Discord session is already active".to_string())
    }

    pub fn no_active_session() -> Self {
        PresenceError::NotFound("No active Discord session".to_string())
    }

    pub fn no_manager() -> Self {
        PresenceError::NotFound("No manager found".to_string())
    }
}

/// Errors raised by a presence client implementation.
#[derive(Debug, Error)]
pub enum PresenceClientError {
    #[error("invalid client id '{0}'")]
    InvalidCredential(String),

    #[error("failed to connect to presence service: {0}")]
    Connect(String),

    #[error("presence handshake failed: {0}")]
    Handshake(String),

    #[error("failed to update presence: {0}")]
    Update(String),

    #[error("failed to close presence connection: {0}")]
    Close(String),
}

/// Errors from the CRUD resource services.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The addressed entity does not exist; carries the entity kind.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from repository operations (used by trait definitions in actrack-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced row is missing, or the row is still referenced.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_error_messages() {
        assert_eq!(
            PresenceError::no_credential("study").to_string(),
            "No CLIENT_ID for group study"
        );
        assert_eq!(
            PresenceError::no_active_session().to_string(),
            "No active Discord session"
        );
        assert_eq!(PresenceError::no_manager().to_string(), "No manager found");
    }

    #[test]
    fn test_resource_not_found_display() {
        let err = ResourceError::NotFound("Record");
        assert_eq!(err.to_string(), "Record not found");
    }

    #[test]
    fn test_repository_error_display() {
        let cases = [
            (RepositoryError::Query("syntax error".to_string()), "query error: syntax error"),
            (RepositoryError::NotFound, "entity not found"),
            (RepositoryError::Conflict("tag 'focus' already exists".to_string()), "conflict: tag 'focus' already exists"),
            (RepositoryError::ForeignKey("FOREIGN KEY constraint failed".to_string()), "foreign key violation: FOREIGN KEY constraint failed"),
        ];
        for (err, expected) in cases {
            // Exhaustive so a new variant needs a message here.
            match &err {
                RepositoryError::Query(_)
                | RepositoryError::NotFound
                | RepositoryError::Conflict(_)
                | RepositoryError::ForeignKey(_) => {}
            }
            assert_eq!(err.to_string(), expected);
        }
    }
}
