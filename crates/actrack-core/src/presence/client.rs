//! Presence client port.

use actrack_types::error::PresenceClientError;
use actrack_types::presence::PresenceActivity;

/// Opens connections to the presence service.
pub trait PresenceConnector: Send + Sync {
    type Connection: PresenceConnection + 'static;

    /// Connect using the application credential of a group.
    ///
    /// Resolves once the service acknowledged the connection, or fails.
    fn connect(
        &self,
        client_id: &str,
    ) -> impl std::future::Future<Output = Result<Self::Connection, PresenceClientError>> + Send;
}

/// One live connection to the presence service.
pub trait PresenceConnection: Send + Sync {
    /// Replace the displayed activity.
    fn update(
        &self,
        activity: &PresenceActivity,
    ) -> impl std::future::Future<Output = Result<(), PresenceClientError>> + Send;

    /// Clear the displayed activity and close the connection.
    ///
    /// The connection is unusable afterwards even when this fails. Closing
    /// an already closed connection is a no-op.
    fn clear_and_close(
        &self,
    ) -> impl std::future::Future<Output = Result<(), PresenceClientError>> + Send;

    /// Whether the connection still reports itself connected.
    fn is_connected(&self) -> bool;
}
