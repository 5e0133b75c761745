//! BoxPresenceConnector -- object-safe dynamic dispatch for the presence client.
//!
//! Same blanket-impl shape as the other boxed ports:
//! 1. Object-safe `*Dyn` traits with boxed futures
//! 2. Blanket impls for every `PresenceConnector` / `PresenceConnection`
//! 3. `BoxPresenceConnector` / `BoxPresenceConnection` delegate to the trait objects
//!
//! The boxed types implement the client traits themselves, so
//! `PresenceService<G, BoxPresenceConnector>` picks its client at runtime.

use std::future::Future;
use std::pin::Pin;

use actrack_types::error::PresenceClientError;
use actrack_types::presence::PresenceActivity;

use super::client::{PresenceConnection, PresenceConnector};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`PresenceConnector`].
pub trait PresenceConnectorDyn: Send + Sync {
    fn connect_boxed<'a>(
        &'a self,
        client_id: &'a str,
    ) -> BoxFuture<'a, Result<BoxPresenceConnection, PresenceClientError>>;
}

impl<T: PresenceConnector> PresenceConnectorDyn for T {
    fn connect_boxed<'a>(
        &'a self,
        client_id: &'a str,
    ) -> BoxFuture<'a, Result<BoxPresenceConnection, PresenceClientError>> {
        Box::pin(async move {
            let connection = self.connect(client_id).await?;
            Ok(BoxPresenceConnection::new(connection))
        })
    }
}

/// Object-safe version of [`PresenceConnection`].
pub trait PresenceConnectionDyn: Send + Sync {
    fn update_boxed<'a>(
        &'a self,
        activity: &'a PresenceActivity,
    ) -> BoxFuture<'a, Result<(), PresenceClientError>>;

    fn clear_and_close_boxed(&self) -> BoxFuture<'_, Result<(), PresenceClientError>>;

    fn is_connected_dyn(&self) -> bool;
}

impl<T: PresenceConnection> PresenceConnectionDyn for T {
    fn update_boxed<'a>(
        &'a self,
        activity: &'a PresenceActivity,
    ) -> BoxFuture<'a, Result<(), PresenceClientError>> {
        Box::pin(self.update(activity))
    }

    fn clear_and_close_boxed(&self) -> BoxFuture<'_, Result<(), PresenceClientError>> {
        Box::pin(self.clear_and_close())
    }

    fn is_connected_dyn(&self) -> bool {
        self.is_connected()
    }
}

/// Type-erased presence client.
pub struct BoxPresenceConnector {
    inner: Box<dyn PresenceConnectorDyn>,
}

impl BoxPresenceConnector {
    pub fn new<T: PresenceConnector + 'static>(connector: T) -> Self {
        Self {
            inner: Box::new(connector),
        }
    }
}

impl PresenceConnector for BoxPresenceConnector {
    type Connection = BoxPresenceConnection;

    async fn connect(&self, client_id: &str) -> Result<BoxPresenceConnection, PresenceClientError> {
        self.inner.connect_boxed(client_id).await
    }
}

/// Type-erased live connection returned by [`BoxPresenceConnector`].
pub struct BoxPresenceConnection {
    inner: Box<dyn PresenceConnectionDyn>,
}

impl BoxPresenceConnection {
    pub fn new<T: PresenceConnection + 'static>(connection: T) -> Self {
        Self {
            inner: Box::new(connection),
        }
    }
}

impl PresenceConnection for BoxPresenceConnection {
    async fn update(&self, activity: &PresenceActivity) -> Result<(), PresenceClientError> {
        self.inner.update_boxed(activity).await
    }

    async fn clear_and_close(&self) -> Result<(), PresenceClientError> {
        self.inner.clear_and_close_boxed().await
    }

    fn is_connected(&self) -> bool {
        self.inner.is_connected_dyn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use chrono::Utc;

    struct FlagConnector {
        connected: Arc<AtomicBool>,
    }

    struct FlagConnection {
        connected: Arc<AtomicBool>,
    }

    impl PresenceConnector for FlagConnector {
        type Connection = FlagConnection;

        async fn connect(&self, client_id: &str) -> Result<FlagConnection, PresenceClientError> {
            if client_id.is_empty() {
                return Err(PresenceClientError::InvalidCredential(String::new()));
            }
            self.connected.store(true, Ordering::SeqCst);
            Ok(FlagConnection {
                connected: self.connected.clone(),
            })
        }
    }

    impl PresenceConnection for FlagConnection {
        async fn update(&self, activity: &PresenceActivity) -> Result<(), PresenceClientError> {
            if activity.state.is_empty() {
                return Err(PresenceClientError::Update("empty state".to_string()));
            }
            Ok(())
        }

        async fn clear_and_close(&self) -> Result<(), PresenceClientError> {
            self.connected.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn is_connected(&self) -> bool {
            self.connected.load(Ordering::SeqCst)
        }
    }

    fn activity(state: &str) -> PresenceActivity {
        PresenceActivity {
            state: state.to_string(),
            large_text: state.to_string(),
            details: String::new(),
            large_image: "default_image".to_string(),
            start: Utc::now(),
        }
    }

    #[tokio::test]
    async fn boxed_client_delegates() {
        let connected = Arc::new(AtomicBool::new(false));
        let connector = BoxPresenceConnector::new(FlagConnector {
            connected: connected.clone(),
        });

        let connection = connector.connect("111").await.unwrap();
        assert!(connection.is_connected());
        connection.update(&activity("Reading")).await.unwrap();
        assert!(matches!(
            connection.update(&activity("")).await,
            Err(PresenceClientError::Update(_))
        ));

        connection.clear_and_close().await.unwrap();
        assert!(!connection.is_connected());
        assert!(!connected.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn boxed_connect_error_passes_through() {
        let connector = BoxPresenceConnector::new(FlagConnector {
            connected: Arc::new(AtomicBool::new(false)),
        });
        assert!(matches!(
            connector.connect("").await,
            Err(PresenceClientError::InvalidCredential(_))
        ));
    }
}
