//! Presence session manager.
//!
//! `PresenceService` owns the registry of live presence sessions, keyed by
//! group name. The registry lock is only held for bookkeeping and never
//! across a call into the presence client, so `status` and the other groups'
//! calls answer while a connect or push is still waiting on the client.
//!
//! A `start` reserves the registry's single connecting slot before it
//! connects. While the slot is taken, or while any session is connected,
//! other starts fail with `Conflict`. The slot is released when the start
//! finishes, fails, or is dropped mid-connect.
//!
//! Session lifecycle per group:
//! `Disconnected -> Connecting -> Connected` on `start`, self-loop on
//! `update`, `Connected -> Disconnected` on `stop` or `shutdown`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use actrack_types::error::{PresenceClientError, PresenceError};
use actrack_types::presence::PresenceDetails;

use crate::presence::client::{PresenceConnection, PresenceConnector};
use crate::repository::group::GroupRepository;

/// A live connection on behalf of one group.
struct PresenceSession<S> {
    /// Credential resolved at start; later group edits do not affect it.
    client_id: String,
    connection: S,
    started_at: DateTime<Utc>,
}

type SharedSession<S> = Arc<PresenceSession<S>>;

struct Registry<S> {
    sessions: HashMap<String, SharedSession<S>>,
    /// Group whose `start` is between reservation and insertion.
    connecting: Option<String>,
}

impl<S: PresenceConnection> Registry<S> {
    fn any_connected(&self) -> bool {
        self.sessions.values().any(|s| s.connection.is_connected())
    }

    /// Remove sessions whose connection dropped on its own.
    fn take_disconnected(&mut self) -> Vec<(String, SharedSession<S>)> {
        let stale: Vec<String> = self
            .sessions
            .iter()
            .filter(|(_, s)| !s.connection.is_connected())
            .map(|(group, _)| group.clone())
            .collect();

        stale
            .into_iter()
            .filter_map(|group| self.sessions.remove(&group).map(|s| (group, s)))
            .collect()
    }
}

/// Holds the connecting slot; frees it on drop.
struct Reservation<'a, S> {
    registry: &'a Mutex<Registry<S>>,
}

impl<S> Drop for Reservation<'_, S> {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .connecting = None;
    }
}

/// Mediates start/update/stop of presence sessions.
///
/// One instance is created at process start and shared with the HTTP
/// handlers; call [`PresenceService::shutdown`] before exit.
pub struct PresenceService<G: GroupRepository, C: PresenceConnector> {
    groups: G,
    connector: C,
    default_asset: String,
    registry: Mutex<Registry<C::Connection>>,
}

impl<G: GroupRepository, C: PresenceConnector> PresenceService<G, C> {
    /// Create a manager with an empty registry.
    ///
    /// - `groups`: read-only access to group credentials
    /// - `connector`: the presence client
    /// - `default_asset`: image key for activities without one
    pub fn new(groups: G, connector: C, default_asset: impl Into<String>) -> Self {
        Self {
            groups,
            connector,
            default_asset: default_asset.into(),
            registry: Mutex::new(Registry {
                sessions: HashMap::new(),
                connecting: None,
            }),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Registry<C::Connection>> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Connect on behalf of `group` and publish the initial activity.
    ///
    /// Fails with `Configuration` when the group has no credential and with
    /// `Conflict` when any session is connected or connecting. On a client
    /// failure nothing is kept in the registry.
    pub async fn start(&self, group: &str, details: PresenceDetails) -> Result<(), PresenceError> {
        let client_id = self.resolve_credential(group).await?;

        let (reservation, stale) = {
            let mut registry = self.registry();
            let stale = registry.take_disconnected();
            let busy = registry.connecting.is_some() || registry.any_connected();
            let reservation = if busy {
                None
            } else {
                registry.connecting = Some(group.to_string());
                Some(Reservation {
                    registry: &self.registry,
                })
            };
            (reservation, stale)
        };

        close_all(stale).await;

        let Some(reservation) = reservation else {
            tracing::warn!(group, "presence start rejected: another session is active");
            return Err(PresenceError::session_active());
        };

        let connection = self
            .connector
            .connect(&client_id)
            .await
            .map_err(|e| client_failure(group, "connect", e))?;

        let started_at = Utc::now();
        let activity = details.to_activity(&self.default_asset, started_at);

        if let Err(e) = connection.update(&activity).await {
            let err = client_failure(group, "initial update", e);
            if let Err(close_err) = connection.clear_and_close().await {
                tracing::warn!(group, error = %close_err, "failed to close half-open presence connection");
            }
            return Err(err);
        }

        let session = Arc::new(PresenceSession {
            client_id,
            connection,
            started_at,
        });
        self.registry().sessions.insert(group.to_string(), session);
        drop(reservation);

        tracing::info!(group, activity = %details.activity_name, "presence session started");
        Ok(())
    }

    /// Push a new activity for the connected session of `group`.
    ///
    /// The original start time is reused so the elapsed-time display keeps
    /// counting from `start`. A failed push leaves the session in place.
    pub async fn update(&self, group: &str, details: PresenceDetails) -> Result<(), PresenceError> {
        let (live, stale) = {
            let mut registry = self.registry();
            let live = registry
                .sessions
                .get(group)
                .filter(|s| s.connection.is_connected())
                .cloned();
            let stale = match live {
                Some(_) => None,
                None => registry.sessions.remove(group),
            };
            (live, stale)
        };

        if let Some(stale) = stale {
            tracing::debug!(group, "dropping disconnected presence session");
            close_quietly(group, &stale).await;
        }

        let Some(session) = live else {
            tracing::warn!(group, "presence update without an active session");
            return Err(PresenceError::no_active_session());
        };

        let activity = details.to_activity(&self.default_asset, session.started_at);
        session
            .connection
            .update(&activity)
            .await
            .map_err(|e| client_failure(group, "update", e))?;

        tracing::debug!(group, activity = %details.activity_name, "presence updated");
        Ok(())
    }

    /// Tear down the session of `group`.
    ///
    /// The registry entry is removed before teardown; teardown errors are
    /// logged and do not fail the call.
    pub async fn stop(&self, group: &str) -> Result<(), PresenceError> {
        let removed = self.registry().sessions.remove(group);

        let Some(session) = removed else {
            tracing::warn!(group, "presence stop without a tracked session");
            return Err(PresenceError::no_manager());
        };

        match session.connection.clear_and_close().await {
            Ok(()) => tracing::info!(group, "presence session stopped"),
            Err(e) => tracing::warn!(group, error = %e, "presence teardown failed, session dropped"),
        }

        Ok(())
    }

    /// Whether any tracked session is connected.
    pub async fn status(&self) -> bool {
        self.registry().any_connected()
    }

    /// Stop every tracked session. Called once on process shutdown.
    pub async fn shutdown(&self) {
        let sessions: Vec<(String, SharedSession<C::Connection>)> =
            self.registry().sessions.drain().collect();
        if sessions.is_empty() {
            return;
        }

        tracing::info!(count = sessions.len(), "closing presence sessions");
        close_all(sessions).await;
    }

    /// Credential cached on the live session of `group`, if any.
    #[cfg(test)]
    fn session_credential(&self, group: &str) -> Option<String> {
        self.registry()
            .sessions
            .get(group)
            .map(|s| s.client_id.clone())
    }

    async fn resolve_credential(&self, group: &str) -> Result<String, PresenceError> {
        let record = self.groups.get_by_name(group).await.map_err(|e| {
            tracing::error!(group, error = %e, "group lookup failed");
            PresenceError::Storage(e.to_string())
        })?;

        match record.as_ref().and_then(|g| g.credential()) {
            Some(client_id) => Ok(client_id.to_string()),
            None => {
                tracing::warn!(group, "no presence credential configured");
                Err(PresenceError::no_credential(group))
            }
        }
    }
}

async fn close_all<S: PresenceConnection>(sessions: Vec<(String, SharedSession<S>)>) {
    for (group, session) in sessions {
        close_quietly(&group, &session).await;
    }
}

async fn close_quietly<S: PresenceConnection>(group: &str, session: &PresenceSession<S>) {
    if let Err(e) = session.connection.clear_and_close().await {
        tracing::warn!(group, error = %e, "failed to close presence connection");
    }
}

fn client_failure(group: &str, step: &str, e: PresenceClientError) -> PresenceError {
    match e {
        PresenceClientError::InvalidCredential(_) => {
            tracing::warn!(group, error = %e, "presence credential rejected");
            PresenceError::Configuration(e.to_string())
        }
        other => {
            tracing::error!(group, step, error = %other, "presence client failed");
            PresenceError::ExternalService(other.to_string())
        }
    }
}
