//! Discord Rich Presence client using discord-sdk.
//!
//! Each connection registers its own `Wheel` and `Discord` instance for the
//! group's application id. The SDK keeps reconnecting in the background when
//! the Discord client is not running, so `connect` bounds the handshake.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use actrack_core::presence::client::{PresenceConnection, PresenceConnector};
use actrack_types::error::PresenceClientError;
use actrack_types::presence::PresenceActivity;
use discord_sdk::{
    Discord, Subscriptions,
    activity::{ActivityBuilder, Assets},
    wheel::{UserSpoke, UserState, Wheel},
};
use tokio::sync::Mutex;

/// Opens Discord IPC connections.
#[derive(Debug, Clone)]
pub struct DiscordConnector {
    handshake_timeout: Duration,
}

impl DiscordConnector {
    pub fn new(handshake_timeout: Duration) -> Self {
        Self { handshake_timeout }
    }
}

impl Default for DiscordConnector {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

/// Discord application ids are numeric snowflakes.
pub fn parse_client_id(client_id: &str) -> Result<i64, PresenceClientError> {
    client_id
        .trim()
        .parse::<i64>()
        .map_err(|_| PresenceClientError::InvalidCredential(client_id.to_string()))
}

/// One live Discord connection.
///
/// Pushes and the final close are serialized on `discord`; `None` once
/// closed.
pub struct DiscordConnection {
    discord: Mutex<Option<Discord>>,
    user: UserSpoke,
    closed: AtomicBool,
    app_id: i64,
}

impl PresenceConnector for DiscordConnector {
    type Connection = DiscordConnection;

    async fn connect(&self, client_id: &str) -> Result<DiscordConnection, PresenceClientError> {
        let app_id = parse_client_id(client_id)?;

        let (wheel, handler) = Wheel::new(Box::new(|err| {
            tracing::warn!("Discord error: {:?}", err);
        }));
        let mut user = wheel.user();

        let discord = Discord::new(app_id, Subscriptions::ACTIVITY, Box::new(handler))
            .map_err(|e| PresenceClientError::Connect(format!("{e:?}")))?;

        tracing::info!(app_id, "Discord connecting...");

        let handshake = tokio::time::timeout(self.handshake_timeout, async {
            loop {
                if user.0.changed().await.is_err() {
                    return Err("Discord connection closed".to_string());
                }
                if let UserState::Connected(connected) = &*user.0.borrow() {
                    return Ok(connected.username.clone());
                }
            }
        })
        .await;

        match handshake {
            Ok(Ok(username)) => {
                tracing::info!(app_id, username = %username, "Discord Rich Presence connected");
                Ok(DiscordConnection {
                    discord: Mutex::new(Some(discord)),
                    user,
                    closed: AtomicBool::new(false),
                    app_id,
                })
            }
            Ok(Err(e)) => {
                discord.disconnect().await;
                Err(PresenceClientError::Handshake(e))
            }
            Err(_) => {
                discord.disconnect().await;
                Err(PresenceClientError::Handshake(format!(
                    "no handshake within {}s; is Discord running?",
                    self.handshake_timeout.as_secs()
                )))
            }
        }
    }
}

fn build_activity(activity: &PresenceActivity) -> ActivityBuilder {
    ActivityBuilder::new()
        .state(activity.state.clone())
        .details(activity.details.clone())
        .assets(Assets::default().large(
            activity.large_image.clone(),
            Some(activity.large_text.clone()),
        ))
        .start_timestamp(activity.start.timestamp())
}

impl PresenceConnection for DiscordConnection {
    async fn update(&self, activity: &PresenceActivity) -> Result<(), PresenceClientError> {
        let guard = self.discord.lock().await;
        let Some(discord) = guard.as_ref() else {
            return Err(PresenceClientError::Update("connection closed".to_string()));
        };

        discord
            .update_activity(build_activity(activity))
            .await
            .map(|_| ())
            .map_err(|e| PresenceClientError::Update(format!("{e:?}")))
    }

    async fn clear_and_close(&self) -> Result<(), PresenceClientError> {
        self.closed.store(true, Ordering::SeqCst);
        let taken = self.discord.lock().await.take();
        let Some(discord) = taken else {
            return Ok(());
        };

        let cleared = discord
            .clear_activity()
            .await
            .map(|_| ())
            .map_err(|e| PresenceClientError::Close(format!("{e:?}")));

        discord.disconnect().await;
        tracing::info!(app_id = self.app_id, "Discord Rich Presence disconnected");
        cleared
    }

    fn is_connected(&self) -> bool {
        !self.closed.load(Ordering::SeqCst)
            && matches!(*self.user.0.borrow(), UserState::Connected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_client_id() {
        assert_eq!(parse_client_id("1383904378154651768").unwrap(), 1383904378154651768);
        assert_eq!(parse_client_id(" 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_client_id_rejects_non_numeric() {
        let err = parse_client_id("my-app").unwrap_err();
        assert!(matches!(err, PresenceClientError::InvalidCredential(ref id) if id == "my-app"));
    }

    #[tokio::test]
    async fn test_connect_with_invalid_credential_fails_fast() {
        let connector = DiscordConnector::new(Duration::from_secs(30));
        let result = tokio::time::timeout(Duration::from_secs(1), connector.connect("abc")).await;
        let err = result.expect("should not wait for a handshake").err().unwrap();
        assert!(matches!(err, PresenceClientError::InvalidCredential(_)));
    }
}
