//! Presence broadcast types shared by the session manager, the Discord
//! client and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image key sent when the activity has no asset of its own.
pub const DEFAULT_ASSET_KEY: &str = "default_image";

/// Body of `POST /presence/start` and `POST /presence/update`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresenceRequest {
    /// Group name; selects the credential and the session slot.
    pub group: Option<String>,
    pub activity_name: Option<String>,
    pub details: Option<String>,
    pub asset_key: Option<String>,
}

/// Body of `POST /presence/stop`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopPresenceRequest {
    pub group: Option<String>,
}

/// What the user is doing, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceDetails {
    pub activity_name: String,
    pub details: String,
    pub asset_key: Option<String>,
}

impl PresenceDetails {
    /// Map caller input onto the presence payload fields.
    ///
    /// The activity name fills both `state` and the large-image hover text.
    /// A missing or blank asset key falls back to `default_image`.
    pub fn to_activity(&self, default_asset: &str, start: DateTime<Utc>) -> PresenceActivity {
        let large_image = self
            .asset_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(default_asset)
            .to_string();

        PresenceActivity {
            state: self.activity_name.clone(),
            large_text: self.activity_name.clone(),
            details: self.details.clone(),
            large_image,
            start,
        }
    }
}

/// The payload pushed to the presence service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceActivity {
    pub state: String,
    pub large_text: String,
    pub details: String,
    pub large_image: String,
    /// Session start; the remote side renders elapsed time from it.
    pub start: DateTime<Utc>,
}

/// Response of `GET /presence/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceStatus {
    pub connected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(asset_key: Option<&str>) -> PresenceDetails {
        PresenceDetails {
            activity_name: "Reading".to_string(),
            details: "Chapter 3".to_string(),
            asset_key: asset_key.map(str::to_string),
        }
    }

    #[test]
    fn activity_fields_mapping() {
        let start = Utc::now();
        let activity = details(Some("book")).to_activity(DEFAULT_ASSET_KEY, start);
        assert_eq!(activity.state, "Reading");
        assert_eq!(activity.large_text, "Reading");
        assert_eq!(activity.details, "Chapter 3");
        assert_eq!(activity.large_image, "book");
        assert_eq!(activity.start, start);
    }

    #[test]
    fn missing_asset_uses_default() {
        let activity = details(None).to_activity(DEFAULT_ASSET_KEY, Utc::now());
        assert_eq!(activity.large_image, "default_image");

        let activity = details(Some("")).to_activity(DEFAULT_ASSET_KEY, Utc::now());
        assert_eq!(activity.large_image, "default_image");
    }
}
