use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status;

/// Lifecycle category of a subscription, derived from how close
/// `expires_at` is to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriberStatus {
    Active,
    Expiring,
    Expired,
}

impl SubscriberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriberStatus::Active => "active",
            SubscriberStatus::Expiring => "expiring",
            SubscriberStatus::Expired => "expired",
        }
    }
}

impl std::fmt::Display for SubscriberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person with time-bounded access to a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: String,
    pub name: String,
    pub username: String,
    pub channel_id: String,
    pub joined_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Snapshot taken when the record was created. Read paths must not
    /// trust this field: it goes stale as `expires_at` approaches. Use
    /// [`Subscriber::live_status`] instead.
    pub status: SubscriberStatus,
}

impl Subscriber {
    /// Status recomputed from `expires_at`, ignoring the stored snapshot.
    pub fn live_status(&self, now: DateTime<Utc>) -> SubscriberStatus {
        status::classify(self.expires_at, now)
    }
}
