use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content channel with its own subscriber roster and activity counters.
///
/// The three counters are stored independently of the subscriber list and
/// are never reconciled against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub subscriber_count: i64,
    pub new_subscribers: i64,
    pub expiring_subscribers: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
