use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Channel, Subscriber, SubscriberStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Builds a new channel with a fresh id and zeroed counters.
///
/// Rejects an empty or whitespace-only name; a blank description is stored
/// as `None`.
pub fn new_channel(
    name: &str,
    description: &str,
    is_active: bool,
) -> Result<Channel, ValidationError> {
    let name = require("channel name", name)?;
    let description = {
        let trimmed = description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    Ok(Channel {
        id: Uuid::new_v4().to_string(),
        name,
        description,
        subscriber_count: 0,
        new_subscribers: 0,
        expiring_subscribers: 0,
        is_active,
        created_at: Utc::now(),
    })
}

/// Builds a new subscriber joined now, with the stored status snapshot set
/// to `Active`.
///
/// `expires_at` not lying in the past is a precondition owned by the
/// date-input side; this factory does not re-check it.
pub fn new_subscriber(
    name: &str,
    username: &str,
    expires_at: DateTime<Utc>,
    channel_id: &str,
) -> Result<Subscriber, ValidationError> {
    let name = require("name", name)?;
    let username = require("username", username)?;

    Ok(Subscriber {
        id: Uuid::new_v4().to_string(),
        name,
        username,
        channel_id: channel_id.to_string(),
        joined_at: Utc::now(),
        expires_at,
        status: SubscriberStatus::Active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn channel_requires_a_name() {
        assert_eq!(
            new_channel("", "desc", true).unwrap_err(),
            ValidationError::MissingField("channel name")
        );
        assert_eq!(
            new_channel("   ", "desc", true).unwrap_err(),
            ValidationError::MissingField("channel name")
        );
    }

    #[test]
    fn new_channel_starts_with_zeroed_counters() {
        let channel = new_channel("Tech", "desc", true).unwrap();
        assert_eq!(channel.name, "Tech");
        assert_eq!(channel.description.as_deref(), Some("desc"));
        assert_eq!(channel.subscriber_count, 0);
        assert_eq!(channel.new_subscribers, 0);
        assert_eq!(channel.expiring_subscribers, 0);
        assert!(channel.is_active);
        assert!(!channel.id.is_empty());
    }

    #[test]
    fn blank_description_becomes_none() {
        let channel = new_channel("Tech", "  ", false).unwrap();
        assert_eq!(channel.description, None);
        assert!(!channel.is_active);
    }

    #[test]
    fn subscriber_requires_name_and_username() {
        let expires = Utc::now() + Duration::days(30);
        assert_eq!(
            new_subscriber("", "jane.d", expires, "channel1").unwrap_err(),
            ValidationError::MissingField("name")
        );
        assert_eq!(
            new_subscriber("Jane Doe", " ", expires, "channel1").unwrap_err(),
            ValidationError::MissingField("username")
        );
    }

    #[test]
    fn new_subscriber_joins_now_as_active() {
        let expires = Utc::now() + Duration::days(30);
        let sub = new_subscriber("Jane Doe", "jane.d", expires, "channel1").unwrap();
        assert_eq!(sub.status, SubscriberStatus::Active);
        assert_eq!(sub.channel_id, "channel1");
        assert_eq!(sub.expires_at, expires);
        assert!((Utc::now() - sub.joined_at).num_seconds() < 5);
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = new_channel("A", "", true).unwrap();
        let b = new_channel("B", "", true).unwrap();
        assert_ne!(a.id, b.id);
    }
}
