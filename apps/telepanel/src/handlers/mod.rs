pub mod channels;
pub mod dashboard;
pub mod settings;
pub mod subscribers;

use chrono::{DateTime, Utc};

use telepanel_core::models::{Channel, Subscriber};

use crate::utils::{format_count, format_date};

/// Pre-rendered channel card, everything a template needs as strings.
#[derive(Debug, Clone)]
pub struct ChannelCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub subscriber_count: String,
    pub new_subscribers: String,
    pub expiring_subscribers: String,
    pub is_active: bool,
    pub created_label: String,
}

impl ChannelCardView {
    pub fn from_channel(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone(),
            description: channel.description.clone().unwrap_or_default(),
            subscriber_count: format_count(channel.subscriber_count),
            new_subscribers: format_count(channel.new_subscribers),
            expiring_subscribers: format_count(channel.expiring_subscribers),
            is_active: channel.is_active,
            created_label: format_date(channel.created_at),
        }
    }
}

/// Pre-rendered subscriber card. The status shown is always recomputed
/// from `expires_at`, never the stored snapshot.
#[derive(Debug, Clone)]
pub struct SubscriberCardView {
    pub id: String,
    pub name: String,
    pub username: String,
    pub channel_name: String,
    pub status: String,
    pub joined_label: String,
    pub expires_label: String,
}

impl SubscriberCardView {
    pub fn from_subscriber(
        subscriber: &Subscriber,
        channels: &[Channel],
        now: DateTime<Utc>,
    ) -> Self {
        let channel_name = channels
            .iter()
            .find(|c| c.id == subscriber.channel_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown channel".to_string());

        Self {
            id: subscriber.id.clone(),
            name: subscriber.name.clone(),
            username: subscriber.username.clone(),
            channel_name,
            status: subscriber.live_status(now).to_string(),
            joined_label: format_date(subscriber.joined_at),
            expires_label: format_date(subscriber.expires_at),
        }
    }
}

/// Transient form notices carried across redirects as `?notice=<code>`.
pub fn resolve_notice(code: Option<&str>) -> (String, bool) {
    let Some(code) = code else {
        return (String::new(), false);
    };
    match code {
        "channel_created" => ("Channel created successfully".to_string(), false),
        "subscriber_added" => ("Subscriber added successfully".to_string(), false),
        "subscriber_removed" => ("Subscriber removed".to_string(), false),
        "bot_connected" => ("Telegram bot connected successfully".to_string(), false),
        "name_required" => ("Channel name is required".to_string(), true),
        "fields_required" => ("All fields are required".to_string(), true),
        "invalid_date" => ("Expiration date is invalid".to_string(), true),
        "date_in_past" => ("Expiration date must be in the future".to_string(), true),
        "token_required" => ("Bot token is required".to_string(), true),
        "bot_failed" => ("Failed to connect Telegram bot".to_string(), true),
        _ => (String::new(), false),
    }
}
