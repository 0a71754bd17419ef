use chrono::{DateTime, Utc};

use crate::models::{Channel, Subscriber, SubscriberStatus};

/// Sentinel select value meaning "no constraint".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SubscriberStatus),
}

impl StatusFilter {
    /// Parses a select value; unknown values fall back to `All`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => StatusFilter::Only(SubscriberStatus::Active),
            "expiring" => StatusFilter::Only(SubscriberStatus::Expiring),
            "expired" => StatusFilter::Only(SubscriberStatus::Expired),
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    fn matches(&self, status: SubscriberStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(String),
}

impl ChannelFilter {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            ChannelFilter::All
        } else {
            ChannelFilter::Only(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChannelFilter::All => ALL,
            ChannelFilter::Only(id) => id,
        }
    }

    /// The concrete channel id, if one is selected.
    pub fn selected(&self) -> Option<&str> {
        match self {
            ChannelFilter::All => None,
            ChannelFilter::Only(id) => Some(id),
        }
    }

    fn matches(&self, channel_id: &str) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Only(id) => id == channel_id,
        }
    }
}

/// Conjunction of subscriber list predicates. `Default` is the identity
/// query that keeps everything.
#[derive(Debug, Clone, Default)]
pub struct SubscriberQuery {
    pub search: String,
    pub status: StatusFilter,
    pub channel: ChannelFilter,
}

#[derive(Debug, Clone, Default)]
pub struct ChannelQuery {
    pub search: String,
}

fn text_matches(needle_lower: &str, fields: &[&str]) -> bool {
    needle_lower.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
}

/// Filters subscribers, preserving input order. The status predicate runs
/// against the live status derived from `expires_at` at `now`, not the
/// stored snapshot.
pub fn subscribers(
    items: &[Subscriber],
    query: &SubscriberQuery,
    now: DateTime<Utc>,
) -> Vec<Subscriber> {
    let needle = query.search.trim().to_lowercase();
    items
        .iter()
        .filter(|sub| text_matches(&needle, &[sub.name.as_str(), sub.username.as_str()]))
        .filter(|sub| query.status.matches(sub.live_status(now)))
        .filter(|sub| query.channel.matches(&sub.channel_id))
        .cloned()
        .collect()
}

/// Filters channels by case-insensitive name match, preserving input order.
pub fn channels(items: &[Channel], query: &ChannelQuery) -> Vec<Channel> {
    let needle = query.search.trim().to_lowercase();
    items
        .iter()
        .filter(|channel| text_matches(&needle, &[channel.name.as_str()]))
        .cloned()
        .collect()
}
