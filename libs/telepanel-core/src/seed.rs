//! The demo snapshot the panel boots from. There is no database; every
//! restart starts over from this data.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Channel, Subscriber};
use crate::status;

const SUBSCRIBER_NAMES: [&str; 20] = [
    "John Smith",
    "Emma Johnson",
    "Michael Brown",
    "Sophia Williams",
    "William Davis",
    "Olivia Miller",
    "James Wilson",
    "Ava Moore",
    "Benjamin Taylor",
    "Charlotte Anderson",
    "Alexander White",
    "Amelia Harris",
    "Daniel Martin",
    "Mia Thompson",
    "Matthew Garcia",
    "Emily Martinez",
    "Ethan Robinson",
    "Abigail Clark",
    "Jayden Lewis",
    "Elizabeth Hall",
];

fn channel(
    id: &str,
    name: &str,
    description: &str,
    subscriber_count: i64,
    new_subscribers: i64,
    expiring_subscribers: i64,
    is_active: bool,
    created_at: &str,
) -> Channel {
    Channel {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        subscriber_count,
        new_subscribers,
        expiring_subscribers,
        is_active,
        created_at: created_at.parse().expect("static seed timestamp"),
    }
}

pub fn channels() -> Vec<Channel> {
    vec![
        channel(
            "1",
            "Tech Insider",
            "Latest tech news and updates",
            1248,
            56,
            23,
            true,
            "2023-02-15T10:30:00Z",
        ),
        channel(
            "2",
            "Digital Marketing",
            "Marketing strategies and tips",
            875,
            32,
            15,
            true,
            "2023-03-22T14:15:00Z",
        ),
        channel(
            "3",
            "Crypto Daily",
            "Cryptocurrency updates and analysis",
            2103,
            128,
            45,
            true,
            "2023-01-10T09:45:00Z",
        ),
        channel(
            "4",
            "Travel Enthusiasts",
            "Travel destinations and tips",
            654,
            18,
            7,
            false,
            "2023-04-05T16:20:00Z",
        ),
    ]
}

/// Twenty demo subscribers spread across the seed channels. Deterministic
/// on purpose: expiries land 1..=180 days out via a fixed stride, so the
/// snapshot always contains a mix of active, expiring and expired entries
/// relative to `now`.
pub fn subscribers(now: DateTime<Utc>) -> Vec<Subscriber> {
    let channels = channels();

    SUBSCRIBER_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            // Stride through the 1..=180 day range; a couple of entries are
            // pushed into the past so the expired state shows up too.
            let expires_in = ((i as i64 * 37 + 5) % 180) + 1 - if i % 7 == 3 { 30 } else { 0 };
            let joined_days_ago = (i as i64 * 17) % 365 + 1;
            let expires_at = now + Duration::days(expires_in);
            let username = format!(
                "{}{}",
                name.to_lowercase().replacen(' ', ".", 1),
                (i * 97) % 1000
            );

            Subscriber {
                id: format!("user{}", i + 1),
                name: name.to_string(),
                username,
                channel_id: channels[i % channels.len()].id.clone(),
                joined_at: now - Duration::days(joined_days_ago),
                expires_at,
                status: status::classify(expires_at, now),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubscriberStatus;

    #[test]
    fn seed_channels_match_the_demo_roster() {
        let channels = channels();
        assert_eq!(channels.len(), 4);
        assert_eq!(channels[0].name, "Tech Insider");
        assert_eq!(channels[0].subscriber_count, 1248);
        assert!(channels[0].is_active);
        assert!(!channels[3].is_active);
    }

    #[test]
    fn seed_subscribers_are_deterministic() {
        let now = Utc::now();
        let a = subscribers(now);
        let b = subscribers(now);
        assert_eq!(a.len(), 20);
        assert_eq!(
            a.iter().map(|s| &s.id).collect::<Vec<_>>(),
            b.iter().map(|s| &s.id).collect::<Vec<_>>()
        );
        assert_eq!(a[0].username, b[0].username);
    }

    #[test]
    fn seed_covers_every_status() {
        let now = Utc::now();
        let subs = subscribers(now);
        for status in [
            SubscriberStatus::Active,
            SubscriberStatus::Expiring,
            SubscriberStatus::Expired,
        ] {
            assert!(
                subs.iter().any(|s| s.status == status),
                "missing {status} subscriber in seed"
            );
        }
    }

    #[test]
    fn seed_subscribers_reference_seed_channels() {
        let ids: Vec<String> = channels().into_iter().map(|c| c.id).collect();
        for sub in subscribers(Utc::now()) {
            assert!(ids.contains(&sub.channel_id));
        }
    }
}
