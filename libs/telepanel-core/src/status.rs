use chrono::{DateTime, Duration, Utc};

use crate::models::SubscriberStatus;

/// Subscriptions closer than this to expiry are reported as expiring.
pub const EXPIRING_WINDOW_DAYS: i64 = 7;

/// Classifies a subscription by how far `expires_at` lies from `now`.
///
/// The window boundary is exclusive: an expiry exactly
/// `EXPIRING_WINDOW_DAYS` ahead is still `Active`.
pub fn classify(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> SubscriberStatus {
    if expires_at < now {
        SubscriberStatus::Expired
    } else if expires_at - now < Duration::days(EXPIRING_WINDOW_DAYS) {
        SubscriberStatus::Expiring
    } else {
        SubscriberStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ts: &str) -> DateTime<Utc> {
        ts.parse().unwrap()
    }

    #[test]
    fn expiry_in_the_past_is_expired() {
        let now = at("2024-06-01T12:00:00Z");
        assert_eq!(
            classify(now - Duration::seconds(1), now),
            SubscriberStatus::Expired
        );
        assert_eq!(
            classify(now - Duration::days(90), now),
            SubscriberStatus::Expired
        );
    }

    #[test]
    fn expiry_inside_the_window_is_expiring() {
        let now = at("2024-06-01T12:00:00Z");
        assert_eq!(classify(now, now), SubscriberStatus::Expiring);
        assert_eq!(
            classify(now + Duration::days(3), now),
            SubscriberStatus::Expiring
        );
        assert_eq!(
            classify(now + Duration::days(7) - Duration::milliseconds(1), now),
            SubscriberStatus::Expiring
        );
    }

    #[test]
    fn expiry_beyond_the_window_is_active() {
        let now = at("2024-06-01T12:00:00Z");
        assert_eq!(
            classify(now + Duration::days(8), now),
            SubscriberStatus::Active
        );
        assert_eq!(
            classify(now + Duration::days(180), now),
            SubscriberStatus::Active
        );
    }

    #[test]
    fn window_boundary_is_exclusive() {
        // Exactly seven days out must count as active, not expiring.
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            classify(now + Duration::days(EXPIRING_WINDOW_DAYS), now),
            SubscriberStatus::Active
        );
    }
}
