use crate::models::Channel;

/// Aggregates for the dashboard stat cards, computed over a channel
/// snapshot. Sums the stored per-channel counters as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_channels: usize,
    pub total_subscribers: i64,
    pub active_channels: usize,
    pub new_subscribers_this_week: i64,
    pub expiring_subscriptions: i64,
}

impl DashboardStats {
    pub fn collect(channels: &[Channel]) -> Self {
        Self {
            total_channels: channels.len(),
            total_subscribers: channels.iter().map(|c| c.subscriber_count).sum(),
            active_channels: channels.iter().filter(|c| c.is_active).count(),
            new_subscribers_this_week: channels.iter().map(|c| c.new_subscribers).sum(),
            expiring_subscriptions: channels.iter().map(|c| c.expiring_subscribers).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn collects_over_the_seed_snapshot() {
        let stats = DashboardStats::collect(&seed::channels());
        assert_eq!(stats.total_channels, 4);
        assert_eq!(stats.total_subscribers, 1248 + 875 + 2103 + 654);
        assert_eq!(stats.active_channels, 3);
        assert_eq!(stats.new_subscribers_this_week, 56 + 32 + 128 + 18);
        assert_eq!(stats.expiring_subscriptions, 23 + 15 + 45 + 7);
    }

    #[test]
    fn empty_snapshot_is_all_zero() {
        assert_eq!(DashboardStats::collect(&[]), DashboardStats::default());
    }
}
