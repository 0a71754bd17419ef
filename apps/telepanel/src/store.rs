use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use telepanel_core::models::{Channel, Subscriber};
use telepanel_core::seed;

/// The single owner of the channel and subscriber collections.
///
/// Everything lives in memory and is seeded from the demo snapshot on
/// startup; a restart starts over. Pages take cloned snapshots and run the
/// pure filter/classifier functions over them, so the lock is only held for
/// the copy.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug)]
struct Inner {
    channels: Vec<Channel>,
    subscribers: Vec<Subscriber>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        let now = Utc::now();
        let channels = seed::channels();
        let subscribers = seed::subscribers(now);
        info!(
            channels = channels.len(),
            subscribers = subscribers.len(),
            "Seeded in-memory store from demo snapshot"
        );
        Self {
            inner: Arc::new(RwLock::new(Inner {
                channels,
                subscribers,
            })),
        }
    }

    pub async fn channels(&self) -> Vec<Channel> {
        self.inner.read().await.channels.clone()
    }

    pub async fn find_channel(&self, id: &str) -> Option<Channel> {
        self.inner
            .read()
            .await
            .channels
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Id of the first channel in the roster, the default target for new
    /// subscribers when no channel filter is active.
    pub async fn first_channel_id(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .channels
            .first()
            .map(|c| c.id.clone())
    }

    pub async fn add_channel(&self, channel: Channel) {
        self.inner.write().await.channels.push(channel);
    }

    pub async fn subscribers(&self) -> Vec<Subscriber> {
        self.inner.read().await.subscribers.clone()
    }

    pub async fn add_subscriber(&self, subscriber: Subscriber) {
        self.inner.write().await.subscribers.push(subscriber);
    }

    /// Removes a subscriber from the shared list, returning the removed
    /// record. The channel counters are deliberately left untouched, they
    /// are independent of the subscriber list.
    pub async fn remove_subscriber(&self, id: &str) -> Option<Subscriber> {
        let mut inner = self.inner.write().await;
        let idx = inner.subscribers.iter().position(|s| s.id == id)?;
        Some(inner.subscribers.remove(idx))
    }
}
