use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{info, warn};

use telepanel_core::models::TelegramSettings;

/// Fixed storage key for the one record the panel persists.
pub const SETTINGS_FILE: &str = "telegram_bot_settings.json";

/// File-backed store for [`TelegramSettings`].
///
/// The blob is read once at startup and overwritten wholesale on save. A
/// missing or malformed file is never fatal, it just means defaults.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    cache: RwLock<TelegramSettings>,
}

impl SettingsStore {
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        let settings = load_or_default(&path);
        Self {
            path,
            cache: RwLock::new(settings),
        }
    }

    pub async fn get(&self) -> TelegramSettings {
        self.cache.read().await.clone()
    }

    pub async fn save(&self, settings: TelegramSettings) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        let mut cache = self.cache.write().await;
        *cache = settings;
        Ok(())
    }
}

fn load_or_default(path: &Path) -> TelegramSettings {
    match std::fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(settings) => {
                info!("Loaded Telegram settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!(
                    "Discarding malformed settings file {}: {}",
                    path.display(),
                    e
                );
                TelegramSettings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => TelegramSettings::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            TelegramSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_with_defaults_when_no_file_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        assert_eq!(store.get().await, TelegramSettings::default());
    }

    #[tokio::test]
    async fn save_then_reopen_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TelegramSettings {
            bot_token: "ABC123".to_string(),
            is_connected: true,
        };

        let store = SettingsStore::open(dir.path());
        store.save(settings.clone()).await.unwrap();
        assert_eq!(store.get().await, settings);

        // A fresh store sees the persisted blob.
        let reopened = SettingsStore::open(dir.path());
        assert_eq!(reopened.get().await, settings);
    }

    #[tokio::test]
    async fn malformed_blob_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{not json").unwrap();

        let store = SettingsStore::open(dir.path());
        assert_eq!(store.get().await, TelegramSettings::default());
    }

    #[tokio::test]
    async fn save_overwrites_the_whole_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        store
            .save(TelegramSettings {
                bot_token: "first".to_string(),
                is_connected: true,
            })
            .await
            .unwrap();
        store
            .save(TelegramSettings {
                bot_token: "second".to_string(),
                is_connected: false,
            })
            .await
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join(SETTINGS_FILE)).unwrap();
        assert!(raw.contains("second"));
        assert!(!raw.contains("first"));
    }
}
