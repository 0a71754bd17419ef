use serde::{Deserialize, Serialize};

/// Telegram integration settings, the only record the panel persists.
///
/// Serialized camelCase to keep the on-disk blob shape
/// `{"botToken": "...", "isConnected": true}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramSettings {
    #[serde(default)]
    pub bot_token: String,
    #[serde(default)]
    pub is_connected: bool,
}

impl TelegramSettings {
    pub fn has_token(&self) -> bool {
        !self.bot_token.trim().is_empty()
    }
}
