use anyhow::{Result, anyhow};
use serde::Deserialize;

/// Bot metadata returned by the Bot API `getMe` method.
#[derive(Debug, Clone, Deserialize)]
pub struct BotProfile {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub username: Option<String>,
    #[serde(default)]
    pub can_join_groups: bool,
    #[serde(default)]
    pub can_read_all_group_messages: bool,
    #[serde(default)]
    pub supports_inline_queries: bool,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    result: Option<BotProfile>,
    description: Option<String>,
}

impl ApiEnvelope {
    fn into_result(self) -> Result<BotProfile> {
        if self.ok {
            self.result
                .ok_or_else(|| anyhow!("Bot API returned ok without a result"))
        } else {
            Err(anyhow!(
                self.description
                    .unwrap_or_else(|| "Bot API rejected the request".to_string())
            ))
        }
    }
}

/// Verifies a bot token by calling `getMe`. One attempt, no retry; the
/// caller decides what a failure means for the connection state.
pub async fn get_me(client: &reqwest::Client, token: &str) -> Result<BotProfile> {
    let url = format!("https://api.telegram.org/bot{}/getMe", token);
    let envelope: ApiEnvelope = client.get(&url).send().await?.json().await?;
    envelope.into_result()
}
