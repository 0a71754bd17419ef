// Settings page: Telegram bot integration.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::{info, warn};

use telepanel_core::models::TelegramSettings;

use super::resolve_notice;
use crate::AppState;
use crate::telegram;

#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub bot_token: String,
    pub is_connected: bool,
    pub notice: String,
    pub notice_is_error: bool,
    pub active_page: String,
}

#[derive(Deserialize)]
pub struct TelegramSetupForm {
    pub bot_token: String,
}

/// GET /settings
pub async fn get_settings(
    State(state): State<AppState>,
    query: Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let settings = state.settings.get().await;
    let (notice, notice_is_error) = resolve_notice(query.get("notice").map(String::as_str));

    let template = SettingsTemplate {
        bot_token: settings.bot_token,
        is_connected: settings.is_connected,
        notice,
        notice_is_error,
        active_page: "settings".to_string(),
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {}", e),
        )
            .into_response(),
    }
}

/// POST /settings/telegram - verify the token against getMe and persist
/// the outcome. A failed verification still stores the token, just marked
/// disconnected; the user retries manually.
pub async fn save_telegram(
    State(state): State<AppState>,
    Form(form): Form<TelegramSetupForm>,
) -> impl IntoResponse {
    let token = form.bot_token.trim().to_string();
    if token.is_empty() {
        return Redirect::to("/settings?notice=token_required");
    }

    let (settings, notice) = match telegram::get_me(&state.http, &token).await {
        Ok(profile) => {
            info!(
                "Telegram bot verified: @{}",
                profile.username.as_deref().unwrap_or(&profile.first_name)
            );
            (
                TelegramSettings {
                    bot_token: token,
                    is_connected: true,
                },
                "bot_connected",
            )
        }
        Err(e) => {
            warn!("Telegram bot verification failed: {}", e);
            (
                TelegramSettings {
                    bot_token: token,
                    is_connected: false,
                },
                "bot_failed",
            )
        }
    };

    if let Err(e) = state.settings.save(settings).await {
        warn!("Failed to persist Telegram settings: {:#}", e);
    }

    Redirect::to(&format!("/settings?notice={}", notice))
}
