// Channels list, channel detail, and their create forms.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use telepanel_core::factory;
use telepanel_core::filter::{self, ChannelFilter, ChannelQuery, StatusFilter, SubscriberQuery};

use super::{ChannelCardView, SubscriberCardView, resolve_notice};
use crate::AppState;
use crate::handlers::subscribers::parse_expiry;

#[derive(Template, WebTemplate)]
#[template(path = "channels.html")]
pub struct ChannelsTemplate {
    pub channels: Vec<ChannelCardView>,
    pub search: String,
    pub notice: String,
    pub notice_is_error: bool,
    pub active_page: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "channel_detail.html")]
pub struct ChannelDetailTemplate {
    pub channel: ChannelCardView,
    pub subscribers: Vec<SubscriberCardView>,
    pub search: String,
    pub notice: String,
    pub notice_is_error: bool,
    pub active_page: String,
}

#[derive(Deserialize)]
pub struct CreateChannelForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Checkbox: present when ticked.
    pub is_active: Option<String>,
}

#[derive(Deserialize)]
pub struct AddSubscriberForm {
    pub name: String,
    pub username: String,
    pub expires_at: String,
}

/// GET /channels - channel cards, optionally filtered by name
pub async fn get_channels(
    State(state): State<AppState>,
    query: Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let search = query.get("search").cloned().unwrap_or_default();
    let (notice, notice_is_error) = resolve_notice(query.get("notice").map(String::as_str));

    let channels = state.store.channels().await;
    let filtered = filter::channels(
        &channels,
        &ChannelQuery {
            search: search.clone(),
        },
    );

    let template = ChannelsTemplate {
        channels: filtered.iter().map(ChannelCardView::from_channel).collect(),
        search,
        notice,
        notice_is_error,
        active_page: "channels".to_string(),
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

/// POST /channels/create
pub async fn create_channel(
    State(state): State<AppState>,
    Form(form): Form<CreateChannelForm>,
) -> impl IntoResponse {
    match factory::new_channel(&form.name, &form.description, form.is_active.is_some()) {
        Ok(channel) => {
            info!("Created channel '{}' ({})", channel.name, channel.id);
            state.store.add_channel(channel).await;
            Redirect::to("/channels?notice=channel_created")
        }
        Err(_) => Redirect::to("/channels?notice=name_required"),
    }
}

/// GET /channels/{id} - channel header plus its subscriber roster
pub async fn get_channel_detail(
    Path(id): Path<String>,
    State(state): State<AppState>,
    query: Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let Some(channel) = state.store.find_channel(&id).await else {
        return (axum::http::StatusCode::NOT_FOUND, "Channel not found").into_response();
    };

    let search = query.get("search").cloned().unwrap_or_default();
    let (notice, notice_is_error) = resolve_notice(query.get("notice").map(String::as_str));

    let now = Utc::now();
    let channels = state.store.channels().await;
    let subscribers = state.store.subscribers().await;

    let roster: Vec<SubscriberCardView> = filter::subscribers(
        &subscribers,
        &SubscriberQuery {
            search: search.clone(),
            status: StatusFilter::All,
            channel: ChannelFilter::Only(channel.id.clone()),
        },
        now,
    )
    .iter()
    .map(|s| SubscriberCardView::from_subscriber(s, &channels, now))
    .collect();

    let template = ChannelDetailTemplate {
        channel: ChannelCardView::from_channel(&channel),
        subscribers: roster,
        search,
        notice,
        notice_is_error,
        active_page: "channels".to_string(),
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

/// POST /channels/{id}/subscribers - add a subscriber to this channel
pub async fn add_channel_subscriber(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<AddSubscriberForm>,
) -> impl IntoResponse {
    if state.store.find_channel(&id).await.is_none() {
        return (axum::http::StatusCode::NOT_FOUND, "Channel not found").into_response();
    }

    let expires_at = match parse_expiry(&form.expires_at) {
        Ok(ts) => ts,
        Err(code) => {
            return Redirect::to(&format!("/channels/{}?notice={}", id, code)).into_response();
        }
    };

    match factory::new_subscriber(&form.name, &form.username, expires_at, &id) {
        Ok(subscriber) => {
            info!(
                "Added subscriber '{}' to channel {}",
                subscriber.username, id
            );
            state.store.add_subscriber(subscriber).await;
            Redirect::to(&format!("/channels/{}?notice=subscriber_added", id)).into_response()
        }
        Err(_) => Redirect::to(&format!("/channels/{}?notice=fields_required", id)).into_response(),
    }
}
