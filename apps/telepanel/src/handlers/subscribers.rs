// Subscribers page: full filter chain plus add/remove actions.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Path, Query, State},
    response::{Html, IntoResponse, Redirect},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use telepanel_core::factory;
use telepanel_core::filter::{self, ChannelFilter, StatusFilter, SubscriberQuery};

use super::{SubscriberCardView, resolve_notice};
use crate::AppState;

#[derive(Debug, Clone)]
pub struct ChannelOption {
    pub id: String,
    pub name: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "subscribers.html")]
pub struct SubscribersTemplate {
    pub subscribers: Vec<SubscriberCardView>,
    pub channel_options: Vec<ChannelOption>,
    pub search: String,
    pub status_filter: String,
    pub channel_filter: String,
    pub notice: String,
    pub notice_is_error: bool,
    pub active_page: String,
}

#[derive(Deserialize)]
pub struct AddSubscriberForm {
    pub name: String,
    pub username: String,
    pub expires_at: String,
    /// Hidden field carrying the page's channel filter; `all` means the
    /// first channel takes the new subscriber.
    #[serde(default)]
    pub channel: String,
}

/// Parses the `YYYY-MM-DD` date input into an end-of-day UTC instant.
/// Returns the notice code for the form when the value is unusable.
pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("fields_required");
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| "invalid_date")?;
    let expires_at = date
        .and_hms_opt(23, 59, 59)
        .ok_or("invalid_date")?
        .and_utc();
    if expires_at < Utc::now() {
        return Err("date_in_past");
    }
    Ok(expires_at)
}

/// GET /subscribers - search + status + channel filter chain
pub async fn get_subscribers(
    State(state): State<AppState>,
    query: Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let search = query.get("search").cloned().unwrap_or_default();
    let status = StatusFilter::parse(query.get("status").map(String::as_str).unwrap_or(""));
    let channel = ChannelFilter::parse(query.get("channel").map(String::as_str).unwrap_or(""));
    let (notice, notice_is_error) = resolve_notice(query.get("notice").map(String::as_str));

    let now = Utc::now();
    let channels = state.store.channels().await;
    let subscribers = state.store.subscribers().await;

    let filtered = filter::subscribers(
        &subscribers,
        &SubscriberQuery {
            search: search.clone(),
            status,
            channel: channel.clone(),
        },
        now,
    );

    let template = SubscribersTemplate {
        subscribers: filtered
            .iter()
            .map(|s| SubscriberCardView::from_subscriber(s, &channels, now))
            .collect(),
        channel_options: channels
            .iter()
            .map(|c| ChannelOption {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect(),
        search,
        status_filter: status.as_str().to_string(),
        channel_filter: channel.as_str().to_string(),
        notice,
        notice_is_error,
        active_page: "subscribers".to_string(),
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

/// POST /subscribers/add
pub async fn add_subscriber(
    State(state): State<AppState>,
    Form(form): Form<AddSubscriberForm>,
) -> impl IntoResponse {
    let channel_filter = ChannelFilter::parse(&form.channel);
    let back = format!("/subscribers?channel={}", channel_filter.as_str());

    let expires_at = match parse_expiry(&form.expires_at) {
        Ok(ts) => ts,
        Err(code) => return Redirect::to(&format!("{}&notice={}", back, code)),
    };

    // Target the filtered channel when one is selected, otherwise the
    // first channel in the roster.
    let channel_id = match channel_filter.selected() {
        Some(id) => id.to_string(),
        None => match state.store.first_channel_id().await {
            Some(id) => id,
            None => return Redirect::to(&format!("{}&notice=fields_required", back)),
        },
    };

    match factory::new_subscriber(&form.name, &form.username, expires_at, &channel_id) {
        Ok(subscriber) => {
            info!(
                "Added subscriber '{}' to channel {}",
                subscriber.username, channel_id
            );
            state.store.add_subscriber(subscriber).await;
            Redirect::to(&format!("{}&notice=subscriber_added", back))
        }
        Err(_) => Redirect::to(&format!("{}&notice=fields_required", back)),
    }
}

/// POST /subscribers/{id}/remove
pub async fn remove_subscriber(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.store.remove_subscriber(&id).await {
        Some(removed) => {
            info!("Removed subscriber '{}' ({})", removed.username, removed.id);
            Redirect::to("/subscribers?notice=subscriber_removed")
        }
        None => Redirect::to("/subscribers"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn expiry_must_be_a_calendar_date() {
        assert_eq!(parse_expiry(""), Err("fields_required"));
        assert_eq!(parse_expiry("not-a-date"), Err("invalid_date"));
        assert_eq!(parse_expiry("2024-13-40"), Err("invalid_date"));
    }

    #[test]
    fn past_dates_are_rejected() {
        assert_eq!(parse_expiry("2001-01-01"), Err("date_in_past"));
    }

    #[test]
    fn future_dates_land_at_end_of_day() {
        let in_30 = (Utc::now() + Duration::days(30)).date_naive();
        let parsed = parse_expiry(&in_30.format("%Y-%m-%d").to_string()).unwrap();
        assert_eq!(parsed.date_naive(), in_30);
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "23:59:59");
    }
}
