// Dashboard page: stat cards, top channels, expiring subscriptions.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use chrono::Utc;

use telepanel_core::models::SubscriberStatus;
use telepanel_core::stats::DashboardStats;

use super::{ChannelCardView, SubscriberCardView};
use crate::AppState;
use crate::utils::format_count;

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub total_subscribers: String,
    pub active_channels: String,
    pub total_channels: String,
    pub new_this_week: String,
    pub expiring_soon: String,
    pub top_channels: Vec<ChannelCardView>,
    pub expiring_subscribers: Vec<SubscriberCardView>,
    pub active_page: String,
}

/// GET / - dashboard page
pub async fn get_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    let channels = state.store.channels().await;
    let subscribers = state.store.subscribers().await;

    let stats = DashboardStats::collect(&channels);

    // Active channels only, richest first, top three.
    let mut top: Vec<_> = channels.iter().filter(|c| c.is_active).collect();
    top.sort_by(|a, b| b.subscriber_count.cmp(&a.subscriber_count));
    let top_channels = top
        .into_iter()
        .take(3)
        .map(ChannelCardView::from_channel)
        .collect();

    let expiring_subscribers = subscribers
        .iter()
        .filter(|s| s.live_status(now) == SubscriberStatus::Expiring)
        .take(3)
        .map(|s| SubscriberCardView::from_subscriber(s, &channels, now))
        .collect();

    let template = DashboardTemplate {
        total_subscribers: format_count(stats.total_subscribers),
        active_channels: format_count(stats.active_channels as i64),
        total_channels: format_count(stats.total_channels as i64),
        new_this_week: format_count(stats.new_subscribers_this_week),
        expiring_soon: format_count(stats.expiring_subscriptions),
        top_channels,
        expiring_subscribers,
        active_page: "dashboard".to_string(),
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
