mod handlers;
mod settings;
mod store;
mod telegram;
mod utils;

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use settings::SettingsStore;
use store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub settings: Arc<SettingsStore>,
    pub http: reqwest::Client,
}

#[derive(Parser)]
#[command(name = "telepanel")]
#[command(about = "Telegram channel and subscriber admin panel", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web panel
    Serve,
    /// Show panel connection information
    Info,
}

fn data_dir() -> PathBuf {
    std::env::var("TELEPANEL_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

fn panel_port() -> u16 {
    std::env::var("PANEL_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .expect("PANEL_PORT must be a number")
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        println!("No .env file loaded: {}", e);
    }

    let cli = Cli::parse();

    let file_appender = tracing_appender::rolling::never(".", "server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telepanel=debug,axum=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stdout))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    match cli.command {
        Commands::Serve => run_server().await?,
        Commands::Info => {
            println!("\n=== TELEPANEL INFO ===");
            println!("Panel URL:     http://localhost:{}/", panel_port());
            println!(
                "Settings file: {}",
                data_dir().join(settings::SETTINGS_FILE).display()
            );
            println!("======================\n");
        }
    }

    Ok(())
}

async fn run_server() -> Result<()> {
    let state = AppState {
        store: MemoryStore::seeded(),
        settings: Arc::new(SettingsStore::open(&data_dir())),
        http: reqwest::Client::new(),
    };

    let app = axum::Router::new()
        .route("/", get(handlers::dashboard::get_dashboard))
        .route("/channels", get(handlers::channels::get_channels))
        .route("/channels/create", post(handlers::channels::create_channel))
        .route("/channels/{id}", get(handlers::channels::get_channel_detail))
        .route(
            "/channels/{id}/subscribers",
            post(handlers::channels::add_channel_subscriber),
        )
        .route("/subscribers", get(handlers::subscribers::get_subscribers))
        .route(
            "/subscribers/add",
            post(handlers::subscribers::add_subscriber),
        )
        .route(
            "/subscribers/{id}/remove",
            post(handlers::subscribers::remove_subscriber),
        )
        .route("/settings", get(handlers::settings::get_settings))
        .route(
            "/settings/telegram",
            post(handlers::settings::save_telegram),
        )
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::compression::CompressionLayer::new())
        .layer(tower_http::set_header::SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            axum::http::HeaderValue::from_static("nosniff"),
        ))
        .layer(tower_http::set_header::SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            axum::http::HeaderValue::from_static("DENY"),
        ));

    let addr = SocketAddr::from(([0, 0, 0, 0], panel_port()));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
