pub mod cron;
pub mod error;
pub mod jobs;
pub mod poller;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use grind_core::config::Secrets;
use grind_transport::{CallmebotClient, GithubClient, Notifier, TelegramClient};
use state::AppState;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with the health routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::health))
        .route("/health", get(routes::health::health))
        .layer(cors)
        .with_state(app_state)
}

/// Build the delivery collaborators from environment secrets. Channels
/// without credentials come back `None` and are skipped at send time.
pub fn build_collaborators(
    secrets: &Secrets,
) -> (Option<TelegramClient>, Notifier, GithubClient) {
    let telegram = match (&secrets.telegram_bot_token, &secrets.telegram_chat_id) {
        (Some(token), Some(chat_id)) => Some(TelegramClient::new(token, chat_id)),
        _ => None,
    };
    let whatsapp = match (&secrets.callmebot_phone, &secrets.callmebot_api_key) {
        (Some(phone), Some(key)) => Some(CallmebotClient::new(phone, key)),
        _ => None,
    };
    let notifier = Notifier::new(telegram.clone(), whatsapp);
    let github = GithubClient::new(secrets.github_token.clone());
    (telegram, notifier, github)
}

/// Run the full service shape: cron ticks, chat polling, and the health
/// endpoint, all in one process coordinated through the progress store.
pub async fn serve(app_state: AppState, secrets: Secrets, port: u16) -> anyhow::Result<()> {
    let (telegram, notifier, github) = build_collaborators(&secrets);

    tokio::spawn(cron::run_schedule(
        app_state.clone(),
        notifier,
        github,
    ));
    tracing::info!(
        "scheduler started — notifications at {:?} (UTC{:+})",
        app_state.config.notify_hours,
        app_state.config.utc_offset_hours
    );

    match telegram {
        Some(client) => {
            tokio::spawn(poller::run_poller(app_state.clone(), client));
            tracing::info!("Telegram update polling started");
        }
        None => tracing::warn!("Telegram not configured — commands disabled"),
    }

    let app = build_router(app_state);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("health server listening on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
