use crate::jobs;
use crate::state::AppState;
use grind_transport::TelegramClient;
use std::time::Duration;

/// Interval between update drains. The Telegram call itself long-polls for
/// a few seconds, so this mostly spaces out retries after failures.
const POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Long-running chat poll: drain pending commands, forever. Runs in the
/// same process as the cron loop; the store mutex serializes their access.
pub async fn run_poller(state: AppState, telegram: TelegramClient) {
    loop {
        if let Err(e) = jobs::process_updates(&state, &telegram).await {
            tracing::error!("update poll failed: {e}");
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
