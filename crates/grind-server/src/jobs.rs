//! The four units of scheduled work, shared by the in-process cron loop
//! (service shape) and the one-shot `grind run` invocation.
//!
//! Every unit follows the same order: commit the state mutation through the
//! store first, then hand the formatted result to the delivery collaborators.
//! Delivery failures never roll back what was committed.

use crate::state::AppState;
use chrono::{NaiveDate, Utc};
use grind_core::command::{self, Command, Parsed};
use grind_core::config::Config;
use grind_core::message::{self, IssueAlert};
use grind_core::scheduler::{self, Outcome};
use grind_core::week::week_for;
use grind_transport::{GithubClient, Notifier, TelegramClient};

/// Today's date in the configured schedule offset.
pub fn local_today(config: &Config) -> NaiveDate {
    Utc::now().with_timezone(&config.tz_offset()).date_naive()
}

// ---------------------------------------------------------------------------
// Reminder tick (slots 0–4)
// ---------------------------------------------------------------------------

/// One reminder tick: surface the next incomplete task, or announce a fully
/// complete week. The slot-0 reminder also sweeps GitHub for new issues.
pub async fn notify_cycle(
    state: &AppState,
    notifier: &Notifier,
    github: &GithubClient,
) -> anyhow::Result<()> {
    let today = local_today(&state.config);
    let record = state.store.snapshot()?;
    let week = week_for(today, record.start_date);

    match scheduler::pick_next_task(&state.store, &state.roadmap, week)? {
        Outcome::AllComplete { week, .. } => {
            notifier.notify(&message::all_complete(week)).await;
        }
        Outcome::NoIncomplete => {}
        Outcome::Reminder(reminder) => {
            let slot = reminder.slot;
            notifier.notify(&message::reminder(&reminder)).await;

            // Once per daily cycle, at the first slot.
            if slot == 0 {
                if let Err(e) = issue_poll(state, notifier, github).await {
                    tracing::error!("GitHub issue check failed: {e}");
                }
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// End-of-day digest (slot 5)
// ---------------------------------------------------------------------------

pub async fn summary_cycle(state: &AppState, notifier: &Notifier) -> anyhow::Result<()> {
    let today = local_today(&state.config);
    let record = state.store.snapshot()?;
    let week = week_for(today, record.start_date);

    let digest = scheduler::end_of_day_digest(&state.store, &state.roadmap, week)?;
    notifier.notify(&message::digest(&digest)).await;
    Ok(())
}

// ---------------------------------------------------------------------------
// Issue poll
// ---------------------------------------------------------------------------

/// Sweep the watched repositories and notify about issues not seen before.
/// The dedupe record is committed before delivery is attempted.
pub async fn issue_poll(
    state: &AppState,
    notifier: &Notifier,
    github: &GithubClient,
) -> anyhow::Result<()> {
    let candidates = github
        .recent_labeled_issues(&state.config.target_repos, &state.config.issue_labels)
        .await;

    let candidates: Vec<(String, IssueAlert)> = candidates
        .into_iter()
        .map(|(id, c)| {
            (
                id,
                IssueAlert {
                    repo: c.repo,
                    title: c.title,
                    url: c.url,
                    labels: c.labels,
                },
            )
        })
        .collect();

    let fresh = grind_core::dedup::filter_new(&state.store, candidates)?;
    if let Some(text) = message::issue_alerts(&fresh) {
        notifier.notify(&text).await;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Chat command processing
// ---------------------------------------------------------------------------

/// Drain pending Telegram updates and answer each command.
///
/// The update watermark advances per update, before the command runs, so a
/// command that fails mid-way is not replayed on the next drain. Returns the
/// number of commands answered.
pub async fn process_updates(state: &AppState, telegram: &TelegramClient) -> anyhow::Result<usize> {
    let offset = state.store.snapshot()?.last_update_id + 1;
    let updates = telegram.get_updates(offset).await?;
    let today = local_today(&state.config);

    let mut handled = 0;
    for update in updates {
        let update_id = update.update_id;
        state
            .store
            .update(|p| p.last_update_id = p.last_update_id.max(update_id))?;

        let Some((chat_id, text)) = TelegramClient::message_text(&update) else {
            continue;
        };

        if !telegram.is_authorized_chat(chat_id) {
            // Still answer /start so the owner can discover the chat id.
            if command::parse(text) == Parsed::Command(Command::Start) {
                let reply = message::unknown_chat(chat_id);
                if let Err(e) = telegram.send_message_to(&chat_id.to_string(), &reply).await {
                    tracing::error!("Telegram send failed: {e}");
                }
            }
            continue;
        }

        let reply = match command::parse(text) {
            Parsed::Command(cmd) => {
                Some(command::handle(cmd, &state.store, &state.roadmap, today)?)
            }
            Parsed::Invalid(correction) => Some(correction),
            Parsed::Ignored => None,
        };

        if let Some(reply) = reply {
            handled += 1;
            if let Err(e) = telegram.send_message(&reply).await {
                tracing::error!("Telegram send failed: {e}");
            }
        }
    }
    Ok(handled)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
