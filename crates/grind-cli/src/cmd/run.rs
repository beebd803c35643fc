use clap::ValueEnum;
use grind_core::config::Secrets;
use grind_server::jobs;
use std::path::Path;

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RunMode {
    /// Send one incomplete-task reminder (slot 0 also polls issues)
    Notify,
    /// Send the end-of-day digest
    Summary,
    /// Poll watched repos for new labeled issues
    Issues,
}

/// One-shot unit of work for external schedulers (cron, CI). Stateless:
/// everything it needs is reloaded from the store, everything it changes
/// is committed back before exit.
pub fn run(root: &Path, mode: RunMode) -> anyhow::Result<()> {
    let state = super::app_state(root)?;
    let secrets = Secrets::from_env();
    let (telegram, notifier, github) = grind_server::build_collaborators(&secrets);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        tracing::info!("running in mode: {mode:?}");

        // Always drain pending chat commands first, so a /done sent since
        // the last invocation lands before we pick a reminder.
        if let Some(telegram) = &telegram {
            match jobs::process_updates(&state, telegram).await {
                Ok(n) if n > 0 => tracing::info!("processed {n} command(s)"),
                Ok(_) => {}
                Err(e) => tracing::error!("failed to process updates: {e}"),
            }
        }

        match mode {
            RunMode::Notify => jobs::notify_cycle(&state, &notifier, &github).await,
            RunMode::Summary => jobs::summary_cycle(&state, &notifier).await,
            RunMode::Issues => jobs::issue_poll(&state, &notifier, &github).await,
        }
    })
}
