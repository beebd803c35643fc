use crate::jobs;
use crate::state::AppState;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use grind_transport::{GithubClient, Notifier};

/// One scheduled tick: when it fires and which job it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub at: DateTime<FixedOffset>,
    /// The last notify hour of the day sends the digest instead of a reminder.
    pub digest: bool,
}

/// The next tick strictly after `now`, given the configured notify hours.
///
/// Hours are validated sorted, so scanning today then falling over to
/// tomorrow's first hour covers every case, including `now` past the last
/// slot and DST-free fixed offsets.
pub fn next_tick(now: DateTime<FixedOffset>, hours: &[u32]) -> Tick {
    let last = *hours.last().expect("validated non-empty");
    let offset = *now.offset();

    for &hour in hours {
        let candidate = now
            .date_naive()
            .and_hms_opt(hour, 0, 0)
            .expect("validated hour");
        if let Some(at) = offset.from_local_datetime(&candidate).single() {
            if at > now {
                return Tick {
                    at,
                    digest: hour == last,
                };
            }
        }
    }

    // Past today's last slot: tomorrow's first hour.
    let tomorrow = (now.date_naive() + chrono::Days::new(1))
        .and_hms_opt(hours[0], 0, 0)
        .expect("validated hour");
    Tick {
        at: offset
            .from_local_datetime(&tomorrow)
            .single()
            .expect("fixed offset is unambiguous"),
        digest: hours[0] == last,
    }
}

/// In-process cron: sleeps to the next notify hour and runs the matching
/// job, forever. Job failures are logged and the loop keeps going.
pub async fn run_schedule(state: AppState, notifier: Notifier, github: GithubClient) {
    let offset = state.config.tz_offset();
    let hours = state.config.notify_hours.clone();

    loop {
        let now = Utc::now().with_timezone(&offset);
        let tick = next_tick(now, &hours);
        let wait = (tick.at - now)
            .to_std()
            .unwrap_or(std::time::Duration::ZERO);
        tracing::info!(
            "next {} at {}",
            if tick.digest { "digest" } else { "reminder" },
            tick.at
        );
        tokio::time::sleep(wait).await;

        let result = if tick.digest {
            jobs::summary_cycle(&state, &notifier).await
        } else {
            jobs::notify_cycle(&state, &notifier, &github).await
        };
        if let Err(e) = result {
            tracing::error!("scheduled job failed: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
