use crate::error::Result;
use crate::roadmap::Roadmap;
use crate::store::ProgressStore;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of one reminder tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every task this week is done; announce it instead of nagging.
    AllComplete { week: u32, total: usize },
    /// Not all complete but nothing incomplete either — only reachable on
    /// an inconsistent record. Treated as a silent no-op, not an error.
    NoIncomplete,
    /// One incomplete task to surface.
    Reminder(Reminder),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub week: u32,
    /// Slot this reminder consumed (0–4 in a normal day). Slot 0 also
    /// triggers the daily issue poll.
    pub slot: u8,
    pub task_index: usize,
    pub task_text: String,
    pub done_count: usize,
    pub total: usize,
}

/// End-of-day digest: a pure read, never mutates the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Digest {
    pub week: u32,
    pub done_count: usize,
    pub total: usize,
    pub incomplete: Vec<(usize, String)>,
}

/// Read-only view served by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub week: u32,
    pub done_count: usize,
    pub total: usize,
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Pick the next incomplete task for `week`, round-robin across the
/// incomplete list.
///
/// The persisted slot advances only when a `Reminder` is produced; the
/// `AllComplete` and `NoIncomplete` branches leave it untouched. The whole
/// read-and-advance runs as one atomic store update. Since the slot cycles
/// mod 6 but indexes into a shrinking list, the rotation is approximately
/// round-robin, not a stable mapping from slot to task.
pub fn pick_next_task(store: &ProgressStore, roadmap: &Roadmap, week: u32) -> Result<Outcome> {
    store.update(|p| {
        let tasks = roadmap.tasks_for_week(week);
        if p.all_complete(week, tasks.len()) {
            return Outcome::AllComplete {
                week,
                total: tasks.len(),
            };
        }

        let incomplete = p.incomplete_tasks(week, tasks);
        if incomplete.is_empty() {
            return Outcome::NoIncomplete;
        }

        let slot = p.take_notify_slot();
        let (task_index, task_text) = incomplete[slot as usize % incomplete.len()];

        Outcome::Reminder(Reminder {
            week,
            slot,
            task_index,
            task_text: task_text.to_string(),
            done_count: tasks.len() - incomplete.len(),
            total: tasks.len(),
        })
    })
}

pub fn end_of_day_digest(store: &ProgressStore, roadmap: &Roadmap, week: u32) -> Result<Digest> {
    let record = store.snapshot()?;
    let tasks = roadmap.tasks_for_week(week);
    let incomplete: Vec<(usize, String)> = record
        .incomplete_tasks(week, tasks)
        .into_iter()
        .map(|(i, t)| (i, t.to_string()))
        .collect();

    Ok(Digest {
        week,
        done_count: tasks.len() - incomplete.len(),
        total: tasks.len(),
        incomplete,
    })
}

pub fn snapshot(store: &ProgressStore, roadmap: &Roadmap, week: u32) -> Result<Snapshot> {
    let record = store.snapshot()?;
    let tasks = roadmap.tasks_for_week(week);
    Ok(Snapshot {
        week,
        done_count: record.completed_count(week).min(tasks.len()),
        total: tasks.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
