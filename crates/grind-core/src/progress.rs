use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Number of daily notification slots (five reminders + one digest).
pub const SLOT_COUNT: usize = 6;

/// Dedupe retention window for externally seen issue identifiers.
/// Strict FIFO: once full, the oldest-recorded identifier is evicted, so an
/// issue can resurface after 200 newer ones. Known bound, kept as-is.
pub const SEEN_ISSUES_CAP: usize = 200;

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// The single durable record: per-week completion sets, the rotating
/// notification slot, the issue dedupe window, and the chat transport's
/// update watermark.
///
/// The wire format is one JSON document; `completed` keys serialize as
/// stringified week numbers, which is exactly what `serde_json` does for an
/// integer-keyed map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub start_date: NaiveDate,

    #[serde(default)]
    pub completed: BTreeMap<u32, BTreeSet<usize>>,

    #[serde(default)]
    pub seen_issues: VecDeque<String>,

    #[serde(default)]
    pub notify_index: u8,

    /// Opaque watermark owned by the Telegram collaborator; the core never
    /// interprets it.
    #[serde(default)]
    pub last_update_id: i64,
}

impl Progress {
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            completed: BTreeMap::new(),
            seen_issues: VecDeque::new(),
            notify_index: 0,
            last_update_id: 0,
        }
    }

    // ---------------------------------------------------------------------------
    // Completion engine
    // ---------------------------------------------------------------------------

    /// Mark a task done. Returns true if it was newly completed.
    ///
    /// `task_index` must already be validated against the week's task count
    /// by the command boundary — the engine does not re-derive it.
    pub fn mark_done(&mut self, week: u32, task_index: usize) -> bool {
        self.completed.entry(week).or_default().insert(task_index)
    }

    pub fn completed_count(&self, week: u32) -> usize {
        self.completed.get(&week).map_or(0, BTreeSet::len)
    }

    pub fn is_done(&self, week: u32, task_index: usize) -> bool {
        self.completed
            .get(&week)
            .is_some_and(|set| set.contains(&task_index))
    }

    pub fn all_complete(&self, week: u32, total_tasks: usize) -> bool {
        self.completed_count(week) >= total_tasks
    }

    /// `(index, text)` pairs for tasks not yet done, in catalog order.
    pub fn incomplete_tasks<'a>(&self, week: u32, tasks: &'a [String]) -> Vec<(usize, &'a str)> {
        tasks
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.is_done(week, *i))
            .map(|(i, t)| (i, t.as_str()))
            .collect()
    }

    // ---------------------------------------------------------------------------
    // Notification slot
    // ---------------------------------------------------------------------------

    /// Return the current notify slot and advance it by one (mod 6).
    ///
    /// Only the scheduler's reminder branch calls this — the slot does not
    /// advance when a cycle has nothing to remind about.
    pub fn take_notify_slot(&mut self) -> u8 {
        let slot = self.notify_index;
        self.notify_index = (slot + 1) % SLOT_COUNT as u8;
        slot
    }

    // ---------------------------------------------------------------------------
    // Issue dedupe window
    // ---------------------------------------------------------------------------

    pub fn is_issue_seen(&self, id: &str) -> bool {
        self.seen_issues.iter().any(|s| s == id)
    }

    /// Record an issue identifier. Returns true if it was previously unseen.
    /// Evicts the oldest entry once the window exceeds [`SEEN_ISSUES_CAP`].
    pub fn record_seen_issue(&mut self, id: &str) -> bool {
        if self.is_issue_seen(id) {
            return false;
        }
        self.seen_issues.push_back(id.to_string());
        while self.seen_issues.len() > SEEN_ISSUES_CAP {
            self.seen_issues.pop_front();
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Progress {
        Progress::new(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap())
    }

    fn tasks(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("task {i}")).collect()
    }

    #[test]
    fn mark_done_is_idempotent() {
        let mut p = record();
        assert!(p.mark_done(1, 2));
        assert_eq!(p.completed_count(1), 1);
        assert!(!p.mark_done(1, 2));
        assert_eq!(p.completed_count(1), 1);
    }

    #[test]
    fn incomplete_and_completed_partition_the_index_range() {
        let mut p = record();
        let tasks = tasks(6);
        p.mark_done(1, 1);
        p.mark_done(1, 4);

        let incomplete: BTreeSet<usize> =
            p.incomplete_tasks(1, &tasks).iter().map(|(i, _)| *i).collect();
        let done = p.completed.get(&1).unwrap();

        assert!(incomplete.is_disjoint(done));
        let union: BTreeSet<usize> = incomplete.union(done).copied().collect();
        assert_eq!(union, (0..6).collect());
    }

    #[test]
    fn incomplete_tasks_preserve_catalog_order() {
        let mut p = record();
        let tasks = tasks(4);
        p.mark_done(1, 0);
        p.mark_done(1, 2);
        let incomplete = p.incomplete_tasks(1, &tasks);
        assert_eq!(incomplete, vec![(1, "task 1"), (3, "task 3")]);
    }

    #[test]
    fn all_complete_is_monotonic() {
        let mut p = record();
        for i in 0..3 {
            assert!(!p.all_complete(1, 3));
            p.mark_done(1, i);
        }
        assert!(p.all_complete(1, 3));
        // Re-marking covered indices keeps it complete.
        p.mark_done(1, 0);
        assert!(p.all_complete(1, 3));
    }

    #[test]
    fn weeks_track_completion_independently() {
        let mut p = record();
        p.mark_done(1, 0);
        assert_eq!(p.completed_count(1), 1);
        assert_eq!(p.completed_count(2), 0);
    }

    #[test]
    fn notify_slot_cycles_mod_six() {
        let mut p = record();
        let first = p.take_notify_slot();
        for _ in 0..SLOT_COUNT - 1 {
            p.take_notify_slot();
        }
        assert_eq!(p.notify_index, first);
    }

    #[test]
    fn seen_issues_deduplicate() {
        let mut p = record();
        assert!(p.record_seen_issue("a"));
        assert!(!p.record_seen_issue("a"));
        assert!(p.record_seen_issue("b"));
    }

    #[test]
    fn seen_issues_evict_oldest_first() {
        let mut p = record();
        for i in 0..SEEN_ISSUES_CAP {
            assert!(p.record_seen_issue(&format!("issue-{i}")));
        }
        assert_eq!(p.seen_issues.len(), SEEN_ISSUES_CAP);

        assert!(p.record_seen_issue("one-more"));
        assert_eq!(p.seen_issues.len(), SEEN_ISSUES_CAP);
        assert!(!p.is_issue_seen("issue-0"));
        assert!(p.is_issue_seen("issue-1"));
        // The evicted identifier can be recorded (and so re-notified) again.
        assert!(p.record_seen_issue("issue-0"));
    }

    #[test]
    fn wire_format_matches_the_store_document() {
        let mut p = record();
        p.mark_done(2, 0);
        p.mark_done(2, 3);
        p.record_seen_issue("https://github.com/foundry-rs/foundry/issues/1");
        p.notify_index = 4;
        p.last_update_id = 99;

        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["start_date"], "2025-02-03");
        assert_eq!(value["completed"]["2"], serde_json::json!([0, 3]));
        assert_eq!(
            value["seen_issues"],
            serde_json::json!(["https://github.com/foundry-rs/foundry/issues/1"])
        );
        assert_eq!(value["notify_index"], 4);
        assert_eq!(value["last_update_id"], 99);

        let back: Progress = serde_json::from_value(value).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn missing_fields_default_on_load() {
        let p: Progress = serde_json::from_str(r#"{"start_date":"2025-02-03"}"#).unwrap();
        assert_eq!(p.notify_index, 0);
        assert_eq!(p.last_update_id, 0);
        assert!(p.completed.is_empty());
        assert!(p.seen_issues.is_empty());
    }
}
