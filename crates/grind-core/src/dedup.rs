use crate::error::Result;
use crate::store::ProgressStore;

/// Filter `candidates` down to the ones whose identifier has not been
/// notified about before, recording every returned identifier immediately.
///
/// A repeated call with the same candidate returns it at most once, until
/// the identifier falls out of the FIFO retention window
/// ([`crate::progress::SEEN_ISSUES_CAP`] entries, oldest evicted first).
/// The whole batch is recorded in one atomic store update.
pub fn filter_new<T>(store: &ProgressStore, candidates: Vec<(String, T)>) -> Result<Vec<T>> {
    store.update(|p| {
        candidates
            .into_iter()
            .filter_map(|(id, meta)| p.record_seen_issue(&id).then_some(meta))
            .collect()
    })
}
