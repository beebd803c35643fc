use crate::config::Config;
use crate::error::Result;
use crate::io;
use crate::progress::Progress;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// ProgressStore
// ---------------------------------------------------------------------------

/// Single-writer store for the progress document.
///
/// Every operation is a full load → mutate → save cycle against one file;
/// the file is the sole source of truth, so a freshly started process sees
/// every committed mutation. Within one process, the mutex serializes the
/// whole cycle — a mark-done racing a slot-advance cannot lose an update.
/// Across processes the external scheduler runs invocations one at a time.
pub struct ProgressStore {
    path: PathBuf,
    start_date: NaiveDate,
    lock: Mutex<()>,
}

impl ProgressStore {
    pub fn new(path: PathBuf, start_date: NaiveDate) -> Self {
        Self {
            path,
            start_date,
            lock: Mutex::new(()),
        }
    }

    pub fn open(root: &Path, config: &Config) -> Self {
        Self::new(config.state_path(root), config.start_date)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current record without mutating it.
    pub fn snapshot(&self) -> Result<Progress> {
        let _guard = self.guard();
        self.load_unlocked()
    }

    /// One atomic load → mutate → save unit.
    ///
    /// The record is persisted only if the closure actually changed it, so
    /// idempotent re-marks and pure reads never rewrite the file. A save
    /// failure is fatal for the operation; the closure's effect is lost.
    pub fn update<T>(&self, mutate: impl FnOnce(&mut Progress) -> T) -> Result<T> {
        let _guard = self.guard();
        let before = self.load_unlocked()?;
        let mut record = before.clone();
        let out = mutate(&mut record);
        if record != before {
            let data = serde_json::to_vec_pretty(&record)?;
            io::atomic_write(&self.path, &data)?;
        }
        Ok(out)
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        // A poisoned lock only means another writer panicked mid-closure;
        // the file itself stays consistent thanks to the atomic write.
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load_unlocked(&self) -> Result<Progress> {
        if !self.path.exists() {
            // Genuinely first run: the default record is the expected state.
            return Ok(Progress::new(self.start_date));
        }
        let data = std::fs::read_to_string(&self.path)?;
        let record: Progress = serde_json::from_str(&data)?;
        Ok(record)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
