use crate::error::{GrindError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Roadmap
// ---------------------------------------------------------------------------

/// The static weekly task catalog, loaded once from `.grind/roadmap.json`.
///
/// Weeks beyond the defined roadmap fall back to the maintenance list, so
/// `tasks_for_week` is total over all week numbers. Never mutated at runtime;
/// editing the roadmap is a new file version, not an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub weekly_tasks: BTreeMap<u32, Vec<String>>,
    pub maintenance_tasks: Vec<String>,
}

impl Roadmap {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::roadmap_path(root);
        if !path.exists() {
            return Err(GrindError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let roadmap: Roadmap = serde_json::from_str(&data)?;
        roadmap.validate()?;
        Ok(roadmap)
    }

    /// Non-empty task lists are an operating invariant of the catalog:
    /// enforced here, assumed everywhere else.
    pub fn validate(&self) -> Result<()> {
        if self.maintenance_tasks.is_empty() {
            return Err(GrindError::EmptyMaintenanceList);
        }
        for (week, tasks) in &self.weekly_tasks {
            if tasks.is_empty() {
                return Err(GrindError::EmptyWeek(*week));
            }
        }
        Ok(())
    }

    /// The task list for a week, falling back to maintenance tasks for
    /// weeks past the end of the roadmap.
    pub fn tasks_for_week(&self, week: u32) -> &[String] {
        self.weekly_tasks
            .get(&week)
            .map(Vec::as_slice)
            .unwrap_or(&self.maintenance_tasks)
    }

    /// Starter roadmap written by `grind init`.
    pub fn starter() -> Self {
        Self {
            weekly_tasks: BTreeMap::from([(
                1,
                vec![
                    "Read one chapter of the current book".to_string(),
                    "Ship one small PR".to_string(),
                    "Write up Monday's study notes".to_string(),
                    "Do the weekly exercise set".to_string(),
                    "Review last week's flashcards".to_string(),
                    "Plan next week's schedule".to_string(),
                ],
            )]),
            maintenance_tasks: vec![
                "Review open PRs on watched repos".to_string(),
                "Triage this week's new issues".to_string(),
                "Update study notes".to_string(),
                "Revisit one old project".to_string(),
                "Read one technical article".to_string(),
                "Plan next week's schedule".to_string(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
