pub mod done;
pub mod init;
pub mod run;
pub mod serve;
pub mod status;
pub mod tasks;
pub mod week;

use anyhow::Context;
use grind_core::config::Config;
use grind_core::roadmap::Roadmap;
use grind_core::store::ProgressStore;
use grind_server::state::AppState;
use std::path::Path;

/// Load the three fixtures every command needs.
pub(crate) fn load(root: &Path) -> anyhow::Result<(Config, Roadmap, ProgressStore)> {
    let config = Config::load(root).context("failed to load config")?;
    let roadmap = Roadmap::load(root).context("failed to load roadmap")?;
    let store = ProgressStore::open(root, &config);
    Ok((config, roadmap, store))
}

pub(crate) fn app_state(root: &Path) -> anyhow::Result<AppState> {
    let config = Config::load(root).context("failed to load config")?;
    let roadmap = Roadmap::load(root).context("failed to load roadmap")?;
    Ok(AppState::new(root, config, roadmap))
}
