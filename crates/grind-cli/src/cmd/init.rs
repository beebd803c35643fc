use anyhow::Context;
use grind_core::{config::Config, io, paths, roadmap::Roadmap};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing grind in: {}", root.display());

    io::ensure_dir(&paths::grind_dir(root)).context("failed to create .grind")?;

    let config_path = paths::config_path(root);
    if !config_path.exists() {
        Config::default().save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    let roadmap_path = paths::roadmap_path(root);
    if !roadmap_path.exists() {
        let data = serde_json::to_string_pretty(&Roadmap::starter())?;
        io::atomic_write(&roadmap_path, data.as_bytes())
            .context("failed to write roadmap.json")?;
        println!("  created: {}", paths::ROADMAP_FILE);
    } else {
        println!("  exists:  {}", paths::ROADMAP_FILE);
    }

    println!("\nNext steps:");
    println!("  1. Edit {} with your weekly roadmap", paths::ROADMAP_FILE);
    println!("  2. Set TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID in the environment");
    println!("  3. Start the service with: grind serve");
    Ok(())
}
