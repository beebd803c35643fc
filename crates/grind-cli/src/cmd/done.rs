use grind_core::command::{self, Command};
use std::path::Path;

pub fn run(root: &Path, number: usize) -> anyhow::Result<()> {
    let (config, roadmap, store) = super::load(root)?;
    let today = chrono::Utc::now()
        .with_timezone(&config.tz_offset())
        .date_naive();

    let reply = command::handle(
        Command::Done {
            task_number: number,
        },
        &store,
        &roadmap,
        today,
    )?;
    println!("{reply}");
    Ok(())
}
