use crate::output::print_json;
use grind_core::{message, week::week_for};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (config, roadmap, store) = super::load(root)?;
    let today = chrono::Utc::now()
        .with_timezone(&config.tz_offset())
        .date_naive();

    let record = store.snapshot()?;
    let week = week_for(today, record.start_date);
    let tasks = roadmap.tasks_for_week(week);

    if json {
        return print_json(&serde_json::json!({ "week": week, "tasks": tasks }));
    }

    println!("{}", message::task_list(week, tasks, &record));
    Ok(())
}
