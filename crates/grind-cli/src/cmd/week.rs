use crate::output::print_json;
use grind_core::week::{month_for_week, week_for};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (config, _roadmap, store) = super::load(root)?;
    let today = chrono::Utc::now()
        .with_timezone(&config.tz_offset())
        .date_naive();

    let record = store.snapshot()?;
    let week = week_for(today, record.start_date);

    if json {
        return print_json(&serde_json::json!({
            "week": week,
            "month": month_for_week(week),
            "start_date": record.start_date.to_string(),
        }));
    }

    println!("Week {week} (Month {})", month_for_week(week));
    println!("Roadmap started: {}", record.start_date);
    Ok(())
}
