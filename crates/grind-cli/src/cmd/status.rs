use crate::output::print_json;
use grind_core::{message, scheduler, week::week_for};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct StatusView {
    week: u32,
    done: usize,
    total: usize,
    tasks: Vec<TaskView>,
}

#[derive(Serialize)]
struct TaskView {
    number: usize,
    text: String,
    done: bool,
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (config, roadmap, store) = super::load(root)?;
    let today = chrono::Utc::now()
        .with_timezone(&config.tz_offset())
        .date_naive();

    let record = store.snapshot()?;
    let week = week_for(today, record.start_date);
    let tasks = roadmap.tasks_for_week(week);

    if json {
        let snap = scheduler::snapshot(&store, &roadmap, week)?;
        let view = StatusView {
            week,
            done: snap.done_count,
            total: snap.total,
            tasks: tasks
                .iter()
                .enumerate()
                .map(|(i, text)| TaskView {
                    number: i + 1,
                    text: text.clone(),
                    done: record.is_done(week, i),
                })
                .collect(),
        };
        return print_json(&view);
    }

    println!("{}", message::status(week, tasks, &record));
    Ok(())
}
