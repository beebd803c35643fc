use crate::error::Result;
use crate::message;
use crate::roadmap::Roadmap;
use crate::store::ProgressStore;
use crate::week::week_for;
use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// A validated chat command. By the time a `Command` exists, its arguments
/// are well-formed integers — malformed input never crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Done { task_number: usize },
    Status,
    Tasks,
    Week,
    Help,
}

/// Outcome of parsing one inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    Command(Command),
    /// Recognized command with malformed arguments; carries the correction
    /// to send back. Never persisted, never fatal.
    Invalid(String),
    /// Not addressed to us (plain chatter, unknown command). Silently skipped.
    Ignored,
}

pub fn parse(text: &str) -> Parsed {
    let mut parts = text.split_whitespace();
    let Some(head) = parts.next() else {
        return Parsed::Ignored;
    };

    match head {
        "/start" => Parsed::Command(Command::Start),
        "/status" => Parsed::Command(Command::Status),
        "/tasks" => Parsed::Command(Command::Tasks),
        "/week" => Parsed::Command(Command::Week),
        "/help" => Parsed::Command(Command::Help),
        "/done" => match parts.next() {
            None => Parsed::Invalid(message::done_usage()),
            Some(arg) => match arg.parse::<usize>() {
                // Range checking happens in `handle`, where the week's task
                // count is known; parsing only rejects non-numbers.
                Ok(n) => Parsed::Command(Command::Done { task_number: n }),
                Err(_) => Parsed::Invalid(message::not_a_number()),
            },
        },
        _ => Parsed::Ignored,
    }
}

// ---------------------------------------------------------------------------
// Handling
// ---------------------------------------------------------------------------

/// Execute a command against the store and return the reply text.
///
/// This is the bounds-checking caller the completion engine relies on: an
/// out-of-range `/done` number is answered with a range correction and
/// never reaches `mark_done`.
pub fn handle(
    cmd: Command,
    store: &ProgressStore,
    roadmap: &Roadmap,
    today: NaiveDate,
) -> Result<String> {
    match cmd {
        Command::Done { task_number } => store.update(|p| {
            let week = week_for(today, p.start_date);
            let tasks = roadmap.tasks_for_week(week);
            if task_number < 1 || task_number > tasks.len() {
                return message::invalid_task_number(tasks.len());
            }
            let task_index = task_number - 1;
            if p.mark_done(week, task_index) {
                let remaining = tasks.len() - p.completed_count(week);
                message::done_reply(week, task_number, &tasks[task_index], remaining)
            } else {
                message::already_done(task_number)
            }
        }),

        Command::Status => {
            let record = store.snapshot()?;
            let week = week_for(today, record.start_date);
            Ok(message::status(week, roadmap.tasks_for_week(week), &record))
        }

        Command::Tasks => {
            let record = store.snapshot()?;
            let week = week_for(today, record.start_date);
            Ok(message::task_list(week, roadmap.tasks_for_week(week), &record))
        }

        Command::Week => {
            let record = store.snapshot()?;
            Ok(message::week_summary(week_for(today, record.start_date)))
        }

        Command::Help => Ok(message::help()),

        Command::Start => {
            let record = store.snapshot()?;
            let week = week_for(today, record.start_date);
            Ok(message::start_welcome(
                week,
                roadmap.tasks_for_week(week).len(),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
