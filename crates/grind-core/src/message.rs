//! Outbound message texts.
//!
//! Everything user-visible the bot ever says is rendered here, so the
//! transports stay dumb pipes and the texts are testable without I/O.

use crate::progress::Progress;
use crate::scheduler::{Digest, Reminder};
use crate::week::month_for_week;

// ---------------------------------------------------------------------------
// Scheduled notifications
// ---------------------------------------------------------------------------

pub fn reminder(r: &Reminder) -> String {
    format!(
        "*Task {}/{} — INCOMPLETE*\n\n\
         {}\n\n\
         Progress: {}/{} done (Week {})\n\
         Reply /done {} when finished.",
        r.task_index + 1,
        r.total,
        r.task_text,
        r.done_count,
        r.total,
        r.week,
        r.task_index + 1,
    )
}

pub fn all_complete(week: u32) -> String {
    format!(
        "*Week {week} — ALL TASKS COMPLETE*\n\n\
         Everything done. Next week's tasks load automatically.\n\
         Rest up or get ahead."
    )
}

pub fn digest(d: &Digest) -> String {
    if d.incomplete.is_empty() {
        return format!(
            "*End of Day — Week {}*\n\nAll {} tasks complete. Solid work.",
            d.week, d.total
        );
    }
    let remaining: Vec<String> = d
        .incomplete
        .iter()
        .map(|(i, t)| format!("  {}. {}", i + 1, t))
        .collect();
    format!(
        "*End of Day — Week {}*\n\n\
         Done: {}/{}\n\n\
         Still incomplete:\n{}\n\n\
         These will keep coming until you finish them.",
        d.week,
        d.done_count,
        d.total,
        remaining.join("\n"),
    )
}

// ---------------------------------------------------------------------------
// Command replies
// ---------------------------------------------------------------------------

pub fn done_reply(week: u32, task_number: usize, task_text: &str, remaining: usize) -> String {
    if remaining == 0 {
        format!(
            "*Task {task_number} — DONE*\n\n\
             '{task_text}'\n\n\
             *ALL TASKS COMPLETE FOR WEEK {week}.*\n\
             Next week's tasks load automatically."
        )
    } else {
        let plural = if remaining == 1 { "" } else { "s" };
        format!(
            "*Task {task_number} — DONE*\n\n\
             '{task_text}'\n\n\
             {remaining} task{plural} remaining this week."
        )
    }
}

pub fn already_done(task_number: usize) -> String {
    format!("Task {task_number} was already marked done.")
}

pub fn invalid_task_number(total: usize) -> String {
    format!("Invalid task number. This week has tasks 1-{total}.")
}

pub fn done_usage() -> String {
    "Usage: /done <task_number>\nExample: /done 3".to_string()
}

pub fn not_a_number() -> String {
    "Task number must be a number. Example: /done 3".to_string()
}

pub fn status(week: u32, tasks: &[String], record: &Progress) -> String {
    let mut lines = vec![format!(
        "*Week {week} — {}/{} complete*\n",
        record.completed_count(week),
        tasks.len()
    )];
    for (i, task) in tasks.iter().enumerate() {
        let state = if record.is_done(week, i) { "done" } else { "TODO" };
        lines.push(format!("  {}. [{state}] {task}", i + 1));
    }
    lines.join("\n")
}

pub fn task_list(week: u32, tasks: &[String], record: &Progress) -> String {
    let mut lines = vec![format!("*Week {week} Tasks:*\n")];
    for (i, task) in tasks.iter().enumerate() {
        let marker = if record.is_done(week, i) { "[x]" } else { "[ ]" };
        lines.push(format!("{}. {marker} {task}", i + 1));
    }
    lines.join("\n")
}

pub fn week_summary(week: u32) -> String {
    format!(
        "*Week {week} (Month {})*\n\n\
         Use /tasks to see this week's list.\n\
         Use /status for progress.",
        month_for_week(week)
    )
}

pub fn help() -> String {
    "*Commands:*\n\n\
     /done <number> — Mark task complete (e.g. /done 3)\n\
     /status — Current week progress\n\
     /tasks — List all tasks this week\n\
     /week — Show current week and month\n\
     /help — This message"
        .to_string()
}

pub fn start_welcome(week: u32, task_count: usize) -> String {
    [
        "*Daily Grind Bot — Active*\n".to_string(),
        format!("Week {week} loaded. {task_count} tasks.\n"),
        "You'll get 6 reminders daily until every task is marked done.\n".to_string(),
        "*Commands:*".to_string(),
        "/done <number> — Mark task complete".to_string(),
        "/status — Progress".to_string(),
        "/tasks — This week's list".to_string(),
        "/help — All commands".to_string(),
    ]
    .join("\n")
}

/// Reply to /start from an unknown chat, so the owner can discover the
/// chat id to configure.
pub fn unknown_chat(chat_id: i64) -> String {
    format!(
        "Your chat ID: `{chat_id}`\n\n\
         Set this as TELEGRAM_CHAT_ID in your environment."
    )
}

// ---------------------------------------------------------------------------
// Issue alerts
// ---------------------------------------------------------------------------

/// A new external issue worth surfacing, already past the dedupe filter.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueAlert {
    pub repo: String,
    pub title: String,
    pub url: String,
    pub labels: Vec<String>,
}

/// Format new issues into one notification block. Empty input renders to
/// `None` — nothing new is a normal outcome, not a message.
pub fn issue_alerts(issues: &[IssueAlert]) -> Option<String> {
    if issues.is_empty() {
        return None;
    }
    let mut lines = vec!["*New issues on target repos:*\n".to_string()];
    for issue in issues {
        let labels = issue
            .labels
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!("[{}] {}", issue.repo, issue.title));
        lines.push(format!("  Labels: {labels}"));
        lines.push(format!("  {}\n", issue.url));
    }
    Some(lines.join("\n"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Reminder;
    use chrono::NaiveDate;

    #[test]
    fn reminder_shows_one_based_numbers() {
        let text = reminder(&Reminder {
            week: 3,
            slot: 0,
            task_index: 0,
            task_text: "Ship one small PR".to_string(),
            done_count: 2,
            total: 6,
        });
        assert!(text.contains("Task 1/6"));
        assert!(text.contains("Progress: 2/6 done (Week 3)"));
        assert!(text.contains("/done 1"));
    }

    #[test]
    fn done_reply_pluralizes_remaining() {
        assert!(done_reply(1, 2, "x", 1).contains("1 task remaining"));
        assert!(done_reply(1, 2, "x", 4).contains("4 tasks remaining"));
        assert!(done_reply(1, 2, "x", 0).contains("ALL TASKS COMPLETE FOR WEEK 1"));
    }

    #[test]
    fn digest_lists_remaining_tasks() {
        let text = digest(&Digest {
            week: 2,
            done_count: 1,
            total: 3,
            incomplete: vec![(0, "a".to_string()), (2, "c".to_string())],
        });
        assert!(text.contains("Done: 1/3"));
        assert!(text.contains("  1. a"));
        assert!(text.contains("  3. c"));
    }

    #[test]
    fn status_marks_done_and_todo() {
        let mut record = Progress::new(NaiveDate::from_ymd_opt(2025, 2, 3).unwrap());
        record.mark_done(1, 0);
        let tasks = vec!["a".to_string(), "b".to_string()];
        let text = status(1, &tasks, &record);
        assert!(text.contains("1/2 complete"));
        assert!(text.contains("1. [done] a"));
        assert!(text.contains("2. [TODO] b"));
    }

    #[test]
    fn issue_alerts_caps_labels_at_three() {
        let alert = issue_alerts(&[IssueAlert {
            repo: "foundry-rs/foundry".to_string(),
            title: "Fix docs".to_string(),
            url: "https://github.com/foundry-rs/foundry/issues/1".to_string(),
            labels: ["l1", "l2", "l3", "l4"].map(String::from).to_vec(),
        }])
        .unwrap();
        assert!(alert.contains("Labels: l1, l2, l3"));
        assert!(!alert.contains("l4"));
    }

    #[test]
    fn no_issues_renders_nothing() {
        assert_eq!(issue_alerts(&[]), None);
    }
}
