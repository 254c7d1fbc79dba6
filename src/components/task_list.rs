//! Task list view: one status tab at a time.

use std::fmt::Write;

use chore_core::{Priority, Task, TaskStatus};

pub const EMPTY_LIST: &str = "No tasks available for this status.";

pub fn status_tab_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "To-do",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Completed => "Completed",
    }
}

/// `!`, `!!` or `!!!`
pub fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "!",
        Priority::Medium => "!!",
        Priority::High => "!!!",
    }
}

/// Label of the action that moves a task on, `None` once completed
pub fn action_label(status: TaskStatus) -> Option<&'static str> {
    match status {
        TaskStatus::Pending => Some("Mark In Progress"),
        TaskStatus::InProgress => Some("Mark As Completed"),
        TaskStatus::Completed => None,
    }
}

fn render_tabs(active: TaskStatus) -> String {
    TaskStatus::ALL
        .iter()
        .map(|status| {
            let label = status_tab_label(*status);
            if *status == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_task_list(status: TaskStatus, tasks: &[Task]) -> String {
    let mut out = render_tabs(status);
    out.push('\n');

    if tasks.is_empty() {
        out.push_str(EMPTY_LIST);
        return out;
    }

    for task in tasks {
        let id = task.id.to_string();
        let _ = write!(out, "\n#{id:<5} {:<3} {}", priority_marker(task.priority), task.name);
        if !task.description.is_empty() {
            let _ = write!(out, "\n       {}", task.description);
        }
        if let Some(action) = action_label(task.status) {
            let _ = write!(out, "\n       -> {action}: chore-board advance {}", task.id);
        }
    }
    out
}
