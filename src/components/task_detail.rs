//! Single task view

use std::fmt::Write;

use chore_core::Task;

use super::task_list::{action_label, priority_marker};

/// Name, status, priority, creation date, description and the commands
/// that act on this task.
pub fn render_task_detail(task: &Task) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", task.name);
    let _ = writeln!(out, "Status:   {}", task.status);
    let _ = writeln!(out, "Priority: {} ({})", priority_marker(task.priority), task.priority);
    match task.date_created {
        Some(created) => {
            let _ = writeln!(out, "Created:  {}", created.format("%Y-%m-%d"));
        }
        None => out.push_str("Created:  unknown\n"),
    }
    if !task.description.is_empty() {
        let _ = writeln!(out, "\n{}", task.description);
    }

    out.push('\n');
    if let Some(action) = action_label(task.status) {
        let _ = writeln!(out, "  {action}: chore-board advance {}", task.id);
    }
    let _ = writeln!(out, "  Change priority: chore-board priority {}", task.id);
    let _ = write!(out, "  Delete: chore-board delete {}", task.id);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chore_core::{Priority, TaskId, TaskStatus};
    use chrono::{TimeZone, Utc};

    fn sample() -> Task {
        Task {
            id: TaskId(7),
            name: "Grocery Run".to_string(),
            description: "We need food for a large dinner".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::Medium,
            date_created: Some(Utc.with_ymd_and_hms(2024, 3, 1, 18, 30, 0).unwrap()),
            family_id: None,
        }
    }

    #[test]
    fn test_detail_fields() {
        let out = render_task_detail(&sample());
        assert!(out.starts_with("Grocery Run\n"));
        assert!(out.contains("Status:   In progress"));
        assert!(out.contains("Priority: !! (medium)"));
        assert!(out.contains("Created:  2024-03-01"));
        assert!(out.contains("We need food for a large dinner"));
        assert!(out.contains("Mark As Completed: chore-board advance 7"));
    }

    #[test]
    fn test_completed_detail_has_no_advance() {
        let mut task = sample();
        task.status = TaskStatus::Completed;
        task.date_created = None;
        let out = render_task_detail(&task);
        assert!(out.contains("Created:  unknown"));
        assert!(!out.contains("advance"));
        assert!(out.ends_with("Delete: chore-board delete 7"));
    }
}
