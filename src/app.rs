//! Main Application
//!
//! Runs one command against the context: calls the backend through
//! `commands`, renders the result, and raises the matching notice.

use std::io::{BufRead, Write};

use chore_core::{NoticeBoard, Priority, TaskDraft, TaskStatus};

use crate::commands;
use crate::components::{
    render_header, render_suggestions, render_task_detail, render_task_list, AddTaskWizard,
};
use crate::config::Command;
use crate::context::AppContext;

// Toast texts
const TASK_ADDED: &str = "Task added successfully!";
const TASK_ADD_FAILED: &str = "Failed to add task. Please try again.";
const SUGGESTION_ADDED: &str = "Task added to To-do List!";
const SUGGESTION_ADD_FAILED: &str = "Error adding task to To-do List";
const TASK_DELETED: &str = "Task deleted successfully!";
const TASK_DELETE_FAILED: &str = "Error deleting task";
const STATUS_UPDATE_FAILED: &str = "Error updating task status";
const PRIORITY_UPDATE_FAILED: &str = "Error updating task priority";

/// Raise a success or error notice for `result`, passing it through.
fn notify<T>(
    notices: &mut NoticeBoard,
    result: Result<T, String>,
    success: impl FnOnce(&T) -> String,
    failure: &str,
) -> Result<T, String> {
    match &result {
        Ok(value) => notices.success(success(value)),
        Err(e) => {
            log::warn!("{failure}: {e}");
            notices.error(failure);
        }
    }
    result
}

fn status_notice(status: TaskStatus) -> String {
    format!("Task marked as {}!", status.as_str().to_lowercase())
}

/// Execute `command`. Returns the text to print; interactive prompts read
/// from `input` and are written to `prompts`.
pub async fn run<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    command: Command,
    input: &mut R,
    prompts: &mut W,
) -> Result<String, String> {
    log::debug!("running {:?}", command);

    match command {
        Command::List { status } => {
            let status = TaskStatus::from_slug(&status)
                .or_else(|_| TaskStatus::parse(&status))
                .map_err(|e| e.to_string())?;
            let tasks = commands::list_tasks(ctx, status).await?;
            Ok(render_task_list(status, &tasks))
        }

        Command::Add {
            name,
            description,
            priority,
        } => {
            let priority = priority
                .map(|p| Priority::parse(&p))
                .transpose()
                .map_err(|e| e.to_string())?;
            let wizard = AddTaskWizard::prefilled(name, description, priority);
            let draft = match complete_wizard(wizard, input, prompts) {
                Ok(draft) => draft,
                Err(e) => {
                    ctx.notices.error(e.clone());
                    return Err(e);
                }
            };

            let created = commands::create_task(ctx, draft).await;
            let task = notify(&mut ctx.notices, created, |_| TASK_ADDED.to_string(), TASK_ADD_FAILED)?;
            Ok(render_task_detail(&task))
        }

        Command::Suggestions => {
            let suggestions = commands::list_suggestions(ctx).await?;
            Ok(render_suggestions(&suggestions))
        }

        Command::Accept { id } => {
            let accepted = commands::accept_suggestion(ctx, id).await;
            let task = notify(
                &mut ctx.notices,
                accepted,
                |_| SUGGESTION_ADDED.to_string(),
                SUGGESTION_ADD_FAILED,
            )?;
            Ok(render_task_detail(&task))
        }

        Command::Show { id } => {
            let task = commands::get_task(ctx, id).await?;
            Ok(render_task_detail(&task))
        }

        Command::Advance { id } => {
            let advanced = commands::advance_task(ctx, id).await;
            let task = notify(
                &mut ctx.notices,
                advanced,
                |task| status_notice(task.status),
                STATUS_UPDATE_FAILED,
            )?;
            Ok(render_task_detail(&task))
        }

        Command::SetStatus { id, status } => {
            let status = TaskStatus::parse(&status)
                .or_else(|_| TaskStatus::from_slug(&status))
                .map_err(|e| e.to_string())?;
            let updated = commands::update_task_status(ctx, id, status).await;
            notify(&mut ctx.notices, updated, |_| status_notice(status), STATUS_UPDATE_FAILED)?;
            Ok(format!("task {id}: status {status}"))
        }

        Command::Priority { id } => {
            let cycled = commands::cycle_task_priority(ctx, id).await;
            let task = notify(
                &mut ctx.notices,
                cycled,
                |task| format!("Priority set to {}", task.priority),
                PRIORITY_UPDATE_FAILED,
            )?;
            Ok(render_task_detail(&task))
        }

        Command::SetPriority { id, priority } => {
            let priority = Priority::parse(&priority).map_err(|e| e.to_string())?;
            let updated = commands::update_task_priority(ctx, id, priority).await;
            notify(
                &mut ctx.notices,
                updated,
                |_| format!("Priority set to {priority}"),
                PRIORITY_UPDATE_FAILED,
            )?;
            Ok(format!("task {id}: priority {priority}"))
        }

        Command::Delete { id } => {
            let deleted = commands::delete_task(ctx, id).await;
            notify(&mut ctx.notices, deleted, |_| TASK_DELETED.to_string(), TASK_DELETE_FAILED)?;
            Ok(format!("task {id} deleted"))
        }

        Command::Whoami => {
            let user = commands::current_user(ctx).await?;
            let mut out = render_header(Some(&user));
            if let Some(email) = user.email.as_deref() {
                out.push_str(&format!("\n{email}"));
            }
            Ok(out)
        }
    }
}

/// Prompt until every step is answered. A rejected answer is reported and
/// asked again; once input runs out, an unanswerable step is an error.
fn complete_wizard<R: BufRead, W: Write>(
    mut wizard: AddTaskWizard,
    input: &mut R,
    prompts: &mut W,
) -> Result<TaskDraft, String> {
    while let (Some(prompt), Some((step, total))) = (wizard.prompt(), wizard.progress()) {
        write!(prompts, "[{step}/{total}] {prompt}: ").map_err(|e| e.to_string())?;
        prompts.flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            wizard.submit("")?;
            continue;
        }
        if let Err(e) = wizard.submit(&line) {
            writeln!(prompts, "{e}").map_err(|e| e.to_string())?;
        }
    }

    wizard
        .into_draft()
        .ok_or_else(|| "Task name is required.".to_string())
}
