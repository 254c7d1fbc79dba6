//! Command Wrappers
//!
//! Front-end bindings to the core services. Errors are flattened to their
//! display text, which is what the views show.

use chore_core::{Priority, SuggestedTask, SuggestedTaskId, Task, TaskDraft, TaskId, TaskStatus, User};

use crate::context::AppContext;

// ========================
// Task Commands
// ========================

pub async fn list_tasks(ctx: &AppContext, status: TaskStatus) -> Result<Vec<Task>, String> {
    ctx.services
        .tasks
        .list(&ctx.session, status)
        .await
        .map_err(|e| e.to_string())
}

pub async fn get_task(ctx: &AppContext, id: TaskId) -> Result<Task, String> {
    ctx.services.tasks.get(id).await.map_err(|e| e.to_string())
}

pub async fn create_task(ctx: &AppContext, draft: TaskDraft) -> Result<Task, String> {
    ctx.services
        .tasks
        .create(&ctx.session, draft)
        .await
        .map_err(|e| e.to_string())
}

pub async fn update_task_status(ctx: &AppContext, id: TaskId, status: TaskStatus) -> Result<(), String> {
    ctx.services
        .tasks
        .update_status(id, status)
        .await
        .map_err(|e| e.to_string())
}

pub async fn advance_task(ctx: &AppContext, id: TaskId) -> Result<Task, String> {
    ctx.services.tasks.advance(id).await.map_err(|e| e.to_string())
}

pub async fn update_task_priority(ctx: &AppContext, id: TaskId, priority: Priority) -> Result<(), String> {
    ctx.services
        .tasks
        .update_priority(id, priority)
        .await
        .map_err(|e| e.to_string())
}

pub async fn cycle_task_priority(ctx: &AppContext, id: TaskId) -> Result<Task, String> {
    ctx.services
        .tasks
        .cycle_priority(id)
        .await
        .map_err(|e| e.to_string())
}

pub async fn delete_task(ctx: &AppContext, id: TaskId) -> Result<(), String> {
    ctx.services.tasks.delete(id).await.map_err(|e| e.to_string())
}

// ========================
// Suggestion Commands
// ========================

pub async fn list_suggestions(ctx: &AppContext) -> Result<Vec<SuggestedTask>, String> {
    ctx.services.suggestions.list().await.map_err(|e| e.to_string())
}

/// Look the suggestion up, then copy it into a new pending task
pub async fn accept_suggestion(ctx: &AppContext, id: SuggestedTaskId) -> Result<Task, String> {
    let suggestion = ctx.services.suggestions.get(id).await.map_err(|e| e.to_string())?;
    ctx.services
        .tasks
        .create_from_suggestion(&ctx.session, &suggestion)
        .await
        .map_err(|e| e.to_string())
}

// ========================
// User Commands
// ========================

pub async fn current_user(ctx: &AppContext) -> Result<User, String> {
    ctx.services
        .users
        .get(ctx.session.user_id())
        .await
        .map_err(|e| e.to_string())
}
