//! Text Views
//!
//! Plain-text renderings of each screen. Views only format; they never
//! call the backend.

mod add_task;
mod header;
mod suggested_tasks;
mod task_detail;
mod task_list;
mod toast;

pub use add_task::AddTaskWizard;
pub use header::render_header;
pub use suggested_tasks::render_suggestions;
pub use task_detail::render_task_detail;
pub use task_list::render_task_list;
pub use toast::render_notice;
