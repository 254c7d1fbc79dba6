//! Toast line for the current notice

use chore_core::{Notice, NoticeKind};

pub fn render_notice(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    format!("[{marker}] {}", notice.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_notice_markers() {
        let now = Instant::now();
        let ok = Notice::new(NoticeKind::Success, "Task deleted successfully!", Duration::from_secs(3), now);
        let err = Notice::new(NoticeKind::Error, "Error deleting task", Duration::from_secs(3), now);

        assert_eq!(render_notice(&ok), "[ok] Task deleted successfully!");
        assert_eq!(render_notice(&err), "[error] Error deleting task");
    }
}
