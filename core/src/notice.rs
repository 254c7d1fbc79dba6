//! Ephemeral Notices
//!
//! A short success/error message that disappears on its own after a fixed
//! duration. Views hold a `NoticeBoard` and ask it what to show right now.

use std::time::{Duration, Instant};

/// How long a notice stays visible unless told otherwise
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    raised_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>, ttl: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: now,
            ttl,
        }
    }

    /// Expired once `ttl` has fully elapsed since it was raised
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= self.ttl
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Holds at most one notice; a new one replaces the old.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    current: Option<Notice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeBoard {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice::new(kind, message, self.ttl, now));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message, Instant::now());
    }

    /// The live notice, if any. Expired notices are dropped here.
    pub fn current(&mut self, now: Instant) -> Option<&Notice> {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_visible_until_ttl() {
        let start = Instant::now();
        let mut board = NoticeBoard::new(Duration::from_secs(3));
        board.show(NoticeKind::Success, "Task added successfully!", start);

        let shown = board.current(start + Duration::from_millis(2999)).cloned();
        assert_eq!(shown.map(|n| n.message), Some("Task added successfully!".to_string()));

        assert!(board.current(start + Duration::from_secs(3)).is_none());
        // Stays gone
        assert!(board.current(start + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_new_notice_replaces_old() {
        let start = Instant::now();
        let mut board = NoticeBoard::default();
        board.show(NoticeKind::Success, "first", start);
        board.show(NoticeKind::Error, "second", start + Duration::from_secs(2));

        let shown = board.current(start + Duration::from_secs(4)).unwrap();
        assert_eq!(shown.message, "second");
        assert_eq!(shown.kind, NoticeKind::Error);
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::default();
        board.error("Error deleting task");
        board.dismiss();
        assert!(board.current(Instant::now()).is_none());
    }
}
