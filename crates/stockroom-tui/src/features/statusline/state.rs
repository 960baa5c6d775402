//! Status line state types.

use std::time::{Duration, Instant};

/// How long a notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Short-lived, non-blocking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct StatusLine {
    notice: Option<Notice>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current notice.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>, now: Instant) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
            expires_at: now + NOTICE_TTL,
        });
    }

    pub fn clear(&mut self) {
        self.notice = None;
    }

    /// Drops the notice once it has expired. Returns true if something changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.notice.as_ref().is_some_and(|n| n.expires_at <= now) {
            self.notice = None;
            return true;
        }
        false
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires_after_ttl() {
        let start = Instant::now();
        let mut status = StatusLine::new();
        status.push(NoticeKind::Info, "Login successful", start);

        assert!(!status.expire(start + Duration::from_secs(1)));
        assert!(status.notice().is_some());

        assert!(status.expire(start + NOTICE_TTL));
        assert!(status.notice().is_none());
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let start = Instant::now();
        let mut status = StatusLine::new();
        status.push(NoticeKind::Info, "first", start);
        status.push(NoticeKind::Error, "second", start);
        let notice = status.notice().unwrap();
        assert_eq!(notice.text, "second");
        assert_eq!(notice.kind, NoticeKind::Error);
    }
}
