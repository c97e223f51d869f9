//! Transient status messages
//!
//! One message area shows at most one [`Notice`] at a time. Each display
//! hands out a [`NoticeTicket`]; the hide scheduled for that display only
//! takes effect while its ticket is still current, so a message shown after
//! it is never dismissed early by a stale timer.

use std::time::Duration;

/// Styling of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class applied to the message area
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Identifies one display of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

/// State of the message area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    generation: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing. The returned ticket is what the caller's
    /// hide timer must present.
    pub fn show(&mut self, notice: Notice) -> NoticeTicket {
        self.generation += 1;
        self.current = Some(notice);
        NoticeTicket(self.generation)
    }

    /// Hide the notice shown under `ticket`. Returns false, leaving the area
    /// untouched, when a newer notice has replaced it.
    pub fn hide(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.current = None;
        true
    }

    /// The visible notice, if any
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

/// A notice together with how long it stays up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedNotice {
    pub notice: Notice,
    pub hide_after: Duration,
}
