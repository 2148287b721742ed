//! Transient user-facing notices ("toasts").

/// Severity of a notice; drives its colour in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Good,
    Warn,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, body)
    }

    pub fn good(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationKind::Good, title, body)
    }

    pub fn warn(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warn, title, body)
    }

    pub fn bad(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(NotificationKind::Bad, title, body)
    }
}
