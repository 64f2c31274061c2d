use std::time::Duration;

pub const SLIDE_IN_DELAY: Duration = Duration::from_millis(100);
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);
pub const SLIDE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }

    pub fn modifier(self) -> &'static str {
        match self {
            Self::Success => "notification--success",
            Self::Error => "notification--error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    /// Mounted off-screen, waiting to slide in.
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub message: String,
    pub phase: NoticePhase,
}

/// Holds at most one toast. Every transition names the toast it is meant
/// for, so timers left over from a replaced toast do nothing.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notice>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Replaces any toast on screen with a new one.
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        if let Some(previous) = self.current.take() {
            log::debug!("replacing notification {:?}", previous.id);
        }
        self.current = Some(Notice {
            id,
            kind,
            message: message.into(),
            phase: NoticePhase::Entering,
        });
        id
    }

    pub fn slide_in(&mut self, id: NoticeId) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase == NoticePhase::Entering => {
                n.phase = NoticePhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Starts the slide-out. Returns `false` if `id` is gone or already
    /// leaving, in which case no removal needs scheduling.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase != NoticePhase::Leaving => {
                n.phase = NoticePhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
