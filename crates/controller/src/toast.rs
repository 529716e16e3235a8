//! Transient feedback banner with a cancellable auto-dismiss.

use std::time::{Duration, Instant};

/// Default time a toast stays visible.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Toast flavor (drives color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Message shown in the feedback banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Handle of a scheduled dismissal.
///
/// Each shown toast gets a fresh token; dismissing with an older token does
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

#[derive(Debug, Clone)]
struct ScheduledDismiss {
    token: DismissToken,
    due: Instant,
}

/// Holder of at most one visible toast.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    current: Option<(Toast, ScheduledDismiss)>,
    next_token: u64,
    duration: Duration,
}

impl ToastSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            next_token: 0,
            duration,
        }
    }

    /// Show a toast, superseding any visible one and restarting the delay
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) -> DismissToken {
        let token = DismissToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);

        self.current = Some((
            Toast {
                message: message.into(),
                kind,
            },
            ScheduledDismiss {
                token,
                due: now + self.duration,
            },
        ));
        token
    }

    /// Visible toast, if any
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(toast, _)| toast)
    }

    /// Run the dismissal identified by `token`.
    ///
    /// Returns `false` when the token is stale (a newer toast replaced it).
    pub fn dismiss(&mut self, token: DismissToken) -> bool {
        match &self.current {
            Some((_, scheduled)) if scheduled.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Fire the pending dismissal if its deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = match &self.current {
            Some((_, scheduled)) if now >= scheduled.due => scheduled.token,
            _ => return false,
        };
        self.dismiss(due)
    }
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}
