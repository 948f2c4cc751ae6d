//! Transient user-facing messages.
//!
//! DESIGN
//! ======
//! Every time a toast is shown the generation counter is bumped. A transient
//! toast hands out a [`ToastTicket`] stamped with that generation; the timer
//! that later tries to clear it presents the ticket, and the clear only
//! happens if nothing has been shown since. Terminal toasts (win, loss) are
//! sticky and hand out no ticket, so a stale timer can never erase them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A message shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

/// Proof that a particular transient toast was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket {
    generation: u64,
}

/// The toast slot of a play state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
    sticky: bool,
}

impl ToastState {
    /// The toast currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Number of toasts shown so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show a toast that should be cleared after the configured delay.
    pub fn show(&mut self, toast: Toast) -> ToastTicket {
        self.replace(toast, false);
        ToastTicket { generation: self.generation }
    }

    /// Show a toast that stays until the play state is discarded.
    pub fn show_sticky(&mut self, toast: Toast) {
        self.replace(toast, true);
    }

    /// Ticket for the toast on screen, if it is transient.
    #[must_use]
    pub fn pending(&self) -> Option<ToastTicket> {
        (self.current.is_some() && !self.sticky).then_some(ToastTicket { generation: self.generation })
    }

    /// Clear the toast the ticket was issued for. Returns `false` (and leaves
    /// the slot alone) when a newer toast has replaced it or it is sticky.
    pub fn clear(&mut self, ticket: ToastTicket) -> bool {
        if self.sticky || ticket.generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    fn replace(&mut self, toast: Toast, sticky: bool) {
        self.generation += 1;
        self.current = Some(toast);
        self.sticky = sticky;
    }
}
