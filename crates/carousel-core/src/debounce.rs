use crate::host::{TimerId, TimerKind, TimerScheduler};
use std::time::Duration;

/// A restartable single-shot timer.
///
/// Every [`trigger`](Debouncer::trigger) cancels the pending timer and starts
/// the full window again, so a burst of triggers expires exactly once, one
/// window after the last trigger.
#[derive(Clone, Debug)]
pub struct Debouncer {
    kind: TimerKind,
    window: Duration,
    pending: Option<TimerId>,
}

impl Debouncer {
    pub fn new(kind: TimerKind, window: Duration) -> Self {
        Self {
            kind,
            window,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// (Re)starts the window. Returns `false` if the host refused the timer,
    /// in which case the caller should act immediately.
    pub fn trigger<T: TimerScheduler + ?Sized>(&mut self, timers: &mut T) -> bool {
        self.cancel(timers);
        self.pending = timers.start_timer(self.kind, self.window);
        self.pending.is_some()
    }

    /// Cancels the pending timer, if any. Returns whether one was pending.
    pub fn cancel<T: TimerScheduler + ?Sized>(&mut self, timers: &mut T) -> bool {
        match self.pending.take() {
            Some(id) => {
                timers.cancel_timer(id);
                true
            }
            None => false,
        }
    }

    /// Records that the host delivered the expiry. Returns `false` for a
    /// stray expiry with nothing pending.
    pub fn expire(&mut self) -> bool {
        self.pending.take().is_some()
    }
}
