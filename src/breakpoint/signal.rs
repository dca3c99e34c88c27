use super::{Breakpoint, BreakpointResolver};
use crate::subscription::{SubscriberId, Subscribers};

/// A breakpoint-change notification source.
///
/// The signal holds the latest observed viewport width and optional override and
/// re-resolves synchronously on every change. Subscribers are notified only when
/// the resolved breakpoint actually changes, so a stream of resize events inside
/// one breakpoint produces no callbacks.
pub struct BreakpointSignal {
    width: Option<u32>,
    override_bp: Option<Breakpoint>,
    current: Breakpoint,
    subscribers: Subscribers<Breakpoint>,
}

impl BreakpointSignal {
    pub fn new(width: Option<u32>, override_bp: Option<Breakpoint>) -> Self {
        Self {
            width,
            override_bp,
            current: BreakpointResolver::resolve(width, override_bp),
            subscribers: Subscribers::new(),
        }
    }

    pub fn current(&self) -> Breakpoint {
        self.current
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn override_breakpoint(&self) -> Option<Breakpoint> {
        self.override_bp
    }

    /// Records a viewport resize. Returns the breakpoint in effect afterwards.
    pub fn set_width(&mut self, width: u32) -> Breakpoint {
        self.width = Some(width);
        self.recompute()
    }

    /// Pins the breakpoint, bypassing width detection (device preview).
    pub fn set_override(&mut self, bp: Breakpoint) -> Breakpoint {
        self.override_bp = Some(bp);
        self.recompute()
    }

    /// Returns to live width detection.
    pub fn clear_override(&mut self) -> Breakpoint {
        self.override_bp = None;
        self.recompute()
    }

    /// Registers a callback for `owner`. An owner has at most one callback; subscribing
    /// again replaces the previous one.
    pub fn subscribe<F>(&mut self, owner: SubscriberId, callback: F)
    where
        F: FnMut(&Breakpoint) + 'static,
    {
        self.subscribers.insert(owner, Box::new(callback));
    }

    /// Tears down the callback of `owner`. Returns `false` if it had none.
    pub fn unsubscribe(&mut self, owner: SubscriberId) -> bool {
        self.subscribers.remove(owner)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn recompute(&mut self) -> Breakpoint {
        let next = BreakpointResolver::resolve(self.width, self.override_bp);
        if next != self.current {
            tracing::debug!("Breakpoint changed: {} -> {}", self.current, next);
            self.current = next;
            self.subscribers.notify(&next);
        }
        self.current
    }
}
