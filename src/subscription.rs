//! Owner-keyed callback lists shared by the breakpoint signal and the content store.

use std::fmt;

/// Identifies the owner of a subscription, typically one popup instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type Callback<T> = Box<dyn FnMut(&T)>;

/// A list of callbacks with at most one entry per owner.
pub(crate) struct Subscribers<T> {
    entries: Vec<(SubscriberId, Callback<T>)>,
}

impl<T> Subscribers<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `callback` for `owner`, replacing any earlier callback of that owner.
    pub(crate) fn insert(&mut self, owner: SubscriberId, callback: Callback<T>) {
        match self.entries.iter_mut().find(|(id, _)| *id == owner) {
            Some(entry) => {
                tracing::debug!("Replacing existing subscription for {}", owner);
                entry.1 = callback;
            }
            None => self.entries.push((owner, callback)),
        }
    }

    pub(crate) fn remove(&mut self, owner: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| *id != owner);
        before != self.entries.len()
    }

    pub(crate) fn notify(&mut self, value: &T) {
        for (_, callback) in self.entries.iter_mut() {
            callback(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
