use super::document::FlexibleContent;
use crate::subscription::{SubscriberId, Subscribers};
use std::sync::Arc;

/// An immutable view of the content document at one version.
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub version: u64,
    pub content: Arc<FlexibleContent>,
}

/// Holds the current content document and swaps it wholesale.
///
/// Resolution passes take a snapshot and never see a half-applied edit: a
/// replacement installs a new `Arc` and bumps the version, while snapshots taken
/// earlier keep pointing at the old document.
pub struct ContentStore {
    current: ContentSnapshot,
    subscribers: Subscribers<ContentSnapshot>,
}

impl ContentStore {
    pub fn new(content: FlexibleContent) -> Self {
        Self {
            current: ContentSnapshot {
                version: 1,
                content: Arc::new(content),
            },
            subscribers: Subscribers::new(),
        }
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        self.current.clone()
    }

    pub fn content(&self) -> &FlexibleContent {
        &self.current.content
    }

    pub fn version(&self) -> u64 {
        self.current.version
    }

    /// Replaces the whole document and notifies subscribers. Returns the new version.
    pub fn replace(&mut self, content: FlexibleContent) -> u64 {
        let version = self.current.version + 1;
        self.current = ContentSnapshot {
            version,
            content: Arc::new(content),
        };
        tracing::debug!("Content document replaced, now at version {}", version);
        let snapshot = self.current.clone();
        self.subscribers.notify(&snapshot);
        version
    }

    /// Registers a change callback for `owner`, replacing any earlier one.
    pub fn subscribe<F>(&mut self, owner: SubscriberId, callback: F)
    where
        F: FnMut(&ContentSnapshot) + 'static,
    {
        self.subscribers.insert(owner, Box::new(callback));
    }

    pub fn unsubscribe(&mut self, owner: SubscriberId) -> bool {
        self.subscribers.remove(owner)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
