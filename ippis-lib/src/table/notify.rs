//! Change notifications for rendering layers.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// What an engine mutation changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The search term changed.
    Search,
    /// An active filter was set or cleared.
    Filter { id: String },
    /// Search and all filters were cleared.
    FiltersCleared,
    /// The sort column or direction changed.
    Sort,
    /// The current page changed.
    Page,
    /// The page size changed.
    PageSize,
    /// The row collection was replaced and the state reset.
    Rows,
    /// The state was reset without replacing rows.
    Reset,
}

/// Handle returned by [`TableEngine::subscribe`](super::TableEngine::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

pub(crate) type Listener = Arc<dyn Fn(&Change) + Send + Sync>;

/// Registered change listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn add(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Clones the listener list so it can be called without holding a lock.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries.iter().map(|(_, l)| l.clone()).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
