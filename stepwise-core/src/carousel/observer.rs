//! Index-changed notifications
//!
//! Observers are invoked synchronously, in subscription order, at the moment
//! the active index changes. The visual transition has not finished yet when
//! they run, so they should stay side-effect-light (e.g. update a sibling
//! display).

use std::fmt;

/// Receives the new active index after every accepted transition.
#[cfg_attr(test, mockall::automock)]
pub trait IndexObserver: Send {
    fn on_index_changed(&mut self, index: usize);
}

/// Adapter turning a closure into an [`IndexObserver`].
pub struct ObserverFn<F>(pub F);

impl<F> IndexObserver for ObserverFn<F>
where
    F: FnMut(usize) + Send,
{
    fn on_index_changed(&mut self, index: usize) {
        (self.0)(index)
    }
}

impl<F> fmt::Debug for ObserverFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObserverFn").field(&"<closure>").finish()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered observer list owned by a single carousel.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn IndexObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(
        &mut self,
        observer: Box<dyn IndexObserver>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, index: usize) {
        for (_, observer) in self.entries.iter_mut() {
            observer.on_index_changed(index);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
