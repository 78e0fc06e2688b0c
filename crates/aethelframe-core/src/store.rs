use crate::emergence::{Emergence, EmergenceState};
use crate::error::Result;
use crate::types::CanvasId;
use crate::visit::VisitStore;

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// Handle returned by [`EmergenceStore::subscribe`]; pass back to
/// [`EmergenceStore::unsubscribe`] to stop receiving snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

// ---------------------------------------------------------------------------
// EmergenceStore
// ---------------------------------------------------------------------------

/// Unidirectional store around [`Emergence`]: the store is the only writer,
/// subscribers receive read-only state snapshots after every committed
/// transition. Subscribers are only notified when a mutation actually
/// changed the state.
pub struct EmergenceStore<S: VisitStore> {
    inner: Emergence<S>,
    subscribers: Vec<(u64, Box<dyn FnMut(&EmergenceState)>)>,
    next_id: u64,
}

impl<S: VisitStore> EmergenceStore<S> {
    pub fn initialize(visits: S) -> Self {
        Self {
            inner: Emergence::initialize(visits),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> EmergenceState {
        self.inner.state()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&EmergenceState) + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        Subscription(id)
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(id, _)| *id != subscription.0);
    }

    pub fn dismiss_overture(&mut self) {
        self.commit(|e| e.dismiss_overture());
    }

    pub fn navigate(&mut self, canvas: CanvasId) {
        self.commit(|e| e.navigate(canvas));
    }

    pub fn navigate_by_name(&mut self, name: &str) -> Result<CanvasId> {
        let before = self.inner.state();
        let canvas = self.inner.navigate_by_name(name)?;
        if self.inner.state() != before {
            self.notify();
        }
        Ok(canvas)
    }

    pub fn advance_phase(&mut self) {
        self.commit(|e| e.advance_phase());
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut Emergence<S>)) {
        let before = self.inner.state();
        mutate(&mut self.inner);
        if self.inner.state() != before {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let state = self.inner.state();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&state);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Phase;
    use crate::visit::MemoryVisitStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fresh() -> EmergenceStore<MemoryVisitStore> {
        EmergenceStore::initialize(MemoryVisitStore::new())
    }

    #[test]
    fn subscribers_see_each_transition() {
        let mut store = fresh();
        let seen: Rc<RefCell<Vec<Phase>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.phase));

        store.navigate(CanvasId::Portfolio);
        store.navigate(CanvasId::Journal);
        assert_eq!(*seen.borrow(), vec![Phase::Growth, Phase::Bloom]);
    }

    #[test]
    fn no_notification_when_state_is_unchanged() {
        let mut store = fresh();
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        // Same-canvas navigation at seed changes nothing.
        store.navigate(CanvasId::Home);
        assert_eq!(*count.borrow(), 0);

        // Saturated phase advances change nothing either.
        store.advance_phase();
        store.advance_phase();
        store.advance_phase();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn unsubscribe_stops_snapshots() {
        let mut store = fresh();
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);
        let subscription = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.navigate(CanvasId::Services);
        store.unsubscribe(subscription);
        store.navigate(CanvasId::Contact);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn failed_navigate_by_name_notifies_nobody() {
        let mut store = fresh();
        let count = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&count);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(store.navigate_by_name("atrium").is_err());
        assert_eq!(*count.borrow(), 0);
        assert_eq!(store.state().active_canvas, CanvasId::Home);
    }

    #[test]
    fn dismissal_notifies_with_final_state() {
        let mut store = fresh();
        let last: Rc<RefCell<Option<EmergenceState>>> = Rc::default();
        let sink = Rc::clone(&last);
        store.subscribe(move |state| *sink.borrow_mut() = Some(*state));

        store.dismiss_overture();
        let state = last.borrow().unwrap();
        assert!(!state.overture_visible);
        assert_eq!(state.phase, Phase::Growth);
    }
}
