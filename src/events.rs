//! Observer registries and named broadcast events
//!
//! Two fan-out mechanisms live here:
//! - [`OffsetObservers`], an explicit ordered collection of callbacks fired on
//!   every animated offset step (side-panel parallax, shadow refresh);
//! - [`EventBus`], named broadcast events ("did show front/left/right") for
//!   consumers that do not hold a delegate reference.
//!
//! Both hand out opaque [`ObserverHandle`]s for removal; observers are invoked
//! in registration order, and a missing handler is never an error.

use crate::state::PanelSide;

/// Broadcast event name: the front panel came to rest centered
pub const DID_SHOW_FRONT: &str = "reveal.didShowFront";
/// Broadcast event name: the left panel came to rest revealed
pub const DID_SHOW_LEFT: &str = "reveal.didShowLeft";
/// Broadcast event name: the right panel came to rest revealed
pub const DID_SHOW_RIGHT: &str = "reveal.didShowRight";

/// Event name fired when a transition toward `side` completes
pub fn event_name(side: PanelSide) -> &'static str {
    match side {
        PanelSide::Front => DID_SHOW_FRONT,
        PanelSide::Left => DID_SHOW_LEFT,
        PanelSide::Right => DID_SHOW_RIGHT,
    }
}

/// Opaque registration handle, used for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

/// Ordered collection of front-offset observers
#[derive(Default)]
pub struct OffsetObservers {
    next_id: u64,
    observers: Vec<(ObserverHandle, Box<dyn FnMut(f32)>)>,
}

impl OffsetObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; fired with the new offset on every step
    pub fn add(&mut self, observer: impl FnMut(f32) + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_id);
        self.next_id += 1;
        self.observers.push((handle, Box::new(observer)));
        handle
    }

    /// Remove an observer; returns whether the handle was registered
    pub fn remove(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        self.observers.len() != before
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Invoke all observers in registration order
    pub fn notify(&mut self, offset: f32) {
        for (_, observer) in &mut self.observers {
            observer(offset);
        }
    }
}

/// Named broadcast events
///
/// Subscribers register against one event name and are invoked in
/// registration order whenever that name is posted.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    subscribers: Vec<(ObserverHandle, &'static str, Box<dyn FnMut()>)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to one event name
    pub fn subscribe(&mut self, event: &'static str, handler: impl FnMut() + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_id);
        self.next_id += 1;
        self.subscribers.push((handle, event, Box::new(handler)));
        handle
    }

    /// Remove a subscription; returns whether the handle was registered
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(h, _, _)| *h != handle);
        self.subscribers.len() != before
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Post an event to its subscribers (no subscribers is a no-op)
    pub fn post(&mut self, event: &str) {
        for (_, name, handler) in &mut self.subscribers {
            if *name == event {
                handler();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn offset_observers_fire_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = OffsetObservers::new();

        let log = seen.clone();
        observers.add(move |offset| log.borrow_mut().push(("first", offset)));
        let log = seen.clone();
        observers.add(move |offset| log.borrow_mut().push(("second", offset)));

        observers.notify(42.0);
        assert_eq!(
            seen.borrow().as_slice(),
            &[("first", 42.0), ("second", 42.0)]
        );
    }

    #[test]
    fn removed_observer_stops_firing() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = OffsetObservers::new();

        let counter = count.clone();
        let handle = observers.add(move |_| *counter.borrow_mut() += 1);

        observers.notify(1.0);
        assert!(observers.remove(handle));
        assert!(!observers.remove(handle), "double removal should report false");
        observers.notify(2.0);

        assert_eq!(*count.borrow(), 1);
        assert!(observers.is_empty());
    }

    #[test]
    fn event_bus_routes_by_name() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let log = hits.clone();
        bus.subscribe(DID_SHOW_LEFT, move || log.borrow_mut().push("left"));
        let log = hits.clone();
        bus.subscribe(DID_SHOW_FRONT, move || log.borrow_mut().push("front"));

        bus.post(DID_SHOW_LEFT);
        bus.post(DID_SHOW_RIGHT);
        assert_eq!(hits.borrow().as_slice(), &["left"]);
    }
}
