//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use reveal::{Completion, PanEvent, PanelSide, RevealController, RevealDelegate, RevealState};

/// Controller with both sides present and the 260/320 geometry used
/// throughout these tests
pub fn test_controller() -> RevealController<&'static str> {
    let mut controller = RevealController::with_both("front", "left", "right");
    controller.set_panel_widths(PanelSide::Left, 260.0, 320.0);
    controller.set_panel_widths(PanelSide::Right, 260.0, 320.0);
    controller
}

/// Controller with only a left side
pub fn left_only_controller() -> RevealController<&'static str> {
    let mut controller = RevealController::with_left("front", "left");
    controller.set_panel_widths(PanelSide::Left, 260.0, 320.0);
    controller
}

/// Shared log of will/did delegate callbacks
#[derive(Clone, Default)]
pub struct StateLog(Rc<RefCell<Vec<(&'static str, RevealState)>>>);

impl StateLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, phase: &'static str, state: RevealState) {
        self.0.borrow_mut().push((phase, state));
    }

    pub fn entries(&self) -> Vec<(&'static str, RevealState)> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct RecordingDelegate(StateLog);

impl RevealDelegate for RecordingDelegate {
    fn will_change_to_state(&mut self, state: RevealState) {
        self.0.push("will", state);
    }

    fn did_change_to_state(&mut self, state: RevealState) {
        self.0.push("did", state);
    }
}

/// Attach a recording delegate, returning the shared log
pub fn record_states(controller: &mut RevealController<&'static str>) -> StateLog {
    let log = StateLog::new();
    controller.set_delegate(Some(Box::new(RecordingDelegate(log.clone()))));
    log
}

/// Completion handler capturing its flag into a shared cell
pub fn completion_flag() -> (Rc<RefCell<Option<bool>>>, Completion) {
    let flag = Rc::new(RefCell::new(None));
    let sink = flag.clone();
    let completion: Completion = Box::new(move |finished| {
        *sink.borrow_mut() = Some(finished);
    });
    (flag, completion)
}

/// Drive the controller's animation to rest at 60fps
pub fn settle(controller: &mut RevealController<&'static str>) {
    while controller.advance_animation(1.0 / 60.0) {}
}

/// Script a full drag: Began, a single Moved of `distance`, Ended at `velocity`
pub fn drag(controller: &mut RevealController<&'static str>, distance: f32, velocity: f32) {
    controller.pan(PanEvent::Began { timestamp: 0.0 });
    controller.pan(PanEvent::Moved {
        delta: distance,
        timestamp: 0.016,
    });
    controller.pan(PanEvent::Ended { velocity });
}
