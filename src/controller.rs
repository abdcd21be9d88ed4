//! Reveal controller orchestration
//!
//! [`RevealController`] coordinates the width policy, gesture interpreter,
//! state machine and animation driver, and fans out delegate callbacks,
//! offset observers and named broadcast events. It is generic over the
//! payload `C` attached to each panel slot (a view controller handle, a
//! widget id, a test string); the engine never inspects it.
//!
//! Everything runs on the host's UI event loop: the controller holds no
//! locks, spawns no threads, and expects `advance_animation` to be driven
//! from the host's display-refresh callback.

use crate::animation::{AnimationDriver, Completion, Step};
use crate::config::RevealConfig;
use crate::events::{event_name, EventBus, ObserverHandle, OffsetObservers};
use crate::geometry::{PanelGeometry, WidthPolicy};
use crate::gesture::{GestureInterpreter, PanEvent};
use crate::state::{transition, PanelSide, RevealState, WidthKind};

/// Delegate notified around every state change
///
/// Abrupt changes are possible: the controller can go straight from
/// `ShowingLeft` to `ShowingRight` without entering `ShowingFront`, and a
/// superseded transition's `did` may never fire. Do not assume will/did
/// pairs are symmetric or ordered per state. Both methods default to no-ops
/// so a delegate implements only what it needs.
pub trait RevealDelegate {
    fn will_change_to_state(&mut self, _state: RevealState) {}
    fn did_change_to_state(&mut self, _state: RevealState) {}
}

/// Container orchestrating a front panel over optional left/right panels
pub struct RevealController<C> {
    front: C,
    left: Option<C>,
    right: Option<C>,

    state: RevealState,
    config: RevealConfig,
    policy: WidthPolicy,
    gesture: GestureInterpreter,
    driver: AnimationDriver,

    delegate: Option<Box<dyn RevealDelegate>>,
    offset_observers: OffsetObservers,
    events: EventBus,

    /// State whose `did change` notification is owed once the in-flight
    /// animation lands. Carried across supersessions so a rapid double
    /// `show` still yields one `did` for the final state.
    pending_did: Option<RevealState>,
}

impl<C> RevealController<C> {
    /// Canonical constructor; the convenience constructors funnel here
    pub fn new(front: C, left: Option<C>, right: Option<C>, config: RevealConfig) -> Self {
        let policy = WidthPolicy::new(
            left.as_ref().map(|_| PanelGeometry::default()),
            right.as_ref().map(|_| PanelGeometry::default()),
        );
        Self {
            front,
            left,
            right,
            state: RevealState::ShowingFront,
            config,
            policy,
            gesture: GestureInterpreter::new(),
            driver: AnimationDriver::new(0.0),
            delegate: None,
            offset_observers: OffsetObservers::new(),
            events: EventBus::new(),
            pending_did: None,
        }
    }

    /// Front and left panels only
    pub fn with_left(front: C, left: C) -> Self {
        Self::new(front, Some(left), None, RevealConfig::default())
    }

    /// Front and right panels only
    pub fn with_right(front: C, right: C) -> Self {
        Self::new(front, None, Some(right), RevealConfig::default())
    }

    /// Front, left and right panels
    pub fn with_both(front: C, left: C, right: C) -> Self {
        Self::new(front, Some(left), Some(right), RevealConfig::default())
    }

    // === Queries ===

    /// The current resting (or target, while animating) state
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Signed front-panel displacement from center
    pub fn front_offset(&self) -> f32 {
        self.driver.offset()
    }

    /// Whether a side is revealed to its maximum width
    pub fn is_presentation_mode_active(&self) -> bool {
        self.state.is_presentation_mode()
    }

    /// Whether an animation is currently in flight
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn has_left_controller(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right_controller(&self) -> bool {
        self.right.is_some()
    }

    /// The controller most prominent on screen for the current state
    pub fn focused_controller(&self) -> &C {
        match self.state.side() {
            PanelSide::Front => &self.front,
            PanelSide::Left => self.left.as_ref().unwrap_or(&self.front),
            PanelSide::Right => self.right.as_ref().unwrap_or(&self.front),
        }
    }

    pub fn front_controller(&self) -> &C {
        &self.front
    }

    pub fn left_controller(&self) -> Option<&C> {
        self.left.as_ref()
    }

    pub fn right_controller(&self) -> Option<&C> {
        self.right.as_ref()
    }

    /// Whether the host should let touches through to the front panel
    pub fn front_view_interaction_enabled(&self) -> bool {
        !(self.config.disables_front_view_interaction && self.state != RevealState::ShowingFront)
    }

    /// The side panel's own translation for the current front offset
    ///
    /// A panel with `slide_amount` 0 is static (returns 0). Otherwise the
    /// panel sits tucked toward its edge while concealed and slides into
    /// place as the front offset approaches the panel's min width.
    pub fn side_panel_offset(&self, side: PanelSide) -> f32 {
        let Some(geometry) = self.policy.geometry(side) else {
            return 0.0;
        };
        if geometry.slide_amount <= 0.0 {
            return 0.0;
        }
        let toward = (side.offset_sign() * self.driver.offset()).max(0.0);
        let concealed = (geometry.min_width - toward).max(0.0);
        -side.offset_sign() * geometry.slide_amount * concealed
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Mutable config access; changes apply to the next gesture/animation
    pub fn config_mut(&mut self) -> &mut RevealConfig {
        &mut self.config
    }

    pub fn geometry(&self, side: PanelSide) -> Option<&PanelGeometry> {
        self.policy.geometry(side)
    }

    // === Observers ===

    /// Install or clear the delegate
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn RevealDelegate>>) {
        self.delegate = delegate;
    }

    /// Observe every animated front-offset step (parallax, shadow refresh)
    pub fn add_offset_observer(&mut self, observer: impl FnMut(f32) + 'static) -> ObserverHandle {
        self.offset_observers.add(observer)
    }

    pub fn remove_offset_observer(&mut self, handle: ObserverHandle) -> bool {
        self.offset_observers.remove(handle)
    }

    pub fn clear_offset_observers(&mut self) {
        self.offset_observers.clear();
    }

    /// Subscribe to a named broadcast event (see [`crate::events`])
    pub fn subscribe(&mut self, event: &'static str, handler: impl FnMut() + 'static) -> ObserverHandle {
        self.events.subscribe(event, handler)
    }

    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        self.events.unsubscribe(handle)
    }

    // === Panel assignment ===

    /// Replace the front controller; never changes state
    pub fn set_front_controller(&mut self, front: C) {
        self.front = front;
    }

    /// Assign or remove the left controller
    ///
    /// Assigning to a previously empty slot makes the side revealable with
    /// default geometry. Replacing an assigned slot keeps its geometry and
    /// never changes state or renotifies, even while that side is shown.
    /// Removing the currently shown side forces an animated transition back
    /// to the front.
    pub fn set_left_controller(&mut self, left: Option<C>) {
        let was_present = self.left.is_some();
        let is_present = left.is_some();
        self.left = left;
        self.side_assignment_changed(PanelSide::Left, was_present, is_present);
    }

    /// Assign or remove the right controller (same rules as the left)
    pub fn set_right_controller(&mut self, right: Option<C>) {
        let was_present = self.right.is_some();
        let is_present = right.is_some();
        self.right = right;
        self.side_assignment_changed(PanelSide::Right, was_present, is_present);
    }

    fn side_assignment_changed(&mut self, side: PanelSide, was_present: bool, is_present: bool) {
        if was_present == is_present {
            return;
        }
        if is_present {
            self.policy.set_side(side, Some(PanelGeometry::default()));
            return;
        }
        self.policy.set_side(side, None);
        if self.state.side() == side {
            tracing::debug!(?side, "shown side removed, returning to front");
            self.begin_transition(RevealState::ShowingFront, true, None);
        }
    }

    /// Adjust a side's reveal widths (corrected so `max >= min >= 0`)
    ///
    /// Ignored for the front slot and for absent sides.
    pub fn set_panel_widths(&mut self, side: PanelSide, min_width: f32, max_width: f32) {
        let Some(current) = self.policy.geometry(side) else {
            tracing::warn!(?side, "ignoring width assignment for absent side");
            return;
        };
        let slide_amount = current.slide_amount;
        self.policy.set_side(
            side,
            Some(PanelGeometry::new(min_width, max_width).with_slide_amount(slide_amount)),
        );
    }

    /// Adjust a side's parallax fraction (clamped to [0,1])
    pub fn set_slide_amount(&mut self, side: PanelSide, slide_amount: f32) {
        let Some(current) = self.policy.geometry(side) else {
            return;
        };
        let updated = current.with_slide_amount(slide_amount);
        self.policy.set_side(side, Some(updated));
    }

    // === Programmatic transitions ===

    /// Reveal a side (or the front) at its default width, animated
    pub fn show(&mut self, side: PanelSide) {
        self.show_with(side, true, None);
    }

    /// Reveal a side (or the front) at its default width
    ///
    /// Showing an absent side is a no-op whose completion still fires with
    /// `finished = true`, so "every completion eventually fires" holds for
    /// callers that chain on it.
    pub fn show_with(&mut self, side: PanelSide, animated: bool, completion: Option<Completion>) {
        if side != PanelSide::Front && !self.policy.has_side(side) {
            tracing::debug!(?side, "show requested for absent side, ignoring");
            if let Some(done) = completion {
                done(true);
            }
            return;
        }
        let target = transition(side, WidthKind::Min);
        self.begin_transition(target, animated, completion);
    }

    /// Widen the currently revealed side to its maximum width
    ///
    /// No-op success when no side is active.
    pub fn enter_presentation_mode(&mut self, animated: bool, completion: Option<Completion>) {
        let side = self.state.side();
        if side == PanelSide::Front {
            if let Some(done) = completion {
                done(true);
            }
            return;
        }
        let target = transition(side, WidthKind::Max);
        self.begin_transition(target, animated, completion);
    }

    /// Leave presentation mode
    ///
    /// With `entirely = true` the controller returns all the way to the
    /// front, whether or not presentation mode is active. With
    /// `entirely = false` only the extra width is dropped; a no-op success
    /// when not presenting.
    pub fn resign_presentation_mode(
        &mut self,
        entirely: bool,
        animated: bool,
        completion: Option<Completion>,
    ) {
        if entirely {
            self.begin_transition(RevealState::ShowingFront, animated, completion);
            return;
        }
        if !self.state.is_presentation_mode() {
            if let Some(done) = completion {
                done(true);
            }
            return;
        }
        let target = transition(self.state.side(), WidthKind::Min);
        self.begin_transition(target, animated, completion);
    }

    // === Host-driven input ===

    /// Feed one pan recognizer event from the host
    pub fn pan(&mut self, event: PanEvent) {
        if !self.config.recognizes_panning_on_front_view {
            return;
        }
        match event {
            PanEvent::Began { timestamp } => {
                // A touch takes over from whatever animation was in flight
                self.driver.cancel();
                self.gesture.begin(self.driver.offset(), timestamp);
            }
            PanEvent::Moved { delta, timestamp } => {
                if !self.gesture.is_active() {
                    return;
                }
                let offset = self.gesture.sample(
                    delta,
                    timestamp,
                    &self.policy,
                    self.config.allows_overdraw,
                    self.driver.offset(),
                );
                self.driver.jump_to(offset);
                self.offset_observers.notify(offset);
            }
            PanEvent::Ended { velocity } => {
                if !self.gesture.is_active() {
                    return;
                }
                let offset = self.driver.offset();
                let side = self
                    .gesture
                    .finish(velocity, offset, &self.policy, &self.config);
                let target = transition(side, WidthKind::Min);
                self.begin_transition(target, true, None);
            }
            PanEvent::Cancelled => {
                if !self.gesture.is_active() {
                    return;
                }
                self.gesture.cancel();
                // Settle back to wherever the current state rests
                self.begin_transition(self.state, true, None);
            }
        }
    }

    /// Feed a tap on the front panel (snap-back-on-tap)
    pub fn tap(&mut self) {
        if self.state == RevealState::ShowingFront {
            return;
        }
        let recognized = if self.state.is_presentation_mode() {
            self.config.recognizes_reset_tap_in_presentation_mode
        } else {
            self.config.recognizes_reset_tap_on_front_view
        };
        if recognized {
            self.show(PanelSide::Front);
        }
    }

    /// Advance the in-flight animation by `dt` seconds
    ///
    /// Call from the host's display-refresh loop. Returns `true` while an
    /// animation still needs further frames.
    pub fn advance_animation(&mut self, dt: f32) -> bool {
        match self.driver.advance(dt) {
            Step::Idle => false,
            Step::Moved(offset) => {
                self.offset_observers.notify(offset);
                true
            }
            Step::Finished(offset, completion) => {
                self.offset_observers.notify(offset);
                self.finish_transition(completion);
                false
            }
        }
    }

    // === Transition plumbing ===

    fn resting_offset_for(&self, state: RevealState) -> f32 {
        self.policy.resting_offset(state.side(), state.width_kind())
    }

    fn begin_transition(
        &mut self,
        target: RevealState,
        animated: bool,
        completion: Option<Completion>,
    ) {
        let end = self.resting_offset_for(target);
        let changed = target != self.state;

        // Already resting exactly where this transition would land: nothing
        // to notify, but the completion fires regardless.
        if !changed
            && !self.driver.is_animating()
            && self.driver.offset() == end
            && self.pending_did.is_none()
        {
            if let Some(done) = completion {
                done(true);
            }
            return;
        }

        tracing::debug!(from = ?self.state, to = ?target, animated, end, "state transition");
        if changed {
            self.notify_will(target);
            self.state = target;
            self.pending_did = Some(target);
        }

        if animated && self.config.duration() > 0.0 {
            self.driver.animate_to(
                end,
                self.config.duration(),
                self.config.animation_curve,
                completion,
            );
        } else {
            self.driver.jump_to(end);
            self.offset_observers.notify(end);
            self.finish_transition(completion);
        }
    }

    fn finish_transition(&mut self, completion: Option<Completion>) {
        if let Some(state) = self.pending_did.take() {
            self.notify_did(state);
            self.events.post(event_name(state.side()));
        }
        if let Some(done) = completion {
            done(true);
        }
    }

    fn notify_will(&mut self, state: RevealState) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.will_change_to_state(state);
        }
    }

    fn notify_did(&mut self, state: RevealState) {
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_change_to_state(state);
        }
    }
}
