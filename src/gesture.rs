//! Pan gesture interpretation
//!
//! Converts the host's raw pan samples into candidate front offsets while a
//! finger is down, and into a resting target when the finger lifts. The
//! interpreter never mutates the reveal state itself; the controller feeds its
//! output to the state machine.

use crate::config::RevealConfig;
use crate::geometry::WidthPolicy;
use crate::state::PanelSide;

/// Pan recognizer events delivered by the host
///
/// Horizontal translation only; positive values move the front panel to the
/// right (revealing the left side). Timestamps are host-monotonic seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    /// A touch landed on the front panel
    Began { timestamp: f64 },
    /// The finger moved by `delta` points since the previous sample
    Moved { delta: f32, timestamp: f64 },
    /// The finger lifted with an instantaneous horizontal velocity in points/s
    Ended { velocity: f32 },
    /// The touch was taken away by the host (e.g. an incoming call)
    Cancelled,
}

/// Transient state for one continuous touch sequence
///
/// Created on `Began`, dropped on `Ended`/`Cancelled`. Never persisted.
#[derive(Debug, Clone)]
pub struct GestureSession {
    /// Front offset at the moment the touch landed
    start_offset: f32,
    /// Cumulative horizontal translation since `Began`
    translation: f32,
    /// Timestamp of the most recent sample
    last_timestamp: f64,
    /// Velocity estimate from the last pair of samples, points/s
    velocity_estimate: f32,
}

impl GestureSession {
    fn new(start_offset: f32, timestamp: f64) -> Self {
        Self {
            start_offset,
            translation: 0.0,
            last_timestamp: timestamp,
            velocity_estimate: 0.0,
        }
    }

    /// Unclamped candidate offset for the current translation
    pub fn raw_offset(&self) -> f32 {
        self.start_offset + self.translation
    }

    /// Velocity derived from sample spacing, for hosts that do not deliver
    /// a release velocity of their own
    pub fn velocity_estimate(&self) -> f32 {
        self.velocity_estimate
    }
}

/// Interprets one touch at a time
///
/// At each `Moved` sample the candidate offset is the session's start offset
/// plus the cumulative translation, clamped by the width policy for the side
/// implied by the offset's sign. The sign is re-derived on every sample, so a
/// drag that reverses direction mid-gesture switches the active side.
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    session: Option<GestureSession>,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a touch sequence is in progress
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The in-flight session, if any
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Start a session at the current front offset
    ///
    /// A second `Began` without an intervening end replaces the session; the
    /// host restarting its recognizer is not an error.
    pub fn begin(&mut self, current_offset: f32, timestamp: f64) {
        self.session = Some(GestureSession::new(current_offset, timestamp));
    }

    /// Feed a movement sample, returning the permitted candidate offset
    ///
    /// Returns the current offset unchanged when no session is active (a
    /// `Moved` after `Cancelled` is ignored, not an error).
    pub fn sample(
        &mut self,
        delta: f32,
        timestamp: f64,
        policy: &WidthPolicy,
        allows_overdraw: bool,
        current_offset: f32,
    ) -> f32 {
        let Some(session) = self.session.as_mut() else {
            return current_offset;
        };
        session.translation += delta;
        let dt = timestamp - session.last_timestamp;
        if dt > 0.0 {
            session.velocity_estimate = delta / dt as f32;
        }
        session.last_timestamp = timestamp;

        let raw = session.raw_offset();
        let side = PanelSide::from_offset(raw);
        let permitted = policy.permitted_offset(side, raw.abs(), allows_overdraw);
        let offset = side.offset_sign() * permitted;
        tracing::trace!(raw, offset, ?side, "pan sample");
        offset
    }

    /// End the session and compute where the front panel should come to rest
    ///
    /// Resting rules, in order:
    /// 1. a release velocity at or above the quick-swipe threshold targets the
    ///    side matching the velocity direction at its min width; a flick back
    ///    toward center targets the front (a single release never crosses
    ///    center into the opposite side);
    /// 2. below the threshold, an offset short of the side's trigger width
    ///    snaps back to the front;
    /// 3. otherwise the reveal completes at the side's min width.
    pub fn finish(
        &mut self,
        velocity: f32,
        current_offset: f32,
        policy: &WidthPolicy,
        config: &RevealConfig,
    ) -> PanelSide {
        self.session = None;

        let side = PanelSide::from_offset(current_offset);
        if velocity.abs() >= config.quick_swipe_velocity.max(0.0) {
            let flick_side = PanelSide::from_offset(velocity);
            if flick_side != PanelSide::Front
                && policy.has_side(flick_side)
                && (side == PanelSide::Front || side == flick_side)
            {
                return flick_side;
            }
            return PanelSide::Front;
        }

        let trigger = policy.trigger_width(side, config.trigger_fraction());
        if current_offset.abs() < trigger {
            PanelSide::Front
        } else {
            side
        }
    }

    /// Drop the session without computing a resting target
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PanelGeometry;

    fn both_sides() -> WidthPolicy {
        WidthPolicy::new(
            Some(PanelGeometry::new(260.0, 320.0)),
            Some(PanelGeometry::new(260.0, 320.0)),
        )
    }

    #[test]
    fn sample_without_session_is_inert() {
        let mut interpreter = GestureInterpreter::new();
        let offset = interpreter.sample(40.0, 0.016, &both_sides(), true, 12.0);
        assert_eq!(offset, 12.0);
    }

    #[test]
    fn direction_reversal_switches_active_side() {
        let policy = both_sides();
        let mut interpreter = GestureInterpreter::new();
        interpreter.begin(0.0, 0.0);

        let offset = interpreter.sample(80.0, 0.016, &policy, true, 0.0);
        assert!(offset > 0.0, "rightward drag should reveal left");

        let offset = interpreter.sample(-200.0, 0.032, &policy, true, offset);
        assert!(offset < 0.0, "reversal past center should reveal right");
    }

    #[test]
    fn velocity_estimate_tracks_samples() {
        let mut interpreter = GestureInterpreter::new();
        interpreter.begin(0.0, 0.0);
        interpreter.sample(16.0, 0.016, &both_sides(), true, 0.0);
        let estimate = interpreter.session().unwrap().velocity_estimate();
        assert!((estimate - 1000.0).abs() < 1.0, "estimate was {estimate}");
    }
}
