//! Front-offset animation driver
//!
//! Owns the authoritative front offset and interpolates it toward a resting
//! position. The host drives progress by calling [`AnimationDriver::advance`]
//! from its display-refresh loop; the driver never spawns threads or timers.
//!
//! At most one animation is in flight. Starting a new one (or jumping)
//! supersedes the old: the superseded completion fires with `finished = false`
//! synchronously, before the new animation exists, so observers never see two
//! overlapping animations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Completion callback for animated operations
///
/// The flag is `true` when the animation ran to its end offset, `false` when
/// it was superseded by a newer transition. Every completion eventually fires
/// exactly once.
pub type Completion = Box<dyn FnOnce(bool)>;

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationCurve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Default for AnimationCurve {
    fn default() -> Self {
        AnimationCurve::Linear
    }
}

impl AnimationCurve {
    /// Map linear progress `t` in [0,1] to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            AnimationCurve::Linear => t,
            AnimationCurve::EaseIn => t * t,
            AnimationCurve::EaseOut => t * (2.0 - t),
            AnimationCurve::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

struct ActiveAnimation {
    start: f32,
    end: f32,
    duration: f32,
    curve: AnimationCurve,
    elapsed: f32,
    completion: Option<Completion>,
}

/// Outcome of one [`AnimationDriver::advance`] step
pub enum Step {
    /// No animation in flight
    Idle,
    /// The animation advanced to a new intermediate offset
    Moved(f32),
    /// The animation reached its end offset; the caller-supplied completion is
    /// handed back so the orchestrator can sequence its "did change"
    /// notifications before invoking it
    Finished(f32, Option<Completion>),
}

/// Drives the front offset between resting positions
pub struct AnimationDriver {
    current: f32,
    active: Option<ActiveAnimation>,
}

impl AnimationDriver {
    pub fn new(initial: f32) -> Self {
        Self {
            current: initial,
            active: None,
        }
    }

    /// The offset as of the latest step or jump
    pub fn offset(&self) -> f32 {
        self.current
    }

    /// Whether an animation is in flight
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// End offset of the in-flight animation, if any
    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(|a| a.end)
    }

    /// Set the offset immediately, superseding any in-flight animation
    pub fn jump_to(&mut self, offset: f32) {
        self.supersede();
        self.current = offset;
    }

    /// Supersede any in-flight animation without moving the offset
    pub fn cancel(&mut self) {
        self.supersede();
    }

    /// Start animating from the current offset to `end`
    ///
    /// A non-positive duration completes on the first `advance` call.
    pub fn animate_to(
        &mut self,
        end: f32,
        duration: f32,
        curve: AnimationCurve,
        completion: Option<Completion>,
    ) {
        self.supersede();
        self.active = Some(ActiveAnimation {
            start: self.current,
            end,
            duration,
            curve,
            elapsed: 0.0,
            completion,
        });
    }

    /// Advance the in-flight animation by `dt` seconds
    pub fn advance(&mut self, dt: f32) -> Step {
        let Some(animation) = self.active.as_mut() else {
            return Step::Idle;
        };
        animation.elapsed += dt.max(0.0);
        let t = if animation.duration > 0.0 {
            animation.elapsed / animation.duration
        } else {
            1.0
        };
        if t >= 1.0 {
            let end = animation.end;
            let completion = self.active.take().and_then(|a| a.completion);
            self.current = end;
            Step::Finished(end, completion)
        } else {
            let eased = animation.curve.apply(t);
            self.current = animation.start + (animation.end - animation.start) * eased;
            Step::Moved(self.current)
        }
    }

    fn supersede(&mut self) {
        if let Some(superseded) = self.active.take() {
            tracing::debug!(
                end = superseded.end,
                at = self.current,
                "animation superseded before reaching its target"
            );
            if let Some(completion) = superseded.completion {
                completion(false);
            }
        }
    }
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("current", &self.current)
            .field("target", &self.target())
            .finish()
    }
}
