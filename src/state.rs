//! Reveal states and the transition function
//!
//! This module defines the finite set of resting states for the reveal
//! controller and the mapping from (side, width kind) to the state a
//! transition lands in. Any state may move directly to any other state;
//! abrupt changes (e.g. PresentingLeft straight to ShowingRight) never pass
//! through an intermediate state.

use serde::{Deserialize, Serialize};

/// Identifies one of the three panel slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelSide {
    Front,
    Left,
    Right,
}

impl PanelSide {
    /// Sign of the front offset that reveals this side
    ///
    /// Positive offsets reveal the left panel, negative offsets reveal the
    /// right panel. The front side itself rests at zero.
    pub fn offset_sign(&self) -> f32 {
        match self {
            PanelSide::Front => 0.0,
            PanelSide::Left => 1.0,
            PanelSide::Right => -1.0,
        }
    }

    /// Side implied by the sign of an offset (or velocity)
    ///
    /// Exactly zero maps to `Front`. Callers recompute this on every gesture
    /// sample, so direction reversals mid-drag switch the active side.
    pub fn from_offset(offset: f32) -> PanelSide {
        if offset > 0.0 {
            PanelSide::Left
        } else if offset < 0.0 {
            PanelSide::Right
        } else {
            PanelSide::Front
        }
    }

    /// The mirror slot (`Front` mirrors itself)
    pub fn opposite(&self) -> PanelSide {
        match self {
            PanelSide::Front => PanelSide::Front,
            PanelSide::Left => PanelSide::Right,
            PanelSide::Right => PanelSide::Left,
        }
    }

    /// All sides that can own reveal geometry
    pub const REVEALABLE: [PanelSide; 2] = [PanelSide::Left, PanelSide::Right];
}

/// Resting width a transition lands at
///
/// `Min` is the default reveal width; `Max` is presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthKind {
    Min,
    Max,
}

/// The controller's resting state
///
/// Exactly one state is active at any time. The `Presenting` states are the
/// corresponding `Showing` state widened to the side's maximum width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevealState {
    ShowingFront,
    ShowingLeft,
    ShowingRight,
    PresentingLeft,
    PresentingRight,
}

impl Default for RevealState {
    fn default() -> Self {
        RevealState::ShowingFront
    }
}

impl RevealState {
    /// The side this state reveals (`Front` for `ShowingFront`)
    pub fn side(&self) -> PanelSide {
        match self {
            RevealState::ShowingFront => PanelSide::Front,
            RevealState::ShowingLeft | RevealState::PresentingLeft => PanelSide::Left,
            RevealState::ShowingRight | RevealState::PresentingRight => PanelSide::Right,
        }
    }

    /// Whether a side is revealed to its maximum width
    pub fn is_presentation_mode(&self) -> bool {
        matches!(self, RevealState::PresentingLeft | RevealState::PresentingRight)
    }

    /// The width kind this state rests at
    pub fn width_kind(&self) -> WidthKind {
        if self.is_presentation_mode() {
            WidthKind::Max
        } else {
            WidthKind::Min
        }
    }
}

/// The transition function: which state a move toward `side` at `kind` lands in
///
/// `Min` transitions land in the `Showing` states, `Max` transitions in the
/// `Presenting` states. The front side always lands in `ShowingFront` (there
/// is no presentation mode for the front panel). The current state is
/// deliberately not an input: every state is reachable from every other.
pub fn transition(side: PanelSide, kind: WidthKind) -> RevealState {
    match (side, kind) {
        (PanelSide::Front, _) => RevealState::ShowingFront,
        (PanelSide::Left, WidthKind::Min) => RevealState::ShowingLeft,
        (PanelSide::Left, WidthKind::Max) => RevealState::PresentingLeft,
        (PanelSide::Right, WidthKind::Min) => RevealState::ShowingRight,
        (PanelSide::Right, WidthKind::Max) => RevealState::PresentingRight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_showing_front() {
        assert_eq!(RevealState::default(), RevealState::ShowingFront);
    }

    #[test]
    fn presenting_states_report_presentation_mode() {
        assert!(RevealState::PresentingLeft.is_presentation_mode());
        assert!(RevealState::PresentingRight.is_presentation_mode());
        assert!(!RevealState::ShowingLeft.is_presentation_mode());
        assert!(!RevealState::ShowingFront.is_presentation_mode());
    }

    #[test]
    fn transition_covers_all_targets() {
        assert_eq!(
            transition(PanelSide::Front, WidthKind::Min),
            RevealState::ShowingFront
        );
        assert_eq!(
            transition(PanelSide::Front, WidthKind::Max),
            RevealState::ShowingFront
        );
        assert_eq!(
            transition(PanelSide::Left, WidthKind::Min),
            RevealState::ShowingLeft
        );
        assert_eq!(
            transition(PanelSide::Left, WidthKind::Max),
            RevealState::PresentingLeft
        );
        assert_eq!(
            transition(PanelSide::Right, WidthKind::Min),
            RevealState::ShowingRight
        );
        assert_eq!(
            transition(PanelSide::Right, WidthKind::Max),
            RevealState::PresentingRight
        );
    }

    #[test]
    fn side_from_offset_sign() {
        assert_eq!(PanelSide::from_offset(120.0), PanelSide::Left);
        assert_eq!(PanelSide::from_offset(-0.5), PanelSide::Right);
        assert_eq!(PanelSide::from_offset(0.0), PanelSide::Front);
    }
}
