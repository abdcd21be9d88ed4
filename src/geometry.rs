//! Reveal geometry and the width policy
//!
//! Each revealable side owns a [`PanelGeometry`] (minimum/default reveal
//! width, maximum/presentation width, parallax slide amount). The
//! [`WidthPolicy`] is the single authority for how far the front panel is
//! permitted to move toward a side, both during a drag and at rest.

use serde::{Deserialize, Serialize};

use crate::state::{PanelSide, WidthKind};

/// Reveal sizing for one side panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Default reveal width in points (the width a completed reveal rests at)
    pub min_width: f32,
    /// Width reached in presentation mode, and the overdraw ceiling
    pub max_width: f32,
    /// Fraction [0,1] by which the side panel itself translates as the front
    /// panel moves (0 = static side panel)
    pub slide_amount: f32,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            min_width: 280.0,
            max_width: 310.0,
            slide_amount: 0.0,
        }
    }
}

impl PanelGeometry {
    /// Create a geometry with the given widths and a static side panel
    pub fn new(min_width: f32, max_width: f32) -> Self {
        Self {
            min_width,
            max_width,
            slide_amount: 0.0,
        }
        .corrected()
    }

    /// Builder-style parallax fraction
    pub fn with_slide_amount(mut self, slide_amount: f32) -> Self {
        self.slide_amount = slide_amount;
        self.corrected()
    }

    /// Correct invalid values by clamping
    ///
    /// Geometry must remain well-defined at all times: negative widths become
    /// zero, `max_width < min_width` becomes `max_width = min_width`, and the
    /// slide amount is clamped to [0,1]. Corrections are logged, never raised.
    pub fn corrected(mut self) -> Self {
        if self.min_width < 0.0 {
            tracing::warn!(min_width = self.min_width, "negative min_width clamped to 0");
            self.min_width = 0.0;
        }
        if self.max_width < self.min_width {
            tracing::warn!(
                min_width = self.min_width,
                max_width = self.max_width,
                "max_width below min_width, clamping to min_width"
            );
            self.max_width = self.min_width;
        }
        if !(0.0..=1.0).contains(&self.slide_amount) {
            self.slide_amount = self.slide_amount.clamp(0.0, 1.0);
        }
        self
    }

    /// Width this geometry rests at for a given width kind
    pub fn resting_width(&self, kind: WidthKind) -> f32 {
        match kind {
            WidthKind::Min => self.min_width,
            WidthKind::Max => self.max_width,
        }
    }
}

/// Decides the permitted front offset for every side
///
/// A side with no geometry is absent: any attempt to reveal it yields zero.
/// The controller assigns geometry when a side controller is attached and
/// removes it when the side is cleared.
#[derive(Debug, Clone, Default)]
pub struct WidthPolicy {
    left: Option<PanelGeometry>,
    right: Option<PanelGeometry>,
}

impl WidthPolicy {
    /// Policy with both sides configured
    pub fn new(left: Option<PanelGeometry>, right: Option<PanelGeometry>) -> Self {
        Self {
            left: left.map(PanelGeometry::corrected),
            right: right.map(PanelGeometry::corrected),
        }
    }

    /// Geometry for a side, if the side is present
    pub fn geometry(&self, side: PanelSide) -> Option<&PanelGeometry> {
        match side {
            PanelSide::Front => None,
            PanelSide::Left => self.left.as_ref(),
            PanelSide::Right => self.right.as_ref(),
        }
    }

    /// Assign or remove a side's geometry (`None` marks the side absent)
    ///
    /// Assigning to `Front` is ignored; the front panel has no reveal width.
    pub fn set_side(&mut self, side: PanelSide, geometry: Option<PanelGeometry>) {
        let corrected = geometry.map(PanelGeometry::corrected);
        match side {
            PanelSide::Front => {}
            PanelSide::Left => self.left = corrected,
            PanelSide::Right => self.right = corrected,
        }
    }

    /// Whether a side can be revealed at all
    pub fn has_side(&self, side: PanelSide) -> bool {
        self.geometry(side).is_some()
    }

    /// Permitted offset magnitude for a requested drag magnitude toward `side`
    ///
    /// - up to `min_width` the request passes through unchanged;
    /// - with overdraw allowed, requests up to `max_width` pass through;
    /// - `max_width` is a hard ceiling that dragging never exceeds;
    /// - with overdraw disallowed, `min_width` is the ceiling;
    /// - an absent side always yields zero.
    pub fn permitted_offset(&self, side: PanelSide, requested: f32, allows_overdraw: bool) -> f32 {
        let Some(geometry) = self.geometry(side) else {
            return 0.0;
        };
        let requested = requested.max(0.0);
        let ceiling = if allows_overdraw {
            geometry.max_width
        } else {
            geometry.min_width
        };
        requested.min(ceiling)
    }

    /// Signed resting offset for a side at a width kind (zero for front/absent)
    pub fn resting_offset(&self, side: PanelSide, kind: WidthKind) -> f32 {
        match self.geometry(side) {
            Some(geometry) => side.offset_sign() * geometry.resting_width(kind),
            None => 0.0,
        }
    }

    /// Drag distance past which a release completes the reveal
    ///
    /// Expressed as a fraction of the side's min width; zero for front/absent
    /// sides so the interpreter's threshold check degenerates harmlessly.
    pub fn trigger_width(&self, side: PanelSide, fraction: f32) -> f32 {
        match self.geometry(side) {
            Some(geometry) => geometry.min_width * fraction.clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrected_clamps_max_below_min() {
        let geometry = PanelGeometry::new(300.0, 200.0);
        assert_eq!(geometry.min_width, 300.0);
        assert_eq!(geometry.max_width, 300.0);
    }

    #[test]
    fn corrected_clamps_negative_and_slide() {
        let geometry = PanelGeometry {
            min_width: -10.0,
            max_width: 100.0,
            slide_amount: 1.5,
        }
        .corrected();
        assert_eq!(geometry.min_width, 0.0);
        assert_eq!(geometry.slide_amount, 1.0);
    }

    #[test]
    fn absent_side_yields_zero() {
        let policy = WidthPolicy::new(Some(PanelGeometry::default()), None);
        assert_eq!(policy.permitted_offset(PanelSide::Right, 500.0, true), 0.0);
        assert_eq!(policy.resting_offset(PanelSide::Right, WidthKind::Min), 0.0);
        assert!(!policy.has_side(PanelSide::Right));
    }

    #[test]
    fn front_side_has_no_geometry() {
        let mut policy = WidthPolicy::default();
        policy.set_side(PanelSide::Front, Some(PanelGeometry::default()));
        assert!(!policy.has_side(PanelSide::Front));
        assert_eq!(policy.resting_offset(PanelSide::Front, WidthKind::Max), 0.0);
    }

    #[test]
    fn resting_offsets_are_signed() {
        let policy = WidthPolicy::new(
            Some(PanelGeometry::new(260.0, 320.0)),
            Some(PanelGeometry::new(180.0, 220.0)),
        );
        assert_eq!(policy.resting_offset(PanelSide::Left, WidthKind::Min), 260.0);
        assert_eq!(policy.resting_offset(PanelSide::Left, WidthKind::Max), 320.0);
        assert_eq!(
            policy.resting_offset(PanelSide::Right, WidthKind::Min),
            -180.0
        );
        assert_eq!(
            policy.resting_offset(PanelSide::Right, WidthKind::Max),
            -220.0
        );
    }
}
