//! Reveal configuration persistence
//!
//! One canonical configuration struct with named fields and documented
//! defaults, optionally persisted as YAML under `~/.config/reveal/config.yaml`.
//! Changes at runtime take effect on the next gesture or animation; they never
//! retroactively alter one already in flight.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationCurve;

/// Reveal engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Duration of automatic reveal animations, in seconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration: f32,

    /// Easing curve for automatic reveal animations
    #[serde(default)]
    pub animation_curve: AnimationCurve,

    /// Minimum release velocity (points/s) for a swipe to force a reveal
    #[serde(default = "default_quick_swipe_velocity")]
    pub quick_swipe_velocity: f32,

    /// Fraction of a side's min width a drag must cross for a slow release to
    /// complete the reveal instead of snapping back
    #[serde(default = "default_reveal_trigger_fraction")]
    pub reveal_trigger_fraction: f32,

    /// Whether dragging may continue past a side's min width (bounded by the
    /// hard ceiling at its max width)
    #[serde(default = "default_true")]
    pub allows_overdraw: bool,

    /// Whether front-panel interaction should be reported disabled whenever a
    /// side is revealed
    #[serde(default = "default_true")]
    pub disables_front_view_interaction: bool,

    /// Whether pan samples on the front panel are recognized at all
    #[serde(default = "default_true")]
    pub recognizes_panning_on_front_view: bool,

    /// Whether a tap on the front panel snaps back to the front while a side
    /// is shown at its min width
    #[serde(default = "default_true")]
    pub recognizes_reset_tap_on_front_view: bool,

    /// Same as above, but while a side is shown in presentation mode
    #[serde(default = "default_true")]
    pub recognizes_reset_tap_in_presentation_mode: bool,
}

fn default_animation_duration() -> f32 {
    0.185
}

fn default_quick_swipe_velocity() -> f32 {
    800.0
}

fn default_reveal_trigger_fraction() -> f32 {
    0.5
}

fn default_true() -> bool {
    true
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animation_duration: default_animation_duration(),
            animation_curve: AnimationCurve::default(),
            quick_swipe_velocity: default_quick_swipe_velocity(),
            reveal_trigger_fraction: default_reveal_trigger_fraction(),
            allows_overdraw: true,
            disables_front_view_interaction: true,
            recognizes_panning_on_front_view: true,
            recognizes_reset_tap_on_front_view: true,
            recognizes_reset_tap_in_presentation_mode: true,
        }
    }
}

impl RevealConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load_from(&path)
    }

    /// Load config from an explicit path, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config dir
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, &content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Trigger fraction clamped to [0,1] for use in threshold math
    pub fn trigger_fraction(&self) -> f32 {
        self.reveal_trigger_fraction.clamp(0.0, 1.0)
    }

    /// Animation duration with negative values corrected to zero
    pub fn duration(&self) -> f32 {
        self.animation_duration.max(0.0)
    }
}
