//! reveal - headless slide-reveal panel engine
//!
//! A reusable engine for a "front" panel sliding horizontally to reveal
//! left/right panels underneath, driven by pan gestures, taps, and
//! programmatic calls. The crate owns the gesture state machine and the
//! geometry/animation engine; the host owns rendering and input delivery,
//! feeding pan/tap events in and driving animation progress from its
//! display-refresh loop.

pub mod animation;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod state;
pub mod tracing;

// Re-export commonly used types
pub use animation::{AnimationCurve, AnimationDriver, Completion, Step};
pub use config::RevealConfig;
pub use controller::{RevealController, RevealDelegate};
pub use events::{ObserverHandle, DID_SHOW_FRONT, DID_SHOW_LEFT, DID_SHOW_RIGHT};
pub use geometry::{PanelGeometry, WidthPolicy};
pub use gesture::{GestureInterpreter, GestureSession, PanEvent};
pub use state::{transition, PanelSide, RevealState, WidthKind};
