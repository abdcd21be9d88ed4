//! Gesture simulator for the reveal engine
//!
//! Scripts a pan gesture against a controller and prints every state
//! transition and offset step, which makes threshold and overdraw behavior
//! easy to eyeball without a host UI.
//!
//! Usage:
//!   cargo run --bin simulate -- --drag 280 --velocity 0
//!   cargo run --bin simulate -- --drag 90 --velocity 950
//!   cargo run --bin simulate -- --min-width 260 --max-width 320 --no-overdraw --drag 280

use anyhow::Result;
use clap::Parser;

use reveal::{
    PanEvent, PanelSide, RevealConfig, RevealController, RevealDelegate, RevealState,
    DID_SHOW_FRONT, DID_SHOW_LEFT, DID_SHOW_RIGHT,
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Script a pan gesture against the reveal engine")]
struct Args {
    /// Total horizontal drag in points (positive reveals the left panel)
    #[arg(long, default_value_t = 280.0)]
    drag: f32,

    /// Release velocity in points/s
    #[arg(long, default_value_t = 0.0)]
    velocity: f32,

    /// Default reveal width of each side
    #[arg(long, default_value_t = 260.0)]
    min_width: f32,

    /// Presentation-mode width of each side
    #[arg(long, default_value_t = 320.0)]
    max_width: f32,

    /// Disallow dragging past the min width
    #[arg(long)]
    no_overdraw: bool,

    /// Number of move samples the drag is split into
    #[arg(long, default_value_t = 16)]
    steps: u32,

    /// Enter presentation mode after the drag settles
    #[arg(long)]
    present: bool,
}

struct LoggingDelegate;

impl RevealDelegate for LoggingDelegate {
    fn will_change_to_state(&mut self, state: RevealState) {
        tracing::info!(?state, "will change");
    }

    fn did_change_to_state(&mut self, state: RevealState) {
        tracing::info!(?state, "did change");
    }
}

fn drain_animation(controller: &mut RevealController<&'static str>) {
    // 60fps frames until the driver goes idle
    while controller.advance_animation(1.0 / 60.0) {
        tracing::info!(offset = controller.front_offset(), "frame");
    }
}

fn main() -> Result<()> {
    reveal::tracing::init();
    let args = Args::parse();

    let mut controller = RevealController::with_both("front", "left", "right");
    *controller.config_mut() = RevealConfig {
        allows_overdraw: !args.no_overdraw,
        ..RevealConfig::default()
    };
    for side in PanelSide::REVEALABLE {
        controller.set_panel_widths(side, args.min_width, args.max_width);
    }
    controller.set_delegate(Some(Box::new(LoggingDelegate)));

    for event in [DID_SHOW_FRONT, DID_SHOW_LEFT, DID_SHOW_RIGHT] {
        controller.subscribe(event, move || tracing::info!(event, "broadcast"));
    }

    // Scripted drag: Began, N evenly spaced Moved samples, Ended
    controller.pan(PanEvent::Began { timestamp: 0.0 });
    let steps = args.steps.max(1);
    let delta = args.drag / steps as f32;
    for step in 1..=steps {
        let timestamp = step as f64 * 0.016;
        controller.pan(PanEvent::Moved { delta, timestamp });
        tracing::debug!(offset = controller.front_offset(), "drag sample");
    }
    controller.pan(PanEvent::Ended {
        velocity: args.velocity,
    });
    drain_animation(&mut controller);

    tracing::info!(
        state = ?controller.state(),
        offset = controller.front_offset(),
        focused = *controller.focused_controller(),
        "at rest"
    );

    if args.present {
        controller.enter_presentation_mode(
            true,
            Some(Box::new(|finished| {
                tracing::info!(finished, "presentation mode completion");
            })),
        );
        drain_animation(&mut controller);
        tracing::info!(
            state = ?controller.state(),
            offset = controller.front_offset(),
            "presentation mode"
        );
    }

    Ok(())
}
