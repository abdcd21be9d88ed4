//! Tests for configuration defaults and YAML persistence

use reveal::{AnimationCurve, RevealConfig};

#[test]
fn defaults_match_the_documented_contract() {
    let config = RevealConfig::default();

    assert_eq!(config.animation_duration, 0.185);
    assert_eq!(config.animation_curve, AnimationCurve::Linear);
    assert_eq!(config.quick_swipe_velocity, 800.0);
    assert_eq!(config.reveal_trigger_fraction, 0.5);
    assert!(config.allows_overdraw);
    assert!(config.disables_front_view_interaction);
    assert!(config.recognizes_panning_on_front_view);
    assert!(config.recognizes_reset_tap_on_front_view);
    assert!(config.recognizes_reset_tap_in_presentation_mode);
}

#[test]
fn yaml_round_trip_preserves_every_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");

    let config = RevealConfig {
        animation_duration: 0.25,
        animation_curve: AnimationCurve::EaseOut,
        quick_swipe_velocity: 650.0,
        reveal_trigger_fraction: 0.4,
        allows_overdraw: false,
        disables_front_view_interaction: false,
        recognizes_panning_on_front_view: true,
        recognizes_reset_tap_on_front_view: false,
        recognizes_reset_tap_in_presentation_mode: true,
    };

    config.save_to(&path).expect("save config");
    let loaded = RevealConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "animation_duration: 0.5\nallows_overdraw: false\n").expect("write");

    let loaded = RevealConfig::load_from(&path);
    assert_eq!(loaded.animation_duration, 0.5);
    assert!(!loaded.allows_overdraw);
    assert_eq!(loaded.quick_swipe_velocity, 800.0);
    assert!(loaded.recognizes_panning_on_front_view);
}

#[test]
fn unparseable_yaml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, ": not yaml [").expect("write");

    let loaded = RevealConfig::load_from(&path);
    assert_eq!(loaded, RevealConfig::default());
}

#[test]
fn out_of_range_values_are_corrected_at_use_sites() {
    let config = RevealConfig {
        reveal_trigger_fraction: 3.0,
        animation_duration: -1.0,
        ..RevealConfig::default()
    };

    assert_eq!(config.trigger_fraction(), 1.0);
    assert_eq!(config.duration(), 0.0);
}
