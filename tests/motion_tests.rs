// Host-side tests for reveal presets and page-interaction geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod motion {
    include!("../src/core/motion.rs");
}

use motion::*;

fn preset(selector: &str) -> RevealPreset {
    *REVEAL_PRESETS
        .iter()
        .find(|p| p.selector == selector)
        .expect("preset exists")
}

#[test]
fn service_cards_rise_with_stagger() {
    let p = preset(".service-card");
    assert_eq!(p.hidden_state(0), ("0", "translateY(50px)".to_string()));
    assert_eq!(
        p.transition(0),
        "opacity 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) 0s, transform 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) 0s"
    );
    assert!(p.transition(3).contains(" 0.3"));
}

#[test]
fn case_cards_alternate_slide_direction() {
    let p = preset(".case-card");
    assert_eq!(p.hidden_state(0).1, "translateX(-50px)");
    assert_eq!(p.hidden_state(1).1, "translateX(50px)");
    assert_eq!(p.hidden_state(2).1, "translateX(-50px)");
    assert_eq!(p.transition(0), p.transition(5), "no stagger");
}

#[test]
fn timeline_planets_scale_in_fully_opaque() {
    let p = preset(".timeline-planet");
    let (opacity, transform) = p.hidden_state(4);
    assert_eq!(opacity, "1");
    assert_eq!(transform, "scale(0) rotate(360deg)");
}

#[test]
fn section_titles_rise_less() {
    let p = preset("section h2");
    assert_eq!(p.hidden_state(0), ("0", "translateY(30px)".to_string()));
}

#[test]
fn hide_on_exit_only_below_viewport() {
    assert!(should_hide_on_exit(900.0));
    assert!(!should_hide_on_exit(-200.0));
    assert!(!should_hide_on_exit(0.0));
}

#[test]
fn header_scroll_threshold_is_exclusive() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(100.0));
    assert!(header_scrolled(100.5));
}

#[test]
fn ripple_is_square_and_centred_on_click() {
    let (size, left, top) = ripple_box(10.0, 20.0, 120.0, 40.0, 70.0, 40.0);
    assert_eq!(size, 120.0);
    assert_eq!(left, 70.0 - 10.0 - 60.0);
    assert_eq!(top, 40.0 - 20.0 - 60.0);
}

#[test]
fn hero_letters_fade_in_one_after_another() {
    assert_eq!(title_words("  Votre temps compte "), vec!["Votre", "temps", "compte"]);
    assert!((letter_delay_s(0) - 0.3).abs() < 1e-6);
    assert!((letter_delay_s(10) - 0.6).abs() < 1e-5);
    assert_eq!(letter_animation(0), "hair-letter-in 0.05s ease-in-out 0.30s both");
    assert_eq!(letter_animation(4), "hair-letter-in 0.05s ease-in-out 0.42s both");
}

#[test]
fn effect_keyframes_define_every_named_animation() {
    assert!(EFFECT_KEYFRAMES.contains("@keyframes hair-letter-in"));
    assert!(EFFECT_KEYFRAMES.contains("@keyframes hair-cta-pulse"));
    assert!(EFFECT_KEYFRAMES.contains("0 0 60px rgba(14, 165, 255, 0.8)"));
    assert!(CTA_PULSE_ANIMATION.starts_with("hair-cta-pulse 1.5s"));
    assert!(CTA_PULSE_ANIMATION.ends_with("infinite alternate"));
}

#[test]
fn card_hover_scales_up_and_back() {
    assert_eq!(card_scale(true), 1.05);
    assert_eq!(card_scale(false), 1.0);
    // composes with the reveal transition instead of replacing it
    let reveal = preset(".service-card").transition(2);
    let joined = join_transitions(&reveal, CARD_HOVER_TRANSITION);
    assert!(joined.starts_with(&reveal));
    assert!(joined.ends_with(CARD_HOVER_TRANSITION));
    assert_eq!(join_transitions("  ", CARD_HOVER_TRANSITION), CARD_HOVER_TRANSITION);
}

#[test]
fn planet_adds_a_full_turn_per_click() {
    assert_eq!(planet_rotation_deg(0), 0.0);
    assert_eq!(planet_rotation_deg(1), 360.0);
    assert_eq!(planet_rotation_deg(3), 1080.0);
    assert!(PLANET_SPIN_SCALE > 1.0);
    assert_eq!(PLANET_SPIN_MS, 500);
}

#[test]
fn portrait_tilts_toward_the_pointer() {
    // centre: flat
    assert_eq!(portrait_tilt(100.0, 50.0, 200.0, 100.0, 200.0, 100.0), (0.0, 0.0));
    // right edge, top edge
    let (ry, rx) = portrait_tilt(100.0, 50.0, 200.0, 100.0, 300.0, 50.0);
    assert!((ry - 10.0).abs() < 1e-9);
    assert!((rx - 10.0).abs() < 1e-9);
    // bottom-left corner tilts the other way
    let (ry, rx) = portrait_tilt(100.0, 50.0, 200.0, 100.0, 100.0, 150.0);
    assert!((ry + 10.0).abs() < 1e-9);
    assert!((rx + 10.0).abs() < 1e-9);
    assert_eq!(portrait_tilt(0.0, 0.0, 0.0, 0.0, 5.0, 5.0), (0.0, 0.0));
    assert_eq!(tilt_transform(10.0, -2.5), "rotateY(10.00deg) rotateX(-2.50deg)");
}

#[test]
fn sections_drift_up_while_crossing_the_viewport() {
    let vh = 800.0;
    // top at the viewport bottom: not started
    assert_eq!(section_offset(800.0, 400.0, vh), 0.0);
    // still below the fold
    assert_eq!(section_offset(1200.0, 400.0, vh), 0.0);
    // halfway through the crossing
    assert!((section_offset(200.0, 400.0, vh) + 25.0).abs() < 1e-9);
    // bottom left through the top, and beyond
    assert!((section_offset(-400.0, 400.0, vh) + 50.0).abs() < 1e-9);
    assert!((section_offset(-3000.0, 400.0, vh) + 50.0).abs() < 1e-9);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}
