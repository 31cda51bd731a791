// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    assert!(TARGET_BLEND > 0.0 && TARGET_BLEND < 1.0);
    assert!(CURRENT_BLEND > 0.0 && CURRENT_BLEND < 1.0);
    // Displayed color lags the target
    assert!(CURRENT_BLEND < TARGET_BLEND);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pastel_palette_is_fixed() {
    assert!(HUE_SATURATION > 0.0 && HUE_SATURATION < 1.0);
    assert!(HUE_LIGHTNESS > 0.5 && HUE_LIGHTNESS < 1.0);
    for ch in BASE_COLOR_RGB {
        assert!((0.0..=1.0).contains(&ch));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fade_timings_divide_into_ticks() {
    let tick = PLAYBACK_TICK_MS as f64;
    assert!(tick > 0.0);
    assert_eq!(FADE_OUT_MS % tick, 0.0);
    assert_eq!(FADE_IN_MS % tick, 0.0);
    assert_eq!(SAVE_INTERVAL_MS % tick, 0.0);
    assert!(FADE_OUT_FLOOR > 0.0 && FADE_OUT_FLOOR < DEFAULT_VOLUME);
    // A fade starts at least one tick before it could run out of track
    assert!(FADE_LEAD_MS >= FADE_OUT_MS + tick);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn persistence_guards_are_consistent() {
    // Resuming skips a wider tail than saving ignores
    assert!(SAVE_TAIL_GUARD_SEC > 0.0);
    assert!(RESUME_END_GUARD_SEC > SAVE_TAIL_GUARD_SEC);
    let keys = [KEY_POSITION, KEY_PLAYING, KEY_TRACK_INDEX];
    assert!(keys.iter().all(|k| !k.is_empty()));
    assert_ne!(KEY_POSITION, KEY_PLAYING);
    assert_ne!(KEY_PLAYING, KEY_TRACK_INDEX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_and_camera_are_sane() {
    assert!(FFT_SIZE.is_power_of_two() && FFT_SIZE >= 32);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_Z > CAMERA_NEAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(AMBIENT_LIGHT >= 0.0 && AMBIENT_LIGHT < 1.0);
}

#[test]
fn dom_ids_are_distinct() {
    assert_ne!(CANVAS_ID, PLAY_BUTTON_ID);
    assert_ne!(PLAY_LABEL, PAUSE_LABEL);
}
