// Host-side tests for the crossfade state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod crossfade {
        include!("../src/core/crossfade.rs");
    }
}

use site::crossfade::*;

/// Run a full fade from `start`, returning (fade-out volumes, fade-in volumes, final volume).
fn run(f: &mut Crossfader, start: f64) -> (Vec<f64>, Vec<f64>, f64) {
    assert!(f.start(start));
    let mut out = Vec::new();
    let mut inn = Vec::new();
    let mut switched = false;
    for _ in 0..100 {
        match f.step() {
            FadeAction::SetVolume(v) if !switched => out.push(v),
            FadeAction::SetVolume(v) => inn.push(v),
            FadeAction::SwitchTrack(v) => {
                assert!(!switched, "switched twice");
                switched = true;
                inn.push(v);
            }
            FadeAction::Finished(v) => {
                assert!(switched);
                return (out, inn, v);
            }
            FadeAction::None => panic!("fade stalled"),
        }
    }
    panic!("fade never finished");
}

#[test]
fn fade_out_reaches_floor_before_switch() {
    let mut f = Crossfader::new(0.3);
    let (out, _, _) = run(&mut f, 0.3);
    let last = *out.last().unwrap();
    assert!(last <= 0.05, "switched at {last}");
    assert!(out.windows(2).all(|w| w[1] < w[0]));
    // about one second of 50 ms ticks
    assert!(out.len() <= 20);
    // nothing under the floor except the final step
    assert!(out[..out.len() - 1].iter().all(|v| *v > 0.05));
}

#[test]
fn fade_in_ends_exactly_at_ceiling() {
    let mut f = Crossfader::new(0.3);
    let (_, inn, end) = run(&mut f, 0.3);
    assert_eq!(end, 0.3);
    assert_eq!(f.volume(), 0.3);
    assert_eq!(inn[0], 0.0);
    assert!(inn.iter().all(|v| *v <= 0.3));
    assert!(inn.windows(2).all(|w| w[1] > w[0]));
    // about 0.3 s of 50 ms ticks, plus the switch step
    assert!(inn.len() <= 7);
    assert_eq!(f.phase(), FadePhase::Idle);
}

#[test]
fn start_is_refused_while_fading() {
    let mut f = Crossfader::new(0.3);
    assert!(f.start(0.3));
    f.step();
    assert_eq!(f.phase(), FadePhase::FadingOut);
    let before = f.volume();
    assert!(!f.start(0.3));
    assert_eq!(f.volume(), before);
}

#[test]
fn idle_step_does_nothing() {
    let mut f = Crossfader::new(0.3);
    assert!(!f.is_active());
    assert_eq!(f.step(), FadeAction::None);
    assert_eq!(f.volume(), 0.3);
}

#[test]
fn phases_follow_the_cycle() {
    let mut f = Crossfader::new(0.3);
    f.start(0.3);
    let mut phases = vec![f.phase()];
    while f.is_active() {
        f.step();
        if phases.last() != Some(&f.phase()) {
            phases.push(f.phase());
        }
    }
    assert_eq!(
        phases,
        vec![
            FadePhase::FadingOut,
            FadePhase::Switching,
            FadePhase::FadingIn,
            FadePhase::Idle
        ]
    );
}

#[test]
fn louder_start_is_clamped_to_ceiling() {
    let mut f = Crossfader::new(0.3);
    f.start(0.9);
    assert_eq!(f.volume(), 0.3);
}

#[test]
fn fades_can_run_back_to_back() {
    let mut f = Crossfader::new(0.5);
    let (_, _, a) = run(&mut f, 0.5);
    let (_, _, b) = run(&mut f, 0.5);
    assert_eq!(a, 0.5);
    assert_eq!(b, 0.5);
}

#[test]
fn fade_out_can_be_finished_early() {
    let mut f = Crossfader::new(0.3);
    assert!(!f.finish_out());
    f.start(0.3);
    f.step();
    assert!(f.finish_out());
    assert_eq!(f.step(), FadeAction::SwitchTrack(0.0));
    // Fade-in is left to run its course
    assert!(!f.finish_out());
    assert_eq!(f.phase(), FadePhase::FadingIn);
}

#[test]
fn cancel_restores_ceiling() {
    let mut f = Crossfader::new(0.4);
    assert_eq!(f.cancel(), None);
    f.start(0.4);
    f.step();
    f.step();
    assert_eq!(f.cancel(), Some(0.4));
    assert_eq!(f.phase(), FadePhase::Idle);
    assert_eq!(f.volume(), 0.4);
    assert!(f.start(0.4));
}
