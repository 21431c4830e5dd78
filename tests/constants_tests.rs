// Host-side tests for front-end constants and input scaling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use input::wheel_notches;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(!CANVAS_ID.is_empty());
    assert_eq!(PLANE_VERTEX_COUNT % 3, 0);
    assert!(WHEEL_NOTCH_PX > 0.0);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(WHEEL_LINE_PX < WHEEL_NOTCH_PX);
    assert_ne!(DOM_DELTA_PIXEL, DOM_DELTA_LINE);
}

#[test]
fn pixel_wheel_delta_maps_to_notches() {
    assert!((wheel_notches(100.0, DOM_DELTA_PIXEL) - 1.0).abs() < 1e-6);
    assert!((wheel_notches(-50.0, DOM_DELTA_PIXEL) + 0.5).abs() < 1e-6);
}

#[test]
fn line_wheel_delta_is_scaled_to_pixels() {
    let n = wheel_notches(3.0, DOM_DELTA_LINE);
    assert!((n - 3.0 * WHEEL_LINE_PX / WHEEL_NOTCH_PX).abs() < 1e-6);
}

#[test]
fn page_wheel_delta_is_one_notch_per_event() {
    assert_eq!(wheel_notches(2.0, 2), 1.0);
    assert_eq!(wheel_notches(-7.0, 2), -1.0);
}
