// Host-side tests for the hint overlay text.
// DOM helpers are included but only the pure formatter is exercised.

#![allow(dead_code)]
mod overlay {
    include!("../src/overlay.rs");
}

use plane_core::{PlaneId, ToneSettings};

#[test]
fn hint_lists_selection_and_tone() {
    let tone = ToneSettings {
        brightness: 0.25,
        contrast: 1.5,
        opacity: 0.8,
    };
    let text = overlay::hint_text(Some(PlaneId(2)), 3, &tone);
    assert!(text.starts_with("Selected: #2 (3 planes)"), "{}", text);
    assert!(text.contains("Brightness: 0.25"));
    assert!(text.contains("Contrast: 1.50"));
    assert!(text.contains("Opacity: 0.80"));
}

#[test]
fn hint_without_selection_says_none() {
    let text = overlay::hint_text(None, 0, &ToneSettings::default());
    assert!(text.starts_with("Selected: none (0 planes)"), "{}", text);
    assert!(text.contains("Opacity: 1.00"));
}

#[test]
fn hint_uses_singular_for_one_plane() {
    let text = overlay::hint_text(Some(PlaneId(0)), 1, &ToneSettings::default());
    assert!(text.starts_with("Selected: #0 (1 plane) •"), "{}", text);
}
