use plane_core::{contrast_factor, ToneSettings};

fn closed_form(c: f64) -> f64 {
    (1.0156 * (c / 255.0 + 1.0)) / (1.0156 - c / 255.0)
}

#[test]
fn factor_is_finite_and_matches_closed_form_inside_domain() {
    let mut c = -254.9_f64;
    while c < 254.9 {
        let got = contrast_factor(c as f32) as f64;
        let want = closed_form(c);
        assert!(got.is_finite(), "non-finite factor at c={c}");
        assert!(
            (got - want).abs() <= want.abs() * 1e-4 + 1e-5,
            "c={c}: got {got}, want {want}"
        );
        c += 0.7;
    }
}

#[test]
fn panel_range_gives_near_unit_factors() {
    // The slider range is tiny next to the 8-bit domain.
    for c in [-1.0_f32, 0.0, 1.0, 2.0] {
        let f = contrast_factor(c);
        assert!((0.99..1.02).contains(&f), "c={c} f={f}");
    }
}

#[test]
fn settings_use_the_same_curve() {
    let tone = ToneSettings {
        brightness: 0.2,
        contrast: 1.5,
        opacity: 0.4,
    };
    assert_eq!(tone.contrast_factor(), contrast_factor(1.5));
}

#[test]
fn defaults_match_initial_panel_state() {
    let tone = ToneSettings::default();
    assert_eq!(tone.brightness, 0.001);
    assert_eq!(tone.contrast, 1.0);
    assert_eq!(tone.opacity, 1.0);
}
