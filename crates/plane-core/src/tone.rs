//! Brightness/contrast transform feeding the plane shader.
//!
//! Brightness passes straight through as an additive term. Contrast is mapped
//! onto a multiplicative factor with the classic 8-bit contrast curve:
//!
//! `factor = (1.0156 * (c / 255 + 1)) / (1.0156 - c / 255)`
//!
//! The divisor is not guarded. Inputs with `c / 255` close to `1.0156`
//! (around `c = 259`) produce huge or non-finite factors.

use crate::constants::{
    BRIGHTNESS_RANGE, CONTRAST_DOMAIN, CONTRAST_RANGE, CONTRAST_SCALE, DEFAULT_BRIGHTNESS,
    DEFAULT_CONTRAST, DEFAULT_OPACITY, OPACITY_RANGE,
};

#[inline]
pub fn contrast_factor(contrast: f32) -> f32 {
    let c = contrast / CONTRAST_DOMAIN;
    (CONTRAST_SCALE * (c + 1.0)) / (CONTRAST_SCALE - c)
}

/// Panel slider bounds for a tone control, by its accessor name.
///
/// Values outside the range are still accepted by [`ToneSettings`].
pub fn slider_range(control: &str) -> Option<(f32, f32)> {
    match control {
        "brightness" => Some(BRIGHTNESS_RANGE),
        "contrast" => Some(CONTRAST_RANGE),
        "opacity" => Some(OPACITY_RANGE),
        _ => None,
    }
}

/// Scene-level tone sliders. Copied onto the selected plane every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSettings {
    pub brightness: f32,
    pub contrast: f32,
    pub opacity: f32,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            contrast: DEFAULT_CONTRAST,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl ToneSettings {
    #[inline]
    pub fn contrast_factor(&self) -> f32 {
        contrast_factor(self.contrast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_contrast_is_identity() {
        assert!((contrast_factor(0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn factor_grows_with_contrast() {
        assert!(contrast_factor(2.0) > contrast_factor(1.0));
        assert!(contrast_factor(-1.0) < 1.0);
    }

    #[test]
    fn defaults_sit_inside_slider_ranges() {
        let t = ToneSettings::default();
        for (name, value) in [
            ("brightness", t.brightness),
            ("contrast", t.contrast),
            ("opacity", t.opacity),
        ] {
            let (lo, hi) = slider_range(name).unwrap();
            assert!(lo < hi, "{name}");
            assert!((lo..=hi).contains(&value), "{name}={value}");
        }
        assert_eq!(slider_range("gamma"), None);
    }

    #[test]
    fn divisor_blows_up_near_pole() {
        let pole = CONTRAST_SCALE * CONTRAST_DOMAIN;
        assert!(contrast_factor(pole - 0.01).abs() > 1.0e4);
    }
}
