//! # Contrast Engine
//!
//! WCAG 2.x relative luminance and contrast ratio, plus a bounded search that
//! nudges a foreground color until it reaches a target ratio.
//!
//! Nothing in this module fails. When a computation cannot produce a finite
//! number the engine reports [MIN_CONTRAST_RATIO], the "no contrast" answer.
//!
//! ```rust
//! use skinkit_theme::contrast::{contrast_ratio, relative_luminance};
//! use vello::peniko::Color;
//!
//! assert_eq!(relative_luminance(Color::BLACK), 0.0);
//! let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
//! assert!((ratio - 21.0).abs() < 0.01);
//! ```

use vello::peniko::Color;

use crate::color::channels;

/// Lowest possible contrast ratio (a color against itself).
pub const MIN_CONTRAST_RATIO: f64 = 1.0;
/// WCAG AA threshold for normal text.
pub const WCAG_AA: f64 = 4.5;
/// WCAG AAA threshold for normal text.
pub const WCAG_AAA: f64 = 7.0;
/// WCAG AA threshold for large text and UI components.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Channel step applied per iteration of [adjust_for_contrast].
pub const ADJUST_STEP: i16 = 10;
/// Iteration cap for [adjust_for_contrast].
pub const ADJUST_MAX_ITERATIONS: usize = 25;

/// Relative luminance of a color in `[0, 1]`.
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = channels(color).map(|c| linearize(c as f64 / 255.0));
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

fn linearize(component: f64) -> f64 {
    if component <= 0.03928 {
        component / 12.92
    } else {
        ((component + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors, in `[1, 21]`. Symmetric in its arguments.
pub fn contrast_ratio(foreground: Color, background: Color) -> f64 {
    let fg = relative_luminance(foreground);
    let bg = relative_luminance(background);

    let lighter = fg.max(bg);
    let darker = fg.min(bg);
    let ratio = (lighter + 0.05) / (darker + 0.05);

    if ratio.is_finite() {
        ratio
    } else {
        MIN_CONTRAST_RATIO
    }
}

/// Step the foreground color until it reaches `target_ratio` against `background`.
///
/// Channels move by [ADJUST_STEP] per iteration: up on dark backgrounds
/// (luminance below 0.5), down otherwise, clamped to `[0, 255]`. The search
/// stops after [ADJUST_MAX_ITERATIONS] steps whether or not the target was
/// reached, so callers must accept a result that still falls short.
/// Alpha is preserved.
pub fn adjust_for_contrast(foreground: Color, background: Color, target_ratio: f64) -> Color {
    let step = if relative_luminance(background) < 0.5 {
        ADJUST_STEP
    } else {
        -ADJUST_STEP
    };
    let alpha = foreground.to_rgba8().a;
    let mut adjusted = foreground;

    for _ in 0..ADJUST_MAX_ITERATIONS {
        if contrast_ratio(adjusted, background) >= target_ratio {
            break;
        }
        let [r, g, b] = channels(adjusted).map(|c| (c as i16 + step).clamp(0, 255) as u8);
        adjusted = Color::from_rgba8(r, g, b, alpha);
    }

    adjusted
}

/// HSV saturation and value of a color, both in `[0, 1]`.
pub fn hsv_saturation_value(color: Color) -> (f64, f64) {
    let [r, g, b] = channels(color);
    let max = r.max(g).max(b) as f64 / 255.0;
    let min = r.min(g).min(b) as f64 / 255.0;

    let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };
    (saturation, max)
}

/// Whether a color is bright and saturated enough to be a photosensitivity concern.
pub fn is_high_saturation(color: Color) -> bool {
    let (saturation, value) = hsv_saturation_value(color);
    saturation > 0.8 && value > 0.8
}
