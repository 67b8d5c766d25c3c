//! Color filters: Sepia, Saturation, Tint, Temperature.
//!
//! These filters mix or shift the color channels relative to each other, so
//! each pixel is processed as an RGB triple. Alpha is never modified.

use super::core::{blend, clamp, clamp_f32, map_rgb, CHANNELS};

// ============================================================================
// Sepia
// ============================================================================

/// Classic sepia matrix. Rows produce R, G, B from (R, G, B).
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Sepia target for one pixel, each channel truncated to an integer.
///
/// Targets may exceed 255 (white maps to 344, 306, 238); clamping happens
/// after blending.
#[inline]
pub fn sepia_target(r: u8, g: u8, b: u8) -> [i32; 3] {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    SEPIA.map(|[kr, kg, kb]| (kr * r + kg * g + kb * b) as i32)
}

/// Blend every pixel toward its sepia tone.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `amount` - 0.0 = no change, 1.0 = full sepia
pub fn sepia(data: &mut [u8], amount: f32) {
    map_rgb(data, |r, g, b| {
        let [sr, sg, sb] = sepia_target(r, g, b);
        [
            blend(r, sr as f32, amount),
            blend(g, sg as f32, amount),
            blend(b, sb as f32, amount),
        ]
    });
}

// ============================================================================
// Saturation
// ============================================================================

/// Push each channel toward (factor < 1) or away from (factor > 1) the
/// pixel's float mean gray: `gray + (v - gray) * factor`.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `factor` - 0.0 = gray, 1.0 = no change, 2.0 = double saturation
pub fn saturation(data: &mut [u8], factor: f32) {
    map_rgb(data, |r, g, b| {
        let gray = (r as f32 + g as f32 + b as f32) / 3.0;
        let mix = |v: u8| clamp_f32(gray + (v as f32 - gray) * factor);
        [mix(r), mix(g), mix(b)]
    });
}

// ============================================================================
// Tint
// ============================================================================

/// Add independent offsets to R, G and B.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `r`, `g`, `b` - Per-channel offsets; (0, 0, 0) = no change
pub fn tint(data: &mut [u8], r: i32, g: i32, b: i32) {
    let shift = |v: u8, d: i32| clamp((v as i32).saturating_add(d));
    map_rgb(data, |pr, pg, pb| [shift(pr, r), shift(pg, g), shift(pb, b)]);
}

// ============================================================================
// Temperature
// ============================================================================

/// Channel shift per unit of warmth.
const TEMPERATURE_SCALE: f32 = 20.0;

/// Simple white-balance shift: warm adds red and removes blue.
///
/// Green is untouched. This is a linear offset, not a color-temperature model.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `warmth` - Positive warms, negative cools, 0.0 = no change
pub fn temperature(data: &mut [u8], warmth: f32) {
    let shift = TEMPERATURE_SCALE * warmth;
    for px in data.chunks_exact_mut(CHANNELS) {
        px[0] = clamp_f32(px[0] as f32 + shift);
        px[2] = clamp_f32(px[2] as f32 - shift);
    }
}
