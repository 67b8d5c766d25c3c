//! Stylize filters: Fade, Solarize.
//!
//! Artistic effects that flatten or partially invert the tonal range.
//! Both are per-channel and leave alpha untouched.

use super::core::{blend, map_color_channels};

// ============================================================================
// Fade
// ============================================================================

/// Wash every color channel out toward white.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `amount` - 0.0 = no change, 1.0 = solid white
pub fn fade(data: &mut [u8], amount: f32) {
    map_color_channels(data, |v| blend(v, 255.0, amount));
}

// ============================================================================
// Solarize
// ============================================================================

/// Invert channels brighter than a normalized threshold.
///
/// A channel `v` becomes `255 - v` when `v > threshold * 255`. The threshold
/// is a fraction of full scale, so 1.0 leaves every channel alone and 0.0
/// inverts everything except pure black.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `threshold` - Fraction of 255 above which tones are inverted
pub fn solarize(data: &mut [u8], threshold: f32) {
    let cutoff = threshold * 255.0;
    map_color_channels(data, |v| if v as f32 > cutoff { 255 - v } else { v });
}
