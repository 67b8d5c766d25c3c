//! Tone adjustment filters: Invert, Brightness, Contrast, Gamma.
//!
//! These are per-channel operations that don't require spatial context or
//! any other channel of the pixel. Each one rewrites R, G and B in place and
//! never touches alpha.
//!
//! Grayscale, the remaining member of the tone family, lives in
//! [`super::grayscale`] because it needs the whole pixel.

use super::core::{blend, clamp, clamp_f32, clamp_f64, map_color_channels};

// ============================================================================
// Invert
// ============================================================================

/// Blend each color channel toward its negative.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `amount` - 0.0 = no change, 1.0 = full negative
pub fn invert(data: &mut [u8], amount: f32) {
    map_color_channels(data, |v| blend(v, (255 - v) as f32, amount));
}

// ============================================================================
// Brightness
// ============================================================================

/// Add a signed offset to every color channel.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `delta` - Offset added to R, G and B; 0 = no change
pub fn brightness(data: &mut [u8], delta: i32) {
    map_color_channels(data, |v| clamp((v as i32).saturating_add(delta)));
}

// ============================================================================
// Contrast
// ============================================================================

/// Scale every color channel away from (or toward) mid-gray 128.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `factor` - Multiplier around 128: 1.0 = no change, 0.0 = flat gray
pub fn contrast(data: &mut [u8], factor: f32) {
    map_color_channels(data, |v| clamp_f32((v as i32 - 128) as f32 * factor + 128.0));
}

// ============================================================================
// Gamma
// ============================================================================

/// Raise every normalized color channel to `exponent`.
///
/// Evaluated in f64 as `(v / 255) ^ exponent * 255`, then truncated.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `exponent` - > 1.0 darkens, < 1.0 brightens, 1.0 = no change
pub fn gamma(data: &mut [u8], exponent: f32) {
    let exponent = exponent as f64;
    map_color_channels(data, |v| clamp_f64((v as f64 / 255.0).powf(exponent) * 255.0));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_values() -> Vec<u8> {
        (0..=255u8).flat_map(|v| [v, v, v, 255 - v]).collect()
    }

    // ========================================================================
    // Invert Tests
    // ========================================================================

    #[test]
    fn test_invert_full() {
        let mut px = [10u8, 20, 30, 255];
        invert(&mut px, 1.0);
        assert_eq!(px, [245, 235, 225, 255]);
    }

    #[test]
    fn test_invert_zero_is_identity() {
        let mut data = all_values();
        let original = data.clone();
        invert(&mut data, 0.0);
        assert_eq!(data, original);
    }

    #[test]
    fn test_invert_half_meets_in_the_middle() {
        // v * 0.5 + (255 - v) * 0.5 = 127.5 for every v
        let mut data = all_values();
        invert(&mut data, 0.5);
        for px in data.chunks_exact(4) {
            assert_eq!(&px[..3], &[127, 127, 127]);
        }
    }

    #[test]
    fn test_invert_preserves_alpha() {
        let mut px = [100u8, 200, 50, 128];
        invert(&mut px, 1.0);
        assert_eq!(px, [155, 55, 205, 128]);
    }

    // ========================================================================
    // Brightness Tests
    // ========================================================================

    #[test]
    fn test_brightness_clamps_high() {
        let mut px = [200u8, 10, 0, 255];
        brightness(&mut px, 50);
        assert_eq!(px, [250, 60, 50, 255]);

        brightness(&mut px, 50);
        assert_eq!(px, [255, 110, 100, 255]);
    }

    #[test]
    fn test_brightness_clamps_low() {
        let mut px = [200u8, 10, 0, 7];
        brightness(&mut px, -100);
        assert_eq!(px, [100, 0, 0, 7]);
    }

    #[test]
    fn test_brightness_extreme_deltas() {
        let mut px = [1u8, 128, 254, 9];
        brightness(&mut px, i32::MAX);
        assert_eq!(px, [255, 255, 255, 9]);
        brightness(&mut px, i32::MIN);
        assert_eq!(px, [0, 0, 0, 9]);
    }

    // ========================================================================
    // Contrast Tests
    // ========================================================================

    #[test]
    fn test_contrast_doubles_distance_from_mid_gray() {
        let mut px = [128u8, 64, 200, 255];
        contrast(&mut px, 2.0);
        assert_eq!(px, [128, 0, 255, 255]);

        let mut px = [100u8, 150, 128, 255];
        contrast(&mut px, 2.0);
        assert_eq!(px, [72, 172, 128, 255]);
    }

    #[test]
    fn test_contrast_one_is_identity() {
        let mut data = all_values();
        let original = data.clone();
        contrast(&mut data, 1.0);
        assert_eq!(data, original);
    }

    #[test]
    fn test_contrast_zero_flattens() {
        let mut px = [0u8, 90, 255, 1];
        contrast(&mut px, 0.0);
        assert_eq!(px, [128, 128, 128, 1]);
    }

    #[test]
    fn test_contrast_negative_factor_inverts_around_mid_gray() {
        let mut px = [100u8, 0, 255, 1];
        contrast(&mut px, -1.0);
        // (100-128)*-1+128 = 156, (0-128)*-1+128 = 256, (255-128)*-1+128 = 1
        assert_eq!(px, [156, 255, 1, 1]);
    }

    // ========================================================================
    // Gamma Tests
    // ========================================================================

    #[test]
    fn test_gamma_one_is_identity() {
        let mut data = all_values();
        let original = data.clone();
        gamma(&mut data, 1.0);
        assert_eq!(data, original);
    }

    #[test]
    fn test_gamma_darkens_and_brightens() {
        let mut px = [128u8, 64, 255, 40];
        gamma(&mut px, 2.0);
        // (128/255)^2 * 255 = 64.25, (64/255)^2 * 255 = 16.06
        assert_eq!(px, [64, 16, 255, 40]);

        let mut px = [64u8, 0, 1, 40];
        gamma(&mut px, 0.5);
        // sqrt(64/255) * 255 = 127.75, sqrt(1/255) * 255 = 15.97
        assert_eq!(px, [127, 0, 15, 40]);
    }

    #[test]
    fn test_gamma_degenerate_exponents_stay_in_range() {
        let mut px = [0u8, 100, 255, 3];
        gamma(&mut px, -2.0);
        // 0^-2 = inf, saturates
        assert_eq!(px[0], 255);
        assert_eq!(px[3], 3);

        let mut px = [0u8, 100, 255, 3];
        gamma(&mut px, f32::NAN);
        // NaN truncates to 0, except 1^NaN which is 1
        assert_eq!(px, [0, 0, 255, 3]);
    }
}
