//! Grayscale conversion filter.
//!
//! Uses the unweighted channel mean `(R + G + B) / 3` with integer division,
//! so the gray target is truncated before any blending happens. Callers rely
//! on that bias: `(0, 0, 2)` goes to 0, not 1.

use super::core::{blend, map_rgb};

/// Integer mean of the three color channels, truncated.
#[inline]
pub fn mean_gray(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Blend every pixel toward its own mean gray.
///
/// # Arguments
/// * `data` - Interleaved RGBA bytes (length a multiple of 4)
/// * `amount` - 0.0 = no change, 1.0 = fully gray
pub fn grayscale(data: &mut [u8], amount: f32) {
    map_rgb(data, |r, g, b| {
        let gray = mean_gray(r, g, b) as f32;
        [blend(r, gray, amount), blend(g, gray, amount), blend(b, gray, amount)]
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_gray_truncates() {
        assert_eq!(mean_gray(90, 90, 93), 91);
        assert_eq!(mean_gray(0, 0, 2), 0);
        assert_eq!(mean_gray(1, 1, 2), 1);
        assert_eq!(mean_gray(255, 255, 255), 255);
    }

    #[test]
    fn test_grayscale_full() {
        let mut px = [90u8, 90, 93, 255];
        grayscale(&mut px, 1.0);
        assert_eq!(px, [91, 91, 91, 255]);
    }

    #[test]
    fn test_grayscale_truncation_bias_is_kept() {
        // A float mean would give 0.67 and 1.33; the integer mean gives 0 and 1.
        let mut data = [0u8, 0, 2, 255, 1, 1, 2, 255];
        grayscale(&mut data, 1.0);
        assert_eq!(data, [0, 0, 0, 255, 1, 1, 1, 255]);
    }

    #[test]
    fn test_grayscale_partial_blend() {
        let mut px = [90u8, 90, 93, 10];
        grayscale(&mut px, 0.5);
        // 90 * 0.5 + 91 * 0.5 = 90.5, 93 * 0.5 + 91 * 0.5 = 92
        assert_eq!(px, [90, 90, 92, 10]);
    }

    #[test]
    fn test_grayscale_zero_is_identity() {
        let mut data: Vec<u8> = (0..=255u8).flat_map(|v| [v, 255 - v, v / 2, v]).collect();
        let original = data.clone();
        grayscale(&mut data, 0.0);
        assert_eq!(data, original);
    }

    #[test]
    fn test_grayscale_preserves_alpha() {
        let mut px = [200u8, 10, 60, 100];
        grayscale(&mut px, 1.0);
        assert_eq!(px, [90, 90, 90, 100]);
    }
}
