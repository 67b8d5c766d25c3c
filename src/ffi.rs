//! C ABI exports.
//!
//! Each filter is exported under its bare name with the `(uint8_t*, int, ...)`
//! signature, so a host that loads the module and calls `_invert(ptr, len,
//! amount)` on a heap region keeps working. A null pointer, a negative length
//! or a length that is not a multiple of 4 is logged and the buffer is left
//! untouched; nothing is reported back across the boundary.

use std::os::raw::c_int;

use crate::catalog::Filter;
use crate::filters::core::RgbaBuffer;

/// # Safety
/// `data` must be null or address `len` writable bytes.
unsafe fn apply_raw(data: *mut u8, len: c_int, filter: Filter) {
    match RgbaBuffer::from_raw_parts(data, len) {
        Ok(mut buffer) => filter.apply_to(&mut buffer),
        Err(err) => log::error!("{}: {}", filter.kind(), err),
    }
}

// ============================================================================
// Tone Filters
// ============================================================================

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn invert(data: *mut u8, len: c_int, amount: f32) {
    apply_raw(data, len, Filter::Invert(amount));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn grayscale(data: *mut u8, len: c_int, amount: f32) {
    apply_raw(data, len, Filter::Grayscale(amount));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn brightness(data: *mut u8, len: c_int, delta: c_int) {
    apply_raw(data, len, Filter::Brightness(delta));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn contrast(data: *mut u8, len: c_int, factor: f32) {
    apply_raw(data, len, Filter::Contrast(factor));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn gamma(data: *mut u8, len: c_int, exponent: f32) {
    apply_raw(data, len, Filter::Gamma(exponent));
}

// ============================================================================
// Color Filters
// ============================================================================

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn sepia(data: *mut u8, len: c_int, amount: f32) {
    apply_raw(data, len, Filter::Sepia(amount));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn saturation(data: *mut u8, len: c_int, factor: f32) {
    apply_raw(data, len, Filter::Saturation(factor));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tint(data: *mut u8, len: c_int, r: c_int, g: c_int, b: c_int) {
    apply_raw(data, len, Filter::Tint { r, g, b });
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn temperature(data: *mut u8, len: c_int, warmth: f32) {
    apply_raw(data, len, Filter::Temperature(warmth));
}

// ============================================================================
// Stylize Filters
// ============================================================================

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn fade(data: *mut u8, len: c_int, amount: f32) {
    apply_raw(data, len, Filter::Fade(amount));
}

/// # Safety
/// `data` must be null or address `len` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn solarize(data: *mut u8, len: c_int, threshold: f32) {
    apply_raw(data, len, Filter::Solarize(threshold));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call<F: FnOnce(*mut u8, c_int)>(data: &mut Vec<u8>, f: F) {
        f(data.as_mut_ptr(), data.len() as c_int);
    }

    #[test]
    fn test_exports_filter_in_place() {
        let mut data = vec![10u8, 20, 30, 255];
        call(&mut data, |p, n| unsafe { invert(p, n, 1.0) });
        assert_eq!(data, vec![245, 235, 225, 255]);

        call(&mut data, |p, n| unsafe { tint(p, n, 10, 0, -300) });
        assert_eq!(data, vec![255, 235, 0, 255]);

        call(&mut data, |p, n| unsafe { solarize(p, n, 0.5) });
        assert_eq!(data, vec![0, 20, 0, 255]);
    }

    #[test]
    fn test_bad_length_leaves_buffer_untouched() {
        let mut data = vec![10u8, 20, 30, 255, 1, 2];
        call(&mut data, |p, n| unsafe { fade(p, n, 1.0) });
        assert_eq!(data, vec![10, 20, 30, 255, 1, 2]);
    }

    #[test]
    fn test_negative_length_is_ignored() {
        let mut data = vec![10u8, 20, 30, 255];
        unsafe { brightness(data.as_mut_ptr(), -4, 50) };
        assert_eq!(data, vec![10, 20, 30, 255]);
    }

    #[test]
    fn test_null_pointer_is_ignored() {
        unsafe { gamma(std::ptr::null_mut(), 8, 2.0) };
    }

    #[test]
    fn test_shorter_length_filters_prefix_only() {
        let mut data = vec![0u8; 8];
        unsafe { fade(data.as_mut_ptr(), 4, 1.0) };
        assert_eq!(data, vec![255, 255, 255, 0, 0, 0, 0, 0]);
    }
}
