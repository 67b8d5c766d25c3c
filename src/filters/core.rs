//! Core utilities shared by every filter.
//!
//! This module provides the pieces all filter families are built on:
//! - RGBA channel layout constants
//! - The clamp primitive (saturate to 0-255)
//! - Blend-by-amount interpolation
//! - Buffer validation for flat slices, raw pointers, and ndarray views

use std::slice::ChunksExactMut;

use ndarray::ArrayViewMut3;

use crate::error::{FilterError, Result};

/// Bytes per pixel: R, G, B, A.
pub const CHANNELS: usize = 4;

/// Index of the alpha byte within a pixel. Never written by any filter.
pub const ALPHA: usize = 3;

/// Number of leading color channels a filter may modify.
pub const COLOR_CHANNELS: usize = 3;

// ============================================================================
// Clamp Primitive
// ============================================================================

/// Saturate an integer intensity into the 0-255 range.
#[inline]
pub fn clamp(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Truncate toward zero, then clamp.
///
/// Float to int casts saturate in Rust, and NaN maps to 0, so this is total
/// over every `f32` input.
#[inline]
pub fn clamp_f32(v: f32) -> u8 {
    clamp(v as i32)
}

/// Truncate toward zero, then clamp (f64 version).
#[inline]
pub fn clamp_f64(v: f64) -> u8 {
    clamp(v as i32)
}

// ============================================================================
// Blend-by-amount
// ============================================================================

/// Linear interpolation between `original` and `target` by `amount`.
///
/// `original * (1 - amount) + target * amount`, evaluated in f32 and clamped.
/// `amount = 0` returns `original` unchanged, `amount = 1` returns the target.
#[inline]
pub fn blend(original: u8, target: f32, amount: f32) -> u8 {
    clamp_f32(original as f32 * (1.0 - amount) + target * amount)
}

// ============================================================================
// Per-channel iteration
// ============================================================================

/// Map every color channel of every whole pixel through `f`, leaving alpha.
///
/// Trailing bytes that do not form a whole pixel are not visited; boundary
/// wrappers reject such buffers before they get here.
#[inline]
pub fn map_color_channels<F>(data: &mut [u8], mut f: F)
where
    F: FnMut(u8) -> u8,
{
    for px in data.chunks_exact_mut(CHANNELS) {
        for v in &mut px[..COLOR_CHANNELS] {
            *v = f(*v);
        }
    }
}

/// Map the RGB triple of every whole pixel through `f`, leaving alpha.
#[inline]
pub fn map_rgb<F>(data: &mut [u8], mut f: F)
where
    F: FnMut(u8, u8, u8) -> [u8; 3],
{
    for px in data.chunks_exact_mut(CHANNELS) {
        let [r, g, b] = f(px[0], px[1], px[2]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

// ============================================================================
// Buffer Validation
// ============================================================================

/// The single precondition every boundary checks: whole RGBA pixels only.
#[inline]
pub fn validate_len(len: usize) -> Result<()> {
    if len % CHANNELS != 0 {
        return Err(FilterError::InvalidBufferLength { len });
    }
    Ok(())
}

/// A mutable byte slice known to hold whole RGBA pixels.
///
/// Construction validates the length once, so filters applied through it
/// never see a partial pixel.
#[derive(Debug)]
pub struct RgbaBuffer<'a> {
    data: &'a mut [u8],
}

impl<'a> RgbaBuffer<'a> {
    /// Wrap a whole slice.
    pub fn new(data: &'a mut [u8]) -> Result<Self> {
        validate_len(data.len())?;
        Ok(Self { data })
    }

    /// Wrap the first `len` bytes of `data`, the `(buffer, byteLength)` form
    /// hosts use when passing a larger heap region.
    pub fn with_len(data: &'a mut [u8], len: usize) -> Result<Self> {
        let available = data.len();
        if len > available {
            return Err(FilterError::OutOfBounds { len, available });
        }
        Self::new(&mut data[..len])
    }

    /// Wrap a raw pointer and signed length as passed over a C ABI.
    ///
    /// # Safety
    /// When `ptr` is non-null it must address at least `len` writable bytes
    /// that nothing else accesses for the lifetime `'a`.
    pub unsafe fn from_raw_parts(ptr: *mut u8, len: i32) -> Result<Self> {
        if ptr.is_null() {
            return Err(FilterError::NullPointer);
        }
        let len = usize::try_from(len).map_err(|_| FilterError::NegativeLength(len as i64))?;
        validate_len(len)?;
        Ok(Self {
            data: std::slice::from_raw_parts_mut(ptr, len),
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Iterate pixels as 4-byte slices.
    pub fn pixels_mut(&mut self) -> ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    pub fn into_inner(self) -> &'a mut [u8] {
        self.data
    }
}

/// View an `(height, width, 4)` image array as one flat RGBA slice.
///
/// The array must be in standard (row-major, contiguous) layout.
pub fn rgba_slice_mut<'a>(view: ArrayViewMut3<'a, u8>) -> Result<&'a mut [u8]> {
    let (_, _, channels) = view.dim();
    if channels != CHANNELS {
        return Err(FilterError::InvalidShape { channels });
    }
    view.into_slice().ok_or(FilterError::NotContiguous)
}
