//! In-place filters for interleaved RGBA8 buffers.
//!
//! ## Buffer Format
//!
//! | Layout | Element | Length | Description |
//! |--------|---------|--------|-------------|
//! | RGBA8 | u8 | multiple of 4 | `[R, G, B, A, R, G, B, A, ...]`, 0-255 |
//!
//! Every filter takes `&mut [u8]` followed by its parameters and rewrites the
//! buffer in one linear pass. Nothing is allocated and nothing is retained.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **In place** - The caller's buffer is the output
//! - **Alpha preservation** - Byte 3 of every pixel is never written
//! - **Total** - Any parameter value gives clamped, defined output
//! - **Stateless** - No globals; separate buffers may be filtered concurrently
//!
//! Length validation happens once at the boundary (see [`core::RgbaBuffer`]),
//! not inside the kernels.
//!
//! ## Filter Families
//!
//! - **Tone**: invert, grayscale, brightness, contrast, gamma
//! - **Color**: sepia, saturation, tint, temperature
//! - **Stylize**: fade, solarize

pub mod core;
pub mod color_adjust;
pub mod grayscale;
pub mod color_science;
pub mod stylize;

pub use self::color_adjust::{brightness, contrast, gamma, invert};
pub use self::color_science::{saturation, sepia, temperature, tint};
pub use self::grayscale::grayscale;
pub use self::stylize::{fade, solarize};
