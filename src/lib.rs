//! PixelFX
//!
//! In-place color filters for RGBA8 pixel buffers, with Python bindings via
//! PyO3, WASM bindings for JavaScript and an optional C ABI.
//!
//! ## Image Format
//! Every filter works on interleaved 8-bit RGBA:
//! - **Flat**: `[R, G, B, A, ...]`, length a multiple of 4
//! - **NumPy**: (height, width, 4) `uint8`, C-contiguous
//!
//! Alpha is never modified.
//!
//! ## Layers
//! - [`filters`] - the eleven kernels and the clamp primitive
//! - [`catalog`] - filter names, parameter ranges and the [`Filter`] value type
//! - [`pipeline`] - ordered application of a full [`FilterSettings`]
//! - bindings - `python`, `wasm` and `ffi` features

pub mod catalog;
pub mod error;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "ffi")]
pub mod ffi;

pub use catalog::{apply_by_name, CatalogEntry, Family, Filter, FilterKind, ParamRange};
pub use error::{FilterError, Result};
pub use filters::core::{clamp, RgbaBuffer, CHANNELS};
pub use pipeline::{FilterSettings, JobId, RenderJobs};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::PyReadwriteArray3;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::catalog::{self, Filter};
    use crate::error::FilterError;
    use crate::filters::core::rgba_slice_mut;
    use crate::pipeline::FilterSettings;

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Run `filter` on a (height, width, 4) uint8 array in place.
    fn apply_in_place(mut image: PyReadwriteArray3<'_, u8>, filter: Filter) -> PyResult<()> {
        let data = rgba_slice_mut(image.as_array_mut())?;
        filter.apply_unchecked(data);
        Ok(())
    }

    // ========================================================================
    // Tone Filters
    // ========================================================================

    /// Invert colors. `amount` 0.0 = no change, 1.0 = full negative.
    #[pyfunction]
    pub fn invert<'py>(image: PyReadwriteArray3<'py, u8>, amount: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Invert(amount))
    }

    /// Blend toward the unweighted channel mean.
    #[pyfunction]
    pub fn grayscale<'py>(image: PyReadwriteArray3<'py, u8>, amount: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Grayscale(amount))
    }

    #[pyfunction]
    pub fn brightness<'py>(image: PyReadwriteArray3<'py, u8>, delta: i32) -> PyResult<()> {
        apply_in_place(image, Filter::Brightness(delta))
    }

    #[pyfunction]
    pub fn contrast<'py>(image: PyReadwriteArray3<'py, u8>, factor: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Contrast(factor))
    }

    #[pyfunction]
    pub fn gamma<'py>(image: PyReadwriteArray3<'py, u8>, exponent: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Gamma(exponent))
    }

    // ========================================================================
    // Color Filters
    // ========================================================================

    #[pyfunction]
    pub fn sepia<'py>(image: PyReadwriteArray3<'py, u8>, amount: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Sepia(amount))
    }

    #[pyfunction]
    pub fn saturation<'py>(image: PyReadwriteArray3<'py, u8>, factor: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Saturation(factor))
    }

    /// Add per-channel offsets to R, G and B.
    #[pyfunction]
    #[pyo3(signature = (image, r=0, g=0, b=0))]
    pub fn tint<'py>(image: PyReadwriteArray3<'py, u8>, r: i32, g: i32, b: i32) -> PyResult<()> {
        apply_in_place(image, Filter::Tint { r, g, b })
    }

    #[pyfunction]
    pub fn temperature<'py>(image: PyReadwriteArray3<'py, u8>, warmth: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Temperature(warmth))
    }

    // ========================================================================
    // Stylize Filters
    // ========================================================================

    #[pyfunction]
    pub fn fade<'py>(image: PyReadwriteArray3<'py, u8>, amount: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Fade(amount))
    }

    /// Invert channels above `threshold * 255`.
    #[pyfunction]
    pub fn solarize<'py>(image: PyReadwriteArray3<'py, u8>, threshold: f32) -> PyResult<()> {
        apply_in_place(image, Filter::Solarize(threshold))
    }

    // ========================================================================
    // Dispatch & Settings
    // ========================================================================

    /// Apply a filter by name, e.g. `apply_filter(img, "tint", [10, 0, -10])`.
    ///
    /// Returns the applied filter in display form.
    #[pyfunction]
    pub fn apply_filter<'py>(
        image: PyReadwriteArray3<'py, u8>,
        name: &str,
        values: Vec<f64>,
    ) -> PyResult<String> {
        let filter = Filter::from_values(name.parse()?, &values)?;
        apply_in_place(image, filter)?;
        Ok(filter.to_string())
    }

    /// Apply every non-default filter in a JSON settings document.
    ///
    /// Returns the names of the filters that ran, in order.
    #[pyfunction]
    pub fn apply_settings<'py>(
        mut image: PyReadwriteArray3<'py, u8>,
        settings_json: &str,
    ) -> PyResult<Vec<String>> {
        let settings = FilterSettings::from_json(settings_json)?;
        let data = rgba_slice_mut(image.as_array_mut())?;
        let ran = settings.apply(data)?;
        Ok(ran.iter().map(|f| f.kind().name().to_string()).collect())
    }

    /// The filter catalog as a JSON array.
    #[pyfunction]
    pub fn filter_catalog() -> PyResult<String> {
        serde_json::to_string(&catalog::catalog()).map_err(|e| FilterError::from(e).into())
    }

    /// PixelFX extension module
    #[pymodule]
    pub fn pixelfx(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Tone filters
        m.add_function(wrap_pyfunction!(invert, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(brightness, m)?)?;
        m.add_function(wrap_pyfunction!(contrast, m)?)?;
        m.add_function(wrap_pyfunction!(gamma, m)?)?;

        // Color filters
        m.add_function(wrap_pyfunction!(sepia, m)?)?;
        m.add_function(wrap_pyfunction!(saturation, m)?)?;
        m.add_function(wrap_pyfunction!(tint, m)?)?;
        m.add_function(wrap_pyfunction!(temperature, m)?)?;

        // Stylize filters
        m.add_function(wrap_pyfunction!(fade, m)?)?;
        m.add_function(wrap_pyfunction!(solarize, m)?)?;

        // Dispatch & settings
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(apply_settings, m)?)?;
        m.add_function(wrap_pyfunction!(filter_catalog, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelfx;
