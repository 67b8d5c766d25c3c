//! Filter catalog and name-based dispatch.
//!
//! [`FilterKind`] enumerates the transforms in their canonical application
//! order and carries the UI metadata hosts display (label, slider range,
//! default). [`Filter`] pairs a kind with concrete parameters so a filter can
//! be stored, serialized, or applied later.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::filters::{self, core::RgbaBuffer, core::validate_len};

/// Which operation family a filter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Tone,
    Color,
    Stylize,
}

/// Advisory slider range for one filter parameter.
///
/// Kernels accept any value; these bounds only describe the useful range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParamRange {
    const fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self { min, max, step, default }
    }

    /// True when `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

const UNIT: ParamRange = ParamRange::new(0.0, 1.0, 0.01, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Invert,
    Grayscale,
    Brightness,
    Contrast,
    Gamma,
    Sepia,
    Saturation,
    Tint,
    Temperature,
    Fade,
    Solarize,
}

impl FilterKind {
    /// Every filter, in the order a settings pipeline applies them.
    pub const ALL: [FilterKind; 11] = [
        FilterKind::Invert,
        FilterKind::Grayscale,
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Gamma,
        FilterKind::Sepia,
        FilterKind::Saturation,
        FilterKind::Tint,
        FilterKind::Temperature,
        FilterKind::Fade,
        FilterKind::Solarize,
    ];

    /// Lowercase key used for dispatch and serialization.
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Invert => "invert",
            FilterKind::Grayscale => "grayscale",
            FilterKind::Brightness => "brightness",
            FilterKind::Contrast => "contrast",
            FilterKind::Gamma => "gamma",
            FilterKind::Sepia => "sepia",
            FilterKind::Saturation => "saturation",
            FilterKind::Tint => "tint",
            FilterKind::Temperature => "temperature",
            FilterKind::Fade => "fade",
            FilterKind::Solarize => "solarize",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Invert => "Invert",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Brightness => "Brightness",
            FilterKind::Contrast => "Contrast",
            FilterKind::Gamma => "Gamma",
            FilterKind::Sepia => "Sepia",
            FilterKind::Saturation => "Saturation",
            FilterKind::Tint => "Tint",
            FilterKind::Temperature => "Temperature",
            FilterKind::Fade => "Fade",
            FilterKind::Solarize => "Solarize",
        }
    }

    pub fn family(self) -> Family {
        match self {
            FilterKind::Invert
            | FilterKind::Grayscale
            | FilterKind::Brightness
            | FilterKind::Contrast
            | FilterKind::Gamma => Family::Tone,
            FilterKind::Sepia
            | FilterKind::Saturation
            | FilterKind::Tint
            | FilterKind::Temperature => Family::Color,
            FilterKind::Fade | FilterKind::Solarize => Family::Stylize,
        }
    }

    /// Slider range and default. For tint the range applies to each channel.
    pub fn range(self) -> ParamRange {
        match self {
            FilterKind::Invert
            | FilterKind::Grayscale
            | FilterKind::Sepia
            | FilterKind::Fade => UNIT,
            FilterKind::Brightness => ParamRange::new(-100.0, 100.0, 1.0, 0.0),
            FilterKind::Contrast => ParamRange::new(0.5, 2.5, 0.01, 1.0),
            FilterKind::Gamma => ParamRange::new(0.5, 2.0, 0.01, 1.0),
            FilterKind::Saturation => ParamRange::new(0.0, 2.0, 0.01, 1.0),
            FilterKind::Tint => ParamRange::new(-255.0, 255.0, 1.0, 0.0),
            FilterKind::Temperature => ParamRange::new(-1.0, 1.0, 0.01, 0.0),
            // Default 0 means "off" to a pipeline, which skips defaults. The
            // kernel itself at 0 inverts every channel above black.
            FilterKind::Solarize => UNIT,
        }
    }

    /// Number of scalar parameters the filter takes.
    pub fn arity(self) -> usize {
        match self {
            FilterKind::Tint => 3,
            _ => 1,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Case-insensitive. A leading underscore (`_invert`, the exported-symbol
    /// spelling) is accepted.
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        let key = key.strip_prefix('_').unwrap_or(key);
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// A filter together with its parameters.
///
/// Serializes as `{"type": "<name>", "value": ...}`, the same shape hosts use
/// for filter messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Filter {
    Invert(f32),
    Grayscale(f32),
    Brightness(i32),
    Contrast(f32),
    Gamma(f32),
    Sepia(f32),
    Saturation(f32),
    Tint { r: i32, g: i32, b: i32 },
    Temperature(f32),
    Fade(f32),
    Solarize(f32),
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Invert(_) => FilterKind::Invert,
            Filter::Grayscale(_) => FilterKind::Grayscale,
            Filter::Brightness(_) => FilterKind::Brightness,
            Filter::Contrast(_) => FilterKind::Contrast,
            Filter::Gamma(_) => FilterKind::Gamma,
            Filter::Sepia(_) => FilterKind::Sepia,
            Filter::Saturation(_) => FilterKind::Saturation,
            Filter::Tint { .. } => FilterKind::Tint,
            Filter::Temperature(_) => FilterKind::Temperature,
            Filter::Fade(_) => FilterKind::Fade,
            Filter::Solarize(_) => FilterKind::Solarize,
        }
    }

    /// The filter of `kind` set to its catalog default.
    pub fn default_for(kind: FilterKind) -> Filter {
        Filter::from_scalar(kind, kind.range().default)
    }

    /// True when the parameters equal the catalog default.
    pub fn is_default(&self) -> bool {
        *self == Filter::default_for(self.kind())
    }

    fn from_scalar(kind: FilterKind, v: f64) -> Filter {
        let f = v as f32;
        match kind {
            FilterKind::Invert => Filter::Invert(f),
            FilterKind::Grayscale => Filter::Grayscale(f),
            FilterKind::Brightness => Filter::Brightness(v as i32),
            FilterKind::Contrast => Filter::Contrast(f),
            FilterKind::Gamma => Filter::Gamma(f),
            FilterKind::Sepia => Filter::Sepia(f),
            FilterKind::Saturation => Filter::Saturation(f),
            FilterKind::Tint => Filter::Tint { r: v as i32, g: v as i32, b: v as i32 },
            FilterKind::Temperature => Filter::Temperature(f),
            FilterKind::Fade => Filter::Fade(f),
            FilterKind::Solarize => Filter::Solarize(f),
        }
    }

    /// Build a filter from the generic `(kind, values)` form.
    ///
    /// Tint reads three values (r, g, b); every other kind reads one. Extra
    /// values are ignored. Integer parameters truncate toward zero.
    pub fn from_values(kind: FilterKind, values: &[f64]) -> Result<Filter> {
        let expected = kind.arity();
        if values.len() < expected {
            return Err(FilterError::MissingParameter {
                filter: kind.name(),
                expected,
                got: values.len(),
            });
        }
        Ok(match kind {
            FilterKind::Tint => Filter::Tint {
                r: values[0] as i32,
                g: values[1] as i32,
                b: values[2] as i32,
            },
            _ => Filter::from_scalar(kind, values[0]),
        })
    }

    /// Run the kernel on `data` without checking its length.
    ///
    /// Trailing bytes past the last whole pixel are left alone.
    pub fn apply_unchecked(&self, data: &mut [u8]) {
        match *self {
            Filter::Invert(amount) => filters::invert(data, amount),
            Filter::Grayscale(amount) => filters::grayscale(data, amount),
            Filter::Brightness(delta) => filters::brightness(data, delta),
            Filter::Contrast(factor) => filters::contrast(data, factor),
            Filter::Gamma(exponent) => filters::gamma(data, exponent),
            Filter::Sepia(amount) => filters::sepia(data, amount),
            Filter::Saturation(factor) => filters::saturation(data, factor),
            Filter::Tint { r, g, b } => filters::tint(data, r, g, b),
            Filter::Temperature(warmth) => filters::temperature(data, warmth),
            Filter::Fade(amount) => filters::fade(data, amount),
            Filter::Solarize(threshold) => filters::solarize(data, threshold),
        }
    }

    /// Validate `data` as whole RGBA pixels, then apply.
    pub fn apply(&self, data: &mut [u8]) -> Result<()> {
        validate_len(data.len())?;
        self.apply_unchecked(data);
        Ok(())
    }

    /// Apply to an already validated buffer.
    pub fn apply_to(&self, buffer: &mut RgbaBuffer<'_>) {
        self.apply_unchecked(buffer.as_mut_slice());
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Filter::Invert(v)
            | Filter::Grayscale(v)
            | Filter::Contrast(v)
            | Filter::Gamma(v)
            | Filter::Sepia(v)
            | Filter::Saturation(v)
            | Filter::Temperature(v)
            | Filter::Fade(v)
            | Filter::Solarize(v) => write!(f, "{}({})", self.kind(), v),
            Filter::Brightness(v) => write!(f, "brightness({})", v),
            Filter::Tint { r, g, b } => write!(f, "tint({}, {}, {})", r, g, b),
        }
    }
}

/// Look up a filter by name, build it from `values`, and apply it.
pub fn apply_by_name(data: &mut [u8], name: &str, values: &[f64]) -> Result<Filter> {
    let kind: FilterKind = name.parse()?;
    let filter = Filter::from_values(kind, values)?;
    filter.apply(data)?;
    log::debug!("applied {} to {} pixels", filter, data.len() / filters::core::CHANNELS);
    Ok(filter)
}

/// Catalog entry as exposed to hosts.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub family: Family,
    pub arity: usize,
    #[serde(flatten)]
    pub range: ParamRange,
}

/// The full catalog in application order.
pub fn catalog() -> Vec<CatalogEntry> {
    FilterKind::ALL
        .into_iter()
        .map(|kind| CatalogEntry {
            key: kind.name(),
            label: kind.label(),
            family: kind.family(),
            arity: kind.arity(),
            range: kind.range(),
        })
        .collect()
}
