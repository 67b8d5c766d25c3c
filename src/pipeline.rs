//! Ordered application of a full set of filter values.
//!
//! A [`FilterSettings`] holds one value per filter. Applying it runs every
//! filter whose value differs from its catalog default, in catalog order, on
//! the same buffer. Settings round-trip through JSON so hosts can persist or
//! send them as a single document.
//!
//! [`RenderJobs`] numbers renders so a host re-rendering on every slider move
//! can drop results that a newer render has already superseded.

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::{Filter, FilterKind};
use crate::error::Result;
use crate::filters::core::{validate_len, CHANNELS};

/// One value per filter. Missing JSON fields take the catalog default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSettings {
    pub invert: f32,
    pub grayscale: f32,
    pub brightness: i32,
    pub contrast: f32,
    pub gamma: f32,
    pub sepia: f32,
    pub saturation: f32,
    pub tint: [i32; 3],
    pub temperature: f32,
    pub fade: f32,
    pub solarize: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        let mut settings = Self {
            invert: 0.0,
            grayscale: 0.0,
            brightness: 0,
            contrast: 0.0,
            gamma: 0.0,
            sepia: 0.0,
            saturation: 0.0,
            tint: [0; 3],
            temperature: 0.0,
            fade: 0.0,
            solarize: 0.0,
        };
        for kind in FilterKind::ALL {
            settings.set(Filter::default_for(kind));
        }
        settings
    }
}

impl FilterSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The filter for `kind` with the value currently held.
    pub fn get(&self, kind: FilterKind) -> Filter {
        match kind {
            FilterKind::Invert => Filter::Invert(self.invert),
            FilterKind::Grayscale => Filter::Grayscale(self.grayscale),
            FilterKind::Brightness => Filter::Brightness(self.brightness),
            FilterKind::Contrast => Filter::Contrast(self.contrast),
            FilterKind::Gamma => Filter::Gamma(self.gamma),
            FilterKind::Sepia => Filter::Sepia(self.sepia),
            FilterKind::Saturation => Filter::Saturation(self.saturation),
            FilterKind::Tint => {
                let [r, g, b] = self.tint;
                Filter::Tint { r, g, b }
            }
            FilterKind::Temperature => Filter::Temperature(self.temperature),
            FilterKind::Fade => Filter::Fade(self.fade),
            FilterKind::Solarize => Filter::Solarize(self.solarize),
        }
    }

    /// Store the parameters of `filter` in the matching field.
    pub fn set(&mut self, filter: Filter) {
        match filter {
            Filter::Invert(v) => self.invert = v,
            Filter::Grayscale(v) => self.grayscale = v,
            Filter::Brightness(v) => self.brightness = v,
            Filter::Contrast(v) => self.contrast = v,
            Filter::Gamma(v) => self.gamma = v,
            Filter::Sepia(v) => self.sepia = v,
            Filter::Saturation(v) => self.saturation = v,
            Filter::Tint { r, g, b } => self.tint = [r, g, b],
            Filter::Temperature(v) => self.temperature = v,
            Filter::Fade(v) => self.fade = v,
            Filter::Solarize(v) => self.solarize = v,
        }
    }

    /// Set a filter from the generic `(name, values)` form.
    pub fn set_by_name(&mut self, name: &str, values: &[f64]) -> Result<Filter> {
        let filter = Filter::from_values(name.parse()?, values)?;
        self.set(filter);
        Ok(filter)
    }

    /// Put `kind` back to its catalog default.
    pub fn reset(&mut self, kind: FilterKind) {
        self.set(Filter::default_for(kind));
    }

    /// Filters that differ from their defaults, in application order.
    pub fn active_filters(&self) -> Vec<Filter> {
        FilterKind::ALL
            .into_iter()
            .map(|kind| self.get(kind))
            .filter(|filter| !filter.is_default())
            .collect()
    }

    /// True when applying these settings would run no filter at all.
    pub fn is_neutral(&self) -> bool {
        FilterKind::ALL.into_iter().all(|kind| self.get(kind).is_default())
    }

    /// Apply every active filter to `data` in order.
    ///
    /// The length is validated once up front; on error the buffer is
    /// untouched. Returns the filters that ran.
    pub fn apply(&self, data: &mut [u8]) -> Result<Vec<Filter>> {
        validate_len(data.len())?;
        let active = self.active_filters();
        log::debug!(
            "applying {} filter(s) to {} pixels",
            active.len(),
            data.len() / CHANNELS
        );
        for filter in &active {
            filter.apply_unchecked(data);
            log::trace!("applied {}", filter);
        }
        Ok(active)
    }

    /// Copy `base` and apply these settings to the copy.
    pub fn render(&self, base: &[u8]) -> Result<Vec<u8>> {
        validate_len(base.len())?;
        let mut out = base.to_vec();
        self.apply(&mut out)?;
        Ok(out)
    }
}

/// Apply `settings` to many independent buffers in parallel.
///
/// Every buffer is validated before any is modified.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_batch<B>(buffers: &mut [B], settings: &FilterSettings) -> Result<()>
where
    B: AsMut<[u8]> + Send,
{
    buffers
        .iter_mut()
        .try_for_each(|buf| validate_len(buf.as_mut().len()))?;

    let active = settings.active_filters();
    log::debug!(
        "applying {} filter(s) to {} buffers",
        active.len(),
        buffers.len()
    );
    buffers.par_iter_mut().for_each(|buf| {
        let data = buf.as_mut();
        for filter in &active {
            filter.apply_unchecked(data);
        }
    });
    Ok(())
}

// ============================================================================
// Render Jobs
// ============================================================================

/// Identifier of one render, increasing with every [`RenderJobs::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(u64);

impl JobId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Tracks the newest render so stale results can be dropped.
#[derive(Debug, Default)]
pub struct RenderJobs {
    latest: AtomicU64,
}

impl RenderJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new job. Every job started earlier becomes stale.
    pub fn begin(&self) -> JobId {
        let job = JobId(self.latest.fetch_add(1, Ordering::AcqRel) + 1);
        log::debug!("starting render job #{}", job.0);
        job
    }

    /// The most recently started job, if any.
    pub fn latest(&self) -> Option<JobId> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            n => Some(JobId(n)),
        }
    }

    pub fn is_current(&self, job: JobId) -> bool {
        self.latest.load(Ordering::Acquire) == job.0
    }

    /// Hand back `result` if `job` is still the newest, otherwise drop it.
    pub fn finish<T>(&self, job: JobId, result: T) -> Option<T> {
        let latest = self.latest.load(Ordering::Acquire);
        if latest == job.0 {
            log::debug!("render job #{} completed", job.0);
            Some(result)
        } else {
            log::warn!("render job #{} discarded (newer job #{} exists)", job.0, latest);
            None
        }
    }

    /// Render `base` with `settings` as a new job.
    ///
    /// `Ok(None)` means another job started while this one ran.
    pub fn render(&self, settings: &FilterSettings, base: &[u8]) -> Result<Option<Vec<u8>>> {
        let job = self.begin();
        let out = settings.render(base)?;
        Ok(self.finish(job, out))
    }
}
