use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

/// Continuous affine mapping from a data domain onto a pixel range.
///
/// The range may run backwards (e.g. `[height, 0]` for a y axis whose
/// larger values sit higher on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> StoryResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(StoryError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(StoryError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Replaces the domain, keeping the pixel range.
    pub fn set_domain(&mut self, domain: (f64, f64)) -> StoryResult<()> {
        *self = Self::new(domain, (self.range_start, self.range_end))?;
        Ok(())
    }

    /// Maps a domain value to a pixel position.
    ///
    /// Non-finite input maps to NaN so degenerate data degrades visibly
    /// instead of failing the whole draw pass.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    pub fn invert(self, pixel: f64) -> StoryResult<f64> {
        if !pixel.is_finite() {
            return Err(StoryError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(StoryError::InvalidData(
                "cannot invert a collapsed pixel range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Fits the domain to the data extent, keeping the pixel range.
    pub fn fit_domain_to_extent(&mut self, values: impl Iterator<Item = f64>) -> StoryResult<()> {
        let (min, max) = extent(values)?;
        self.set_domain(normalize_domain(min, max))
    }
}

/// Minimum and maximum of the finite values in an iterator.
///
/// NaN entries are skipped; an iterator with no finite values is an error.
pub fn extent(values: impl Iterator<Item = f64>) -> StoryResult<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
    }

    if min > max {
        return Err(StoryError::InvalidData(
            "extent requires at least one finite value".to_owned(),
        ));
    }

    Ok((min, max))
}

fn normalize_domain(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
