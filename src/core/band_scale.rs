use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

/// Ordinal scale that splits a pixel range into evenly sized bands.
///
/// Band order follows domain insertion order; `padding_inner` is the gap
/// between adjacent bands as a fraction of the band step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
}

impl BandScale {
    pub fn new(
        keys: impl IntoIterator<Item = String>,
        range: (f64, f64),
        padding_inner: f64,
    ) -> StoryResult<Self> {
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(StoryError::InvalidData(
                "band scale range must be finite and non-degenerate".to_owned(),
            ));
        }
        if !padding_inner.is_finite() || !(0.0..1.0).contains(&padding_inner) {
            return Err(StoryError::InvalidData(
                "band scale inner padding must be in [0, 1)".to_owned(),
            ));
        }

        let mut domain = IndexSet::new();
        for key in keys {
            if !domain.insert(key.clone()) {
                return Err(StoryError::InvalidData(format!(
                    "band scale domain has duplicate key `{key}`"
                )));
            }
        }
        if domain.is_empty() {
            return Err(StoryError::InvalidData(
                "band scale domain must not be empty".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start: range.0,
            range_end: range.1,
            padding_inner,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    /// Replaces the domain order, keeping range and padding.
    ///
    /// Used by reordering transitions: the same keys in a new order move
    /// every band to a new position.
    pub fn set_domain(&mut self, keys: impl IntoIterator<Item = String>) -> StoryResult<()> {
        let replacement = Self::new(
            keys,
            (self.range_start, self.range_end),
            self.padding_inner,
        )?;
        *self = replacement;
        Ok(())
    }

    fn step(&self) -> f64 {
        let count = self.domain.len() as f64;
        let span = self.range_end - self.range_start;
        // The span covers n bands separated by n-1 inner gaps, so one step
        // (band + gap) is span / (n - padding_inner).
        span / (count - self.padding_inner).max(1.0)
    }

    /// Leading edge of the band for `key`, or NaN when `key` is unknown.
    #[must_use]
    pub fn position(&self, key: &str) -> f64 {
        match self.domain.get_index_of(key) {
            Some(index) => self.range_start + self.step() * index as f64,
            None => f64::NAN,
        }
    }

    /// Width of one band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::BandScale;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn bands_partition_the_range_without_padding() {
        let scale =
            BandScale::new(keys(&["a", "b", "c", "d"]), (0.0, 400.0), 0.0).expect("band scale");
        assert!((scale.position("a") - 0.0).abs() <= 1e-9);
        assert!((scale.position("c") - 200.0).abs() <= 1e-9);
        assert!((scale.bandwidth() - 100.0).abs() <= 1e-9);
    }

    #[test]
    fn inner_padding_shrinks_bands_but_not_the_span() {
        let scale = BandScale::new(keys(&["a", "b"]), (0.0, 190.0), 0.1).expect("band scale");
        let step = 190.0 / 1.9;
        assert!((scale.position("b") - step).abs() <= 1e-9);
        assert!((scale.bandwidth() - step * 0.9).abs() <= 1e-9);
        assert!((scale.position("b") + scale.bandwidth() - 190.0).abs() <= 1e-9);
    }

    #[test]
    fn unknown_key_maps_to_nan() {
        let scale = BandScale::new(keys(&["a"]), (0.0, 100.0), 0.0).expect("band scale");
        assert!(scale.position("zzz").is_nan());
    }

    #[test]
    fn reordering_the_domain_moves_bands() {
        let mut scale =
            BandScale::new(keys(&["a", "b", "c"]), (0.0, 300.0), 0.0).expect("band scale");
        let before = scale.position("c");
        scale
            .set_domain(keys(&["c", "a", "b"]))
            .expect("reorder domain");
        assert!((scale.position("c") - 0.0).abs() <= 1e-9);
        assert!((before - 200.0).abs() <= 1e-9);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = BandScale::new(keys(&["a", "a"]), (0.0, 100.0), 0.0);
        assert!(result.is_err());
    }
}
