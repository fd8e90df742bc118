use crate::core::{BandScale, LinearScale};

/// Pixel rectangle for one horizontal bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Forward bar growing rightward from the value axis origin.
#[must_use]
pub fn funding_bar(bands: &BandScale, values: &LinearScale, key: &str, value: f64) -> BarRect {
    let origin = values.position(0.0);
    let end = values.position(value);
    BarRect {
        x: origin.min(end),
        y: bands.position(key),
        width: (end - origin).abs(),
        height: bands.bandwidth(),
    }
}

/// Right-aligned cost bar spanning `funding - cost .. funding`, so the
/// two bars meet where the money runs out. `cost = 0` collapses it to a
/// zero-width anchor at `funding`, which is the hidden state.
#[must_use]
pub fn cost_bar(
    bands: &BandScale,
    values: &LinearScale,
    key: &str,
    funding: f64,
    cost: f64,
) -> BarRect {
    let left = values.position(funding - cost);
    let right = values.position(funding);
    BarRect {
        x: left.min(right),
        y: bands.position(key),
        width: (right - left).abs(),
        height: bands.bandwidth(),
    }
}
