use crate::core::scale::extent;
use crate::core::{LinearScale, PointPx};
use crate::error::StoryResult;
use crate::scene::SymbolShape;

/// Extent of `values` widened by `padding` on both ends, for axes that
/// should not pin data to the plot edge.
pub fn padded_extent(values: impl Iterator<Item = f64>, padding: f64) -> StoryResult<(f64, f64)> {
    let (min, max) = extent(values)?;
    Ok((min - padding, max + padding))
}

/// Pixel position of one (expenses, income) pair.
#[must_use]
pub fn dot_position(x: &LinearScale, y: &LinearScale, expenses: f64, income: f64) -> PointPx {
    PointPx::new(x.position(expenses), y.position(income))
}

/// Endpoints of the `y = x` reference rule, spanning the x domain with
/// the same values pushed through both scales.
#[must_use]
pub fn diagonal_rule(x: &LinearScale, y: &LinearScale) -> (PointPx, PointPx) {
    let (start, end) = x.domain();
    (
        PointPx::new(x.position(start), y.position(start)),
        PointPx::new(x.position(end), y.position(end)),
    )
}

/// Outline vertices for the non-circular markers, centered on (cx, cy)
/// with `size` as the circumscribed-circle diameter. Circles render as
/// circle primitives and have no outline.
#[must_use]
pub fn symbol_outline(shape: SymbolShape, cx: f64, cy: f64, size: f64) -> Vec<PointPx> {
    let half = size / 2.0;
    match shape {
        SymbolShape::Circle => Vec::new(),
        SymbolShape::Square => {
            let side = half * std::f64::consts::FRAC_1_SQRT_2 * 2.0;
            let s = side / 2.0;
            vec![
                PointPx::new(cx - s, cy - s),
                PointPx::new(cx + s, cy - s),
                PointPx::new(cx + s, cy + s),
                PointPx::new(cx - s, cy + s),
            ]
        }
        SymbolShape::Triangle => {
            let dx = half * (3.0f64.sqrt() / 2.0);
            vec![
                PointPx::new(cx, cy - half),
                PointPx::new(cx + dx, cy + half / 2.0),
                PointPx::new(cx - dx, cy + half / 2.0),
            ]
        }
        SymbolShape::TriangleDown => {
            let dx = half * (3.0f64.sqrt() / 2.0);
            vec![
                PointPx::new(cx, cy + half),
                PointPx::new(cx - dx, cy - half / 2.0),
                PointPx::new(cx + dx, cy - half / 2.0),
            ]
        }
    }
}
