use chrono::NaiveDate;

use crate::core::{LinearScale, MonthScale, PointPx};

/// Projects a dated series through the scales into a pixel polyline.
/// Non-finite values project to NaN points; callers decide whether to
/// keep or drop them.
#[must_use]
pub fn project_series(
    values: &[(NaiveDate, f64)],
    x: &MonthScale,
    y: &LinearScale,
) -> Vec<PointPx> {
    values
        .iter()
        .map(|(month, value)| PointPx::new(x.position(*month), y.position(*value)))
        .collect()
}

/// Total cumulative length of a polyline, skipping segments touching a
/// non-finite point.
#[must_use]
pub fn polyline_length(points: &[PointPx]) -> f64 {
    points
        .windows(2)
        .filter(|pair| pair[0].is_finite() && pair[1].is_finite())
        .map(|pair| pair[0].distance_to(pair[1]))
        .sum()
}

/// Splits a polyline into the runs that lie inside the rectangle from
/// (0, 0) to (width, height), clipping segments at the boundary.
///
/// The multi-year index line keeps every source point even when the
/// date axis zooms into a recent window, so most of it hangs far off
/// the plot; this trims the drawn portion to the visible rectangle.
/// Segments touching a non-finite point are dropped.
#[must_use]
pub fn clip_to_rect(points: &[PointPx], width: f64, height: f64) -> Vec<Vec<PointPx>> {
    let mut runs: Vec<Vec<PointPx>> = Vec::new();
    let mut current: Vec<PointPx> = Vec::new();
    for pair in points.windows(2) {
        let clipped = if pair[0].is_finite() && pair[1].is_finite() {
            clip_segment(pair[0], pair[1], width, height)
        } else {
            None
        };
        match clipped {
            Some((start, end)) => {
                match current.last() {
                    Some(last) if last.distance_to(start) <= 1e-9 => {}
                    Some(_) => {
                        runs.push(std::mem::take(&mut current));
                        current.push(start);
                    }
                    None => current.push(start),
                }
                current.push(end);
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Liang-Barsky clip of one segment against the plot rectangle.
fn clip_segment(a: PointPx, b: PointPx, width: f64, height: f64) -> Option<(PointPx, PointPx)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for (p, q) in [
        (-dx, a.x),
        (dx, width - a.x),
        (-dy, a.y),
        (dy, height - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }
    Some((a.lerp(b, t0), a.lerp(b, t1)))
}

/// Leading part of a polyline covering `fraction` of its cumulative
/// length, with the final point interpolated along the cut segment.
/// This is the draw-in primitive: a line "draws" by growing its prefix.
#[must_use]
pub fn prefix_by_fraction(points: &[PointPx], fraction: f64) -> Vec<PointPx> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let fraction = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if fraction >= 1.0 {
        return points.to_vec();
    }
    if fraction <= 0.0 {
        return vec![points[0]];
    }

    let total = polyline_length(points);
    if total <= 0.0 {
        return points.to_vec();
    }
    let budget = total * fraction;

    let mut walked = 0.0;
    let mut prefix = vec![points[0]];
    for pair in points.windows(2) {
        if !pair[0].is_finite() || !pair[1].is_finite() {
            prefix.push(pair[1]);
            continue;
        }
        let segment = pair[0].distance_to(pair[1]);
        if walked + segment < budget {
            walked += segment;
            prefix.push(pair[1]);
            continue;
        }
        let remainder = budget - walked;
        let t = if segment > 0.0 { remainder / segment } else { 0.0 };
        prefix.push(pair[0].lerp(pair[1], t));
        break;
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::{clip_to_rect, polyline_length, prefix_by_fraction};
    use crate::core::PointPx;

    fn staircase() -> Vec<PointPx> {
        vec![
            PointPx::new(0.0, 0.0),
            PointPx::new(30.0, 0.0),
            PointPx::new(30.0, 40.0),
        ]
    }

    #[test]
    fn length_sums_finite_segments() {
        assert!((polyline_length(&staircase()) - 70.0).abs() <= 1e-9);

        let with_gap = vec![
            PointPx::new(0.0, 0.0),
            PointPx::new(f64::NAN, 0.0),
            PointPx::new(10.0, 0.0),
            PointPx::new(20.0, 0.0),
        ];
        assert!((polyline_length(&with_gap) - 10.0).abs() <= 1e-9);
    }

    #[test]
    fn prefix_interpolates_inside_a_segment() {
        let half = prefix_by_fraction(&staircase(), 0.5);
        assert_eq!(half.len(), 3);
        assert!((half[2].x - 30.0).abs() <= 1e-9);
        assert!((half[2].y - 5.0).abs() <= 1e-9);
    }

    #[test]
    fn prefix_extremes_are_exact() {
        let none = prefix_by_fraction(&staircase(), 0.0);
        assert_eq!(none.len(), 1);
        let all = prefix_by_fraction(&staircase(), 1.0);
        assert_eq!(all, staircase());
        let clamped = prefix_by_fraction(&staircase(), 2.5);
        assert_eq!(clamped, staircase());
    }

    #[test]
    fn clipping_keeps_inside_paths_untouched() {
        let runs = clip_to_rect(&staircase(), 100.0, 100.0);
        assert_eq!(runs, vec![staircase()]);
    }

    #[test]
    fn clipping_cuts_at_the_boundary() {
        let crossing = vec![PointPx::new(-50.0, 10.0), PointPx::new(50.0, 10.0)];
        let runs = clip_to_rect(&crossing, 100.0, 100.0);
        assert_eq!(runs.len(), 1);
        assert!((runs[0][0].x - 0.0).abs() <= 1e-9);
        assert!((runs[0][0].y - 10.0).abs() <= 1e-9);
        assert!((runs[0][1].x - 50.0).abs() <= 1e-9);
    }

    #[test]
    fn leaving_and_reentering_splits_into_runs() {
        let weave = vec![
            PointPx::new(10.0, 10.0),
            PointPx::new(10.0, -20.0),
            PointPx::new(30.0, -20.0),
            PointPx::new(30.0, 10.0),
        ];
        let runs = clip_to_rect(&weave, 100.0, 100.0);
        assert_eq!(runs.len(), 2);
        assert!((runs[0][1].y - 0.0).abs() <= 1e-9);
        assert!((runs[1][0].y - 0.0).abs() <= 1e-9);
        assert!((runs[1][1].y - 10.0).abs() <= 1e-9);
    }

    #[test]
    fn fully_outside_paths_clip_to_nothing() {
        let outside = vec![PointPx::new(-10.0, -10.0), PointPx::new(-5.0, -20.0)];
        assert!(clip_to_rect(&outside, 100.0, 100.0).is_empty());
    }
}
