use chrono::{Datelike, NaiveDate};

use crate::core::month::format_month_label;
use crate::core::{LinearScale, MonthScale};

/// Target pixel spacing between adjacent ticks.
const TICK_SPACING_PX: f64 = 60.0;

const SQRT50: f64 = 7.071_067_811_865_475_5;
const SQRT10: f64 = 3.162_277_660_168_379_5;
const SQRT2: f64 = std::f64::consts::SQRT_2;

/// One axis tick: pixel position plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// "Nice" step (1/2/5 times a power of ten) that splits the span into
/// roughly `count` intervals.
fn tick_step(span: f64, count: usize) -> f64 {
    let step = span / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= SQRT50 {
        10.0
    } else if error >= SQRT10 {
        5.0
    } else if error >= SQRT2 {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

fn decimals_for(step: f64) -> usize {
    if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

fn nice_step_for(domain: (f64, f64), range_px: f64) -> Option<f64> {
    let span = (domain.1 - domain.0).abs();
    if !span.is_finite() || span <= 0.0 {
        return None;
    }
    let target = ((range_px.abs() / TICK_SPACING_PX).round() as usize).max(2);
    Some(tick_step(span, target))
}

/// Nice round tick values covering the domain.
#[must_use]
pub fn linear_ticks(domain: (f64, f64), range_px: f64) -> Vec<f64> {
    let Some(step) = nice_step_for(domain, range_px) else {
        return Vec::new();
    };
    let (low, high) = if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    };
    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Ticks with formatted labels for a linear value axis.
#[must_use]
pub fn linear_axis_ticks(scale: &LinearScale) -> Vec<Tick> {
    let (range_start, range_end) = scale.range();
    let range_px = range_end - range_start;
    let Some(step) = nice_step_for(scale.domain(), range_px) else {
        return Vec::new();
    };
    let decimals = decimals_for(step);
    linear_ticks(scale.domain(), range_px)
        .into_iter()
        .map(|value| {
            // avoid the "-0" label
            let value = if value == 0.0 { 0.0 } else { value };
            Tick {
                position: scale.position(value),
                label: format!("{value:.decimals$}"),
            }
        })
        .collect()
}

/// Month-boundary ticks with `yy-Mon` labels for a date axis.
///
/// A span of roughly a year labels every month; longer spans fall back
/// to January ticks, stepped so labels keep close to the target spacing.
#[must_use]
pub fn month_axis_ticks(scale: &MonthScale) -> Vec<Tick> {
    let months = scale.month_ticks();
    let (range_start, range_end) = scale.range();
    let target = (((range_end - range_start).abs() / TICK_SPACING_PX).round() as usize).max(2);

    let kept: Vec<NaiveDate> = if months.len() <= target + 2 {
        months
    } else {
        let januaries: Vec<NaiveDate> = months
            .into_iter()
            .filter(|month| month.month() == 1)
            .collect();
        let stride = (januaries.len() / target).max(1);
        januaries.into_iter().step_by(stride).collect()
    };

    kept.into_iter()
        .map(|month| Tick {
            position: scale.position(month),
            label: format_month_label(month),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{linear_axis_ticks, linear_ticks, month_axis_ticks};
    use crate::core::{LinearScale, MonthScale};

    #[test]
    fn ticks_land_on_round_values() {
        let ticks = linear_ticks((0.0, 30.0), 600.0);
        assert!(!ticks.is_empty());
        assert!((ticks[0] - 0.0).abs() <= 1e-9);
        let step = ticks[1] - ticks[0];
        for pair in ticks.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() <= 1e-9);
        }
        assert!(*ticks.last().expect("last tick") <= 30.0 + 1e-9);
    }

    #[test]
    fn fractional_domains_get_fractional_labels() {
        let scale = LinearScale::new((-0.05, 0.17), (450.0, 0.0)).expect("scale");
        let ticks = linear_axis_ticks(&scale);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().any(|tick| tick.label.contains('.')));
        assert!(ticks.iter().all(|tick| !tick.label.starts_with("-0.00")));
    }

    #[test]
    fn degenerate_domain_yields_no_ticks() {
        assert!(linear_ticks((3.0, 3.0), 600.0).is_empty());
        assert!(linear_ticks((f64::NAN, 1.0), 600.0).is_empty());
    }

    #[test]
    fn short_date_spans_label_every_month() {
        let date = |m| NaiveDate::from_ymd_opt(2022, m, 1).expect("date");
        let scale = MonthScale::new((date(1), date(12)), (0.0, 600.0)).expect("scale");
        let ticks = month_axis_ticks(&scale);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "22-Jan");
        assert_eq!(ticks[11].label, "22-Dec");
    }

    #[test]
    fn long_date_spans_fall_back_to_stepped_januaries() {
        let start = NaiveDate::from_ymd_opt(1995, 1, 1).expect("date");
        let end = NaiveDate::from_ymd_opt(2022, 12, 1).expect("date");
        let scale = MonthScale::new((start, end), (0.0, 600.0)).expect("scale");
        let ticks = month_axis_ticks(&scale);
        assert!(ticks.len() <= 15);
        assert!(ticks.iter().all(|tick| tick.label.ends_with("Jan")));
        assert_eq!(ticks[0].label, "95-Jan");
    }
}
