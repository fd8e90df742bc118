use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized transition progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    QuadInOut,
    #[default]
    CubicInOut,
    CubicOut,
}

impl Easing {
    /// Maps raw progress in [0, 1] through the curve. Input is clamped;
    /// non-finite input is treated as 0.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if !t.is_finite() {
            return 0.0;
        }
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled / 2.0
                } else {
                    let u = doubled - 1.0;
                    (u * (2.0 - u) + 1.0) / 2.0
                }
            }
            Self::CubicInOut => {
                let doubled = t * 2.0;
                if doubled <= 1.0 {
                    doubled * doubled * doubled / 2.0
                } else {
                    let u = doubled - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    #[test]
    fn every_curve_is_anchored_at_zero_and_one() {
        for easing in [
            Easing::Linear,
            Easing::QuadInOut,
            Easing::CubicInOut,
            Easing::CubicOut,
        ] {
            assert!((easing.apply(0.0) - 0.0).abs() <= 1e-12);
            assert!((easing.apply(1.0) - 1.0).abs() <= 1e-12);
        }
    }

    #[test]
    fn in_out_curves_pass_through_the_midpoint() {
        assert!((Easing::QuadInOut.apply(0.5) - 0.5).abs() <= 1e-12);
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() <= 1e-12);
    }

    #[test]
    fn cubic_out_decelerates() {
        let early = Easing::CubicOut.apply(0.25);
        let late = Easing::CubicOut.apply(0.75) - Easing::CubicOut.apply(0.5);
        assert!(early > 0.25);
        assert!(late < 0.25);
    }

    #[test]
    fn out_of_range_and_non_finite_inputs_are_tamed() {
        assert!((Easing::Linear.apply(-3.0) - 0.0).abs() <= 1e-12);
        assert!((Easing::Linear.apply(7.5) - 1.0).abs() <= 1e-12);
        assert!((Easing::CubicInOut.apply(f64::NAN) - 0.0).abs() <= 1e-12);
    }
}
