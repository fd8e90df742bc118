use proptest::prelude::*;
use scrolly_rs::charts::{polyline_length, prefix_by_fraction};
use scrolly_rs::core::{BandScale, Easing, LinearScale, PointPx};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 600.0))
            .expect("valid scale");

        let px = scale.position(value);
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-7);
    }

    #[test]
    fn band_scale_partitions_the_range_property(
        count in 1usize..16,
        padding_hundredths in 0u32..90,
        span in 1.0f64..10_000.0
    ) {
        let padding = f64::from(padding_hundredths) / 100.0;
        let keys: Vec<String> = (0..count).map(|i| format!("u{i}")).collect();
        let scale = BandScale::new(keys.clone(), (0.0, span), padding)
            .expect("valid band scale");

        prop_assert!(scale.bandwidth() > 0.0);

        let mut previous_edge = f64::NEG_INFINITY;
        for key in &keys {
            let position = scale.position(key);
            prop_assert!(position.is_finite());
            prop_assert!(position >= -1e-9);
            // Bands never overlap their predecessor.
            prop_assert!(position >= previous_edge - 1e-9);
            previous_edge = position + scale.bandwidth();
        }
        prop_assert!(previous_edge <= span + span * 1e-9 + 1e-9);
    }

    #[test]
    fn drawn_prefix_length_tracks_the_fraction_property(
        point_count in 2usize..10,
        amplitude in 1.0f64..100.0,
        fraction in 0.0f64..1.0
    ) {
        let points: Vec<PointPx> = (0..point_count)
            .map(|i| {
                let y = if i % 2 == 0 { 0.0 } else { amplitude };
                PointPx::new(i as f64 * 10.0, y)
            })
            .collect();
        let total = polyline_length(&points);
        prop_assert!(total > 0.0);

        let prefix = prefix_by_fraction(&points, fraction);
        prop_assert!(prefix.len() <= points.len());
        prop_assert!((prefix[0].x - points[0].x).abs() <= 1e-9);
        prop_assert!((polyline_length(&prefix) - fraction * total).abs() <= total * 1e-9 + 1e-9);
    }

    #[test]
    fn easing_is_bounded_and_monotone_property(
        t_low in -1.0f64..2.0,
        t_step in 0.0f64..1.0
    ) {
        let t_high = t_low + t_step;
        for easing in [
            Easing::Linear,
            Easing::QuadInOut,
            Easing::CubicInOut,
            Easing::CubicOut,
        ] {
            let low = easing.apply(t_low);
            let high = easing.apply(t_high);
            prop_assert!((0.0..=1.0).contains(&low));
            prop_assert!((0.0..=1.0).contains(&high));
            prop_assert!(high >= low - 1e-12);
        }
    }
}
