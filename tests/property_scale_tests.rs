use proptest::prelude::*;
use scatter_rs::core::{LinearScale, format_tick};

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_end in 1.0f64..4096.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, range_end)).expect("valid scale");

        let px = scale.apply(value);
        let recovered = scale.invert(px);

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn ticks_are_inside_domain_and_evenly_spaced(
        domain_start in -10_000.0f64..10_000.0,
        domain_span in 0.01f64..10_000.0,
        count in 2usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 1000.0)).expect("valid scale");
        let ticks = scale.ticks(count);
        let step = scale.tick_step(count);

        prop_assert!(!ticks.is_empty());
        prop_assert!(ticks.len() <= 3 * count + 1);
        let tolerance = 1e-9 * domain_span.max(1.0);
        for tick in &ticks {
            prop_assert!(*tick >= domain_start - tolerance);
            prop_assert!(*tick <= domain_end + tolerance);
        }
        for pair in ticks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= 1e-6 * step.abs());
        }
    }

    #[test]
    fn tick_labels_are_never_negative_zero(
        value in -1e-12f64..1e-12,
        exponent in -3i32..4
    ) {
        let step = 10f64.powi(exponent);
        prop_assert_eq!(format_tick(value, step), format_tick(0.0, step));
    }
}
