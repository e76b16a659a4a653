//! Property-based tests for the phase intensity kernel and its consumers.
//!
//! Covers: output bounds, determinism, channel symmetry, the channel-zero
//! algebraic reduction, superposition range, and sweep/grid consistency.

use proptest::prelude::*;
use roa_field::{
    phase_intensity, superpose, sweep_channel, sweep_grid, FieldError, SweepConfig, GOLDEN_RATIO,
    INTENSITY_MAX,
};

proptest! {
    /// Every finite time and every channel yields an intensity in [0, 1.5].
    #[test]
    fn intensity_bounded(
        t in -1.0e9f64..1.0e9,
        channel in any::<i64>(),
    ) {
        let v = phase_intensity(t, channel).unwrap();
        prop_assert!(v >= 0.0, "negative intensity {} at t={} d={}", v, t, channel);
        prop_assert!(v <= INTENSITY_MAX, "intensity {} above bound at t={} d={}", v, t, channel);
    }

    /// Identical inputs give bit-identical outputs.
    #[test]
    fn intensity_deterministic(
        t in -1.0e6f64..1.0e6,
        channel in any::<i64>(),
    ) {
        let a = phase_intensity(t, channel).unwrap();
        let b = phase_intensity(t, channel).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    /// The overtone is even in the channel index.
    #[test]
    fn intensity_even_in_channel(
        t in -1.0e6f64..1.0e6,
        channel in -(1i64 << 40)..(1i64 << 40),
    ) {
        let pos = phase_intensity(t, channel).unwrap();
        let neg = phase_intensity(t, -channel).unwrap();
        prop_assert_eq!(pos.to_bits(), neg.to_bits());
    }

    /// At channel 0 the cosine collapses to 1 and the kernel reduces to
    /// |sin(t * phi) + 0.5|.
    #[test]
    fn channel_zero_reduces(t in -1.0e6f64..1.0e6) {
        let v = phase_intensity(t, 0).unwrap();
        let reduced = ((t * GOLDEN_RATIO).sin() + 0.5).abs();
        prop_assert!((v - reduced).abs() < 1e-12,
            "reduction mismatch at t={}: {} vs {}", t, v, reduced);
    }

    /// Non-finite time coordinates are rejected, never silently evaluated.
    #[test]
    fn non_finite_time_rejected(channel in any::<i64>()) {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            prop_assert!(matches!(
                phase_intensity(bad, channel),
                Err(FieldError::NonFiniteTime(_))
            ));
        }
    }

    /// Superposing two in-range intensities lands in [0.5, 2.0].
    #[test]
    fn superposition_range(
        a in 0.0f64..=1.5,
        b in 0.0f64..=1.5,
    ) {
        let s = superpose(a, b).unwrap();
        prop_assert!(s >= 0.5 - 1e-12);
        prop_assert!(s <= 2.0 + 1e-12);
    }

    /// A sweep returns exactly the configured number of samples, all bounded.
    #[test]
    fn sweep_length_and_bounds(
        t_start in -100.0f64..100.0,
        span in 0.1f64..100.0,
        samples in 2usize..512,
        channel in -1000i64..1000,
    ) {
        let config = SweepConfig::new(t_start, t_start + span, samples);
        let row = sweep_channel(&config, channel).unwrap();
        prop_assert_eq!(row.len(), samples);
        prop_assert!(row.iter().all(|&v| (0.0..=INTENSITY_MAX).contains(&v)));
    }

    /// Grid rows agree element-wise with scalar kernel evaluation.
    #[test]
    fn grid_agrees_with_scalar(
        t_start in -10.0f64..10.0,
        span in 0.5f64..20.0,
        samples in 2usize..64,
    ) {
        let config = SweepConfig::new(t_start, t_start + span, samples);
        let channels = [0i64, 1, 2, -3];
        let grid = sweep_grid(&config, &channels).unwrap();

        for &channel in &channels {
            let row = grid.channel_row(channel).unwrap();
            for (t, &v) in grid.times().iter().zip(row) {
                let scalar = phase_intensity(*t, channel).unwrap();
                prop_assert_eq!(v.to_bits(), scalar.to_bits());
            }
        }
    }
}
