//! Property-based tests for the envelope follower.
//!
//! Tests boundedness, monotonic convergence and block-size independence
//! using proptest for randomized input generation.

use proptest::prelude::*;
use transito_core::Envelope;

const SR: f32 = 48000.0;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The envelope of input bounded by 1.0 stays within [0, 1] and finite.
    #[test]
    fn envelope_bounded(
        attack in 0.0f32..0.2,
        release in 0.001f32..1.0,
        input in prop::collection::vec(-1.0f32..=1.0f32, 1..=256),
    ) {
        let mut env = Envelope::with_times(attack, release);
        env.prepare(SR, 256);
        env.process_block(&[&input[..]]);

        for &y in env.samples() {
            prop_assert!(y.is_finite());
            prop_assert!((0.0..=1.0 + 1e-6).contains(&y), "envelope {} out of bounds", y);
        }
    }

    /// For constant amplitude the envelope moves monotonically toward it
    /// from any starting level.
    #[test]
    fn envelope_monotonic_convergence(
        attack in 0.0005f32..0.05,
        release in 0.0005f32..0.05,
        start in 0.0f32..=1.0,
        target in 0.0f32..=1.0,
    ) {
        let mut env = Envelope::with_times(attack, release);
        env.prepare(SR, 512);
        env.process_block(&[&[start; 512][..]]);
        let initial = env.last_value();

        let block = [target; 512];
        let mut previous = initial;
        for _ in 0..20 {
            env.process_block(&[&block[..]]);
            for &y in env.samples() {
                let before = (previous - target).abs();
                let after = (y - target).abs();
                prop_assert!(after <= before + 1e-6, "moved away from target: {} -> {}", previous, y);
                previous = y;
            }
        }
    }

    /// Splitting a signal into blocks of any size does not change the output.
    #[test]
    fn envelope_block_size_independent(
        attack in 0.0f32..0.01,
        release in 0.001f32..0.1,
        block_size in 1usize..=128,
        input in prop::collection::vec(-1.0f32..=1.0f32, 128..=512),
    ) {
        let mut whole = Envelope::with_times(attack, release);
        whole.prepare(SR, input.len());
        whole.process_block(&[&input[..]]);

        let mut split = Envelope::with_times(attack, release);
        split.prepare(SR, block_size);
        let mut out = Vec::with_capacity(input.len());
        for chunk in input.chunks(block_size) {
            split.process_block(&[chunk]);
            out.extend_from_slice(split.samples());
        }

        prop_assert_eq!(out.as_slice(), whole.samples());
    }
}
