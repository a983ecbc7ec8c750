//! Linear interpolation between a bracketing pair.
//!
//! Three kernel families, all computing
//! `slope = (output1 - output0) / (input_high - input_low);
//!  result = slope * (input - input_low) + output0`:
//!
//! - [`lerp_f32`] — plain floating form for float or sign-safe domains.
//! - `lerp_fixed_*` — fixed-point forms. The slope is pre-scaled by
//!   `1 << SLOPE_SHIFT` before the division and the final product shifted
//!   back; the unsigned forms mirror the computation when the outputs
//!   descend (an unsigned difference must never go negative) and add a
//!   `1 << (SLOPE_SHIFT - 1)` term before the shift to round to nearest.
//! - [`Lerp`] — the per-(input, output) width policy table. Each pairing
//!   picks fixed-point with a named accumulator or the float kernel,
//!   whichever is cheaper on the target for that width combination. The
//!   choices are fixed per pairing, not derived generically.
//!
//! Accumulator widths are a compile-time contract: each fixed kernel
//! asserts `ACC bits >= OUT bits + SLOPE_SHIFT` and `ACC bits >= IN bits`.
//! Beyond that, the accumulator must cover the value ranges actually
//! calibrated — a design-time responsibility of whoever instantiates a
//! pairing, never a runtime check.
//!
//! `input_high == input_low` is a precondition violation (division by
//! zero). The table wrappers uphold it by construction: they only
//! interpolate on an `InBetween` search result, where the bounds differ.

/// Floating-point linear interpolation.
///
/// Valid for coincident inputs on either end; callers guarantee
/// `input_high != input_low`.
#[inline]
pub fn lerp_f32(input: f32, input_low: f32, input_high: f32, output0: f32, output1: f32) -> f32 {
    let slope = (output1 - output0) / (input_high - input_low);
    slope * (input - input_low) + output0
}

macro_rules! lerp_fixed_unsigned {
    ($(#[$attr:meta])* $name:ident, $in:ty, $out:ty, $acc:ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name<const SLOPE_SHIFT: u32>(
            input: $in,
            input_low: $in,
            input_high: $in,
            output0: $out,
            output1: $out,
        ) -> $acc {
            const {
                assert!(<$acc>::BITS >= <$out>::BITS + SLOPE_SHIFT, "accumulator too narrow");
                assert!(<$acc>::BITS >= <$in>::BITS, "accumulator too narrow");
            }

            let shift_mul: $acc = (1 as $acc) << SLOPE_SHIFT;
            // Half of the dropped digit, so the shift rounds instead of truncating.
            let round: $acc = if SLOPE_SHIFT > 0 {
                (1 as $acc) << (SLOPE_SHIFT - 1)
            } else {
                0
            };

            let span = (input_high - input_low) as $acc;
            let delta = (input - input_low) as $acc;

            if output1 > output0 {
                let slope = ((output1 - output0) as $acc * shift_mul) / span;
                (slope * delta + round) / shift_mul + output0 as $acc
            } else {
                // Mirror so the unsigned difference stays non-negative.
                let slope = ((output0 - output1) as $acc * shift_mul) / span;
                output0 as $acc - (slope * delta + round) / shift_mul
            }
        }
    };
}

lerp_fixed_unsigned! {
    /// Fixed-point u8 → u8 interpolation in a u16 accumulator.
    lerp_fixed_u8_u8, u8, u8, u16
}
lerp_fixed_unsigned! {
    /// Fixed-point u8 → u16 interpolation in a u32 accumulator.
    lerp_fixed_u8_u16, u8, u16, u32
}
lerp_fixed_unsigned! {
    /// Fixed-point u16 → u8 interpolation in a u32 accumulator.
    lerp_fixed_u16_u8, u16, u8, u32
}
lerp_fixed_unsigned! {
    /// Fixed-point u16 → u16 interpolation in a u32 accumulator.
    lerp_fixed_u16_u16, u16, u16, u32
}

macro_rules! lerp_fixed_signed {
    ($(#[$attr:meta])* $name:ident, $in:ty, $out:ty, $acc:ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name<const SLOPE_SHIFT: u32>(
            input: $in,
            input_low: $in,
            input_high: $in,
            output0: $out,
            output1: $out,
        ) -> $acc {
            const {
                assert!(<$acc>::BITS >= <$out>::BITS + SLOPE_SHIFT, "accumulator too narrow");
                assert!(<$acc>::BITS >= <$in>::BITS, "accumulator too narrow");
            }

            let shift_mul: $acc = (1 as $acc) << SLOPE_SHIFT;

            // Widen before subtracting: signed spans may exceed the input width.
            let span = input_high as $acc - input_low as $acc;
            let delta = input as $acc - input_low as $acc;

            let slope = ((output1 as $acc - output0 as $acc) * shift_mul) / span;
            (slope * delta) / shift_mul + output0 as $acc
        }
    };
}

lerp_fixed_signed! {
    /// Fixed-point i16 → i16 interpolation in an i32 accumulator.
    lerp_fixed_i16_i16, i16, i16, i32
}

// ─── Width Policy Table ─────────────────────────────────────────────

/// Slope shift used by every fixed-point pairing in the policy table.
const POLICY_SLOPE_SHIFT: u32 = 8;

/// Linear interpolation with the width strategy chosen for this
/// (input, output) pairing.
///
/// Table lookups resolve through this trait so each calibrated pairing
/// gets its validated accumulator and rounding behaviour.
pub trait Lerp<I>: Copy {
    /// Interpolate at `input` within `[input_low, input_high]`, where
    /// `output0`/`output1` sit at the low/high bounds.
    fn lerp(input: I, input_low: I, input_high: I, output0: Self, output1: Self) -> Self;
}

impl Lerp<f32> for f32 {
    #[inline]
    fn lerp(input: f32, input_low: f32, input_high: f32, output0: f32, output1: f32) -> f32 {
        lerp_f32(input, input_low, input_high, output0, output1)
    }
}

macro_rules! lerp_policy_fixed {
    ($in:ty, $out:ty, $kernel:ident) => {
        impl Lerp<$in> for $out {
            #[inline]
            fn lerp(
                input: $in,
                input_low: $in,
                input_high: $in,
                output0: $out,
                output1: $out,
            ) -> $out {
                $kernel::<POLICY_SLOPE_SHIFT>(input, input_low, input_high, output0, output1)
                    as $out
            }
        }
    };
}

macro_rules! lerp_policy_float {
    ($in:ty, $out:ty) => {
        impl Lerp<$in> for $out {
            // Floating point beats fixed point on the target for these widths.
            #[inline]
            fn lerp(
                input: $in,
                input_low: $in,
                input_high: $in,
                output0: $out,
                output1: $out,
            ) -> $out {
                lerp_f32(
                    input as f32,
                    input_low as f32,
                    input_high as f32,
                    output0 as f32,
                    output1 as f32,
                ) as $out
            }
        }
    };
}

lerp_policy_fixed!(u8, u8, lerp_fixed_u8_u8);
lerp_policy_fixed!(u8, u16, lerp_fixed_u8_u16);
lerp_policy_fixed!(u16, u8, lerp_fixed_u16_u8);
lerp_policy_fixed!(u16, u16, lerp_fixed_u16_u16);
lerp_policy_float!(u8, u32);
lerp_policy_float!(u16, u32);
lerp_policy_float!(u32, u8);
lerp_policy_float!(u32, u16);
lerp_policy_float!(u32, u32);

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Reference vectors: input 63 on [0, 127] with outputs 0..190 (and
    // the descending mirror). Exact result is 94.25 ascending, 95.748
    // descending.

    #[test]
    fn fixed_u8_ascending() {
        let r = lerp_fixed_u8_u8::<8>(63, 0, 127, 0, 190);
        assert_eq!(r, 94);
    }

    #[test]
    fn fixed_u8_descending_rounds() {
        let r = lerp_fixed_u8_u8::<8>(63, 0, 127, 190, 0);
        assert_eq!(r, 96);
    }

    #[test]
    fn fixed_u16_matches_u8_vector() {
        assert_eq!(lerp_fixed_u16_u16::<8>(63, 0, 127, 0, 190), 94);
        assert_eq!(lerp_fixed_u8_u16::<8>(63, 0, 127, 0, 190), 94);
        assert_eq!(lerp_fixed_u16_u8::<8>(63, 0, 127, 0, 190), 94);
    }

    #[test]
    fn fixed_endpoints_exact() {
        // Both directions must return the boundary outputs exactly.
        assert_eq!(lerp_fixed_u8_u8::<8>(0, 0, 127, 0, 190), 0);
        assert_eq!(lerp_fixed_u8_u8::<8>(127, 0, 127, 0, 190), 190);
        assert_eq!(lerp_fixed_u8_u8::<8>(0, 0, 127, 190, 0), 190);
        assert_eq!(lerp_fixed_u8_u8::<8>(127, 0, 127, 190, 0), 0);
    }

    #[test]
    fn fixed_equal_outputs_constant() {
        assert_eq!(lerp_fixed_u8_u8::<8>(63, 0, 127, 80, 80), 80);
    }

    #[test]
    fn fixed_zero_shift_truncates() {
        // No shift, no rounding term: pure integer slope.
        assert_eq!(lerp_fixed_u8_u8::<0>(5, 0, 10, 0, 20), 10);
    }

    #[test]
    fn fixed_signed_crosses_zero() {
        assert_eq!(lerp_fixed_i16_i16::<8>(5, 0, 10, -100, 100), 0);
        assert_eq!(lerp_fixed_i16_i16::<8>(0, 0, 10, -100, 100), -100);
        assert_eq!(lerp_fixed_i16_i16::<8>(10, 0, 10, -100, 100), 100);
    }

    #[test]
    fn float_kernel_midpoint() {
        let r = lerp_f32(0.5, 0.0, 1.0, 10.0, 20.0);
        assert!((r - 15.0).abs() < 1e-6);
    }

    #[test]
    fn float_kernel_endpoints() {
        assert_eq!(lerp_f32(0.0, 0.0, 2.0, 3.0, 9.0), 3.0);
        assert_eq!(lerp_f32(2.0, 0.0, 2.0, 3.0, 9.0), 9.0);
        assert_eq!(lerp_f32(0.0, 0.0, 2.0, 9.0, 3.0), 9.0);
        assert_eq!(lerp_f32(2.0, 0.0, 2.0, 9.0, 3.0), 3.0);
    }

    #[test]
    fn policy_u8_u32_goes_float() {
        // The float strategy truncates on the final cast.
        assert_eq!(<u32 as Lerp<u8>>::lerp(63, 0, 127, 0, 190), 94);
        assert_eq!(<u32 as Lerp<u8>>::lerp(63, 0, 127, 190, 0), 95);
    }

    #[test]
    fn policy_u8_u8_goes_fixed() {
        assert_eq!(<u8 as Lerp<u8>>::lerp(63, 0, 127, 0, 190), 94);
        assert_eq!(<u8 as Lerp<u8>>::lerp(63, 0, 127, 190, 0), 96);
    }

    #[test]
    fn policy_u32_input_exact_on_power_of_two_span() {
        // Span 2048: the slope 10/2048 is exact in f32, so midpoint and
        // endpoints land on whole numbers with no truncation slack.
        assert_eq!(<u8 as Lerp<u32>>::lerp(1024, 0, 2048, 10, 20), 15);
        assert_eq!(<u8 as Lerp<u32>>::lerp(0, 0, 2048, 10, 20), 10);
        assert_eq!(<u8 as Lerp<u32>>::lerp(2048, 0, 2048, 10, 20), 20);
    }

    #[test]
    fn policy_f32_identity() {
        let r = <f32 as Lerp<f32>>::lerp(0.25, 0.0, 1.0, 0.0, 1.0);
        assert!((r - 0.25).abs() < 1e-6);
    }

    #[test]
    fn idempotent() {
        let a = lerp_fixed_u16_u16::<8>(700, 500, 1200, 120, 360);
        let b = lerp_fixed_u16_u16::<8>(700, 500, 1200, 120, 360);
        assert_eq!(a, b);
    }
}
