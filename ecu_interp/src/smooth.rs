//! Fixed-point exponential smoothing for sensor-derived values.
//!
//! One update step of an EWMA with the blend factor held as a fixed-point
//! fraction with `ALPHA_FRAC_BITS` fractional bits:
//!
//! ```text
//! smoothed = (cur·α + prev·(2^F − α) + 2^(F−1)) >> F
//! ```
//!
//! The rounding term keeps repeated smoothing from drifting downward.
//! Each value width gets the accumulator that holds `value · 2^F` without
//! overflow; the headroom is a compile-time contract.

macro_rules! exp_smooth_impl {
    ($(#[$attr:meta])* $name:ident, $val:ty, $acc:ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name<const ALPHA_FRAC_BITS: u32>(cur: $val, prev: $val, alpha: u8) -> $val {
            const {
                assert!(<$val>::BITS + ALPHA_FRAC_BITS <= <$acc>::BITS, "accumulator too narrow");
                assert!(ALPHA_FRAC_BITS < 8, "alpha would not fit in u8");
            }

            let one: $acc = (1 as $acc) << ALPHA_FRAC_BITS;
            let round: $acc = one / 2;

            let alpha = alpha as $acc;
            let one_minus_alpha = one - alpha;

            ((cur as $acc * alpha + prev as $acc * one_minus_alpha + round) >> ALPHA_FRAC_BITS)
                as $val
        }
    };
}

exp_smooth_impl! {
    /// Smooth a u8 value in a u16 accumulator.
    exp_smooth_u8, u8, u16
}
exp_smooth_impl! {
    /// Smooth a u16 value in a u32 accumulator.
    exp_smooth_u16, u16, u32
}
exp_smooth_impl! {
    /// Smooth a u32 value in a u64 accumulator.
    exp_smooth_u32, u32, u64
}

/// Convert a floating blend factor in `[0, 1)` to its fixed-point form
/// with `fraction_bits` fractional bits, rounding to nearest.
///
/// Calibration-time helper; the smoothing step itself never touches
/// floating point.
pub fn alpha_fixed(alpha: f32, fraction_bits: u32) -> u8 {
    (alpha * (1u32 << fraction_bits) as f32 + 0.5) as u8
}

// ─── Tests ──────────────────────────────────────────────────────────
