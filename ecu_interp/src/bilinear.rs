//! Bilinear interpolation over a 2×2 grid cell.
//!
//! The kernel fuses the two row interpolations and the cross
//! interpolation into a single numerator/denominator so intermediate
//! widths stay under explicit control:
//!
//! ```text
//! row0 = z00·(x1 - x) + z10·(x - x0)        (first-pass accumulator)
//! row1 = z01·(x1 - x) + z11·(x - x0)
//! num  = row0·(y1 - y) + row1·(y - y0)      (second-pass accumulator)
//! z    = (num + denom/2) / denom,  denom = (x1 - x0)·(y1 - y0)
//! ```
//!
//! The first-pass accumulator must hold `max(Δx)·max(z)`; the second-pass
//! one `max(Δx)·max(Δy)·max(z)`. Swapping the axis order swaps which
//! product dominates, so each width combination resolves X-first when its
//! second-pass accumulator is at least as wide as the first-pass one and
//! Y-first otherwise — the narrower accumulator then sees the smaller
//! product.
//!
//! Corner subscripts are x,y: `z01` sits at `(x0, y1)`. A degenerate cell
//! (all corners equal) reduces correctly through the same formula; zero
//! axis spans cannot reach the kernel because table callers only pass
//! `InBetween` cells.

use static_assertions::const_assert;

/// Floating-point bilinear interpolation over the cell
/// `(x0, x1) × (y0, y1)`.
#[inline]
pub fn bilerp_f32(
    x: f32,
    x0: f32,
    x1: f32,
    y: f32,
    y0: f32,
    y1: f32,
    z00: f32,
    z10: f32,
    z01: f32,
    z11: f32,
) -> f32 {
    let dx0 = x - x0;
    let dx1 = x1 - x;

    let row0 = z00 * dx1 + z10 * dx0;
    let row1 = z01 * dx1 + z11 * dx0;

    let dy0 = y - y0;
    let dy1 = y1 - y;

    let num = row0 * dy1 + row1 * dy0;
    let denom = (x1 - x0) * (y1 - y0);

    num / denom
}

/// Fused integer kernel: interpolate along the `u` axis first in `$a1`,
/// then along `v` in `$a2`, with a rounding division at the end.
macro_rules! bilerp_fused {
    ($u:expr, $u0:expr, $u1:expr, $v:expr, $v0:expr, $v1:expr,
     $w00:expr, $w10:expr, $w01:expr, $w11:expr, $a1:ty, $a2:ty) => {{
        let du0 = ($u - $u0) as $a1;
        let du1 = ($u1 - $u) as $a1;

        let row0 = ($w00 as $a1 * du1 + $w10 as $a1 * du0) as $a2;
        let row1 = ($w01 as $a1 * du1 + $w11 as $a1 * du0) as $a2;

        let dv0 = ($v - $v0) as $a2;
        let dv1 = ($v1 - $v) as $a2;

        let num = row0 * dv1 + row1 * dv0;
        let denom = ($u1 - $u0) as $a2 * ($v1 - $v0) as $a2;

        (num + denom / 2) / denom
    }};
}

// ─── Width Policy Table ─────────────────────────────────────────────

/// Bilinear interpolation with the accumulator widths and axis order
/// chosen for this {x, y, z} combination.
///
/// One impl per combination the calibration system uses; each names its
/// two accumulators explicitly rather than deriving them generically.
pub trait Bilerp<X, Y>: Copy {
    /// Interpolate at `(x, y)` inside the cell `(x0, x1) × (y0, y1)`
    /// with corner outputs `z00, z10, z01, z11` (subscripts x,y).
    #[allow(clippy::too_many_arguments)]
    fn bilerp(
        x: X,
        x0: X,
        x1: X,
        y: Y,
        y0: Y,
        y1: Y,
        z00: Self,
        z10: Self,
        z01: Self,
        z11: Self,
    ) -> Self;
}

impl Bilerp<f32, f32> for f32 {
    #[inline]
    fn bilerp(
        x: f32,
        x0: f32,
        x1: f32,
        y: f32,
        y0: f32,
        y1: f32,
        z00: f32,
        z10: f32,
        z01: f32,
        z11: f32,
    ) -> f32 {
        bilerp_f32(x, x0, x1, y, y0, y1, z00, z10, z01, z11)
    }
}

macro_rules! bilerp_policy {
    // X-first: second-pass accumulator is at least as wide.
    ($x:ty, $y:ty, $z:ty, $a1:ty, $a2:ty, x_first) => {
        const_assert!(<$a2>::BITS >= <$a1>::BITS);

        impl Bilerp<$x, $y> for $z {
            #[inline]
            fn bilerp(
                x: $x,
                x0: $x,
                x1: $x,
                y: $y,
                y0: $y,
                y1: $y,
                z00: $z,
                z10: $z,
                z01: $z,
                z11: $z,
            ) -> $z {
                bilerp_fused!(x, x0, x1, y, y0, y1, z00, z10, z01, z11, $a1, $a2) as $z
            }
        }
    };
    // Y-first: rotate 90° — swap the axes and the off-diagonal corners.
    ($x:ty, $y:ty, $z:ty, $a1:ty, $a2:ty, y_first) => {
        const_assert!(<$a2>::BITS >= <$a1>::BITS);

        impl Bilerp<$x, $y> for $z {
            #[inline]
            fn bilerp(
                x: $x,
                x0: $x,
                x1: $x,
                y: $y,
                y0: $y,
                y1: $y,
                z00: $z,
                z10: $z,
                z01: $z,
                z11: $z,
            ) -> $z {
                bilerp_fused!(y, y0, y1, x, x0, x1, z00, z01, z10, z11, $a1, $a2) as $z
            }
        }
    };
}

bilerp_policy!(u8, u8, u8, u16, u32, x_first);
bilerp_policy!(u8, u8, u16, u32, u32, x_first);
bilerp_policy!(u8, u16, u8, u32, u32, x_first);
bilerp_policy!(u8, u16, u16, u32, u64, x_first);
// Δy·z is the smaller first-pass product when y is the narrower axis.
bilerp_policy!(u16, u8, u8, u16, u32, y_first);
bilerp_policy!(u16, u8, u16, u32, u64, y_first);
bilerp_policy!(u16, u16, u8, u32, u64, x_first);
bilerp_policy!(u16, u16, u16, u32, u64, x_first);

// ─── Tests ──────────────────────────────────────────────────────────
