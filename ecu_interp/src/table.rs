//! Whole-table lookups: scale search composed with interpolation.
//!
//! Off-scale inputs clamp to the nearest edge output on that axis — the
//! table never extrapolates past its calibrated domain, and never fails.
//! A crash is unacceptable mid-cycle; the degraded mode is the boundary
//! value.
//!
//! 2-D output grids are flattened row-major with x as the outer stride:
//! `outputs[x_index * y_len + y_index]`. Fixtures and calibration dumps
//! follow the same convention.

use crate::bilinear::Bilerp;
use crate::linear::{Lerp, lerp_f32};
use crate::scale::{ScaleLookup, find_on_scale};

/// 1-D table lookup with the width policy of the (input, output) pairing.
///
/// `InBetween` interpolates between the bracketing outputs; every other
/// classification returns the output at the clamped index directly.
///
/// Preconditions: `scale` non-empty and ascending,
/// `outputs.len() == scale.len()`.
#[inline]
pub fn interpolate_linear_table<I, O>(input: I, scale: &[I], outputs: &[O]) -> O
where
    I: PartialOrd + Copy,
    O: Lerp<I>,
{
    debug_assert_eq!(scale.len(), outputs.len());

    match find_on_scale(input, scale) {
        ScaleLookup::InBetween {
            low_index,
            low,
            high,
        } => O::lerp(input, low, high, outputs[low_index], outputs[low_index + 1]),
        other => outputs[other.low_index()],
    }
}

/// 1-D table lookup computed in floating point regardless of the stored
/// widths, returning the unrounded result.
#[inline]
pub fn interpolate_linear_table_f32<I, O>(input: I, scale: &[I], outputs: &[O]) -> f32
where
    I: PartialOrd + Copy + Into<f32>,
    O: Copy + Into<f32>,
{
    debug_assert_eq!(scale.len(), outputs.len());

    match find_on_scale(input, scale) {
        ScaleLookup::InBetween {
            low_index,
            low,
            high,
        } => lerp_f32(
            input.into(),
            low.into(),
            high.into(),
            outputs[low_index].into(),
            outputs[low_index + 1].into(),
        ),
        other => outputs[other.low_index()].into(),
    }
}

/// 2-D table lookup with the width policy of the {x, y, z} combination.
///
/// Each axis is searched independently; the 16 classification pairs
/// collapse to four handled cases:
/// - both `InBetween` — bilinear over the 2×2 cell;
/// - one `InBetween` — linear along that axis at the other axis's
///   clamped index;
/// - neither — direct lookup at the clamped indices.
///
/// Preconditions: both scales non-empty and ascending,
/// `outputs.len() == x_scale.len() * y_scale.len()` (x outer stride).
pub fn interpolate_bilinear_table<X, Y, Z>(
    x: X,
    y: Y,
    x_scale: &[X],
    y_scale: &[Y],
    outputs: &[Z],
) -> Z
where
    X: PartialOrd + Copy,
    Y: PartialOrd + Copy,
    Z: Bilerp<X, Y> + Lerp<X> + Lerp<Y>,
{
    let y_len = y_scale.len();
    debug_assert_eq!(outputs.len(), x_scale.len() * y_len);

    let x_result = find_on_scale(x, x_scale);
    let y_result = find_on_scale(y, y_scale);

    match (x_result, y_result) {
        (
            ScaleLookup::InBetween {
                low_index: x_index,
                low: x0,
                high: x1,
            },
            ScaleLookup::InBetween {
                low_index: y_index,
                low: y0,
                high: y1,
            },
        ) => {
            let column0 = x_index * y_len + y_index;
            let column1 = (x_index + 1) * y_len + y_index;

            let z00 = outputs[column0];
            let z01 = outputs[column0 + 1];
            let z10 = outputs[column1];
            let z11 = outputs[column1 + 1];

            Z::bilerp(x, x0, x1, y, y0, y1, z00, z10, z01, z11)
        }
        (
            ScaleLookup::InBetween {
                low_index: x_index,
                low,
                high,
            },
            y_result,
        ) => {
            // Between columns, on or beyond a row: linear along x only.
            let y_index = y_result.low_index();
            let z0 = outputs[x_index * y_len + y_index];
            let z1 = outputs[(x_index + 1) * y_len + y_index];

            <Z as Lerp<X>>::lerp(x, low, high, z0, z1)
        }
        (
            x_result,
            ScaleLookup::InBetween {
                low_index: y_index,
                low,
                high,
            },
        ) => {
            // Between rows, on or beyond a column: linear along y only.
            let base = x_result.low_index() * y_len + y_index;
            let z0 = outputs[base];
            let z1 = outputs[base + 1];

            <Z as Lerp<Y>>::lerp(y, low, high, z0, z1)
        }
        (x_result, y_result) => outputs[x_result.low_index() * y_len + y_result.low_index()],
    }
}

/// 2-D table lookup computed in floating point, returning the unrounded
/// result. Same clamping and case analysis as
/// [`interpolate_bilinear_table`].
pub fn interpolate_bilinear_table_f32<X, Y, Z>(
    x: X,
    y: Y,
    x_scale: &[X],
    y_scale: &[Y],
    outputs: &[Z],
) -> f32
where
    X: PartialOrd + Copy + Into<f32>,
    Y: PartialOrd + Copy + Into<f32>,
    Z: Copy + Into<f32>,
{
    let y_len = y_scale.len();
    debug_assert_eq!(outputs.len(), x_scale.len() * y_len);

    let x_result = find_on_scale(x, x_scale);
    let y_result = find_on_scale(y, y_scale);

    match (x_result, y_result) {
        (
            ScaleLookup::InBetween {
                low_index: x_index,
                low: x0,
                high: x1,
            },
            ScaleLookup::InBetween {
                low_index: y_index,
                low: y0,
                high: y1,
            },
        ) => {
            let column0 = x_index * y_len + y_index;
            let column1 = (x_index + 1) * y_len + y_index;

            crate::bilinear::bilerp_f32(
                x.into(),
                x0.into(),
                x1.into(),
                y.into(),
                y0.into(),
                y1.into(),
                outputs[column0].into(),
                outputs[column1].into(),
                outputs[column0 + 1].into(),
                outputs[column1 + 1].into(),
            )
        }
        (
            ScaleLookup::InBetween {
                low_index: x_index,
                low,
                high,
            },
            y_result,
        ) => {
            let y_index = y_result.low_index();
            lerp_f32(
                x.into(),
                low.into(),
                high.into(),
                outputs[x_index * y_len + y_index].into(),
                outputs[(x_index + 1) * y_len + y_index].into(),
            )
        }
        (
            x_result,
            ScaleLookup::InBetween {
                low_index: y_index,
                low,
                high,
            },
        ) => {
            let base = x_result.low_index() * y_len + y_index;
            lerp_f32(
                y.into(),
                low.into(),
                high.into(),
                outputs[base].into(),
                outputs[base + 1].into(),
            )
        }
        (x_result, y_result) => outputs[x_result.low_index() * y_len + y_result.low_index()].into(),
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
