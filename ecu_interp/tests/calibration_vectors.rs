//! End-to-end checks against the recorded calibration test vectors:
//! the 0/127/255 linear scale, the full-span bilinear cell, and the 3×3
//! "X" pattern grid, including every off-scale clamp direction.

use ecu_interp::bilinear::Bilerp;
use ecu_interp::linear::{Lerp, lerp_fixed_u8_u8};
use ecu_interp::table::{
    interpolate_bilinear_table, interpolate_bilinear_table_f32, interpolate_linear_table,
    interpolate_linear_table_f32,
};

#[test]
fn linear_reference_vectors() {
    // Ascending 0→190 over [0, 127] at 63: exact 94.25.
    assert_eq!(<u32 as Lerp<u8>>::lerp(63, 0, 127, 0, 190), 94);
    assert_eq!(lerp_fixed_u8_u8::<8>(63, 0, 127, 0, 190), 94);

    // Descending mirror, exact 95.748: float path truncates, fixed path
    // rounds the shifted product.
    assert_eq!(<u32 as Lerp<u8>>::lerp(63, 0, 127, 190, 0), 95);
    assert_eq!(lerp_fixed_u8_u8::<8>(63, 0, 127, 190, 0), 96);
}

#[test]
fn linear_table_reference_vector() {
    let scale: [u8; 3] = [0, 127, 255];
    let outputs: [u8; 3] = [0, 190, 255];

    assert_eq!(interpolate_linear_table(63u8, &scale, &outputs), 94);
    let unrounded = interpolate_linear_table_f32(63u8, &scale, &outputs);
    assert!((unrounded - 94.25).abs() < 1e-4);
}

#[test]
fn bilinear_cell_reference_vectors() {
    let cell =
        |x: u8, y: u8| <u8 as Bilerp<u8, u8>>::bilerp(x, 0, 255, y, 0, 255, 0, 255, 127, 127);

    assert_eq!(cell(127, 127), 127);
    assert_eq!(cell(63, 127), 95); // exact 94.87
    assert_eq!(cell(63, 63), 79); // exact 78.81
}

const X_SCALE: [u8; 3] = [63, 127, 191];
const Y_SCALE: [u8; 3] = [63, 127, 191];
#[rustfmt::skip]
const Z_GRID: [u8; 9] = [
    254, 127, 254, // x = 63
    127,   0, 127, // x = 127
    254, 127, 254, // x = 191
];

#[test]
fn x_pattern_grid_float_sweep() {
    let lookup = |x: u8, y: u8| interpolate_bilinear_table_f32(x, y, &X_SCALE, &Y_SCALE, &Z_GRID);

    // Dead center is an exact grid hit.
    assert_eq!(lookup(127, 127), 0.0);

    // One count off center, all four directions, identical by symmetry.
    for (x, y) in [(126, 127), (128, 127), (127, 126), (127, 128)] {
        assert_eq!(lookup(x, y), 1.984375, "({x},{y})");
    }

    // One count off on both axes.
    for (x, y) in [(126, 126), (128, 126), (126, 128), (128, 128)] {
        assert_eq!(lookup(x, y), 3.96875, "({x},{y})");
    }

    // Off-scale inputs clamp to the edge value in every direction.
    assert_eq!(lookup(60, 127), 127.0);
    assert_eq!(lookup(200, 127), 127.0);
    assert_eq!(lookup(127, 60), 127.0);
    assert_eq!(lookup(127, 200), 127.0);
}

#[test]
fn x_pattern_grid_integer_sweep() {
    let lookup = |x: u8, y: u8| interpolate_bilinear_table(x, y, &X_SCALE, &Y_SCALE, &Z_GRID);

    assert_eq!(lookup(127, 127), 0);
    for (x, y) in [(126, 127), (128, 127), (127, 126), (127, 128)] {
        assert_eq!(lookup(x, y), 2, "({x},{y})");
    }
    for (x, y) in [(126, 126), (128, 126), (126, 128), (128, 128)] {
        assert_eq!(lookup(x, y), 4, "({x},{y})");
    }
    assert_eq!(lookup(60, 127), 127);
    assert_eq!(lookup(200, 200), 254);
}

#[test]
fn no_extrapolation_beyond_scale() {
    // x = 200 beyond the last breakpoint 191 behaves exactly like 191.
    for y in 0u8..=255 {
        let clamped = interpolate_bilinear_table_f32(200u8, y, &X_SCALE, &Y_SCALE, &Z_GRID);
        let edge = interpolate_bilinear_table_f32(191u8, y, &X_SCALE, &Y_SCALE, &Z_GRID);
        assert_eq!(clamped, edge, "y = {y}");
    }
}
