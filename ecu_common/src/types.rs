//! Scalar type aliases shared across the workspace.

/// Crankshaft angle in degrees after cylinder 1 TDC.
pub type Angle = f32;

/// Timer ticks of the crank capture clock.
pub type Ticks = u32;
