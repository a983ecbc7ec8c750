//! System-wide constants for the ECU workspace.
//!
//! Single source of truth for numeric limits, calibration capacities and
//! physical constants. Imported by all crates — no duplication permitted.

use static_assertions::const_assert;

/// Maximum breakpoints per calibration scale axis.
pub const MAX_TABLE_POINTS: usize = 32;

/// Maximum cells in a 2-D calibration grid.
pub const MAX_GRID_CELLS: usize = MAX_TABLE_POINTS * MAX_TABLE_POINTS;

/// Maximum supported cylinder count.
pub const MAX_CYLINDERS: usize = 12;

/// Degrees of crank rotation in one full four-stroke cycle.
pub const FULL_CYCLE_DEG: f32 = 720.0;

/// Degrees of crank rotation in one crank revolution.
pub const HALF_CYCLE_DEG: f32 = 360.0;

/// Capture clock rate bounds [ticks/s].
pub const TICKS_PER_SECOND_MIN: f32 = 1_000.0;
pub const TICKS_PER_SECOND_MAX: f32 = 32_000_000.0;

/// Injector flow rate bounds [cc/min].
pub const INJECTOR_FLOW_CC_PER_MIN_MIN: f32 = 10.0;
pub const INJECTOR_FLOW_CC_PER_MIN_MAX: f32 = 10_000.0;

/// Default fuel density (gasoline) [g/cc].
pub const DEFAULT_FUEL_DENSITY_G_PER_CC: f32 = 0.74;

/// Default air density at STP [g/cc].
pub const DEFAULT_AIR_DENSITY_G_PER_CC: f32 = 0.001293;

// Cylinder numbers travel as u8 in configs and firing orders.
const_assert!(MAX_CYLINDERS <= u8::MAX as usize);
