//! Cylinder event angles derived from the firing order.
//!
//! TDC angles are assumed evenly spaced over the 720° cycle: cylinder at
//! firing-order position `i` of `n` fires at `i · 720/n` degrees after
//! cylinder 1 TDC.

use ecu_common::consts::{FULL_CYCLE_DEG, HALF_CYCLE_DEG};
use ecu_common::types::Angle;

/// TDC angle of `cylinder` over the full 720° cycle.
///
/// Returns `None` when the cylinder does not appear in the firing order
/// (a calibration fault surfaced at configuration time, not mid-cycle).
pub fn angle_tdc(cylinder: u8, firing_order: &[u8]) -> Option<Angle> {
    let count = firing_order.len();

    firing_order
        .iter()
        .position(|&entry| entry == cylinder)
        .map(|i| i as Angle * (FULL_CYCLE_DEG / count as Angle))
}

/// TDC angle of `cylinder` folded into a single 360° revolution.
pub fn angle_tdc_half_cycle(cylinder: u8, firing_order: &[u8]) -> Option<Angle> {
    angle_tdc(cylinder, firing_order).map(|mut angle| {
        while angle >= HALF_CYCLE_DEG {
            angle -= HALF_CYCLE_DEG;
        }
        angle
    })
}
