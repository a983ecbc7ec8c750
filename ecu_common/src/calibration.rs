//! Bounded calibration-table containers with load-time validation.
//!
//! Tables own their breakpoint scales and output grids in fixed-capacity
//! storage, so a loaded calibration never allocates. Validation runs once
//! when a calibration is loaded; the lookup methods assume it passed and
//! never re-check sortedness on the hot path.

use bitflags::bitflags;
use heapless::Vec;
use serde::{Deserialize, Serialize};

use ecu_interp::bilinear::Bilerp;
use ecu_interp::linear::Lerp;
use ecu_interp::scale::is_ascending;
use ecu_interp::table::{
    interpolate_bilinear_table, interpolate_bilinear_table_f32, interpolate_linear_table,
    interpolate_linear_table_f32,
};

use crate::consts::{MAX_GRID_CELLS, MAX_TABLE_POINTS};

bitflags! {
    /// Faults detectable in a loaded calibration table.
    ///
    /// Any set flag makes the table unusable; the control loop must not
    /// be started with a faulted calibration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TableFault: u8 {
        /// Scale axis has no entries.
        const EMPTY_SCALE        = 0x01;
        /// Scale axis is not sorted in non-decreasing order.
        const NOT_ASCENDING      = 0x02;
        /// Output count does not match the scale length.
        const LENGTH_MISMATCH    = 0x04;
        /// Grid cell count does not match the axis product.
        const GRID_MISMATCH      = 0x08;
    }
}

impl Default for TableFault {
    fn default() -> Self {
        Self::empty()
    }
}

/// 1-D calibration table: ascending scale with aligned outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table1d<I, O> {
    /// Breakpoint scale, ascending.
    pub scale: Vec<I, MAX_TABLE_POINTS>,
    /// Output per breakpoint.
    pub outputs: Vec<O, MAX_TABLE_POINTS>,
}

impl<I: PartialOrd + Copy, O: Copy> Table1d<I, O> {
    /// Validate the table. Returns the empty flag set when usable.
    pub fn validate(&self) -> TableFault {
        let mut faults = TableFault::empty();
        if self.scale.is_empty() {
            faults |= TableFault::EMPTY_SCALE;
        }
        if !is_ascending(&self.scale) {
            faults |= TableFault::NOT_ASCENDING;
        }
        if self.outputs.len() != self.scale.len() {
            faults |= TableFault::LENGTH_MISMATCH;
        }
        faults
    }

    /// Interpolated lookup with the width policy of the pairing.
    ///
    /// Precondition: [`Self::validate`] returned no faults at load time.
    #[inline]
    pub fn lookup(&self, input: I) -> O
    where
        O: Lerp<I>,
    {
        interpolate_linear_table(input, &self.scale, &self.outputs)
    }

    /// Interpolated lookup computed in floating point.
    #[inline]
    pub fn lookup_f32(&self, input: I) -> f32
    where
        I: Into<f32>,
        O: Into<f32>,
    {
        interpolate_linear_table_f32(input, &self.scale, &self.outputs)
    }
}

/// 2-D calibration table: two ascending scales with a flattened output
/// grid, row-major with x as the outer stride
/// (`outputs[x_index * y_len + y_index]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table2d<X, Y, Z> {
    /// X-axis breakpoint scale, ascending.
    pub x_scale: Vec<X, MAX_TABLE_POINTS>,
    /// Y-axis breakpoint scale, ascending.
    pub y_scale: Vec<Y, MAX_TABLE_POINTS>,
    /// Output grid, `x_scale.len() * y_scale.len()` cells.
    pub outputs: Vec<Z, MAX_GRID_CELLS>,
}

impl<X: PartialOrd + Copy, Y: PartialOrd + Copy, Z: Copy> Table2d<X, Y, Z> {
    /// Validate the table. Returns the empty flag set when usable.
    pub fn validate(&self) -> TableFault {
        let mut faults = TableFault::empty();
        if self.x_scale.is_empty() || self.y_scale.is_empty() {
            faults |= TableFault::EMPTY_SCALE;
        }
        if !is_ascending(&self.x_scale) || !is_ascending(&self.y_scale) {
            faults |= TableFault::NOT_ASCENDING;
        }
        if self.outputs.len() != self.x_scale.len() * self.y_scale.len() {
            faults |= TableFault::GRID_MISMATCH;
        }
        faults
    }

    /// Interpolated lookup with the width policy of the combination.
    ///
    /// Precondition: [`Self::validate`] returned no faults at load time.
    #[inline]
    pub fn lookup(&self, x: X, y: Y) -> Z
    where
        Z: Bilerp<X, Y> + Lerp<X> + Lerp<Y>,
    {
        interpolate_bilinear_table(x, y, &self.x_scale, &self.y_scale, &self.outputs)
    }

    /// Interpolated lookup computed in floating point.
    #[inline]
    pub fn lookup_f32(&self, x: X, y: Y) -> f32
    where
        X: Into<f32>,
        Y: Into<f32>,
        Z: Into<f32>,
    {
        interpolate_bilinear_table_f32(x, y, &self.x_scale, &self.y_scale, &self.outputs)
    }
}
