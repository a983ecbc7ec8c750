//! # ECU Common Library
//!
//! Shared scalar types, numeric limits, engine configuration loading, and
//! calibration-table containers for the ECU workspace.
//!
//! # Module Structure
//!
//! - [`types`] - Scalar type aliases used across the workspace
//! - [`consts`] - Single source of truth for limits and physical constants
//! - [`config`] - TOML engine configuration with bound validation
//! - [`calibration`] - Bounded calibration tables with load-time checks
//!
//! Configuration and validation run once at startup on the host side; the
//! calibration lookups themselves stay allocation-free and are safe to
//! call from the control cycle.

pub mod calibration;
pub mod config;
pub mod consts;
pub mod types;
