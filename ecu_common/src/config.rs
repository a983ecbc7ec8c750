//! TOML engine configuration with bound validation.
//!
//! `EngineConfig` holds the physical engine constants that the
//! unit-conversion multipliers derive from. It is loaded once at startup,
//! validated, and immutable afterwards — the calculators snapshot what
//! they need and carry no reference back to it.

use std::path::Path;

use heapless::Vec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    DEFAULT_AIR_DENSITY_G_PER_CC, DEFAULT_FUEL_DENSITY_G_PER_CC, INJECTOR_FLOW_CC_PER_MIN_MAX,
    INJECTOR_FLOW_CC_PER_MIN_MIN, MAX_CYLINDERS, TICKS_PER_SECOND_MAX, TICKS_PER_SECOND_MIN,
};

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found or unreadable.
    #[error("configuration file not readable: {0}")]
    FileNotFound(String),

    /// TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

/// Physical engine constants, configured once before first use.
///
/// Loaded from TOML. Optional fields carry physical defaults via
/// `#[serde(default)]`; everything else must be stated explicitly in the
/// calibration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Crank capture clock rate [ticks/s].
    pub ticks_per_second: f32,

    /// Injector steady-state flow rate [cc/min].
    pub injector_flow_cc_per_min: f32,

    /// Fuel density [g/cc] (default: gasoline).
    #[serde(default = "default_fuel_density")]
    pub fuel_density_gram_per_cc: f32,

    /// Cylinder stroke [cm].
    pub cylinder_stroke_cm: f32,

    /// Piston crown area [cm²].
    pub piston_area_sq_cm: f32,

    /// Air density at STP [g/cc].
    #[serde(default = "default_air_density")]
    pub air_density_g_per_cc: f32,

    /// Number of cylinders.
    pub cylinder_count: u8,

    /// Firing order: cylinder numbers in TDC sequence, length equal to
    /// `cylinder_count`.
    pub firing_order: Vec<u8, MAX_CYLINDERS>,
}

fn default_fuel_density() -> f32 {
    DEFAULT_FUEL_DENSITY_G_PER_CC
}
fn default_air_density() -> f32 {
    DEFAULT_AIR_DENSITY_G_PER_CC
}

impl EngineConfig {
    /// Load and validate an engine configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileNotFound(format!("{}: {e}", path.display())))?;
        let config = Self::load_from_str(&text)?;
        tracing::info!(
            path = %path.display(),
            ticks_per_second = config.ticks_per_second,
            cylinder_count = config.cylinder_count,
            "engine configuration loaded"
        );
        Ok(config)
    }

    /// Parse and validate an engine configuration from a TOML string.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Validate parameter bounds and firing-order consistency.
    pub fn validate(&self) -> Result<(), String> {
        if self.ticks_per_second < TICKS_PER_SECOND_MIN
            || self.ticks_per_second > TICKS_PER_SECOND_MAX
        {
            return Err(format!(
                "ticks_per_second {} out of range [{}, {}]",
                self.ticks_per_second, TICKS_PER_SECOND_MIN, TICKS_PER_SECOND_MAX
            ));
        }
        if self.injector_flow_cc_per_min < INJECTOR_FLOW_CC_PER_MIN_MIN
            || self.injector_flow_cc_per_min > INJECTOR_FLOW_CC_PER_MIN_MAX
        {
            return Err(format!(
                "injector_flow_cc_per_min {} out of range [{}, {}]",
                self.injector_flow_cc_per_min,
                INJECTOR_FLOW_CC_PER_MIN_MIN,
                INJECTOR_FLOW_CC_PER_MIN_MAX
            ));
        }
        if self.fuel_density_gram_per_cc <= 0.0 {
            return Err(format!(
                "fuel_density_gram_per_cc {} must be positive",
                self.fuel_density_gram_per_cc
            ));
        }
        if self.cylinder_stroke_cm <= 0.0 || self.piston_area_sq_cm <= 0.0 {
            return Err("cylinder geometry must be positive".to_string());
        }
        if self.air_density_g_per_cc <= 0.0 {
            return Err(format!(
                "air_density_g_per_cc {} must be positive",
                self.air_density_g_per_cc
            ));
        }
        if self.cylinder_count == 0 || self.cylinder_count as usize > MAX_CYLINDERS {
            return Err(format!(
                "cylinder_count {} out of range [1, {}]",
                self.cylinder_count, MAX_CYLINDERS
            ));
        }
        if self.firing_order.len() != self.cylinder_count as usize {
            return Err(format!(
                "firing_order has {} entries, expected {}",
                self.firing_order.len(),
                self.cylinder_count
            ));
        }
        for (i, &cylinder) in self.firing_order.iter().enumerate() {
            if cylinder == 0 || cylinder > self.cylinder_count {
                return Err(format!(
                    "firing_order[{i}] = {cylinder} outside 1..={}",
                    self.cylinder_count
                ));
            }
            if self.firing_order[..i].contains(&cylinder) {
                return Err(format!("firing_order repeats cylinder {cylinder}"));
            }
        }
        Ok(())
    }
}
