//! Load fraction: measured airflow relative to the cylinder's
//! theoretical maximum.
//!
//! ```text
//! load               = airflow / cylinderMaxAirflow
//! cylinderMaxAirflow = pistonPeakVelocity · pistonArea · airDensityAtStp
//! ```
//!
//! The peak piston velocity term folds to `π/60 · stroke · rpm`, so the
//! per-event computation reduces to `airflow · inverseRpm · multiplier`.

/// Load fraction calculator with the folded inverse-max-airflow term.
#[derive(Debug, Clone, Copy)]
pub struct LoadCalculator {
    /// cyl·s·degree / (g·tick) equivalent — inverse of the max airflow
    /// per revolution.
    multiplier: f32,
}

impl LoadCalculator {
    /// Derive the multiplier from cylinder geometry [cm, cm²] and air
    /// density at STP [g/cc].
    pub fn new(cylinder_stroke_cm: f32, piston_area_sq_cm: f32, air_density_g_per_cc: f32) -> Self {
        let cylinder_max_airflow_g = (core::f32::consts::PI / 60.0)
            * cylinder_stroke_cm
            * piston_area_sq_cm
            * air_density_g_per_cc;

        Self {
            multiplier: 1.0 / cylinder_max_airflow_g,
        }
    }

    /// Load fraction from engine speed and measured airflow.
    ///
    /// `inverse_rpm` is minutes per revolution.
    #[inline]
    pub fn fraction(&self, inverse_rpm: f32, airflow_grams_per_second: f32) -> f32 {
        airflow_grams_per_second * inverse_rpm * self.multiplier
    }
}
