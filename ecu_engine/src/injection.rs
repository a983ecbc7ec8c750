//! Injection pulse width from airflow, target mixture and engine speed.
//!
//! ```text
//! injectionCc    = airflow · fuelAirRatio / rpm   (per intake stroke pair)
//! pulseTicks     = injectionCc · injectorFlowTicksPerCc
//! ```
//!
//! Everything constant is folded into a single multiplier at
//! construction; the per-event computation is one multiply chain plus a
//! round to integer ticks.

use ecu_common::types::Ticks;

/// Injection pulse width calculator with the folded multiplier.
#[derive(Debug, Clone, Copy)]
pub struct InjectionCalculator {
    /// rev·ticks·s / (min·g) — folds clock rate, injector flow and fuel
    /// density.
    multiplier: f32,
}

impl InjectionCalculator {
    /// Derive the multiplier from the capture clock rate, injector flow
    /// rate [cc/min] and fuel density [g/cc].
    pub fn new(ticks_per_second: f32, injector_flow_cc_per_min: f32, fuel_density_gram_per_cc: f32) -> Self {
        let injector_flow_ticks_per_cc = ticks_per_second
            * (60.0 / 1.0) // seconds/minute
            * (1.0 / injector_flow_cc_per_min);

        let multiplier = injector_flow_ticks_per_cc * 30.0 * (1.0 / fuel_density_gram_per_cc);

        Self { multiplier }
    }

    /// Injection pulse width in capture-clock ticks, rounded to nearest.
    ///
    /// `inverse_rpm` is minutes per revolution; `target_fuel_air_ratio`
    /// the commanded mixture (fuel mass / air mass).
    #[inline]
    pub fn length_ticks(
        &self,
        target_fuel_air_ratio: f32,
        inverse_rpm: f32,
        airflow_grams_per_second: f32,
    ) -> Ticks {
        let length = airflow_grams_per_second
            * inverse_rpm
            * target_fuel_air_ratio
            * self.multiplier;

        (length + 0.5) as Ticks
    }
}
