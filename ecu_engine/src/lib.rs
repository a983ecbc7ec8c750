//! # ECU Engine Calculators
//!
//! Unit-conversion layer on top of the interpolation core: engine speed,
//! injection pulse width, load fraction, and cylinder event angles.
//!
//! Every calculator is an explicit struct whose multiplier is derived
//! once from [`ecu_common::config::EngineConfig`] — there is no hidden
//! process-wide state. Construct [`EngineCalculators`] at startup, after
//! config validation, and hand it to the control cycle; every method is a
//! pure scalar multiply or projection safe to call from the crank event
//! handler.

pub mod events;
pub mod injection;
pub mod load;
pub mod speed;

use ecu_common::config::EngineConfig;

use crate::injection::InjectionCalculator;
use crate::load::LoadCalculator;
use crate::speed::SpeedCalculator;

/// The configured calculator bundle for one engine.
#[derive(Debug, Clone, Copy)]
pub struct EngineCalculators {
    /// Engine speed conversions.
    pub speed: SpeedCalculator,
    /// Injection pulse width.
    pub injection: InjectionCalculator,
    /// Load fraction.
    pub load: LoadCalculator,
}

impl EngineCalculators {
    /// Derive all multipliers from a validated engine configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        let calculators = Self {
            speed: SpeedCalculator::new(config.ticks_per_second),
            injection: InjectionCalculator::new(
                config.ticks_per_second,
                config.injector_flow_cc_per_min,
                config.fuel_density_gram_per_cc,
            ),
            load: LoadCalculator::new(
                config.cylinder_stroke_cm,
                config.piston_area_sq_cm,
                config.air_density_g_per_cc,
            ),
        };
        tracing::info!(
            ticks_per_second = config.ticks_per_second,
            injector_flow_cc_per_min = config.injector_flow_cc_per_min,
            "engine calculators configured"
        );
        calculators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_builds_from_config() {
        let config = EngineConfig::load_from_str(
            r#"
ticks_per_second = 2000000.0
injector_flow_cc_per_min = 265.0
cylinder_stroke_cm = 8.3
piston_area_sq_cm = 8.5
cylinder_count = 4
firing_order = [1, 3, 4, 2]
"#,
        )
        .unwrap();

        let calculators = EngineCalculators::from_config(&config);

        // 1000 RPM worth of crank speed converts back to 1000 RPM.
        let speed = 1000.0 / 60.0 / 2_000_000.0 * 360.0;
        let rpm = calculators.speed.rpm(speed);
        assert!((rpm - 1000.0).abs() < 0.01);
    }
}
