//! Engine speed conversions: RPM from crank speed, and projections
//! between crank angle and capture-clock ticks.
//!
//! Crank speed arrives from the decoder as degrees per capture tick (or
//! its inverse, ticks per degree). The projections anchor on the last
//! observed crank event and assume constant speed since — good enough
//! between events at control-loop rates.
//!
//! Full-cycle variants work over 720° (one four-stroke cycle); the
//! half-cycle variants over 360° for decoders without cam sync.

use ecu_common::consts::{FULL_CYCLE_DEG, HALF_CYCLE_DEG};
use ecu_common::types::{Angle, Ticks};

/// Engine speed conversions with the per-clock multiplier precomputed.
#[derive(Debug, Clone, Copy)]
pub struct SpeedCalculator {
    /// rev·ticks / (degree·minute) — converts degrees/tick to RPM.
    rpm_multiplier: f32,
}

impl SpeedCalculator {
    /// Derive the conversion multiplier from the capture clock rate.
    pub fn new(ticks_per_second: f32) -> Self {
        let rpm_multiplier = ticks_per_second
            * (60.0 / 1.0)   // seconds/minute
            * (1.0 / 360.0); // rev/degree
        Self { rpm_multiplier }
    }

    /// Engine speed [RPM] from crank speed [degrees/tick].
    #[inline]
    pub fn rpm(&self, crank_speed_degrees_per_tick: f32) -> f32 {
        self.rpm_multiplier * crank_speed_degrees_per_tick
    }
}

fn ticks_from_angle_cycle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    inverse_ticks_per_degree: f32,
    angle: Angle,
    cycle_angle: Angle,
) -> Ticks {
    // Wrap the target forward until it lies ahead of the last event.
    let mut angle = angle;
    while angle < last_event_angle {
        angle += cycle_angle;
    }

    let angle_diff = angle - last_event_angle;

    (inverse_ticks_per_degree * angle_diff + last_event_ticks as f32) as Ticks
}

/// Capture-clock tick at which the crank reaches `angle`, over the full
/// 720° cycle.
#[inline]
pub fn ticks_from_angle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    inverse_ticks_per_degree: f32,
    angle: Angle,
) -> Ticks {
    ticks_from_angle_cycle(
        last_event_angle,
        last_event_ticks,
        inverse_ticks_per_degree,
        angle,
        FULL_CYCLE_DEG,
    )
}

/// Capture-clock tick at which the crank reaches `angle`, over a single
/// 360° revolution.
#[inline]
pub fn ticks_from_angle_half_cycle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    inverse_ticks_per_degree: f32,
    angle: Angle,
) -> Ticks {
    ticks_from_angle_cycle(
        last_event_angle,
        last_event_ticks,
        inverse_ticks_per_degree,
        angle,
        HALF_CYCLE_DEG,
    )
}

fn angle_at_cycle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    degrees_per_tick: f32,
    ticks: Ticks,
    cycle_angle: Angle,
) -> Angle {
    let ticks_diff = ticks - last_event_ticks;

    let mut angle = last_event_angle + degrees_per_tick * ticks_diff as f32;

    while angle >= cycle_angle {
        angle -= cycle_angle;
    }

    angle
}

/// Crank angle after cylinder 1 TDC at capture-clock tick `ticks`, over
/// the full 720° cycle. `ticks` must not precede the last event.
#[inline]
pub fn angle_at(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    degrees_per_tick: f32,
    ticks: Ticks,
) -> Angle {
    angle_at_cycle(
        last_event_angle,
        last_event_ticks,
        degrees_per_tick,
        ticks,
        FULL_CYCLE_DEG,
    )
}

/// Crank angle at tick `ticks` over a single 360° revolution.
#[inline]
pub fn angle_at_half_cycle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    degrees_per_tick: f32,
    ticks: Ticks,
) -> Angle {
    angle_at_cycle(
        last_event_angle,
        last_event_ticks,
        degrees_per_tick,
        ticks,
        HALF_CYCLE_DEG,
    )
}

fn angle_in_past_cycle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    degrees_per_tick: f32,
    ticks: Ticks,
    cycle_angle: Angle,
) -> Angle {
    let ticks_diff = last_event_ticks - ticks;

    let mut angle = last_event_angle - degrees_per_tick * ticks_diff as f32;

    while angle < 0.0 {
        angle += cycle_angle;
    }

    angle
}

/// Crank angle at a tick BEFORE the last event, over the full 720°
/// cycle. `ticks` must not exceed `last_event_ticks`.
#[inline]
pub fn angle_in_past(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    degrees_per_tick: f32,
    ticks: Ticks,
) -> Angle {
    angle_in_past_cycle(
        last_event_angle,
        last_event_ticks,
        degrees_per_tick,
        ticks,
        FULL_CYCLE_DEG,
    )
}

/// Crank angle at a past tick over a single 360° revolution.
#[inline]
pub fn angle_in_past_half_cycle(
    last_event_angle: Angle,
    last_event_ticks: Ticks,
    degrees_per_tick: f32,
    ticks: Ticks,
) -> Angle {
    angle_in_past_cycle(
        last_event_angle,
        last_event_ticks,
        degrees_per_tick,
        ticks,
        HALF_CYCLE_DEG,
    )
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const TICKS_PER_SECOND: f32 = 2_000_000.0;

    /// Crank speed [degrees/tick] for a given RPM at the test clock.
    fn crank_speed(rpm: f32) -> f32 {
        rpm * (1.0 / 60.0) * (1.0 / TICKS_PER_SECOND) * 360.0
    }

    #[test]
    fn rpm_round_trips_through_crank_speed() {
        let calc = SpeedCalculator::new(TICKS_PER_SECOND);
        for rpm in [800.0, 1000.0, 3500.0, 7200.0] {
            let back = calc.rpm(crank_speed(rpm));
            assert!((back - rpm).abs() < 0.01, "rpm {rpm} -> {back}");
        }
    }

    #[test]
    fn zero_speed_is_zero_rpm() {
        let calc = SpeedCalculator::new(TICKS_PER_SECOND);
        assert_eq!(calc.rpm(0.0), 0.0);
    }

    #[test]
    fn ticks_from_angle_reference_vector() {
        // 1000 RPM at 2 MHz: 333.33 ticks/degree; 10° ahead of the event
        // at tick 100 lands at tick 3433.
        let inverse = 1.0 / crank_speed(1000.0);
        let ticks = ticks_from_angle(25.0, 100, inverse, 35.0);
        assert_eq!(ticks, 3433);
    }

    #[test]
    fn ticks_from_angle_wraps_behind_event() {
        // Target angle behind the event wraps a full cycle forward.
        let inverse = 1.0 / crank_speed(1000.0);
        let ahead = ticks_from_angle(25.0, 100, inverse, 35.0);
        let wrapped = ticks_from_angle(25.0, 100, inverse, 15.0);
        // 15° is 710° of rotation away, far beyond the 10° case.
        assert!(wrapped > ahead);
        let expected = (710.0 * inverse + 100.0) as Ticks;
        assert_eq!(wrapped, expected);
    }

    #[test]
    fn half_cycle_wraps_at_360() {
        let inverse = 1.0 / crank_speed(1000.0);
        let wrapped = ticks_from_angle_half_cycle(25.0, 100, inverse, 15.0);
        let expected = (350.0 * inverse + 100.0) as Ticks;
        assert_eq!(wrapped, expected);
    }

    #[test]
    fn angle_advances_with_ticks() {
        let speed = crank_speed(1000.0); // 0.003 degrees/tick
        let angle = angle_at(25.0, 100, speed, 3433);
        assert!((angle - 35.0).abs() < 0.01);
    }

    #[test]
    fn angle_wraps_at_cycle_end() {
        let speed = crank_speed(1000.0);
        // 719° event plus 2° of rotation wraps to 1°.
        let ticks_for_2_deg = (2.0 / speed) as Ticks;
        let angle = angle_at(719.0, 0, speed, ticks_for_2_deg);
        assert!((angle - 1.0).abs() < 0.01, "got {angle}");
    }

    #[test]
    fn angle_in_past_projects_backward() {
        let speed = crank_speed(1000.0);
        let angle = angle_in_past(35.0, 3433, speed, 100);
        assert!((angle - 25.0).abs() < 0.01, "got {angle}");
    }

    #[test]
    fn angle_in_past_wraps_below_zero() {
        let speed = crank_speed(1000.0);
        // 5° event minus 10° of rotation wraps to 715°.
        let ticks_for_10_deg = (10.0 / speed) as Ticks;
        let angle = angle_in_past(5.0, ticks_for_10_deg, speed, 0);
        assert!((angle - 715.0).abs() < 0.01, "got {angle}");
    }

    #[test]
    fn angle_in_past_half_cycle_wraps_to_355() {
        let speed = crank_speed(1000.0);
        let ticks_for_10_deg = (10.0 / speed) as Ticks;
        let angle = angle_in_past_half_cycle(5.0, ticks_for_10_deg, speed, 0);
        assert!((angle - 355.0).abs() < 0.01, "got {angle}");
    }
}
