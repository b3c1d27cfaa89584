use log::trace;
use nalgebra::Vector3;

use crate::error::Result;
use crate::vehicle::Vehicle;
use super::config::SimConfig;
use super::pilot::{NoPilot, Pilot};
use super::sample::{Sample, FT_TO_M, KT_TO_MS};

// ---------------------------------------------------------------------------
// Fixed-step simulation loop
// ---------------------------------------------------------------------------

/// Fly `vehicle` with `pilot` issuing commands, one sample per tick.
///
/// Position is dead-reckoned from the ground velocity held over each tick;
/// the up component is the current altitude. The run ends at `max_time`, or
/// earlier once the vehicle is steady and the pilot has nothing left to say.
pub fn simulate_with(
    vehicle: &Vehicle,
    config: &SimConfig,
    pilot: &mut dyn Pilot,
) -> Result<Vec<Sample>> {
    config.validate()?;

    let mut vehicle = vehicle.clone();
    let mut time = 0.0;
    let mut pos = Vector3::new(0.0, 0.0, f64::from(vehicle.altitude.current) * FT_TO_M);

    // Whole steps only; accumulating dt drifts past max_time.
    let steps = (config.max_time / config.dt + 1e-9).floor() as usize;
    let mut samples = Vec::with_capacity((steps + 1).min(200_000));
    samples.push(Sample::record(time, &vehicle, pos));

    for step in 1..=steps {
        pilot.command(time, &mut vehicle);

        let before = Sample::directions(&vehicle);
        let vel = vehicle.ground_velocity() * KT_TO_MS;
        vehicle.update(config.dt);
        time = step as f64 * config.dt;

        pos += vel * config.dt;
        pos.z = f64::from(vehicle.altitude.current) * FT_TO_M;

        trace!(
            "t={:.2} alt={} hdg={} spd={:.1}",
            time,
            vehicle.altitude.current,
            vehicle.heading.current,
            vehicle.speed.current
        );
        samples.push(Sample::after_tick(time, &vehicle, pos, before));

        if vehicle.is_steady() && pilot.is_done() {
            break;
        }
    }

    Ok(samples)
}

/// Simulate with no pilot (convenience wrapper).
pub fn simulate(vehicle: &Vehicle, config: &SimConfig) -> Result<Vec<Sample>> {
    simulate_with(vehicle, config, &mut NoPilot)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
