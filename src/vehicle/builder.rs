use crate::axis::{AxisRamp, Direction};
use crate::error::Result;

use super::state::Vehicle;

// ---------------------------------------------------------------------------
// Vehicle builder
// ---------------------------------------------------------------------------

/// Fluent construction of a [`Vehicle`]. Every axis starts parked on its
/// current value unless a target or direction is given.
pub struct VehicleBuilder {
    name: String,
    altitude: i32,
    altitude_target: Option<i32>,
    altitude_rate: i32,
    altitude_direction: Direction,
    heading: i32,
    heading_target: Option<i32>,
    heading_rate: f64,
    heading_direction: Direction,
    speed: f64,
    speed_target: Option<f64>,
    speed_rate: f64,
    speed_direction: Direction,
}

impl VehicleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            altitude: 0,
            altitude_target: None,
            altitude_rate: 25,
            altitude_direction: Direction::Neutral,
            heading: 0,
            heading_target: None,
            heading_rate: 3.0,
            heading_direction: Direction::Neutral,
            speed: 0.0,
            speed_target: None,
            speed_rate: 2.0,
            speed_direction: Direction::Neutral,
        }
    }

    pub fn altitude(mut self, v: i32) -> Self { self.altitude = v; self }
    pub fn altitude_target(mut self, v: i32) -> Self { self.altitude_target = Some(v); self }
    pub fn altitude_rate(mut self, v: i32) -> Self { self.altitude_rate = v; self }
    pub fn altitude_direction(mut self, v: Direction) -> Self { self.altitude_direction = v; self }
    pub fn heading(mut self, v: i32) -> Self { self.heading = v; self }
    pub fn heading_target(mut self, v: i32) -> Self { self.heading_target = Some(v); self }
    pub fn heading_rate(mut self, v: f64) -> Self { self.heading_rate = v; self }
    pub fn heading_direction(mut self, v: Direction) -> Self { self.heading_direction = v; self }
    pub fn speed(mut self, v: f64) -> Self { self.speed = v; self }
    pub fn speed_target(mut self, v: f64) -> Self { self.speed_target = Some(v); self }
    pub fn speed_rate(mut self, v: f64) -> Self { self.speed_rate = v; self }
    pub fn speed_direction(mut self, v: Direction) -> Self { self.speed_direction = v; self }

    pub fn build(self) -> Vehicle {
        Vehicle {
            name: self.name,
            altitude: AxisRamp::new(
                self.altitude,
                self.altitude_target.unwrap_or(self.altitude),
                self.altitude_rate,
                self.altitude_direction,
            ),
            heading: AxisRamp::new(
                self.heading,
                self.heading_target.unwrap_or(self.heading),
                self.heading_rate,
                self.heading_direction,
            ),
            speed: AxisRamp::new(
                self.speed,
                self.speed_target.unwrap_or(self.speed),
                self.speed_rate,
                self.speed_direction,
            ),
        }
    }

    /// Build and run [`Vehicle::validate`] on the result.
    pub fn try_build(self) -> Result<Vehicle> {
        let vehicle = self.build();
        vehicle.validate()?;
        Ok(vehicle)
    }
}

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Light twin in cruise at 6,500 ft.
    pub fn light_twin() -> Vehicle {
        VehicleBuilder::new("Light Twin")
            .altitude(6_500)
            .altitude_rate(15)
            .heading(270)
            .heading_rate(3.0)
            .speed(160.0)
            .speed_rate(1.5)
            .build()
    }

    /// Narrow-body airliner lined up on the runway.
    pub fn airliner() -> Vehicle {
        VehicleBuilder::new("Airliner")
            .altitude(0)
            .altitude_rate(35)
            .heading(350)
            .heading_rate(1.5)
            .speed(0.0)
            .speed_rate(4.0)
            .build()
    }
}
