use nalgebra::Vector3;

use crate::axis::{Altitude, AxisRamp, Heading, Speed, FULL_CIRCLE};
use crate::error::{Result, VehicleError};

// ---------------------------------------------------------------------------
// Vehicle: three independent axes
// ---------------------------------------------------------------------------

/// Kinematic state of one aircraft.
///
/// Each axis is advanced by its own update call; they share nothing, so the
/// caller may run them in any order within a tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vehicle {
    pub name: String,
    pub altitude: AxisRamp<Altitude>, // ft, rate ft/s
    pub heading: AxisRamp<Heading>,   // deg true, rate deg/s
    pub speed: AxisRamp<Speed>,       // kt, rate kt/s
}

impl Vehicle {
    pub fn new(
        name: impl Into<String>,
        altitude: AxisRamp<Altitude>,
        heading: AxisRamp<Heading>,
        speed: AxisRamp<Speed>,
    ) -> Self {
        Self { name: name.into(), altitude, heading, speed }
    }

    pub fn update_altitude(&mut self, dt: f64) {
        self.altitude.update(dt);
    }

    pub fn update_heading(&mut self, dt: f64) {
        self.heading.update(dt);
    }

    pub fn update_speed(&mut self, dt: f64) {
        self.speed.update(dt);
    }

    /// Advance all three axes by `dt` without any input checks.
    pub fn update(&mut self, dt: f64) {
        self.update_altitude(dt);
        self.update_heading(dt);
        self.update_speed(dt);
    }

    /// Checked variant of [`update`](Self::update). Nothing is mutated on error.
    pub fn try_update(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(VehicleError::InvalidTimeStep(dt));
        }
        self.validate()?;
        self.update(dt);
        Ok(())
    }

    /// Check the fields the unchecked path silently accepts.
    pub fn validate(&self) -> Result<()> {
        check_rate("altitude", f64::from(self.altitude.rate))?;
        check_rate("heading", self.heading.rate)?;
        check_rate("speed", self.speed.rate)?;

        for (field, value) in [("current", self.heading.current), ("target", self.heading.target)] {
            if !(0..FULL_CIRCLE).contains(&value) {
                return Err(VehicleError::HeadingOutOfRange { field, value });
            }
        }
        for (field, value) in [("current", self.speed.current), ("target", self.speed.target)] {
            if !value.is_finite() {
                return Err(VehicleError::InvalidSpeed { field, value });
            }
        }
        Ok(())
    }

    /// All three axes neutral and on target.
    pub fn is_steady(&self) -> bool {
        self.altitude.is_captured() && self.heading.is_captured() && self.speed.is_captured()
    }

    /// Horizontal velocity in ENU (speed units per second), heading 0 = north,
    /// clockwise positive.
    pub fn ground_velocity(&self) -> Vector3<f64> {
        let hdg = f64::from(self.heading.current).to_radians();
        Vector3::new(hdg.sin(), hdg.cos(), 0.0) * self.speed.current
    }
}

fn check_rate(axis: &'static str, rate: f64) -> Result<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(VehicleError::InvalidRate { axis, rate })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
