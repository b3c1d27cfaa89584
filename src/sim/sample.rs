use nalgebra::Vector3;

use crate::axis::Direction;
use crate::vehicle::Vehicle;

// ---------------------------------------------------------------------------
// Unit conversions
// ---------------------------------------------------------------------------

pub const FT_TO_M: f64 = 0.3048;
pub const KT_TO_MS: f64 = 1852.0 / 3600.0;

/// Which axis of a [`Vehicle`] a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Altitude,
    Heading,
    Speed,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Altitude, Axis::Heading, Axis::Speed];
}

// ---------------------------------------------------------------------------
// One recorded tick
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub time: f64,                  // s
    pub altitude: i32,              // ft
    pub heading: i32,               // deg
    pub speed: f64,                 // kt
    pub altitude_dir: Direction,
    pub heading_dir: Direction,
    pub speed_dir: Direction,
    pub pos: Vector3<f64>,          // m, ENU from start point
    /// Axes that reached their target during this tick, indexed by `Axis`.
    pub captured: [bool; 3],
}

impl Sample {
    pub fn record(time: f64, vehicle: &Vehicle, pos: Vector3<f64>) -> Self {
        Self {
            time,
            altitude: vehicle.altitude.current,
            heading: vehicle.heading.current,
            speed: vehicle.speed.current,
            altitude_dir: vehicle.altitude.direction,
            heading_dir: vehicle.heading.direction,
            speed_dir: vehicle.speed.direction,
            pos,
            captured: [false; 3],
        }
    }

    /// Record the state after a tick, flagging axes that were armed before
    /// the update (`before`) and came out neutral.
    pub fn after_tick(time: f64, vehicle: &Vehicle, pos: Vector3<f64>, before: [Direction; 3]) -> Self {
        let mut sample = Self::record(time, vehicle, pos);
        for axis in Axis::ALL {
            let i = axis as usize;
            sample.captured[i] = !before[i].is_neutral() && sample.direction(axis).is_neutral();
        }
        sample
    }

    /// Axis directions in `Axis` order.
    pub fn directions(vehicle: &Vehicle) -> [Direction; 3] {
        [vehicle.altitude.direction, vehicle.heading.direction, vehicle.speed.direction]
    }

    pub fn is_captured(&self, axis: Axis) -> bool {
        self.captured[axis as usize]
    }

    pub fn direction(&self, axis: Axis) -> Direction {
        match axis {
            Axis::Altitude => self.altitude_dir,
            Axis::Heading => self.heading_dir,
            Axis::Speed => self.speed_dir,
        }
    }

    /// Horizontal distance from the start point, m.
    pub fn ground_range(&self) -> f64 {
        self.pos.xy().norm()
    }
}
