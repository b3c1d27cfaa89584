use log::info;

use crate::axis::Direction;
use crate::vehicle::Vehicle;

/// Trait for whatever issues commands to the vehicle.
///
/// The runner calls [`command`](Pilot::command) once per tick before the axis
/// updates. This is the only place a neutral axis gets re-armed.
pub trait Pilot {
    fn command(&mut self, time: f64, vehicle: &mut Vehicle);

    /// No further commands will be issued.
    fn is_done(&self) -> bool {
        true
    }

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Issues nothing; the vehicle flies out whatever it was built with.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPilot;

impl Pilot for NoPilot {
    fn command(&mut self, _time: f64, _vehicle: &mut Vehicle) {}

    fn name(&self) -> &str {
        "none"
    }
}

// ---------------------------------------------------------------------------
// Scripted commands
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// New altitude, direction picked by comparison.
    Altitude(i32),
    /// New heading with an explicit turn direction.
    Heading(i32, Direction),
    /// New speed, direction picked by comparison.
    Speed(f64),
}

impl Command {
    pub fn apply(self, vehicle: &mut Vehicle) {
        match self {
            Command::Altitude(target) => {
                let dir = Direction::toward(vehicle.altitude.current, target);
                vehicle.altitude.command(target, dir);
            }
            Command::Heading(target, dir) => vehicle.heading.command(target, dir),
            Command::Speed(target) => {
                let dir = Direction::toward(vehicle.speed.current, target);
                vehicle.speed.command(target, dir);
            }
        }
    }
}

/// Plays back a list of `(time, command)` pairs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPilot {
    script: Vec<(f64, Command)>,
    next: usize,
}

impl ScriptedPilot {
    pub fn new(mut script: Vec<(f64, Command)>) -> Self {
        script.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { script, next: 0 }
    }

    pub fn at(mut self, time: f64, command: Command) -> Self {
        self.script.push((time, command));
        Self::new(self.script)
    }

    pub fn remaining(&self) -> usize {
        self.script.len() - self.next
    }
}

impl Pilot for ScriptedPilot {
    fn command(&mut self, time: f64, vehicle: &mut Vehicle) {
        while let Some(&(at, cmd)) = self.script.get(self.next) {
            if at > time {
                break;
            }
            info!("t={:.1}s {}: {:?}", time, vehicle.name, cmd);
            cmd.apply(vehicle);
            self.next += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.next >= self.script.len()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;

    #[test]
    fn command_picks_direction() {
        let mut v = presets::light_twin();
        Command::Altitude(8_000).apply(&mut v);
        assert_eq!(v.altitude.direction, Direction::Increasing);
        Command::Speed(140.0).apply(&mut v);
        assert_eq!(v.speed.direction, Direction::Decreasing);
        Command::Heading(180, Direction::Decreasing).apply(&mut v);
        assert_eq!((v.heading.target, v.heading.direction), (180, Direction::Decreasing));
    }

    #[test]
    fn script_fires_in_time_order() {
        let mut pilot = ScriptedPilot::default()
            .at(10.0, Command::Speed(180.0))
            .at(0.0, Command::Altitude(7_000));
        let mut v = presets::light_twin();

        pilot.command(0.0, &mut v);
        assert_eq!(v.altitude.target, 7_000);
        assert_eq!(v.speed.target, 160.0);
        assert_eq!(pilot.remaining(), 1);

        pilot.command(5.0, &mut v);
        assert!(!pilot.is_done());

        pilot.command(10.0, &mut v);
        assert_eq!(v.speed.target, 180.0);
        assert!(pilot.is_done());
    }
}
