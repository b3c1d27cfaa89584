use aircraft_sim::axis::Direction;
use aircraft_sim::sim::{self, Pilot, SimConfig};
use aircraft_sim::vehicle::{Vehicle, VehicleBuilder};

/// Flies east-west legs of fixed length, reversing course at the end of
/// each leg. Turns stay clear of north so the heading never wraps.
struct RacetrackPilot {
    leg_time: f64,
    leg_started: f64,
    turns: usize,
}

impl Pilot for RacetrackPilot {
    fn command(&mut self, time: f64, vehicle: &mut Vehicle) {
        if !vehicle.heading.is_captured() || time - self.leg_started < self.leg_time {
            return;
        }
        if vehicle.heading.current == 90 {
            vehicle.heading.command(270, Direction::Increasing);
        } else {
            vehicle.heading.command(90, Direction::Decreasing);
        }
        self.turns += 1;
        self.leg_started = time;
    }

    fn is_done(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "Racetrack"
    }
}

fn main() {
    env_logger::init();

    let vehicle = VehicleBuilder::new("Trainer")
        .altitude(4_000)
        .heading(90)
        .heading_rate(3.0)
        .speed(110.0)
        .build();

    let config = SimConfig { dt: 1.0, max_time: 900.0 };

    let mut pilot = RacetrackPilot { leg_time: 120.0, leg_started: 0.0, turns: 0 };

    println!("Simulating with {} pilot...", pilot.name());
    let samples = match sim::simulate_with(&vehicle, &config, &mut pilot) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    let max_range = samples.iter().map(|s| s.ground_range()).fold(0.0_f64, f64::max);

    println!("Turns flown: {}", pilot.turns);
    println!("Max distance from start: {:.0} m", max_range);
    if let Some(last) = samples.last() {
        println!("Final heading: {} deg at t={:.0} s", last.heading, last.time);
    }
    println!("Samples: {}", samples.len());
}
