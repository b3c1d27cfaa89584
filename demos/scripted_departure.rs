use aircraft_sim::axis::Direction;
use aircraft_sim::io::{self, FlightSummary};
use aircraft_sim::sim::{self, Command, ScriptedPilot, SimConfig};
use aircraft_sim::vehicle::presets;

fn main() -> Result<(), aircraft_sim::VehicleError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let vehicle = presets::airliner();

    // Roll, rotate at 40 s, turn left onto the departure heading, then
    // accelerate to climb speed.
    let mut pilot = ScriptedPilot::default()
        .at(0.0, Command::Speed(150.0))
        .at(40.0, Command::Altitude(5_000))
        .at(60.0, Command::Heading(300, Direction::Decreasing))
        .at(90.0, Command::Speed(250.0));

    let config = SimConfig { dt: 1.0, max_time: 600.0 };
    let samples = sim::simulate_with(&vehicle, &config, &mut pilot)?;

    let mut stdout = std::io::stdout();
    if let Some(summary) = FlightSummary::from_samples(&samples) {
        io::write_summary(&mut stdout, &vehicle, &summary)?;
    }
    Ok(())
}
