use aircraft_sim::axis::Direction;
use aircraft_sim::io::{self, FlightSummary};
use aircraft_sim::sim::{self, Axis, CaptureDetector, Command, EventDetector, ScriptedPilot, SimConfig};
use aircraft_sim::vehicle::presets;
use aircraft_sim::VehicleError;

fn main() -> Result<(), VehicleError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional outputs: aircraft-sim [trajectory.csv] [summary.json]
    let mut args = std::env::args().skip(1);
    let csv_path = args.next();
    let json_path = args.next();

    // -----------------------------------------------------------------------
    // Vehicle + command script: level-off, turn to the south, slow down
    // -----------------------------------------------------------------------
    let vehicle = presets::light_twin();
    vehicle.validate()?;

    let mut pilot = ScriptedPilot::new(vec![
        (0.0, Command::Altitude(8_000)),
        (30.0, Command::Heading(180, Direction::Decreasing)),
        (60.0, Command::Speed(140.0)),
    ]);

    let config = SimConfig { dt: 1.0, max_time: 300.0 };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let samples = sim::simulate_with(&vehicle, &config, &mut pilot)?;

    let mut detectors: Vec<Box<dyn EventDetector>> = Axis::ALL
        .iter()
        .map(|&axis| Box::new(CaptureDetector::new(axis)) as Box<dyn EventDetector>)
        .collect();
    let events = sim::detect_events(&samples, &mut detectors);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  AIRCRAFT KINEMATICS — {}", vehicle.name);
    println!("====================================================================");
    println!();
    println!("  Axis Rates");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Altitude:  {:>6} ft/s", vehicle.altitude.rate);
    println!("  Heading:   {:>6.1} deg/s", vehicle.heading.rate);
    println!("  Speed:     {:>6.1} kt/s", vehicle.speed.rate);
    println!();

    println!("  Captures");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in &events {
        println!("  t={:>6.1}s   {:?}", e.time, e.kind);
    }
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>7}  {:>5}  {:>7}  {:>15}  {:>9}",
        "t (s)", "alt(ft)", "hdg", "spd(kt)", "dirs", "range(m)"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (samples.len() / 30).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % sample_interval != 0 && i != samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.1}  {:>7}  {:>5}  {:>7.1}  {:>4} {:>4} {:>5}  {:>9.0}",
            s.time,
            s.altitude,
            s.heading,
            s.speed,
            s.altitude_dir,
            s.heading_dir,
            s.speed_dir,
            s.ground_range()
        );
    }
    println!();

    if let Some(summary) = FlightSummary::from_samples(&samples) {
        println!(
            "  Flight time: {:.1} s   Distance: {:.0} m   Final: {} ft / {} deg / {:.1} kt",
            summary.duration,
            summary.distance_m,
            summary.final_altitude,
            summary.final_heading,
            summary.final_speed
        );
        if let Some(path) = &json_path {
            io::write_summary_file(path, &vehicle, &summary)?;
            log::info!("summary written to {}", path);
        }
    }
    if let Some(path) = &csv_path {
        io::write_trajectory_file(path, &samples)?;
        log::info!("trajectory written to {}", path);
    }

    println!("  Simulation: {} samples, dt={} s", samples.len(), config.dt);
    println!("====================================================================");
    println!();
    Ok(())
}
