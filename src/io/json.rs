use std::io::Write;

use crate::error::Result;
use crate::sim::{detect_events, Axis, CaptureDetector, EventDetector, EventKind, Sample};
use crate::vehicle::Vehicle;

/// Summary statistics computed from sampled telemetry.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub duration: f64,
    pub max_altitude: i32,
    pub min_altitude: i32,
    pub max_speed: f64,
    pub final_altitude: i32,
    pub final_heading: i32,
    pub final_speed: f64,
    pub distance_m: f64,
    pub altitude_capture: Option<f64>,
    pub heading_capture: Option<f64>,
    pub speed_capture: Option<f64>,
}

impl FlightSummary {
    /// Compute summary from samples. `None` for an empty slice.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let last = samples.last()?;

        let max_altitude = samples.iter().map(|s| s.altitude).max()?;
        let min_altitude = samples.iter().map(|s| s.altitude).min()?;
        let max_speed = samples.iter().map(|s| s.speed).fold(f64::MIN, f64::max);

        let distance_m = samples
            .windows(2)
            .map(|w| (w[1].pos.xy() - w[0].pos.xy()).norm())
            .sum();

        let mut detectors: Vec<Box<dyn EventDetector>> = Axis::ALL
            .iter()
            .map(|&axis| Box::new(CaptureDetector::new(axis)) as Box<dyn EventDetector>)
            .collect();
        let events = detect_events(samples, &mut detectors);
        // Last capture per axis: earlier ones were superseded by later commands.
        let last_capture = |want: Axis| {
            events
                .iter()
                .filter(|e| {
                    matches!(
                        (&e.kind, want),
                        (EventKind::AltitudeCaptured(_), Axis::Altitude)
                            | (EventKind::HeadingCaptured(_), Axis::Heading)
                            | (EventKind::SpeedCaptured(_), Axis::Speed)
                    )
                })
                .map(|e| e.time)
                .last()
        };

        Some(FlightSummary {
            duration: last.time - samples[0].time,
            max_altitude,
            min_altitude,
            max_speed,
            final_altitude: last.altitude,
            final_heading: last.heading,
            final_speed: last.speed,
            distance_m,
            altitude_capture: last_capture(Axis::Altitude),
            heading_capture: last_capture(Axis::Heading),
            speed_capture: last_capture(Axis::Speed),
        })
    }
}

fn opt(v: Option<f64>) -> String {
    match v {
        Some(t) => format!("{:.2}", t),
        None => "null".into(),
    }
}

/// Escape a string for use inside a JSON string literal.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Write flight summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    vehicle: &Vehicle,
    summary: &FlightSummary,
) -> Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"vehicle\": {{")?;
    writeln!(writer, "    \"name\": \"{}\"", escape(&vehicle.name))?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"flight\": {{")?;
    writeln!(writer, "    \"duration_s\": {:.2},", summary.duration)?;
    writeln!(writer, "    \"max_altitude_ft\": {},", summary.max_altitude)?;
    writeln!(writer, "    \"min_altitude_ft\": {},", summary.min_altitude)?;
    writeln!(writer, "    \"max_speed_kt\": {:.2},", summary.max_speed)?;
    writeln!(writer, "    \"final_altitude_ft\": {},", summary.final_altitude)?;
    writeln!(writer, "    \"final_heading_deg\": {},", summary.final_heading)?;
    writeln!(writer, "    \"final_speed_kt\": {:.2},", summary.final_speed)?;
    writeln!(writer, "    \"distance_m\": {:.2}", summary.distance_m)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"captures\": {{")?;
    writeln!(writer, "    \"altitude_s\": {},", opt(summary.altitude_capture))?;
    writeln!(writer, "    \"heading_s\": {},", opt(summary.heading_capture))?;
    writeln!(writer, "    \"speed_s\": {}", opt(summary.speed_capture))?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(path: &str, vehicle: &Vehicle, summary: &FlightSummary) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, vehicle, summary)
}
