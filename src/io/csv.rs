use std::io::Write;

use crate::error::Result;
use crate::sim::Sample;

/// Write sampled telemetry in CSV format.
///
/// Columns: time, altitude, heading, speed,
///          altitude_dir, heading_dir, speed_dir, pos_e, pos_n, pos_u
pub fn write_trajectory<W: Write>(writer: &mut W, samples: &[Sample]) -> Result<()> {
    writeln!(
        writer,
        "time,altitude,heading,speed,\
         altitude_dir,heading_dir,speed_dir,pos_e,pos_n,pos_u"
    )?;

    for s in samples {
        writeln!(
            writer,
            "{:.3},{},{},{:.3},{},{},{},{:.2},{:.2},{:.2}",
            s.time,
            s.altitude,
            s.heading,
            s.speed,
            s.altitude_dir.signum(),
            s.heading_dir.signum(),
            s.speed_dir.signum(),
            s.pos.x,
            s.pos.y,
            s.pos.z,
        )?;
    }

    Ok(())
}

/// Write telemetry to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, samples: &[Sample]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Direction;
    use nalgebra::Vector3;

    #[test]
    fn csv_output_has_header_and_rows() {
        let samples = vec![
            Sample {
                time: 0.0,
                altitude: 3_000,
                heading: 355,
                speed: 150.0,
                altitude_dir: Direction::Increasing,
                heading_dir: Direction::Decreasing,
                speed_dir: Direction::Neutral,
                pos: Vector3::new(0.0, 0.0, 914.4),
                captured: [false; 3],
            },
            Sample {
                time: 1.0,
                altitude: 3_020,
                heading: 352,
                speed: 150.0,
                altitude_dir: Direction::Increasing,
                heading_dir: Direction::Decreasing,
                speed_dir: Direction::Neutral,
                pos: Vector3::new(-8.0, 76.8, 920.5),
                captured: [false; 3],
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &samples).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.000,3000,355,150.000,1,-1,0,0.00,0.00,914.40");
    }
}
