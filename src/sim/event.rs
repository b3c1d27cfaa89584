use super::sample::{Axis, Sample};

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    AltitudeCaptured(i32),
    HeadingCaptured(i32),
    SpeedCaptured(f64),
    Custom(String),
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub sample: Sample,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive samples and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind>;
}

/// Detects an axis reaching its target. Only ticks where the ramp itself
/// went neutral count; a pilot disarming the axis does not.
pub struct CaptureDetector {
    pub axis: Axis,
}

impl CaptureDetector {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }
}

impl EventDetector for CaptureDetector {
    fn check(&mut self, _prev: &Sample, current: &Sample) -> Option<EventKind> {
        if !current.is_captured(self.axis) {
            return None;
        }
        Some(match self.axis {
            Axis::Altitude => EventKind::AltitudeCaptured(current.altitude),
            Axis::Heading => EventKind::HeadingCaptured(current.heading),
            Axis::Speed => EventKind::SpeedCaptured(current.speed),
        })
    }
}

/// Detects when altitude crosses a threshold (climbing or descending).
pub struct AltitudeDetector {
    pub altitude: i32,
    pub climbing: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: i32, climbing: bool) -> Self {
        Self { altitude, climbing, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &Sample, current: &Sample) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.climbing {
            prev.altitude < self.altitude && current.altitude >= self.altitude
        } else {
            prev.altitude > self.altitude && current.altitude <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Altitude {} ft ({})",
                self.altitude,
                if self.climbing { "climbing" } else { "descending" }
            )))
        } else {
            None
        }
    }
}

/// Run every detector over each consecutive pair of samples.
pub fn detect_events(samples: &[Sample], detectors: &mut [Box<dyn EventDetector>]) -> Vec<SimEvent> {
    let mut events = Vec::new();
    for pair in samples.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent { time: pair[1].time, kind, sample: pair[1].clone() });
            }
        }
    }
    events
}
