pub mod config;
pub mod sample;
pub mod pilot;
pub mod runner;
pub mod event;

pub use config::SimConfig;
pub use sample::{Axis, Sample};
pub use pilot::{Command, NoPilot, Pilot, ScriptedPilot};
pub use runner::{simulate, simulate_with};
pub use event::{detect_events, AltitudeDetector, CaptureDetector, EventDetector, EventKind, SimEvent};
