//! Error types for the checked vehicle API and telemetry output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VehicleError>;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("invalid time step: {0} (must be finite and non-negative)")]
    InvalidTimeStep(f64),

    #[error("invalid {axis} rate: {rate} (must be finite and non-negative)")]
    InvalidRate { axis: &'static str, rate: f64 },

    #[error("heading {field} out of range: {value} (expected 0..360)")]
    HeadingOutOfRange { field: &'static str, value: i32 },

    #[error("speed {field} is not finite: {value}")]
    InvalidSpeed { field: &'static str, value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
