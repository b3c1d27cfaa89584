pub mod axis;
pub mod error;
pub mod vehicle;
pub mod sim;
pub mod io;

pub use axis::{AxisRamp, Direction};
pub use error::{Result, VehicleError};
pub use vehicle::Vehicle;
