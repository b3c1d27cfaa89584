pub mod direction;
pub mod domain;
pub mod ramp;

pub use direction::Direction;
pub use domain::{Altitude, Domain, Heading, Speed, FULL_CIRCLE};
pub use ramp::AxisRamp;
