pub mod state;
pub mod builder;

pub use state::Vehicle;
pub use builder::{VehicleBuilder, presets};
