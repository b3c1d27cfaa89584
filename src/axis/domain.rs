use std::fmt::Debug;

use super::direction::Direction;

/// Degrees in a full turn; heading lives in `[0, FULL_CIRCLE)`.
pub const FULL_CIRCLE: i32 = 360;

// ---------------------------------------------------------------------------
// Axis domain: numeric types + step arithmetic + normalization
// ---------------------------------------------------------------------------

/// Numeric behaviour of one axis.
///
/// An [`AxisRamp`](super::AxisRamp) owns the direction state machine; the
/// domain only says how far a single step goes and how the raw result is
/// brought back into range before it is compared with the target.
pub trait Domain {
    type Value: Copy + PartialOrd + Default + Debug;
    type Rate: Copy + PartialEq + Default + Debug;

    /// Short axis name used in logs and errors.
    const NAME: &'static str;

    /// Raw value after moving `rate * dt` from `current` in `direction`.
    /// `Neutral` returns `current` untouched.
    fn advance(current: Self::Value, rate: Self::Rate, dt: f64, direction: Direction) -> Self::Value;

    /// Bring a freshly advanced value back into the axis' domain.
    fn normalize(value: Self::Value, _direction: Direction) -> Self::Value {
        value
    }
}

/// Integer altitude with integer climb rate. `dt` is truncated to whole
/// units before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Altitude;

impl Domain for Altitude {
    type Value = i32;
    type Rate = i32;

    const NAME: &'static str = "altitude";

    fn advance(current: i32, rate: i32, dt: f64, direction: Direction) -> i32 {
        let delta = rate.wrapping_mul(dt as i32);
        match direction {
            Direction::Decreasing => current.wrapping_sub(delta),
            Direction::Increasing => current.wrapping_add(delta),
            Direction::Neutral => current,
        }
    }
}

/// Integer heading in degrees with a fractional turn rate. The stepped value
/// is truncated toward zero and wrapped at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heading;

impl Domain for Heading {
    type Value = i32;
    type Rate = f64;

    const NAME: &'static str = "heading";

    fn advance(current: i32, rate: f64, dt: f64, direction: Direction) -> i32 {
        let delta = rate * dt;
        match direction {
            Direction::Decreasing => (f64::from(current) - delta) as i32,
            Direction::Increasing => (f64::from(current) + delta) as i32,
            Direction::Neutral => current,
        }
    }

    fn normalize(value: i32, direction: Direction) -> i32 {
        match direction {
            Direction::Decreasing if value < 0 => value + FULL_CIRCLE,
            Direction::Increasing if value >= FULL_CIRCLE => value - FULL_CIRCLE,
            _ => value,
        }
    }
}

/// Floating-point airspeed, no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Speed;

impl Domain for Speed {
    type Value = f64;
    type Rate = f64;

    const NAME: &'static str = "speed";

    fn advance(current: f64, rate: f64, dt: f64, direction: Direction) -> f64 {
        match direction {
            Direction::Decreasing => current - rate * dt,
            Direction::Increasing => current + rate * dt,
            Direction::Neutral => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_truncates_dt() {
        assert_eq!(Altitude::advance(1000, 100, 1.9, Direction::Decreasing), 900);
        assert_eq!(Altitude::advance(1000, 100, 0.5, Direction::Increasing), 1000);
    }

    #[test]
    fn heading_truncates_result_toward_zero() {
        assert_eq!(Heading::advance(10, 2.5, 1.0, Direction::Increasing), 12);
        // -0.5 truncates to 0, not -1
        assert_eq!(Heading::advance(2, 2.5, 1.0, Direction::Decreasing), 0);
        assert_eq!(Heading::advance(5, 10.0, 1.0, Direction::Decreasing), -5);
    }

    #[test]
    fn heading_wraps_once_per_direction() {
        assert_eq!(Heading::normalize(-5, Direction::Decreasing), 355);
        assert_eq!(Heading::normalize(365, Direction::Increasing), 5);
        assert_eq!(Heading::normalize(360, Direction::Increasing), 0);
        // Only the side being travelled is wrapped.
        assert_eq!(Heading::normalize(365, Direction::Decreasing), 365);
    }

    #[test]
    fn speed_is_plain_float() {
        let v = Speed::advance(4.9, 0.5, 1.0, Direction::Increasing);
        assert!((v - 5.4).abs() < 1e-12);
        assert_eq!(Speed::normalize(v, Direction::Increasing), v);
    }
}
