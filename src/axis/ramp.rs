use log::debug;

use super::direction::Direction;
use super::domain::Domain;

// ---------------------------------------------------------------------------
// Ramp toward target (single axis)
// ---------------------------------------------------------------------------

/// One axis driven toward `target` at `rate` per unit time.
///
/// The caller owns the direction: it arms the ramp by setting `target` and
/// `direction`, and the ramp only ever drops back to `Neutral` on its own
/// when the target is reached or overshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRamp<D: Domain> {
    pub current: D::Value,
    pub target: D::Value,
    pub rate: D::Rate,
    pub direction: Direction,
}

impl<D: Domain> AxisRamp<D> {
    pub fn new(current: D::Value, target: D::Value, rate: D::Rate, direction: Direction) -> Self {
        Self { current, target, rate, direction }
    }

    /// Neutral ramp parked at `value`.
    pub fn holding(value: D::Value, rate: D::Rate) -> Self {
        Self::new(value, value, rate, Direction::Neutral)
    }

    /// Advance one tick of `dt`.
    pub fn update(&mut self, dt: f64) {
        match self.direction {
            Direction::Neutral => self.hold(),
            direction => self.step(dt, direction),
        }
    }

    /// Re-arm with a new target and direction.
    pub fn command(&mut self, target: D::Value, direction: Direction) {
        self.target = target;
        self.direction = direction;
    }

    /// Neutral and sitting on the target.
    pub fn is_captured(&self) -> bool {
        self.direction.is_neutral() && self.current == self.target
    }

    fn step(&mut self, dt: f64, direction: Direction) {
        let mut next = D::normalize(D::advance(self.current, self.rate, dt, direction), direction);

        let overshot = match direction {
            Direction::Decreasing => next < self.target,
            Direction::Increasing => next > self.target,
            Direction::Neutral => false,
        };
        if overshot {
            next = self.target;
            self.direction = Direction::Neutral;
            debug!("{} captured at {:?}", D::NAME, next);
        }

        self.current = next;
    }

    // Neutral means hold position: a stale target is dropped, not chased.
    fn hold(&mut self) {
        if self.current == self.target {
            return;
        }
        debug!(
            "{} holding at {:?}, dropping target {:?}",
            D::NAME,
            self.current,
            self.target
        );
        self.target = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::domain::{Altitude, Heading, Speed};

    #[test]
    fn neutral_on_target_is_noop() {
        let mut alt = AxisRamp::<Altitude>::new(1000, 1000, 100, Direction::Neutral);
        alt.update(1.0);
        assert_eq!(alt, AxisRamp::new(1000, 1000, 100, Direction::Neutral));

        let mut hdg = AxisRamp::<Heading>::new(90, 90, 3.0, Direction::Neutral);
        hdg.update(5.0);
        assert_eq!((hdg.current, hdg.target), (90, 90));
        assert!(hdg.direction.is_neutral());

        let mut spd = AxisRamp::<Speed>::new(250.0, 250.0, 2.0, Direction::Neutral);
        spd.update(1.0);
        assert_eq!((spd.current, spd.target), (250.0, 250.0));
    }

    #[test]
    fn neutral_off_target_snaps_target_to_current() {
        let mut alt = AxisRamp::<Altitude>::new(1000, 2000, 100, Direction::Neutral);
        alt.update(1.0);
        assert_eq!(alt.current, 1000);
        assert_eq!(alt.target, 1000);
        assert!(alt.direction.is_neutral());

        let mut hdg = AxisRamp::<Heading>::new(45, 270, 3.0, Direction::Neutral);
        hdg.update(1.0);
        assert_eq!((hdg.current, hdg.target), (45, 45));

        let mut spd = AxisRamp::<Speed>::new(120.5, 180.0, 2.0, Direction::Neutral);
        spd.update(1.0);
        assert_eq!(spd.current, 120.5);
        assert_eq!(spd.target, 120.5);
    }

    #[test]
    fn decreasing_altitude_steps() {
        let mut alt = AxisRamp::<Altitude>::new(1000, 500, 100, Direction::Decreasing);
        alt.update(1.0);
        assert_eq!(alt.current, 900);
        assert_eq!(alt.direction, Direction::Decreasing);
    }

    #[test]
    fn decreasing_altitude_clamps_on_overshoot() {
        let mut alt = AxisRamp::<Altitude>::new(505, 500, 100, Direction::Decreasing);
        alt.update(1.0);
        assert_eq!(alt.current, 500);
        assert_eq!(alt.direction, Direction::Neutral);
    }

    #[test]
    fn increasing_altitude_steps_then_clamps() {
        let mut alt = AxisRamp::<Altitude>::new(1000, 1150, 100, Direction::Increasing);
        alt.update(1.0);
        assert_eq!(alt.current, 1100);
        assert_eq!(alt.direction, Direction::Increasing);
        alt.update(1.0);
        assert_eq!(alt.current, 1150);
        assert!(alt.is_captured());
    }

    #[test]
    fn altitude_exact_landing_stays_armed() {
        // Landing exactly on the target is not an overshoot.
        let mut alt = AxisRamp::<Altitude>::new(600, 500, 100, Direction::Decreasing);
        alt.update(1.0);
        assert_eq!(alt.current, 500);
        assert_eq!(alt.direction, Direction::Decreasing);
        alt.update(1.0);
        assert_eq!(alt.current, 500);
        assert!(alt.is_captured());
    }

    #[test]
    fn heading_decrease_wraps_before_compare() {
        let mut hdg = AxisRamp::<Heading>::new(5, 330, 10.0, Direction::Decreasing);
        hdg.update(1.0);
        assert_eq!(hdg.current, 355);
        assert_eq!(hdg.direction, Direction::Decreasing);
    }

    #[test]
    fn heading_increase_wraps_before_compare() {
        let mut hdg = AxisRamp::<Heading>::new(355, 10, 10.0, Direction::Increasing);
        hdg.update(1.0);
        assert_eq!(hdg.current, 5);
        assert_eq!(hdg.direction, Direction::Increasing);
    }

    #[test]
    fn heading_clamps_after_wrap() {
        let mut hdg = AxisRamp::<Heading>::new(5, 358, 10.0, Direction::Decreasing);
        hdg.update(1.0);
        assert_eq!(hdg.current, 358);
        assert!(hdg.is_captured());

        let mut hdg = AxisRamp::<Heading>::new(355, 2, 10.0, Direction::Increasing);
        hdg.update(1.0);
        assert_eq!(hdg.current, 2);
        assert!(hdg.is_captured());
    }

    #[test]
    fn speed_increase_clamps_to_exact_target() {
        let mut spd = AxisRamp::<Speed>::new(4.9, 5.0, 0.5, Direction::Increasing);
        spd.update(1.0);
        assert_eq!(spd.current, 5.0);
        assert_eq!(spd.direction, Direction::Neutral);
    }

    #[test]
    fn speed_decrease_steps() {
        let mut spd = AxisRamp::<Speed>::new(10.0, 5.0, 2.0, Direction::Decreasing);
        spd.update(0.5);
        assert_eq!(spd.current, 9.0);
        assert_eq!(spd.direction, Direction::Decreasing);
    }

    #[test]
    fn captured_axis_is_idempotent() {
        let mut alt = AxisRamp::<Altitude>::new(505, 500, 100, Direction::Decreasing);
        alt.update(1.0);
        let captured = alt;
        for dt in [0.0, 1.0, 7.5, 1e6] {
            alt.update(dt);
            assert_eq!(alt, captured);
        }
    }

    #[test]
    fn command_rearms() {
        let mut spd = AxisRamp::<Speed>::holding(100.0, 5.0);
        assert!(spd.is_captured());
        spd.command(120.0, Direction::Increasing);
        spd.update(2.0);
        assert_eq!(spd.current, 110.0);
        assert!(!spd.is_captured());
    }
}
