use std::fmt;

// ---------------------------------------------------------------------------
// Direction state (one per axis)
// ---------------------------------------------------------------------------

/// Which way an axis is currently being driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Decreasing,
    #[default]
    Neutral,
    Increasing,
}

impl Direction {
    /// Pick the direction that moves `current` toward `target` on a linear axis.
    pub fn toward<T: PartialOrd>(current: T, target: T) -> Self {
        if target > current {
            Direction::Increasing
        } else if target < current {
            Direction::Decreasing
        } else {
            Direction::Neutral
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Direction::Neutral
    }

    /// Sign of travel: -1, 0 or +1.
    pub fn signum(self) -> i32 {
        match self {
            Direction::Decreasing => -1,
            Direction::Neutral => 0,
            Direction::Increasing => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Decreasing => "DEC",
            Direction::Neutral => "HOLD",
            Direction::Increasing => "INC",
        };
        f.pad(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toward_picks_by_comparison() {
        assert_eq!(Direction::toward(100, 500), Direction::Increasing);
        assert_eq!(Direction::toward(500, 100), Direction::Decreasing);
        assert_eq!(Direction::toward(2.5, 2.5), Direction::Neutral);
    }

    #[test]
    fn default_is_neutral() {
        assert!(Direction::default().is_neutral());
        assert_eq!(Direction::Decreasing.signum(), -1);
    }
}
