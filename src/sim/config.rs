use crate::error::{Result, VehicleError};

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,
    pub max_time: f64,
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(VehicleError::InvalidConfig(format!(
                "dt must be finite and positive, got {}",
                self.dt
            )));
        }
        if !self.max_time.is_finite() || self.max_time < 0.0 {
            return Err(VehicleError::InvalidConfig(format!(
                "max_time must be finite and non-negative, got {}",
                self.max_time
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,          // 1 Hz; altitude truncates dt to whole seconds
            max_time: 600.0,  // 10 min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_dt() {
        let cfg = SimConfig { dt: 0.0, max_time: 10.0 };
        assert!(matches!(cfg.validate(), Err(VehicleError::InvalidConfig(_))));
        let cfg = SimConfig { dt: 1.0, max_time: f64::INFINITY };
        assert!(cfg.validate().is_err());
    }
}
