//! Binary status classification for temperature readings.

/// Fixed threshold separating normal from alert, in degrees Celsius.
///
/// Strictly-greater comparison: a reading of exactly 25 °C is still normal.
pub const ALERT_THRESHOLD_CELSIUS: f64 = 25.0;

/// Status indicator state after a temperature reading was evaluated.
///
/// Exactly one of the two variants holds once any temperature reading has
/// been processed; there is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Alert,
}

impl Status {
    /// Classify a temperature value against [`ALERT_THRESHOLD_CELSIUS`].
    pub fn for_value(celsius: f64) -> Self {
        if celsius > ALERT_THRESHOLD_CELSIUS {
            Status::Alert
        } else {
            Status::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_greater_than_threshold_alerts() {
        assert_eq!(Status::for_value(25.1), Status::Alert);
        assert_eq!(Status::for_value(30.0), Status::Alert);
    }

    #[test]
    fn threshold_boundary_is_normal() {
        assert_eq!(Status::for_value(25.0), Status::Normal);
    }

    #[test]
    fn below_threshold_is_normal() {
        assert_eq!(Status::for_value(24.9), Status::Normal);
        assert_eq!(Status::for_value(-5.0), Status::Normal);
    }
}
