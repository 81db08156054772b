//! Percentage change with deadband trend classification.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Deadband, in percentage points, inside which a change counts as stable.
///
/// Absorbs noise from near-zero fluctuations so visually flat periods are not
/// flagged as trending.
pub const TREND_DEADBAND_PCT: f64 = 0.5;

/// Direction of a period-over-period change.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Change above the deadband.
    #[display("up")]
    Up,
    /// Change below the negative deadband.
    #[display("down")]
    Down,
    /// Change within the deadband, or no usable comparison.
    #[display("stable")]
    Stable,
}

/// Magnitude and direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodChange {
    /// Absolute percentage change, always `>= 0`.
    pub value: f64,
    /// Classified direction.
    pub trend: Trend,
}

impl PeriodChange {
    /// The no-change result used whenever a comparison is undefined.
    pub const STABLE: Self = Self {
        value: 0.0,
        trend: Trend::Stable,
    };
}

/// Computes the percentage change from `previous` to `current`.
///
/// `previous == 0` returns [`PeriodChange::STABLE`]: an explicit
/// division-by-zero policy, not an omission. The trend is classified against
/// [`TREND_DEADBAND_PCT`]; a change of exactly ±0.5 percentage points is
/// still stable.
#[must_use]
pub fn calculate_change(current: f64, previous: f64) -> PeriodChange {
    if previous == 0.0 {
        return PeriodChange::STABLE;
    }
    let pct = (current - previous) / previous * 100.0;
    let trend = if pct > TREND_DEADBAND_PCT {
        Trend::Up
    } else if pct < -TREND_DEADBAND_PCT {
        Trend::Down
    } else {
        Trend::Stable
    };
    PeriodChange {
        value: pct.abs(),
        trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_previous_is_stable() {
        assert_eq!(calculate_change(10.0, 0.0), PeriodChange::STABLE);
        assert_eq!(calculate_change(-10.0, 0.0), PeriodChange::STABLE);
        assert_eq!(calculate_change(0.0, 0.0), PeriodChange::STABLE);
    }

    #[test]
    fn test_up_and_down() {
        let up = calculate_change(0.5, 0.4);
        assert_eq!(up.trend, Trend::Up);
        assert_relative_eq!(up.value, 25.0, epsilon = 1e-9);

        let down = calculate_change(0.3, 0.4);
        assert_eq!(down.trend, Trend::Down);
        assert_relative_eq!(down.value, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_value_is_absolute() {
        assert!(calculate_change(0.2, 0.4).value > 0.0);
    }

    #[test]
    fn test_deadband_boundaries() {
        // Exactly on the band edge: stable.
        assert_eq!(calculate_change(100.5, 100.0).trend, Trend::Stable);
        assert_eq!(calculate_change(99.5, 100.0).trend, Trend::Stable);
        // Just past it: trending.
        assert_eq!(calculate_change(100.51, 100.0).trend, Trend::Up);
        assert_eq!(calculate_change(99.49, 100.0).trend, Trend::Down);
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(Trend::Down.to_string(), "down");
    }
}
