//! Event-relative before/during/after windows.
//!
//! Given a historical event, the full sorted collection is partitioned into
//! three contiguous, non-overlapping slices: the event's own span, and
//! flanking windows of the same month-count immediately adjacent to its
//! boundaries. Window arithmetic is exact calendar-month arithmetic on
//! [`YearMonth`], not a day-count approximation.

use crate::change::{PeriodChange, calculate_change};
use serde::{Deserialize, Serialize};
use zeitgeist_core::{HistoricalEvent, MonthlyMood};

/// Baseline used for recovery trajectories when no composite value exists at
/// the start of the window (mid-scale on the 0–1 mood axis).
pub const RECOVERY_BASELINE_FALLBACK: f64 = 0.5;

/// The before/during/after partition around one event.
///
/// `before` entries all predate the event start; `during` covers
/// `[start_date, end_date]` inclusive; `after` entries all postdate the end.
/// `before` may be shorter than the event span when the dataset starts late:
/// no padding, no error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWindow {
    /// The anchoring event.
    pub event: HistoricalEvent,
    /// Records in `[start - duration, start)`.
    pub before: Vec<MonthlyMood>,
    /// Records in `[start, end]`.
    pub during: Vec<MonthlyMood>,
    /// Records in `(end, end + duration]`.
    pub after: Vec<MonthlyMood>,
}

impl EventWindow {
    /// Mean composite mood of each partition (`None` for a partition with no
    /// non-null values), used by the per-event summary cards.
    #[must_use]
    pub fn composite_means(&self) -> [Option<f64>; 3] {
        fn mean(rows: &[MonthlyMood]) -> Option<f64> {
            let valid: Vec<f64> = rows.iter().filter_map(|r| r.mood_composite).collect();
            if valid.is_empty() {
                None
            } else {
                Some(valid.iter().sum::<f64>() / valid.len() as f64)
            }
        }
        [mean(&self.before), mean(&self.during), mean(&self.after)]
    }

    /// Change from the before-mean to the during-mean, for impact labeling.
    #[must_use]
    pub fn impact(&self) -> PeriodChange {
        match self.composite_means() {
            [Some(before), Some(during), _] => calculate_change(during, before),
            _ => PeriodChange::STABLE,
        }
    }
}

/// Partitions `records` around `event`.
///
/// The flanking windows span the event's own duration
/// ([`HistoricalEvent::duration_or_default`]), anchored immediately adjacent
/// to the event boundaries. The three slices are pairwise disjoint and
/// jointly cover exactly the records falling within
/// `[start - duration, end + duration]`.
#[must_use]
pub fn event_window(records: &[MonthlyMood], event: &HistoricalEvent) -> EventWindow {
    let duration = event.duration_or_default();
    let before_start = event.start_date.minus_months(duration);
    let after_end = event.end_date.plus_months(duration as i32);

    let before = records
        .iter()
        .filter(|r| r.year_month >= before_start && r.year_month < event.start_date)
        .cloned()
        .collect();
    let during = records
        .iter()
        .filter(|r| r.year_month >= event.start_date && r.year_month <= event.end_date)
        .cloned()
        .collect();
    let after = records
        .iter()
        .filter(|r| r.year_month > event.end_date && r.year_month <= after_end)
        .cloned()
        .collect();

    EventWindow {
        event: event.clone(),
        before,
        during,
        after,
    }
}

/// Difference-from-baseline trajectory over the during+after span, for
/// cross-event recovery comparison.
///
/// The baseline is the first available composite value in the span
/// (fallback [`RECOVERY_BASELINE_FALLBACK`]); months with no composite value
/// contribute a zero delta rather than a gap.
#[must_use]
pub fn recovery_trajectory(window: &EventWindow) -> Vec<f64> {
    let span: Vec<&MonthlyMood> = window.during.iter().chain(window.after.iter()).collect();
    let baseline = span
        .iter()
        .find_map(|r| r.mood_composite)
        .unwrap_or(RECOVERY_BASELINE_FALLBACK);
    span.iter()
        .map(|r| r.mood_composite.unwrap_or(baseline) - baseline)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;
    use zeitgeist_core::YearMonth;

    fn row(year: i32, month: u32, composite: Option<f64>) -> MonthlyMood {
        let mut r = MonthlyMood::new(YearMonth::new(year, month).unwrap());
        r.mood_composite = composite;
        r
    }

    /// Contiguous months from `start` for `count` months.
    fn run(start: (i32, u32), count: u32) -> Vec<MonthlyMood> {
        let first = YearMonth::new(start.0, start.1).unwrap();
        (0..count)
            .map(|i| {
                let ym = first.plus_months(i as i32);
                row(ym.year(), ym.month(), Some(0.5))
            })
            .collect()
    }

    fn event(start: &str, end: &str, duration: u32) -> HistoricalEvent {
        serde_json::from_value(json!({
            "eventCode": "test_event",
            "startDate": start,
            "endDate": end,
            "durationMonths": duration
        }))
        .unwrap()
    }

    fn keys(rows: &[MonthlyMood]) -> Vec<String> {
        rows.iter().map(|r| r.year_month.to_string()).collect()
    }

    #[test]
    fn test_three_equal_windows() {
        // Full monthly range 2019-01..2021-01.
        let records = run((2019, 1), 25);
        let window = event_window(&records, &event("2020-03", "2020-05", 3));

        assert_eq!(keys(&window.before), vec!["2019-12", "2020-01", "2020-02"]);
        assert_eq!(keys(&window.during), vec!["2020-03", "2020-04", "2020-05"]);
        assert_eq!(keys(&window.after), vec!["2020-06", "2020-07", "2020-08"]);
    }

    #[test]
    fn test_partitions_disjoint_and_covering() {
        let records = run((2019, 1), 25);
        let ev = event("2020-03", "2020-05", 3);
        let window = event_window(&records, &ev);

        let mut combined = keys(&window.before);
        combined.extend(keys(&window.during));
        combined.extend(keys(&window.after));

        // No overlap, no gaps: exactly the input records in [before_start, after_end].
        let lo = ev.start_date.minus_months(3);
        let hi = ev.end_date.plus_months(3);
        let expected: Vec<String> = records
            .iter()
            .filter(|r| r.year_month >= lo && r.year_month <= hi)
            .map(|r| r.year_month.to_string())
            .collect();
        assert_eq!(combined, expected);

        let mut deduped = combined.clone();
        deduped.dedup();
        assert_eq!(deduped, combined);
    }

    #[test]
    fn test_before_truncates_at_dataset_start() {
        // Dataset begins only one month before the event.
        let records = run((2020, 2), 8);
        let window = event_window(&records, &event("2020-03", "2020-05", 3));

        assert_eq!(keys(&window.before), vec!["2020-02"]);
        assert_eq!(window.during.len(), 3);
        assert_eq!(window.after.len(), 3);
    }

    #[test]
    fn test_duration_defaults_to_twelve_months() {
        let ev: HistoricalEvent = serde_json::from_value(json!({
            "eventCode": "no_duration",
            "startDate": "2010-06",
            "endDate": "2010-06"
        }))
        .unwrap();
        let records = run((2009, 1), 40);
        let window = event_window(&records, &ev);

        assert_eq!(window.before.len(), 12);
        assert_eq!(keys(&window.before)[0], "2009-06");
        assert_eq!(window.after.len(), 12);
        assert_eq!(keys(&window.after)[11], "2011-06");
    }

    #[test]
    fn test_recovery_trajectory_subtracts_baseline() {
        let mut records = run((2020, 1), 10);
        // during = 2020-03..2020-04, after = 2020-05..2020-06
        records[2].mood_composite = Some(0.6); // baseline
        records[3].mood_composite = Some(0.4);
        records[4].mood_composite = None; // null -> zero delta
        records[5].mood_composite = Some(0.7);

        let window = event_window(&records, &event("2020-03", "2020-04", 2));
        let trajectory = recovery_trajectory(&window);

        assert_eq!(trajectory.len(), 4);
        assert_relative_eq!(trajectory[0], 0.0);
        assert_relative_eq!(trajectory[1], -0.2);
        assert_relative_eq!(trajectory[2], 0.0);
        assert_relative_eq!(trajectory[3], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_recovery_baseline_fallback() {
        let mut records = run((2020, 1), 6);
        for r in &mut records {
            r.mood_composite = None;
        }
        let window = event_window(&records, &event("2020-02", "2020-03", 2));
        let trajectory = recovery_trajectory(&window);
        // All null: every delta is zero against the 0.5 fallback baseline.
        assert!(trajectory.iter().all(|d| *d == 0.0));
    }

    #[test]
    fn test_impact_compares_before_and_during_means() {
        let mut records = run((2020, 1), 12);
        for r in &mut records[0..4] {
            r.mood_composite = Some(0.8);
        }
        for r in &mut records[4..8] {
            r.mood_composite = Some(0.4);
        }
        let window = event_window(&records, &event("2020-05", "2020-08", 4));
        let impact = window.impact();
        assert_eq!(impact.trend, crate::change::Trend::Down);
        assert_relative_eq!(impact.value, 50.0);
    }
}
