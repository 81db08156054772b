//! Timeline and heatmap projections of the monthly collection.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zeitgeist_core::{MonthlyMood, YearMonth};

/// Abbreviated month names for display labels.
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One chart-ready timeline point, with the Spotify fallback chains applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// Calendar month.
    pub year_month: YearMonth,
    /// Calendar year.
    pub year: i32,
    /// Calendar month 1–12.
    pub month: u32,
    /// Composite mood, if reported.
    pub mood_composite: Option<f64>,
    /// Music mood, if reported.
    pub mood_music: Option<f64>,
    /// News mood, if reported.
    pub mood_news: Option<f64>,
    /// Valence after the monthly-mean-or-yearly-fallback chain.
    pub spotify_valence: Option<f64>,
    /// Energy after the fallback chain.
    pub spotify_energy: Option<f64>,
    /// Danceability after the fallback chain.
    pub spotify_danceability: Option<f64>,
    /// Mean news sentiment.
    pub news_sentiment: Option<f64>,
    /// Overlapping historical event code, if any.
    pub historical_event: Option<String>,
}

/// Projects the monthly collection into timeline points.
#[must_use]
pub fn to_timeline(records: &[MonthlyMood]) -> Vec<TimelinePoint> {
    records
        .iter()
        .map(|r| TimelinePoint {
            year_month: r.year_month,
            year: r.year,
            month: r.month,
            mood_composite: r.mood_composite,
            mood_music: r.mood_music,
            mood_news: r.mood_news,
            spotify_valence: r.valence(),
            spotify_energy: r.energy(),
            spotify_danceability: r.danceability(),
            news_sentiment: r.news_sentiment_mean,
            historical_event: r.historical_event.clone(),
        })
        .collect()
}

/// Year × month grid of composite mood for the heatmap view.
///
/// Months with no composite value are simply absent from `values`.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapGrid {
    /// Distinct years present, ascending.
    pub years: Vec<i32>,
    /// The twelve calendar months, for axis labeling.
    pub months: [u32; 12],
    /// Composite mood keyed by month.
    pub values: BTreeMap<YearMonth, f64>,
}

/// Builds the heatmap grid from the monthly collection.
#[must_use]
pub fn heatmap(records: &[MonthlyMood]) -> HeatmapGrid {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();

    let values = records
        .iter()
        .filter_map(|r| r.mood_composite.map(|v| (r.year_month, v)))
        .collect();

    HeatmapGrid {
        years,
        months: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        values,
    }
}

/// Keeps only records whose year falls within `range`, inclusive on both
/// ends. This is the instant, no-refetch filter the presentation layer uses
/// for its year-range slider.
#[must_use]
pub fn filter_by_year_range(records: &[MonthlyMood], range: (i32, i32)) -> Vec<MonthlyMood> {
    let (start_year, end_year) = range;
    records
        .iter()
        .filter(|r| r.year >= start_year && r.year <= end_year)
        .cloned()
        .collect()
}

/// Display label for a month, e.g. `"Jul 1969"`.
#[must_use]
pub fn month_label(year_month: YearMonth) -> String {
    let name = MONTH_NAMES[(year_month.month() - 1) as usize];
    format!("{name} {}", year_month.year())
}

/// Display label for a decade, e.g. `"1960s"`.
#[must_use]
pub fn decade_label(decade: i32) -> String {
    format!("{decade}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, month: u32) -> MonthlyMood {
        MonthlyMood::new(YearMonth::new(year, month).unwrap())
    }

    #[test]
    fn test_timeline_applies_fallback_chain() {
        let mut r = row(1964, 2);
        r.spotify_yearly_valence = Some(0.45);
        r.mood_composite = Some(0.6);

        let points = to_timeline(&[r]);
        assert_eq!(points[0].spotify_valence, Some(0.45));
        assert_eq!(points[0].mood_composite, Some(0.6));
        assert_eq!(points[0].spotify_energy, None);
    }

    #[test]
    fn test_heatmap_skips_null_months() {
        let mut a = row(1980, 1);
        a.mood_composite = Some(0.5);
        let b = row(1980, 2);
        let mut c = row(1979, 12);
        c.mood_composite = Some(0.4);

        let grid = heatmap(&[a, b, c]);
        assert_eq!(grid.years, vec![1979, 1980]);
        assert_eq!(grid.values.len(), 2);
        assert_eq!(
            grid.values.get(&YearMonth::new(1980, 1).unwrap()),
            Some(&0.5)
        );
        assert!(!grid.values.contains_key(&YearMonth::new(1980, 2).unwrap()));
    }

    #[test]
    fn test_year_range_filter_is_inclusive() {
        let records = vec![row(1999, 12), row(2000, 1), row(2005, 6), row(2006, 1)];
        let filtered = filter_by_year_range(&records, (2000, 2005));
        let years: Vec<i32> = filtered.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2005]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(month_label(YearMonth::new(1969, 7).unwrap()), "Jul 1969");
        assert_eq!(decade_label(1960), "1960s");
    }
}
