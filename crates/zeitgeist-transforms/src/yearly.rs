//! Monthly-to-yearly and decade aggregation.
//!
//! Null-handling policy, per metric family:
//!
//! - **Averages** are means over only the records where that specific metric
//!   is non-null. A record missing `mood_music` still contributes to the
//!   `mood_news` average if that field is present.
//! - **Sums** treat null as a zero contribution.
//!
//! Known edge: a year where *every* record lacks a metric reports that
//! average as `0.0`, not null, which is indistinguishable from a true zero.
//! The `months` member count is carried on each row so callers can detect
//! thin years; the behavior itself is kept for compatibility with the
//! service's precomputed yearly rows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use zeitgeist_core::MonthlyMood;

/// Client-side yearly aggregate, recomputed on every call (caching lives at
/// the raw-record layer only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyAggregate {
    /// Calendar year.
    pub year: i32,
    /// Decade the year falls in, `floor(year / 10) * 10`.
    pub decade: i32,
    /// Mean composite mood over non-null months; `0.0` if none.
    pub avg_mood_composite: f64,
    /// Mean music mood over non-null months.
    pub avg_mood_music: f64,
    /// Mean news mood over non-null months.
    pub avg_mood_news: f64,
    /// Mean valence, using the monthly-mean-or-yearly-fallback chain.
    pub avg_valence: f64,
    /// Mean energy, same fallback chain.
    pub avg_energy: f64,
    /// Total scored news articles (null months contribute zero).
    pub total_news_articles: u64,
    /// Total charting tracks with audio features.
    pub total_spotify_tracks: u64,
    /// Number of monthly records contributing to this year.
    pub months: usize,
}

/// Decade-level aggregate for era summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeAggregate {
    /// Decade, e.g. `1990`.
    pub decade: i32,
    /// Display label, e.g. `"1990s"`.
    pub label: String,
    /// Mean composite mood over non-null months in the decade.
    pub avg_mood_composite: f64,
    /// Mean music mood.
    pub avg_mood_music: f64,
    /// Mean news mood.
    pub avg_mood_news: f64,
    /// Mean valence with the fallback chain.
    pub avg_valence: f64,
    /// Mean energy with the fallback chain.
    pub avg_energy: f64,
    /// Number of monthly records contributing.
    pub months: usize,
}

/// Mean over whatever the iterator yields; `0.0` when it yields nothing.
fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

/// Folds the monthly collection into one aggregate per distinct year,
/// ascending by year.
#[must_use]
pub fn aggregate_to_yearly(records: &[MonthlyMood]) -> Vec<YearlyAggregate> {
    let mut by_year: BTreeMap<i32, Vec<&MonthlyMood>> = BTreeMap::new();
    for record in records {
        by_year.entry(record.year).or_default().push(record);
    }

    by_year
        .into_iter()
        .map(|(year, rows)| YearlyAggregate {
            year,
            decade: year.div_euclid(10) * 10,
            avg_mood_composite: mean_of(rows.iter().filter_map(|r| r.mood_composite)),
            avg_mood_music: mean_of(rows.iter().filter_map(|r| r.mood_music)),
            avg_mood_news: mean_of(rows.iter().filter_map(|r| r.mood_news)),
            avg_valence: mean_of(rows.iter().filter_map(|r| r.valence())),
            avg_energy: mean_of(rows.iter().filter_map(|r| r.energy())),
            total_news_articles: rows
                .iter()
                .filter_map(|r| r.news_article_count)
                .map(u64::from)
                .sum(),
            total_spotify_tracks: rows
                .iter()
                .filter_map(|r| r.spotify_track_count)
                .map(u64::from)
                .sum(),
            months: rows.len(),
        })
        .collect()
}

/// Folds the monthly collection into one aggregate per decade, ascending,
/// with the same per-metric null policy as [`aggregate_to_yearly`].
#[must_use]
pub fn aggregate_to_decades(records: &[MonthlyMood]) -> Vec<DecadeAggregate> {
    let mut by_decade: BTreeMap<i32, Vec<&MonthlyMood>> = BTreeMap::new();
    for record in records {
        by_decade
            .entry(record.year.div_euclid(10) * 10)
            .or_default()
            .push(record);
    }

    by_decade
        .into_iter()
        .map(|(decade, rows)| DecadeAggregate {
            decade,
            label: format!("{decade}s"),
            avg_mood_composite: mean_of(rows.iter().filter_map(|r| r.mood_composite)),
            avg_mood_music: mean_of(rows.iter().filter_map(|r| r.mood_music)),
            avg_mood_news: mean_of(rows.iter().filter_map(|r| r.mood_news)),
            avg_valence: mean_of(rows.iter().filter_map(|r| r.valence())),
            avg_energy: mean_of(rows.iter().filter_map(|r| r.energy())),
            months: rows.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use zeitgeist_core::YearMonth;

    fn row(year: i32, month: u32) -> MonthlyMood {
        MonthlyMood::new(YearMonth::new(year, month).unwrap())
    }

    #[test]
    fn test_years_ascending_with_matching_member_counts() {
        let mut records = Vec::new();
        for month in 1..=12 {
            records.push(row(1987, month));
        }
        for month in 1..=6 {
            records.push(row(1965, month));
        }

        let yearly = aggregate_to_yearly(&records);
        assert_eq!(yearly.len(), 2);
        assert_eq!(yearly[0].year, 1965);
        assert_eq!(yearly[0].months, 6);
        assert_eq!(yearly[1].year, 1987);
        assert_eq!(yearly[1].months, 12);
    }

    #[test]
    fn test_per_metric_null_filtering_is_independent() {
        // 12 months; mood_news present in 6, mood_music present in all 12.
        let mut records = Vec::new();
        for month in 1..=12 {
            let mut r = row(1999, month);
            r.mood_music = Some(0.8);
            if month <= 6 {
                r.mood_news = Some(0.2);
            }
            records.push(r);
        }

        let yearly = aggregate_to_yearly(&records);
        assert_eq!(yearly.len(), 1);
        assert_relative_eq!(yearly[0].avg_mood_news, 0.2);
        assert_relative_eq!(yearly[0].avg_mood_music, 0.8);
    }

    #[test]
    fn test_all_null_metric_reports_zero() {
        let records = vec![row(2024, 1), row(2024, 2)];
        let yearly = aggregate_to_yearly(&records);
        assert_relative_eq!(yearly[0].avg_mood_composite, 0.0);
        assert_eq!(yearly[0].months, 2);
    }

    #[test]
    fn test_sums_treat_null_as_zero() {
        let mut a = row(2010, 1);
        a.news_article_count = Some(120);
        let b = row(2010, 2); // null count
        let mut c = row(2010, 3);
        c.news_article_count = Some(80);

        let yearly = aggregate_to_yearly(&[a, b, c]);
        assert_eq!(yearly[0].total_news_articles, 200);
    }

    #[test]
    fn test_valence_average_uses_fallback_chain() {
        let mut a = row(1972, 1);
        a.spotify_valence_mean = Some(0.6);
        let mut b = row(1972, 2);
        b.spotify_yearly_valence = Some(0.4); // no monthly mean
        let c = row(1972, 3); // contributes nothing

        let yearly = aggregate_to_yearly(&[a, b, c]);
        assert_relative_eq!(yearly[0].avg_valence, 0.5);
    }

    #[test]
    fn test_decade_field_and_grouping() {
        let records = vec![row(1994, 7), row(1991, 2), row(2003, 5)];
        let yearly = aggregate_to_yearly(&records);
        assert_eq!(yearly[0].decade, 1990);
        assert_eq!(yearly[2].decade, 2000);

        let decades = aggregate_to_decades(&records);
        assert_eq!(decades.len(), 2);
        assert_eq!(decades[0].decade, 1990);
        assert_eq!(decades[0].label, "1990s");
        assert_eq!(decades[0].months, 2);
        assert_eq!(decades[1].months, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(aggregate_to_yearly(&[]).is_empty());
        assert!(aggregate_to_decades(&[]).is_empty());
    }
}
