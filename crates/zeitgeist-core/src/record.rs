//! Monthly and yearly mood records.
//!
//! Rows arrive from the managed data service as camelCase JSON. Every metric
//! is independently nullable: Spotify-derived fields stop reporting earlier
//! than news-derived fields, and the earliest chart years have no audio
//! features at all. Array-valued columns (`topSongs`, `topArtists`,
//! `topNewsCategories`) were ingested from CSV as loosely-typed text and are
//! decoded once, tolerantly, at deserialization time.

use crate::month::YearMonth;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decode a loosely-typed array column into a list of strings.
///
/// Accepts a real JSON array, or a string containing a JSON array (including
/// the single-quoted Python-repr form the ingestion pipeline produced).
/// Anything else, including unparseable text, resolves to `None` so one
/// malformed row never aborts an aggregation.
#[must_use]
pub fn decode_string_list(value: &Value) -> Option<Vec<String>> {
    fn strings(items: &[Value]) -> Vec<String> {
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    match value {
        Value::Array(items) => Some(strings(items)),
        Value::String(s) => {
            let normalized = s.replace('\'', "\"");
            match serde_json::from_str::<Value>(&normalized) {
                Ok(Value::Array(items)) => Some(strings(&items)),
                _ => None,
            }
        }
        _ => None,
    }
}

fn de_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decode_string_list))
}

/// One month of blended mood data, 1958–2025.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMood {
    /// Calendar month this row covers. Unique per row.
    pub year_month: YearMonth,
    /// Calendar year, redundant with `year_month` (see [`Self::is_consistent`]).
    pub year: i32,
    /// Calendar month 1–12, redundant with `year_month`.
    pub month: u32,

    /// Blended music+news mood indicator, 0–1.
    #[serde(default)]
    pub mood_composite: Option<f64>,
    /// Music-derived mood indicator, 0–1.
    #[serde(default)]
    pub mood_music: Option<f64>,
    /// News-derived mood indicator, 0–1.
    #[serde(default)]
    pub mood_news: Option<f64>,

    /// Mean Spotify valence across the month's charting tracks.
    #[serde(default)]
    pub spotify_valence_mean: Option<f64>,
    /// Mean Spotify energy.
    #[serde(default)]
    pub spotify_energy_mean: Option<f64>,
    /// Mean Spotify danceability.
    #[serde(default)]
    pub spotify_danceability_mean: Option<f64>,
    /// Mean Spotify tempo (BPM).
    #[serde(default)]
    pub spotify_tempo_mean: Option<f64>,
    /// Number of charting tracks with audio features this month.
    #[serde(default)]
    pub spotify_track_count: Option<u32>,

    /// Year-level valence substituted when no monthly value exists.
    #[serde(default)]
    pub spotify_yearly_valence: Option<f64>,
    /// Year-level energy fallback.
    #[serde(default)]
    pub spotify_yearly_energy: Option<f64>,
    /// Year-level danceability fallback.
    #[serde(default)]
    pub spotify_yearly_danceability: Option<f64>,

    /// Mean news headline sentiment, 0–1.
    #[serde(default)]
    pub news_sentiment_mean: Option<f64>,
    /// Number of news articles scored this month.
    #[serde(default)]
    pub news_article_count: Option<u32>,
    /// Politics article count.
    #[serde(default)]
    pub news_politics_count: Option<u32>,
    /// Entertainment article count.
    #[serde(default)]
    pub news_entertainment_count: Option<u32>,
    /// Comedy article count.
    #[serde(default)]
    pub news_comedy_count: Option<u32>,
    /// Crime article count.
    #[serde(default)]
    pub news_crime_count: Option<u32>,
    /// World-news article count.
    #[serde(default)]
    pub news_world_news_count: Option<u32>,
    /// Wellness article count.
    #[serde(default)]
    pub news_wellness_count: Option<u32>,

    /// Top charting songs this month, decoded from the ingestion blob.
    #[serde(default, deserialize_with = "de_string_list")]
    pub top_songs: Option<Vec<String>>,
    /// Top charting artists this month.
    #[serde(default, deserialize_with = "de_string_list")]
    pub top_artists: Option<Vec<String>>,
    /// Most frequent news categories this month.
    #[serde(default, deserialize_with = "de_string_list")]
    pub top_news_categories: Option<Vec<String>>,

    /// Code of a historical event overlapping this month, if any.
    #[serde(default)]
    pub historical_event: Option<String>,
}

impl MonthlyMood {
    /// Creates an empty row for the given month: all metrics `None`, the
    /// redundant `year`/`month` fields filled from `year_month`.
    #[must_use]
    pub fn new(year_month: YearMonth) -> Self {
        Self {
            year_month,
            year: year_month.year(),
            month: year_month.month(),
            mood_composite: None,
            mood_music: None,
            mood_news: None,
            spotify_valence_mean: None,
            spotify_energy_mean: None,
            spotify_danceability_mean: None,
            spotify_tempo_mean: None,
            spotify_track_count: None,
            spotify_yearly_valence: None,
            spotify_yearly_energy: None,
            spotify_yearly_danceability: None,
            news_sentiment_mean: None,
            news_article_count: None,
            news_politics_count: None,
            news_entertainment_count: None,
            news_comedy_count: None,
            news_crime_count: None,
            news_world_news_count: None,
            news_wellness_count: None,
            top_songs: None,
            top_artists: None,
            top_news_categories: None,
            historical_event: None,
        }
    }

    /// Valence with the monthly-mean-or-yearly-fallback chain applied.
    #[must_use]
    pub const fn valence(&self) -> Option<f64> {
        match self.spotify_valence_mean {
            Some(v) => Some(v),
            None => self.spotify_yearly_valence,
        }
    }

    /// Energy with the fallback chain applied.
    #[must_use]
    pub const fn energy(&self) -> Option<f64> {
        match self.spotify_energy_mean {
            Some(v) => Some(v),
            None => self.spotify_yearly_energy,
        }
    }

    /// Danceability with the fallback chain applied.
    #[must_use]
    pub const fn danceability(&self) -> Option<f64> {
        match self.spotify_danceability_mean {
            Some(v) => Some(v),
            None => self.spotify_yearly_danceability,
        }
    }

    /// Whether the redundant `year`/`month` columns agree with `year_month`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.year_month.year() == self.year && self.year_month.month() == self.month
    }
}

/// One year of precomputed aggregates from the service's yearly collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyMood {
    /// Calendar year.
    pub year: i32,
    /// Decade, e.g. `1990`.
    #[serde(default)]
    pub decade: Option<i32>,
    /// Display label, e.g. `"1990s"`.
    #[serde(default)]
    pub decade_label: Option<String>,
    /// Year-average composite mood.
    #[serde(default)]
    pub avg_mood_composite: Option<f64>,
    /// Year-average music mood.
    #[serde(default)]
    pub avg_mood_music: Option<f64>,
    /// Year-average news mood.
    #[serde(default)]
    pub avg_mood_news: Option<f64>,
    /// Total scored news articles in the year.
    #[serde(default)]
    pub total_news_articles: Option<u64>,
    /// Total charting tracks with audio features in the year.
    #[serde(default)]
    pub total_spotify_tracks: Option<u64>,
}
