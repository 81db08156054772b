//! Historical event reference data.

use crate::month::YearMonth;
use serde::{Deserialize, Serialize};

/// Span to use for events that do not carry an explicit duration.
pub const DEFAULT_EVENT_DURATION_MONTHS: u32 = 12;

/// A historical event the dashboard anchors before/during/after windows on.
///
/// Small, read-only reference collection (~8 rows: wars, crashes, pandemics).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    /// Unique event key, e.g. `"covid19"`.
    pub event_code: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// First month of the event. Always `<= end_date`.
    pub start_date: YearMonth,
    /// Last month of the event, inclusive.
    pub end_date: YearMonth,
    /// Event span in months; absent means [`DEFAULT_EVENT_DURATION_MONTHS`].
    #[serde(default)]
    pub duration_months: Option<u32>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Precomputed mean composite mood over the event span.
    #[serde(default)]
    pub mood_composite_avg: Option<f64>,
    /// Precomputed mean music mood over the event span.
    #[serde(default)]
    pub mood_music_avg: Option<f64>,
    /// Precomputed mean news mood over the event span.
    #[serde(default)]
    pub mood_news_avg: Option<f64>,
}

impl HistoricalEvent {
    /// The event span in months, defaulting when the service row omits it.
    #[must_use]
    pub fn duration_or_default(&self) -> u32 {
        self.duration_months.unwrap_or(DEFAULT_EVENT_DURATION_MONTHS)
    }
}
