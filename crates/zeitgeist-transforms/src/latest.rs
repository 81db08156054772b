//! Latest-valid-value resolution over the sparse tail of the collection.
//!
//! Different sources stop reporting at different times (Spotify-derived
//! metrics end earlier than news-derived ones), so "the latest value" is
//! resolved independently per field by scanning backward from the end of the
//! sorted collection.

use crate::change::{PeriodChange, calculate_change};
use serde::{Deserialize, Serialize};
use zeitgeist_core::{MonthlyMood, YearMonth};

/// Sentinel shown when a top-song/artist list is absent or unparseable.
pub const MISSING_LABEL: &str = "N/A";

/// Latest-period stats for the dashboard's headline cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestStats {
    /// Month of the anchor record (the most recent valid composite, or the
    /// chronologically last record if the composite never appears).
    pub year_month: YearMonth,
    /// Composite mood of the anchor record.
    pub mood_composite: Option<f64>,
    /// Most recent non-null music mood anywhere in the collection.
    pub mood_music: Option<f64>,
    /// Most recent non-null news mood anywhere in the collection.
    pub mood_news: Option<f64>,
    /// First entry of the anchor's top-songs list, or [`MISSING_LABEL`].
    pub top_song: String,
    /// First entry of the anchor's top-artists list, or [`MISSING_LABEL`].
    pub top_artist: String,
    /// Change versus the nearest earlier record with a valid composite;
    /// stable-zero when no such record exists.
    pub change: PeriodChange,
}

/// Resolves the latest valid values from a collection sorted ascending by
/// `year_month`. Returns `None` only for an empty collection.
#[must_use]
pub fn latest_stats(records: &[MonthlyMood]) -> Option<LatestStats> {
    if records.is_empty() {
        return None;
    }

    // Anchor: most recent valid composite, else the last record outright.
    let anchor_index = records
        .iter()
        .rposition(|r| r.mood_composite.is_some())
        .unwrap_or(records.len() - 1);
    let anchor = &records[anchor_index];

    // Each field resolves independently; they may come from different months.
    let mood_music = records.iter().rev().find_map(|r| r.mood_music);
    let mood_news = records.iter().rev().find_map(|r| r.mood_news);

    let change = records[..anchor_index]
        .iter()
        .rev()
        .find_map(|r| r.mood_composite)
        .map_or(PeriodChange::STABLE, |previous| {
            calculate_change(anchor.mood_composite.unwrap_or(0.0), previous)
        });

    let first_or_missing = |list: Option<&Vec<String>>| {
        list.and_then(|l| l.first().cloned())
            .unwrap_or_else(|| MISSING_LABEL.to_string())
    };

    Some(LatestStats {
        year_month: anchor.year_month,
        mood_composite: anchor.mood_composite,
        mood_music,
        mood_news,
        top_song: first_or_missing(anchor.top_songs.as_ref()),
        top_artist: first_or_missing(anchor.top_artists.as_ref()),
        change,
    })
}
