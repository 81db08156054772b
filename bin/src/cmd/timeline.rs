//! Timeline dump command.

use crate::cmd::{banner, fmt_opt};
use anyhow::Result;
use zeitgeist_client::{MoodClient, RecordStore};
use zeitgeist_transforms::{filter_by_year_range, to_timeline};

pub(crate) async fn show_timeline(
    client: MoodClient,
    start: i32,
    end: i32,
    format: &str,
) -> Result<()> {
    let store = RecordStore::new(client);
    let records = store.fetch_all().await?;

    let filtered = filter_by_year_range(&records, (start, end));
    let points = to_timeline(&filtered);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&points)?);
        return Ok(());
    }

    banner("Mood Timeline");
    println!(
        "{:<9} {:>10} {:>8} {:>8} {:>9} {:>8}  {}",
        "Month", "Composite", "Music", "News", "Valence", "Energy", "Event"
    );
    println!("{}", "-".repeat(68));
    for p in &points {
        println!(
            "{:<9} {:>10} {:>8} {:>8} {:>9} {:>8}  {}",
            p.year_month.to_string(),
            fmt_opt(p.mood_composite),
            fmt_opt(p.mood_music),
            fmt_opt(p.mood_news),
            fmt_opt(p.spotify_valence),
            fmt_opt(p.spotify_energy),
            p.historical_event.as_deref().unwrap_or(""),
        );
    }
    println!("\n{} months in {start}..{end}", points.len());

    Ok(())
}
