//! Latest-period stats command.

use crate::cmd::{banner, fmt_opt};
use anyhow::Result;
use chrono::Utc;
use zeitgeist_client::{MoodClient, RecordStore};
use zeitgeist_transforms::{Trend, latest_stats, timeline::month_label};

pub(crate) async fn show_latest(client: MoodClient) -> Result<()> {
    banner("Latest Mood");

    let store = RecordStore::new(client);
    let records = store.fetch_all().await?;

    let Some(stats) = latest_stats(&records) else {
        println!("No monthly records available.");
        return Ok(());
    };

    let arrow = match stats.change.trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
        Trend::Stable => "→",
    };

    println!("Period:      {}", month_label(stats.year_month));
    println!("Composite:   {}", fmt_opt(stats.mood_composite));
    println!("Music:       {}", fmt_opt(stats.mood_music));
    println!("News:        {}", fmt_opt(stats.mood_news));
    println!(
        "Change:      {} {:.1}% vs previous valid period",
        arrow, stats.change.value
    );
    println!("Top song:    {}", stats.top_song);
    println!("Top artist:  {}", stats.top_artist);
    println!(
        "\n{} monthly records cached (as of {})",
        records.len(),
        Utc::now().format("%Y-%m-%d")
    );

    Ok(())
}
