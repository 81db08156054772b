//! Yearly aggregates command.

use crate::cmd::banner;
use anyhow::Result;
use zeitgeist_client::{MoodClient, RecordStore};
use zeitgeist_transforms::{YearlyAggregate, aggregate_to_yearly};

pub(crate) async fn show_yearly(
    client: MoodClient,
    decade: Option<i32>,
    remote: bool,
    format: &str,
) -> Result<()> {
    if remote {
        return show_remote_yearly(&client, decade, format).await;
    }

    let store = RecordStore::new(client);
    let records = store.fetch_all().await?;

    let mut yearly = aggregate_to_yearly(&records);
    if let Some(decade) = decade {
        yearly.retain(|y| y.decade == decade);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&yearly)?);
        return Ok(());
    }

    banner("Yearly Mood Aggregates");
    print_table(&yearly);
    Ok(())
}

async fn show_remote_yearly(client: &MoodClient, decade: Option<i32>, format: &str) -> Result<()> {
    let years = client.list_yearly(decade).await?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&years)?);
        return Ok(());
    }

    banner("Yearly Mood (service rows)");
    println!(
        "{:<6} {:>10} {:>8} {:>8} {:>10} {:>9}",
        "Year", "Composite", "Music", "News", "Articles", "Tracks"
    );
    println!("{}", "-".repeat(56));
    for y in years {
        println!(
            "{:<6} {:>10.2} {:>8.2} {:>8.2} {:>10} {:>9}",
            y.year,
            y.avg_mood_composite.unwrap_or(0.0),
            y.avg_mood_music.unwrap_or(0.0),
            y.avg_mood_news.unwrap_or(0.0),
            y.total_news_articles.unwrap_or(0),
            y.total_spotify_tracks.unwrap_or(0),
        );
    }
    Ok(())
}

fn print_table(yearly: &[YearlyAggregate]) {
    println!(
        "{:<6} {:>10} {:>8} {:>8} {:>8} {:>8} {:>10} {:>9} {:>7}",
        "Year", "Composite", "Music", "News", "Valence", "Energy", "Articles", "Tracks", "Months"
    );
    println!("{}", "-".repeat(82));
    for y in yearly {
        println!(
            "{:<6} {:>10.2} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>10} {:>9} {:>7}",
            y.year,
            y.avg_mood_composite,
            y.avg_mood_music,
            y.avg_mood_news,
            y.avg_valence,
            y.avg_energy,
            y.total_news_articles,
            y.total_spotify_tracks,
            y.months,
        );
    }
}
