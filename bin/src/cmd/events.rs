//! Historical events command.

use crate::cmd::{banner, fmt_opt};
use anyhow::{Result, anyhow};
use zeitgeist_client::{MoodClient, RecordStore};
use zeitgeist_transforms::{event_window, recovery_trajectory};

pub(crate) async fn show_events(client: MoodClient, code: Option<&str>) -> Result<()> {
    let events = client.list_events().await?;

    let Some(code) = code else {
        banner("Historical Events");
        println!(
            "{:<16} {:<32} {:>8}  {:>8}  {:>6}",
            "Code", "Name", "Start", "End", "Months"
        );
        println!("{}", "-".repeat(78));
        for e in &events {
            println!(
                "{:<16} {:<32} {:>8}  {:>8}  {:>6}",
                e.event_code,
                e.name.as_deref().unwrap_or("-"),
                e.start_date.to_string(),
                e.end_date.to_string(),
                e.duration_or_default(),
            );
        }
        return Ok(());
    };

    let event = events
        .iter()
        .find(|e| e.event_code == code)
        .cloned()
        .ok_or_else(|| anyhow!("unknown event code: {code}"))?;

    let store = RecordStore::new(client);
    let records = store.fetch_all().await?;
    let window = event_window(&records, &event);

    banner(event.name.as_deref().unwrap_or(&event.event_code));
    println!(
        "Span:     {} .. {} ({} months)",
        event.start_date,
        event.end_date,
        event.duration_or_default()
    );

    let [before, during, after] = window.composite_means();
    println!("\nComposite mood means:");
    println!("  before:  {}  ({} records)", fmt_opt(before), window.before.len());
    println!("  during:  {}  ({} records)", fmt_opt(during), window.during.len());
    println!("  after:   {}  ({} records)", fmt_opt(after), window.after.len());

    let impact = window.impact();
    println!("\nImpact:   {:.1}% ({})", impact.value, impact.trend);

    let trajectory = recovery_trajectory(&window);
    if !trajectory.is_empty() {
        println!("\nRecovery (delta from baseline, during + after):");
        let line: Vec<String> = trajectory.iter().map(|d| format!("{d:+.2}")).collect();
        println!("  {}", line.join(" "));
    }

    Ok(())
}
