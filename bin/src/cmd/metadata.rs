//! Metadata blob command.

use crate::cmd::banner;
use anyhow::Result;
use zeitgeist_client::MoodClient;
use zeitgeist_core::MetadataKind;

pub(crate) async fn show_metadata(client: &MoodClient, kind: &str) -> Result<()> {
    let kind: MetadataKind = kind.parse()?;
    let blob = client.get_metadata(kind).await?;

    banner(&format!("Metadata: {kind}"));

    if kind == MetadataKind::CorrelationMatrix {
        let matrix = blob.correlation_matrix()?;
        let width = matrix
            .columns
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(8)
            .max(8);

        print!("{:width$} ", "");
        for col in &matrix.columns {
            print!("{col:>width$} ");
        }
        println!();
        for (name, row) in matrix.columns.iter().zip(&matrix.matrix) {
            print!("{name:>width$} ");
            for v in row {
                print!("{v:>width$.2} ");
            }
            println!();
        }
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&blob.payload)?);
    Ok(())
}
