#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zeitgeist-dash/zeitgeist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # zeitgeist
//!
//! Data layer for the Zeitgeist cultural-mood dashboard: six decades of
//! monthly Billboard/Spotify/news mood indicators, fetched from a managed
//! data service and folded into chart-ready derived metrics.
//!
//! ## Quick Start
//!
//! ```ignore
//! use zeitgeist::{MoodClient, RecordStore};
//! use zeitgeist::transforms::{aggregate_to_yearly, latest_stats};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RecordStore::new(MoodClient::from_env()?);
//!
//! // The full 1958–2025 monthly collection, paged once and cached.
//! let records = store.fetch_all().await?;
//!
//! let yearly = aggregate_to_yearly(&records);
//! let headline = latest_stats(&records);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Data model: [`YearMonth`], [`MonthlyMood`], events, metadata
//! - [`client`] - Data-service client and the caching [`RecordStore`]
//! - [`transforms`] - Pure aggregation and derived-metric functions

/// Version information for the zeitgeist crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core data model.
pub mod core {
    pub use zeitgeist_core::*;
}

/// Data-service client and cached record store.
pub mod client {
    pub use zeitgeist_client::*;
}

/// Aggregation and derived-metric transforms.
pub mod transforms {
    pub use zeitgeist_transforms::*;
}

// Re-export the workhorse types at top level for convenience
pub use zeitgeist_client::{MoodClient, MoodSource, Page, RecordStore, StoreError};
pub use zeitgeist_core::{
    HistoricalEvent, MonthlyMood, Result, YearMonth, YearlyMood, ZeitgeistError,
};
pub use zeitgeist_transforms::{
    EventWindow, LatestStats, PeriodChange, Trend, YearlyAggregate,
};
