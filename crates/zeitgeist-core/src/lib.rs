#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zeitgeist-dash/zeitgeist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types for the Zeitgeist cultural-mood dashboard.
//!
//! This crate defines the data model shared by the data-service client and the
//! transform layer: one row per calendar month of blended Billboard/Spotify/news
//! mood indicators (1958–2025), plus the historical-event reference data the
//! event-window transforms are anchored on.

/// The version of the zeitgeist-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod event;
pub mod metadata;
pub mod month;
pub mod record;

// Re-exports
pub use error::{Result, ZeitgeistError};
pub use event::HistoricalEvent;
pub use metadata::{CorrelationMatrix, DashboardMetadata, MetadataKind};
pub use month::YearMonth;
pub use record::{MonthlyMood, YearlyMood};
