#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zeitgeist-dash/zeitgeist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Derived-metric transforms for the Zeitgeist dashboard.
//!
//! Each module consumes the sorted monthly collection produced by
//! `zeitgeist-client`'s record store and computes one family of derived
//! values. All functions are pure; the null-handling policy of every
//! aggregate is stated on the function that implements it.

/// The version of the zeitgeist-transforms crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod change;
pub mod events;
pub mod latest;
pub mod timeline;
pub mod yearly;

// Re-exports
pub use change::{PeriodChange, TREND_DEADBAND_PCT, Trend, calculate_change};
pub use events::{EventWindow, event_window, recovery_trajectory};
pub use latest::{LatestStats, latest_stats};
pub use timeline::{HeatmapGrid, TimelinePoint, filter_by_year_range, heatmap, to_timeline};
pub use yearly::{DecadeAggregate, YearlyAggregate, aggregate_to_decades, aggregate_to_yearly};
