#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zeitgeist-dash/zeitgeist/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Data-service client for the Zeitgeist dashboard.
//!
//! # Usage
//!
//! ```rust,ignore
//! use zeitgeist_client::{MoodClient, RecordStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MoodClient::from_env()?;
//!
//!     // One-off queries
//!     let events = client.list_events().await?;
//!
//!     // Full monthly collection, paged once and cached process-wide
//!     let store = RecordStore::new(client);
//!     let records = store.fetch_all().await?;
//!     assert!(records.windows(2).all(|w| w[0].year_month < w[1].year_month));
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `ZEITGEIST_API_URL` (and optionally `ZEITGEIST_API_KEY`) in your
//! environment or `.env` file.

mod client;
mod error;
mod source;
mod store;
mod types;

pub use client::MoodClient;
pub use error::ClientError;
pub use source::MoodSource;
pub use store::{DEFAULT_PAGE_SIZE, RecordStore, StoreError};
pub use types::Page;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
