//! Process-wide cached store for the full monthly collection.
//!
//! The dashboard's consumers all want the same 809-row collection, and several
//! of them mount at once. The store pages through the service exactly once,
//! sorts the accumulated rows a single time, and hands every caller the same
//! `Arc`. The cache slot has an explicit lifecycle:
//!
//! ```text
//! Empty --fetch_all--> Fetching --ok--> Ready
//!   ^                     |
//!   +--------err----------+
//! ```
//!
//! Callers arriving while a fetch is in flight wait on the shared outcome
//! rather than starting a second fetch. A fetch whose driving future is
//! dropped mid-flight leaves a dead channel in the slot; the next caller
//! detects it and restarts the fetch as the new leader.
//! [`RecordStore::invalidate`] resets the slot; a fetch that completes after
//! an invalidate overwrites whatever is in the slot (last completed write
//! wins: there is no generation counter, and the dataset is immutable, so
//! both results are equally valid).

use crate::{error::ClientError, source::MoodSource, types::Page};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};
use zeitgeist_core::MonthlyMood;

/// Default page size for the monthly collection.
///
/// Larger than the known dataset (809 rows), so a service that honors the
/// limit returns everything in one page; the paging loop still handles
/// services that cap it lower.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// The shared, immutable monthly collection.
type Records = Arc<Vec<MonthlyMood>>;

/// Outcome of one fetch sequence, clonable so it can fan out to all waiters.
type Outcome = std::result::Result<Records, StoreError>;

/// Errors surfaced by the record store.
///
/// Clonable so one failed fetch can be reported to every waiter that was
/// de-duplicated onto it.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A page fetch failed; the cache was left empty for an explicit retry.
    #[error("record fetch failed: {0}")]
    Fetch(#[source] Arc<ClientError>),

    /// The in-flight fetch went away without reporting a result.
    #[error("record fetch aborted before completing")]
    Aborted,
}

/// Cache slot lifecycle.
enum Slot {
    /// Nothing cached, nothing in flight.
    Empty,
    /// A fetch is in flight; waiters subscribe to its outcome.
    Fetching(watch::Receiver<Option<Outcome>>),
    /// The collection is cached.
    Ready(Records),
}

/// Paginating, caching, request-de-duplicating store for monthly records.
///
/// Construct one per process and share it; the cache slot is the single piece
/// of shared mutable state in the data layer (everything downstream receives
/// the records by shared reference and treats them as immutable).
#[derive(Debug)]
pub struct RecordStore<S> {
    source: S,
    page_size: u32,
    slot: Mutex<Slot>,
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Fetching(_) => f.write_str("Fetching"),
            Self::Ready(records) => write!(f, "Ready({} rows)", records.len()),
        }
    }
}

impl<S: MoodSource> RecordStore<S> {
    /// Creates a store with [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    /// Creates a store with an explicit page size.
    #[must_use]
    pub const fn with_page_size(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size,
            slot: Mutex::const_new(Slot::Empty),
        }
    }

    /// Returns the full monthly collection, sorted ascending by `year_month`.
    ///
    /// The first caller drives the page loop; concurrent callers receive the
    /// same pending outcome, and later callers get the cached `Arc` without
    /// touching the network.
    ///
    /// # Errors
    ///
    /// A page failure is reported to every waiter of the in-flight fetch and
    /// leaves the cache empty, so a subsequent call retries from scratch. If
    /// the driving future is dropped mid-fetch, already-subscribed waiters
    /// get [`StoreError::Aborted`] and the next call restarts the fetch.
    pub async fn fetch_all(&self) -> Outcome {
        let publisher = {
            let mut slot = self.slot.lock().await;
            match &*slot {
                Slot::Ready(records) => return Ok(records.clone()),
                Slot::Fetching(rx) if rx.has_changed().is_ok() => {
                    let rx = rx.clone();
                    drop(slot);
                    return Self::await_outcome(rx).await;
                }
                // Empty, or an in-flight fetch whose driving future was
                // dropped before publishing: become the leader.
                _ => {
                    let (tx, rx) = watch::channel(None);
                    *slot = Slot::Fetching(rx);
                    tx
                }
            }
        };

        let outcome = match self.fetch_pages().await {
            Ok(records) => Ok(Arc::new(records)),
            Err(e) => Err(StoreError::Fetch(Arc::new(e))),
        };

        {
            let mut slot = self.slot.lock().await;
            *slot = match &outcome {
                Ok(records) => Slot::Ready(records.clone()),
                Err(_) => Slot::Empty,
            };
        }
        let _ = publisher.send(Some(outcome.clone()));
        outcome
    }

    /// Clears the cached collection and any in-flight marker.
    ///
    /// The next [`fetch_all`](Self::fetch_all) goes back to the network. A
    /// still-running fetch is not cancelled; its result lands whenever it
    /// completes.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        *slot = Slot::Empty;
    }

    /// Invalidates and fetches fresh.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`fetch_all`](Self::fetch_all).
    pub async fn refetch(&self) -> Outcome {
        self.invalidate().await;
        self.fetch_all().await
    }

    /// The `n` most recent months of the collection.
    ///
    /// # Errors
    ///
    /// Same failure contract as [`fetch_all`](Self::fetch_all).
    pub async fn recent_months(&self, n: usize) -> std::result::Result<Vec<MonthlyMood>, StoreError> {
        let records = self.fetch_all().await?;
        let start = records.len().saturating_sub(n);
        Ok(records[start..].to_vec())
    }

    /// Page through the source until the continuation token runs out, then
    /// sort once. Page order is deliberately not trusted.
    async fn fetch_pages(&self) -> crate::Result<Vec<MonthlyMood>> {
        let mut all: Vec<MonthlyMood> = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let Page { items, next_token: token } = self
                .source
                .monthly_page(self.page_size, next_token.as_deref())
                .await?;
            all.extend(items);
            match token {
                Some(t) => next_token = Some(t),
                None => break,
            }
        }

        all.sort_by_key(|r| r.year_month);
        log::debug!("record store: cached {} monthly rows", all.len());
        Ok(all)
    }

    async fn await_outcome(mut rx: watch::Receiver<Option<Outcome>>) -> Outcome {
        loop {
            if let Some(outcome) = rx.borrow_and_update().clone() {
                return outcome;
            }
            // Sender dropped without publishing: the driving future was
            // dropped mid-fetch.
            if rx.changed().await.is_err() {
                return Err(StoreError::Aborted);
            }
        }
    }
}
