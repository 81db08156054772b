//! The paging seam between the record store and the network.

use crate::{Result, types::Page};
use std::future::Future;
use zeitgeist_core::MonthlyMood;

/// A source of monthly-mood pages.
///
/// [`MoodClient`](crate::MoodClient) is the production implementation; tests
/// substitute in-memory fakes so the caching and de-duplication logic in
/// [`RecordStore`](crate::RecordStore) can be exercised without a network.
pub trait MoodSource {
    /// Fetches one page of monthly rows.
    ///
    /// `next_token` is the opaque continuation token from the previous page,
    /// or `None` for the first page.
    fn monthly_page(
        &self,
        limit: u32,
        next_token: Option<&str>,
    ) -> impl Future<Output = Result<Page<MonthlyMood>>> + Send;
}
