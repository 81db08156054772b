//! Wire types for the data-service endpoints.

use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated list response.
///
/// An absent or `null` `nextToken` signals the last page. The token itself is
/// opaque; callers only ever echo it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Rows in this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Continuation token for the next page, if any.
    #[serde(default)]
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A final page with no continuation token.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_means_last_page() {
        let page: Page<i32> = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_token_roundtrips() {
        let page: Page<i32> =
            serde_json::from_str(r#"{"items": [], "nextToken": "abc"}"#).unwrap();
        assert_eq!(page.next_token.as_deref(), Some("abc"));
    }
}
