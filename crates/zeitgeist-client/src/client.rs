//! Data-service client implementation.

use crate::{
    Result,
    error::ClientError,
    source::MoodSource,
    types::Page,
};
use reqwest::Client;
use std::env;
use zeitgeist_core::{DashboardMetadata, HistoricalEvent, MetadataKind, MonthlyMood, YearlyMood};

/// Page size used for the small yearly collection (~68 rows).
const YEARLY_PAGE_SIZE: u32 = 100;

/// Page size used for the tiny event collection (~8 rows).
const EVENT_PAGE_SIZE: u32 = 50;

/// Client for the Zeitgeist managed data service.
#[derive(Debug, Clone)]
pub struct MoodClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl MoodClient {
    /// Create a new client for the given service base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    /// Attach an API key, sent as the `x-api-key` header.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Create a client from the `ZEITGEIST_API_URL` environment variable,
    /// with an optional `ZEITGEIST_API_KEY`.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = env::var("ZEITGEIST_API_URL").map_err(|_| ClientError::MissingBaseUrl)?;
        let mut client = Self::new(base_url);
        if let Ok(key) = env::var("ZEITGEIST_API_KEY") {
            client = client.with_api_key(key);
        }
        Ok(client)
    }

    /// Build a full URL for an endpoint path.
    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Build a GET request for an endpoint. Query values go through
    /// `reqwest`'s query serializer, which percent-encodes them; continuation
    /// tokens are opaque and may contain reserved characters.
    fn request(&self, endpoint: &str, query: &[(&str, String)]) -> reqwest::RequestBuilder {
        let mut request = self.client.get(self.url(endpoint));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }
        request
    }

    /// Make a GET request and parse the JSON response.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.request(endpoint, query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ClientError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse response from {endpoint}: {e}"),
            )))
        })
    }

    /// Fetch one page of the monthly collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list_monthly(
        &self,
        limit: u32,
        next_token: Option<&str>,
    ) -> Result<Page<MonthlyMood>> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(token) = next_token {
            query.push(("nextToken", token.to_string()));
        }
        self.get("monthly", &query).await
    }

    /// Fetch the yearly collection, optionally filtered to one decade,
    /// sorted ascending by year.
    ///
    /// The collection is small enough (~68 rows) that a single page always
    /// suffices.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_yearly(&self, decade: Option<i32>) -> Result<Vec<YearlyMood>> {
        let mut query = vec![("limit", YEARLY_PAGE_SIZE.to_string())];
        if let Some(d) = decade {
            query.push(("decade", d.to_string()));
        }
        let page: Page<YearlyMood> = self.get("yearly", &query).await?;
        let mut years = page.items;
        years.sort_by_key(|y| y.year);
        Ok(years)
    }

    /// Fetch all historical events, sorted by start date.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_events(&self) -> Result<Vec<HistoricalEvent>> {
        let query = [("limit", EVENT_PAGE_SIZE.to_string())];
        let page: Page<HistoricalEvent> = self.get("events", &query).await?;
        let mut events = page.items;
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }

    /// Fetch a singleton metadata blob by kind.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MetadataNotFound`] if nothing is stored under
    /// the key, or another error if the request fails.
    pub async fn get_metadata(&self, kind: MetadataKind) -> Result<DashboardMetadata> {
        let endpoint = format!("metadata/{}", kind.as_str());
        let blob: Option<DashboardMetadata> = self.get(&endpoint, &[]).await?;
        blob.ok_or_else(|| ClientError::MetadataNotFound(kind.as_str().to_string()))
    }
}

impl MoodSource for MoodClient {
    async fn monthly_page(
        &self,
        limit: u32,
        next_token: Option<&str>,
    ) -> Result<Page<MonthlyMood>> {
        self.list_monthly(limit, next_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = MoodClient::new("https://data.zeitgeist.example/v1/");
        assert_eq!(
            client.url("monthly"),
            "https://data.zeitgeist.example/v1/monthly"
        );
    }

    #[test]
    fn test_continuation_token_is_percent_encoded() {
        let client = MoodClient::new("https://data.zeitgeist.example/v1");
        let query = [
            ("limit", "1000".to_string()),
            ("nextToken", "ab+/c=".to_string()),
        ];
        let request = client.request("monthly", &query).build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://data.zeitgeist.example/v1/monthly?limit=1000&nextToken=ab%2B%2Fc%3D"
        );
    }
}
