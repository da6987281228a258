//! HTTP client for the volumes search endpoint.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, instrument};
use url::Url;

use super::types::VolumesResponse;
use super::{LookupError, SearchField, VolumeSummary};
use crate::config::LookupConfig;

/// Client for the external volumes API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct VolumesClient {
    inner: Arc<VolumesClientInner>,
}

struct VolumesClientInner {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl VolumesClient {
    /// Create a new volumes client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            inner: Arc::new(VolumesClientInner {
                client,
                base_url: config.base_url.clone(),
                timeout: config.timeout,
            }),
        })
    }

    /// Search volumes by author or title.
    ///
    /// An empty result is returned as an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Timeout` if the call exceeds the configured timeout,
    /// and another `LookupError` for transport, status, or decoding failures.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        field: SearchField,
        term: &str,
    ) -> Result<Vec<VolumeSummary>, LookupError> {
        let url = self.search_url(field, term);

        let response = self
            .inner
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            error!(status = %status, "Volumes API returned error status");
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: VolumesResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                error = %e,
                body_preview = %body.chars().take(500).collect::<String>(),
                "Failed to parse volumes response"
            );
            LookupError::Parse(e)
        })?;

        debug!(total_items = parsed.total_items, "Volumes search completed");
        Ok(parsed.into_summaries())
    }

    /// The request URL for a search, keeping any query already on the base URL.
    fn search_url(&self, field: SearchField, term: &str) -> Url {
        let mut url = self.inner.base_url.clone();
        url.query_pairs_mut().append_pair("q", &field.query(term));
        url
    }

    fn classify(&self, error: reqwest::Error) -> LookupError {
        if error.is_timeout() {
            LookupError::Timeout(self.inner.timeout)
        } else {
            LookupError::Http(error)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> VolumesClient {
        VolumesClient::new(&LookupConfig {
            base_url: Url::parse(base).unwrap(),
            timeout: Duration::from_secs(1),
        })
        .unwrap()
    }

    #[test]
    fn test_search_url_encodes_term() {
        let url = client("https://volumes.test/books/v1/volumes")
            .search_url(SearchField::Author, "Harper Lee");
        assert_eq!(
            url.as_str(),
            "https://volumes.test/books/v1/volumes?q=inauthor%3AHarper+Lee"
        );
    }

    #[test]
    fn test_search_url_keeps_existing_query() {
        let url = client("https://volumes.test/volumes?key=abc")
            .search_url(SearchField::Title, "Dune");
        assert_eq!(url.query(), Some("key=abc&q=intitle%3ADune"));
    }
}
