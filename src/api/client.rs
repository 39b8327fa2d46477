//! HTTP client for the PokéAPI listing and detail endpoints.
//!
//! The client wraps a single `reqwest::Client`, created once and reused for
//! every fetch in a harvest so all requests share one connection pool.
//! Every request carries explicit connect and read timeouts; a harvest is
//! thousands of sequential calls, and one unbounded hang would stall the
//! whole run.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::error::FetchError;
use super::wire::{ListingEntry, ListingPage, PokemonDetail};

/// Default listing endpoint of the public PokéAPI.
pub const DEFAULT_LISTING_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";

/// Default listing page size. Large enough to cover the whole catalog in
/// one page; the listing is fetched once, not cursor-followed.
pub const DEFAULT_PAGE_SIZE: u32 = 10_000;

/// Connect timeout applied to every request.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default read timeout applied to every request.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Project URL for User-Agent identification (good citizenship; RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/pokeharvest/pokeharvest";

/// Default User-Agent identifying the tool.
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("pokeharvest/{version} (dataset-harvester; +{PROJECT_UA_URL})")
}

/// Typed HTTP client for the PokéAPI catalog.
///
/// # Example
///
/// ```no_run
/// use pokeharvest_core::api::PokeApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PokeApiClient::new();
/// let entries = client.fetch_listing(10_000).await?;
/// println!("catalog lists {} entries", entries.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: Client,
    listing_endpoint: Url,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiClient {
    /// Creates a client for the public PokéAPI with default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let endpoint =
            Url::parse(DEFAULT_LISTING_ENDPOINT).expect("default listing endpoint is a valid URL");
        Self::with_endpoint(endpoint, DEFAULT_READ_TIMEOUT_SECS)
    }

    /// Creates a client for an explicit listing endpoint and read timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_endpoint(listing_endpoint: Url, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(read_timeout_secs))
            .user_agent(default_user_agent())
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");

        Self {
            client,
            listing_endpoint,
        }
    }

    /// Fetches one page of the catalog listing.
    ///
    /// `limit` is passed through as the page-size query parameter and must
    /// be large enough to cover the entire catalog in a single page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-success status,
    /// or a body that does not decode as a listing page. The body is not
    /// read when the status is non-success.
    pub async fn fetch_listing(&self, limit: u32) -> Result<Vec<ListingEntry>, FetchError> {
        let mut url = self.listing_endpoint.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        debug!(url = %url, "fetching catalog listing");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::network(url.as_str(), source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url.as_str(), status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::network(url.as_str(), source))?;
        let page: ListingPage = serde_json::from_slice(&body)
            .map_err(|source| FetchError::malformed_body(url.as_str(), source))?;

        Ok(page.results)
    }

    /// Fetches and decodes the detail body for one listing entry.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-success status,
    /// or a body missing the expected fields.
    pub async fn fetch_detail(&self, entry: &ListingEntry) -> Result<PokemonDetail, FetchError> {
        debug!(name = %entry.name, url = %entry.url, "fetching detail");
        let response = self
            .client
            .get(&entry.url)
            .send()
            .await
            .map_err(|source| FetchError::network(entry.url.as_str(), source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(entry.url.as_str(), status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::network(entry.url.as_str(), source))?;
        serde_json::from_slice(&body)
            .map_err(|source| FetchError::malformed_body(entry.url.as_str(), source))
    }
}
