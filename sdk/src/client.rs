//! CoinMarketCap API client implementation
//!
//! Every operation is a single GET round trip: build the URL, send the
//! request, check the status and decode the JSON body.

use {
    crate::{
        error::CoinMarketCapError,
        models::{Coin, CoinGraph, GlobalMarketData},
    },
    log::debug,
    reqwest::{Client, StatusCode},
    serde::de::DeserializeOwned,
    std::{collections::HashMap, time::Duration},
};

// CoinMarketCap default API endpoints
pub const COINMARKETCAP_API_URL: &str = "https://api.coinmarketcap.com/v1";
pub const COINMARKETCAP_GRAPH_URL: &str = "https://graphs.coinmarketcap.com/currencies";

/// Deadline applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

type Result<T> = std::result::Result<T, CoinMarketCapError>;

/// Builder for CoinMarketCapClient configuration
pub struct CoinMarketCapClientBuilder {
    client: Client,
    base_url: String,
    graph_url: String,
    timeout: Option<Duration>,
}

impl Default for CoinMarketCapClientBuilder {
    /// Creates a default builder pointing at the public endpoints
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: COINMARKETCAP_API_URL.to_string(),
            graph_url: COINMARKETCAP_GRAPH_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CoinMarketCapClientBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set a custom base URL for the global and ticker endpoints
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = trim_url(url);
        self
    }

    /// Set a custom base URL for the graph endpoint
    pub fn with_graph_url(mut self, url: &str) -> Self {
        self.graph_url = trim_url(url);
        self
    }

    /// Set the deadline applied to each request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Let requests run without a deadline
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Build the CoinMarketCapClient with the configured settings
    pub fn build(self) -> CoinMarketCapClient {
        CoinMarketCapClient {
            client: self.client,
            base_url: self.base_url,
            graph_url: self.graph_url,
            timeout: self.timeout,
        }
    }
}

/// Client for the CoinMarketCap market data API.
///
/// Cloning is cheap and clones share the underlying connection pool. The
/// client holds no mutable state so one instance can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct CoinMarketCapClient {
    client: Client,
    base_url: String,
    graph_url: String,
    timeout: Option<Duration>,
}

impl Default for CoinMarketCapClient {
    fn default() -> Self {
        CoinMarketCapClientBuilder::default().build()
    }
}

impl CoinMarketCapClient {
    /// Create a new client with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a builder to create a customized client
    pub fn builder() -> CoinMarketCapClientBuilder {
        CoinMarketCapClientBuilder::default()
    }

    /// Copy of this client whose requests carry a different deadline.
    ///
    /// ```ignore
    /// let coin = client
    ///     .with_timeout(Duration::from_secs(2))
    ///     .get_coin_data("bitcoin")
    ///     .await?;
    /// ```
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// Base URL of the global and ticker endpoints, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL of the graph endpoint, without a trailing slash
    pub fn graph_url(&self) -> &str {
        &self.graph_url
    }

    /// Deadline applied to each request, `None` when requests never time out
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// GET /global/
    ///
    /// Fetches aggregate statistics of the whole market.
    pub async fn get_market_data(&self) -> Result<GlobalMarketData> {
        let url = format!("{}/global/", self.base_url);

        self.fetch_json(&url).await
    }

    /// GET /ticker/{coin}
    ///
    /// Fetches the ticker of a single currency.
    ///
    /// # Arguments
    /// * `coin` - Upstream identifier of the currency, e.g. `bitcoin`
    ///
    /// # Returns
    /// * `Ok(Coin)` - The first ticker of the response
    /// * `Err(CoinMarketCapError::NotFound)` - The response held no ticker
    /// * `Err(CoinMarketCapError::InvalidArgument)` - `coin` is not a single path segment
    pub async fn get_coin_data(&self, coin: &str) -> Result<Coin> {
        ensure_coin_id(coin)?;

        let url = format!("{}/ticker/{}", self.base_url, coin);
        let coins: Vec<Coin> = self.fetch_json(&url).await?;

        coins.into_iter().next().ok_or_else(|| {
            debug!("Ticker response for '{coin}' was empty");

            CoinMarketCapError::NotFound(coin.to_string())
        })
    }

    /// GET /ticker/?limit={limit}
    ///
    /// Fetches up to `limit` tickers and indexes them by coin identifier. A
    /// `limit` of 0 omits the parameter and lets the upstream pick its
    /// default. When an identifier repeats, the later ticker wins.
    pub async fn get_all_coin_data(&self, limit: u32) -> Result<HashMap<String, Coin>> {
        let url = match limit {
            0 => format!("{}/ticker/", self.base_url),
            limit => format!("{}/ticker/?limit={}", self.base_url, limit),
        };

        let coins: Vec<Coin> = self.fetch_json(&url).await?;

        Ok(coins
            .into_iter()
            .map(|coin| (coin.id.clone(), coin))
            .collect())
    }

    /// GET {graph_url}/{coin}/{start_ms}/{end_ms}
    ///
    /// Fetches historical points of one currency between two Unix
    /// timestamps given in seconds. The graph endpoint expects
    /// milliseconds, the conversion happens here. `start <= end` is left
    /// for the upstream to enforce.
    pub async fn get_coin_graph_data(
        &self,
        coin: &str,
        start: i64,
        end: i64,
    ) -> Result<CoinGraph> {
        ensure_coin_id(coin)?;

        let start_ms = to_millis(start)?;
        let end_ms = to_millis(end)?;
        let url = format!("{}/{}/{}/{}", self.graph_url, coin, start_ms, end_ms);

        self.fetch_json(&url).await
    }

    /// Makes a GET request and decodes the body as JSON.
    async fn fetch_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.fetch(url).await?;

        serde_json::from_slice::<T>(&body).map_err(|e| {
            debug!("Failed to decode response from {url}: {e}");

            CoinMarketCapError::Decode(e)
        })
    }

    /// Makes a GET request and returns the raw body of a `200 OK` response.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");

        let mut request = self.client.get(url);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            debug!("Request to {url} failed: {e}");

            CoinMarketCapError::Network(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            debug!("Failed to read response from {url}: {e}");

            CoinMarketCapError::Network(e)
        })?;

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();

            debug!("Request to {url} returned {status}: {body}");

            return Err(CoinMarketCapError::Transport { status, body });
        }

        Ok(body.to_vec())
    }
}

/// Strips trailing slashes so that endpoint paths can be appended verbatim.
fn trim_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// A coin identifier becomes exactly one path segment of the request URL.
fn ensure_coin_id(coin: &str) -> Result<()> {
    if coin.trim().is_empty() {
        return Err(CoinMarketCapError::InvalidArgument(
            "Coin identifier cannot be empty".to_string(),
        ));
    }

    if coin == "." || coin == ".." {
        return Err(CoinMarketCapError::InvalidArgument(format!(
            "Coin identifier '{coin}' is not a valid path segment"
        )));
    }

    if let Some(c) = coin
        .chars()
        .find(|&c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace())
    {
        return Err(CoinMarketCapError::InvalidArgument(format!(
            "Coin identifier '{coin}' contains forbidden character {c:?}"
        )));
    }

    Ok(())
}

fn to_millis(secs: i64) -> Result<i64> {
    secs.checked_mul(1000).ok_or_else(|| {
        CoinMarketCapError::InvalidArgument(format!(
            "Timestamp {secs} is out of range for millisecond conversion"
        ))
    })
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[test]
    fn test_builder_defaults() {
        let client = CoinMarketCapClient::new();

        assert_eq!(client.base_url(), COINMARKETCAP_API_URL);
        assert_eq!(client.graph_url(), COINMARKETCAP_GRAPH_URL);
        assert_eq!(client.timeout(), Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn test_builder_overrides() {
        let client = CoinMarketCapClient::builder()
            .with_base_url("http://localhost:8080/v1/")
            .with_graph_url("http://localhost:8081//")
            .without_timeout()
            .build();

        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.graph_url(), "http://localhost:8081");
        assert_eq!(client.timeout(), None);

        let scoped = client.with_timeout(Duration::from_millis(250));

        assert_eq!(scoped.timeout(), Some(Duration::from_millis(250)));
        assert_eq!(scoped.base_url(), client.base_url());
        assert_eq!(client.timeout(), None);
    }

    #[test]
    fn test_to_millis() {
        assert_eq!(to_millis(1000).unwrap(), 1_000_000);
        assert_eq!(to_millis(-2).unwrap(), -2000);
        assert_matches!(
            to_millis(i64::MAX),
            Err(CoinMarketCapError::InvalidArgument(_))
        );
    }

    #[test]
    fn test_ensure_coin_id() {
        assert!(ensure_coin_id("bitcoin").is_ok());
        assert!(ensure_coin_id("bitcoin-cash").is_ok());
        assert!(ensure_coin_id("0x").is_ok());
        assert_matches!(
            ensure_coin_id("  "),
            Err(CoinMarketCapError::InvalidArgument(msg)) if msg.contains("empty")
        );
    }

    #[test]
    fn test_ensure_coin_id_keeps_to_one_segment() {
        for coin in [
            "?limit=1",
            "../global/",
            "bitcoin/1/2",
            "bitcoin#x",
            "%2e%2e",
            "..",
            ".",
            "bit coin",
            "..\\global",
        ] {
            assert_matches!(
                ensure_coin_id(coin),
                Err(CoinMarketCapError::InvalidArgument(_)),
                "{coin} should be rejected"
            );
        }
    }
}
