//! Typed async client for the CoinMarketCap v1 market data API.
//!
//! The client issues four GET requests (global snapshot, single ticker, all
//! tickers, historical graph) and decodes the JSON answers into the types of
//! the [models] module.
//!
//! ```ignore
//! use coinmarketcap_sdk::CoinMarketCapClient;
//!
//! let client = CoinMarketCapClient::new();
//! let bitcoin = client.get_coin_data("bitcoin").await?;
//! ```

/// The HTTP client and its builder.
mod client;
/// Error type shared by all client operations.
mod error;
/// Response types of the API endpoints, together with the serde helpers used
/// to decode them.
pub mod models;

pub use {client::*, error::*, models::*};
