use {
    super::serde_parsers::deserialize_lenient,
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// Market snapshot of a single currency, one element of the `/ticker/`
/// response array.
///
/// The upstream sends numbers wrapped in strings and uses `null` for figures
/// it does not know, so every numeric field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Upstream identifier, e.g. `bitcoin`
    pub id: String,
    /// Display name, e.g. `Bitcoin`
    pub name: String,
    /// Ticker symbol, e.g. `BTC`
    pub symbol: String,
    /// Position by market capitalization
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub price_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub price_btc: Option<f64>,
    #[serde(
        rename = "24h_volume_usd",
        default,
        deserialize_with = "deserialize_lenient"
    )]
    pub volume_24h_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub market_cap_usd: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub available_supply: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub total_supply: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub max_supply: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub percent_change_1h: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub percent_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub percent_change_7d: Option<f64>,
    /// Unix timestamp (seconds) of the last price update
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub last_updated: Option<i64>,
}

impl Coin {
    /// Last price update as a UTC date, if the upstream sent one.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}
