use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
};

/// Aggregate statistics of the whole cryptocurrency market, as returned by
/// the `/global/` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketData {
    /// Total market capitalization in USD
    pub total_market_cap_usd: f64,
    /// Total traded volume over the last 24 hours in USD
    pub total_24h_volume_usd: f64,
    /// Share of the total market capitalization held by Bitcoin, in percent
    pub bitcoin_percentage_of_market_cap: f64,
    /// Number of tracked currencies
    pub active_currencies: u64,
    /// Number of tracked assets (tokens)
    #[serde(default)]
    pub active_assets: u64,
    /// Number of tracked markets
    pub active_markets: u64,
    /// Unix timestamp (seconds) of the snapshot
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl GlobalMarketData {
    /// Snapshot time as a UTC date, if the upstream sent one.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn test_global_market_data_decodes_without_optional_fields() {
        let data: GlobalMarketData = serde_json::from_value(json!({
            "total_market_cap_usd": 1.5,
            "total_24h_volume_usd": 2.5,
            "bitcoin_percentage_of_market_cap": 50.0,
            "active_currencies": 1,
            "active_markets": 2
        }))
        .unwrap();

        assert_eq!(data.active_assets, 0);
        assert_eq!(data.last_updated, None);
        assert_eq!(data.last_updated_at(), None);
    }

    #[test]
    fn test_last_updated_at() {
        let data: GlobalMarketData = serde_json::from_value(json!({
            "total_market_cap_usd": 0.0,
            "total_24h_volume_usd": 0.0,
            "bitcoin_percentage_of_market_cap": 0.0,
            "active_currencies": 0,
            "active_assets": 0,
            "active_markets": 0,
            "last_updated": 1509909852
        }))
        .unwrap();

        let at = data.last_updated_at().unwrap();

        assert_eq!(at.timestamp(), 1509909852);
        assert_eq!(at.to_rfc3339(), "2017-11-05T19:24:12+00:00");
    }
}
