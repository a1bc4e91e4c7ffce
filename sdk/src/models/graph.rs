use {
    chrono::{DateTime, Utc},
    serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize},
};

/// Historical series of one currency over a requested window.
///
/// Every series is ordered by timestamp as sent by the upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinGraph {
    #[serde(default)]
    pub market_cap_by_available_supply: Vec<GraphPoint>,
    #[serde(default)]
    pub price_btc: Vec<GraphPoint>,
    #[serde(default)]
    pub price_usd: Vec<GraphPoint>,
    #[serde(default)]
    pub volume_usd: Vec<GraphPoint>,
}

impl CoinGraph {
    /// True when no series holds a single point.
    pub fn is_empty(&self) -> bool {
        self.market_cap_by_available_supply.is_empty()
            && self.price_btc.is_empty()
            && self.price_usd.is_empty()
            && self.volume_usd.is_empty()
    }
}

/// One timestamped sample. On the wire this is a `[timestamp_ms, value]`
/// pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPoint {
    /// Unix timestamp in milliseconds
    pub timestamp_ms: i64,
    pub value: f64,
}

impl GraphPoint {
    /// Sample time as a UTC date.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }
}

impl<'de> Deserialize<'de> for GraphPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Timestamps occasionally come through as floats. They are rounded to
        // the nearest millisecond, anything outside the i64 range is rejected.
        let (timestamp_ms, value): (f64, f64) = Deserialize::deserialize(deserializer)?;
        let timestamp_ms = timestamp_ms.round();

        if !timestamp_ms.is_finite()
            || timestamp_ms < i64::MIN as f64
            || timestamp_ms >= i64::MAX as f64
        {
            return Err(serde::de::Error::custom(format!(
                "Graph timestamp {timestamp_ms} is out of range"
            )));
        }

        Ok(Self {
            timestamp_ms: timestamp_ms as i64,
            value,
        })
    }
}

impl Serialize for GraphPoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.timestamp_ms, self.value).serialize(serializer)
    }
}
