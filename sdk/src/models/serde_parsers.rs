use {
    serde::{de::Deserializer, Deserialize},
    std::{fmt::Display, str::FromStr},
};

/// Either the native JSON representation of a value or the same value wrapped
/// in a string, which is how the ticker endpoints send most numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Native(T),
    Text(String),
}

/// Custom parser for numeric ticker fields. Accepts a JSON number, a numeric
/// string, `null` or an empty string. The last two map to `None`.
///
/// Use together with `#[serde(default)]` so that absent keys also map to
/// `None`.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    let value: Option<Lenient<T>> = Deserialize::deserialize(deserializer)?;

    match value {
        None => Ok(None),
        Some(Lenient::Native(value)) => Ok(Some(value)),
        Some(Lenient::Text(text)) => {
            let text = text.trim();

            if text.is_empty() {
                return Ok(None);
            }

            text.parse::<T>().map(Some).map_err(serde::de::Error::custom)
        }
    }
}
