use {
    crate::{display::*, prelude::*},
    coinmarketcap_sdk::CoinMarketCapError,
    thiserror::Error,
};

/// Custom error definitions for the CoinMarketCap CLI. Takes care of
/// displaying a pretty summary in the console.
#[derive(Debug, Error)]
pub(crate) enum CmcCliError {
    #[error("{error}{separator}\n{0}", error = "Syntax Error".red().bold(), separator = separator())]
    SyntaxError(clap::error::Error),
    #[error("{error}{separator}\n{0}", error = "API Error".red().bold(), separator = separator())]
    Api(#[from] CoinMarketCapError),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(#[from] anyhow::Error),
}
