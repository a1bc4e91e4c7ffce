mod market_all;
mod market_coin;
mod market_global;
mod market_graph;

use {
    crate::prelude::*,
    coinmarketcap_sdk::CoinMarketCapClient,
    market_all::*,
    market_coin::*,
    market_global::*,
    market_graph::*,
    std::time::Duration,
};

#[derive(Debug, Subcommand)]
pub(crate) enum MarketCommand {
    #[command(about = "Show aggregate statistics of the whole market")]
    Global,

    #[command(about = "Show the ticker of a single coin")]
    Coin {
        /// Upstream identifier of the coin, e.g. `bitcoin`.
        #[arg(value_name = "COIN")]
        coin: String,
    },

    #[command(about = "List tickers ordered by rank")]
    All {
        /// Maximum number of tickers to fetch. 0 lets the API decide.
        #[arg(
            long = "limit",
            short = 'l',
            help = "Maximum number of tickers to fetch, 0 lets the API decide",
            default_value_t = 0
        )]
        limit: u32,
    },

    #[command(about = "Show historical data points of a coin")]
    Graph {
        /// Upstream identifier of the coin, e.g. `bitcoin`.
        #[arg(value_name = "COIN")]
        coin: String,
        #[arg(
            long = "start",
            short = 's',
            help = "Start of the window as a Unix timestamp in seconds",
            value_name = "UNIX"
        )]
        start: i64,
        #[arg(
            long = "end",
            short = 'e',
            help = "End of the window as a Unix timestamp in seconds",
            value_name = "UNIX"
        )]
        end: i64,
    },
}

/// Handle the provided market command. The [MarketCommand] instance is passed
/// from [crate::main].
pub(crate) async fn handle(command: MarketCommand) -> AnyResult<(), CmcCliError> {
    // Fall back to defaults when there is no configuration file yet.
    let conf = CliConf::load().await.unwrap_or_else(|e| {
        log::debug!("Using default configuration: {e}");

        CliConf::default()
    });

    let client = build_client(&conf);

    match command {
        MarketCommand::Global => global(&client).await,
        MarketCommand::Coin { coin } => coin_ticker(&client, &coin).await,
        MarketCommand::All { limit } => all_tickers(&client, limit).await,
        MarketCommand::Graph { coin, start, end } => graph(&client, &coin, start, end).await,
    }
}

/// Build an API client from the CLI configuration.
pub(crate) fn build_client(conf: &CliConf) -> CoinMarketCapClient {
    let builder = CoinMarketCapClient::builder()
        .with_base_url(&conf.api.base_url)
        .with_graph_url(&conf.api.graph_url);

    match conf.api.timeout_secs {
        0 => builder.without_timeout(),
        secs => builder.with_timeout(Duration::from_secs(secs)),
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_from_conf() {
        let mut conf = CliConf::default();
        conf.api.base_url = "http://localhost:8080/v1/".to_string();

        let client = build_client(&conf);

        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.timeout(), Some(coinmarketcap_sdk::DEFAULT_TIMEOUT));

        conf.api.timeout_secs = 0;

        assert_eq!(build_client(&conf).timeout(), None);
    }
}
