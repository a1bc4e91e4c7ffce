use {
    crate::{
        command_title,
        display::{fmt_change, fmt_opt, json_output},
        item,
        prelude::*,
    },
    coinmarketcap_sdk::CoinMarketCapClient,
};

/// Show the ticker of a single coin.
pub(crate) async fn coin_ticker(
    client: &CoinMarketCapClient,
    coin: &str,
) -> AnyResult<(), CmcCliError> {
    command_title!("Ticker of '{coin}'");

    let ticker = client.get_coin_data(coin).await?;

    item!(
        "{name} ({symbol}), rank {rank}",
        name = ticker.name.bold(),
        symbol = ticker.symbol,
        rank = fmt_opt(ticker.rank)
    );
    item!(
        "Price: {usd} USD, {btc} BTC",
        usd = fmt_opt(ticker.price_usd),
        btc = fmt_opt(ticker.price_btc)
    );
    item!("24h volume: {} USD", fmt_opt(ticker.volume_24h_usd));
    item!("Market cap: {} USD", fmt_opt(ticker.market_cap_usd));
    item!(
        "Supply: {available} available, {total} total, {max} max",
        available = fmt_opt(ticker.available_supply),
        total = fmt_opt(ticker.total_supply),
        max = fmt_opt(ticker.max_supply)
    );
    item!(
        "Change: 1h {h1}, 24h {h24}, 7d {d7}",
        h1 = fmt_change(ticker.percent_change_1h),
        h24 = fmt_change(ticker.percent_change_24h),
        d7 = fmt_change(ticker.percent_change_7d)
    );

    if let Some(at) = ticker.last_updated_at() {
        item!("Last updated: {}", at.to_rfc3339());
    }

    json_output(&ticker)
}
