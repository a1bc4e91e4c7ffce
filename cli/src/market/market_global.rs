use {
    crate::{command_title, display::json_output, item, prelude::*},
    coinmarketcap_sdk::CoinMarketCapClient,
};

/// Show aggregate statistics of the whole market.
pub(crate) async fn global(client: &CoinMarketCapClient) -> AnyResult<(), CmcCliError> {
    command_title!("Global market data");

    let data = client.get_market_data().await?;

    item!("Total market cap: {:.0} USD", data.total_market_cap_usd);
    item!("24h volume: {:.0} USD", data.total_24h_volume_usd);
    item!(
        "Bitcoin dominance: {:.2}%",
        data.bitcoin_percentage_of_market_cap
    );
    item!(
        "Active currencies: {}, assets: {}, markets: {}",
        data.active_currencies,
        data.active_assets,
        data.active_markets
    );

    if let Some(at) = data.last_updated_at() {
        item!("Last updated: {}", at.to_rfc3339());
    }

    json_output(&data)
}
