use {
    crate::{
        command_title,
        display::{fmt_change, fmt_opt, json_output},
        item,
        prelude::*,
    },
    coinmarketcap_sdk::{Coin, CoinMarketCapClient},
    std::collections::HashMap,
};

/// List tickers ordered by rank.
pub(crate) async fn all_tickers(
    client: &CoinMarketCapClient,
    limit: u32,
) -> AnyResult<(), CmcCliError> {
    match limit {
        0 => command_title!("Listing all tickers"),
        limit => command_title!("Listing top {limit} tickers"),
    }

    let coins = client.get_all_coin_data(limit).await?;
    let coins = sorted_by_rank(coins);

    for coin in &coins {
        item!(
            "#{rank} {symbol} {name}: {price} USD ({change})",
            rank = fmt_opt(coin.rank),
            symbol = coin.symbol.bold(),
            name = coin.name,
            price = fmt_opt(coin.price_usd),
            change = fmt_change(coin.percent_change_24h)
        );
    }

    json_output(&coins)
}

/// Unranked coins go last, ties are broken by identifier.
fn sorted_by_rank(coins: HashMap<String, Coin>) -> Vec<Coin> {
    let mut coins = coins.into_values().collect::<Vec<_>>();

    coins.sort_by(|a, b| {
        let rank_a = a.rank.unwrap_or(u32::MAX);
        let rank_b = b.rank.unwrap_or(u32::MAX);

        rank_a.cmp(&rank_b).then_with(|| a.id.cmp(&b.id))
    });

    coins
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn coin(id: &str, rank: Option<&str>) -> Coin {
        serde_json::from_value(json!({
            "id": id,
            "name": id,
            "symbol": id.to_uppercase(),
            "rank": rank
        }))
        .unwrap()
    }

    #[test]
    fn test_sorted_by_rank() {
        let coins = [
            coin("ethereum", Some("2")),
            coin("unranked", None),
            coin("bitcoin", Some("1")),
            coin("alpha", None),
        ]
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect::<HashMap<_, _>>();

        let ids = sorted_by_rank(coins)
            .into_iter()
            .map(|c| c.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["bitcoin", "ethereum", "alpha", "unranked"]);
    }
}
