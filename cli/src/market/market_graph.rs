use {
    crate::{command_title, display::json_output, item, prelude::*},
    coinmarketcap_sdk::{CoinGraph, CoinMarketCapClient, GraphPoint},
};

/// Show historical data points of a coin.
pub(crate) async fn graph(
    client: &CoinMarketCapClient,
    coin: &str,
    start: i64,
    end: i64,
) -> AnyResult<(), CmcCliError> {
    command_title!("Graph of '{coin}' from {start} to {end}");

    let graph = client.get_coin_graph_data(coin, start, end).await?;

    if graph.is_empty() {
        item!("No data points in the requested window");

        return json_output(&graph);
    }

    for (name, points) in series(&graph) {
        item!("{name}: {} points", points.len());
    }

    if let (Some(first), Some(last)) = (graph.price_usd.first(), graph.price_usd.last()) {
        item!("USD price: {} -> {}", describe(first), describe(last));
    }

    json_output(&graph)
}

fn series(graph: &CoinGraph) -> [(&'static str, &[GraphPoint]); 4] {
    [
        (
            "market_cap_by_available_supply",
            graph.market_cap_by_available_supply.as_slice(),
        ),
        ("price_btc", graph.price_btc.as_slice()),
        ("price_usd", graph.price_usd.as_slice()),
        ("volume_usd", graph.volume_usd.as_slice()),
    ]
}

fn describe(point: &GraphPoint) -> String {
    match point.timestamp() {
        Some(at) => format!("{} at {}", point.value, at.to_rfc3339()),
        None => format!("{} at {}ms", point.value, point.timestamp_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_point() {
        let point = GraphPoint {
            timestamp_ms: 1367174841000,
            value: 135.3,
        };

        assert_eq!(describe(&point), "135.3 at 2013-04-28T18:47:21+00:00");
    }

    #[test]
    fn test_series_names() {
        let graph = CoinGraph::default();
        let names = series(&graph).map(|(name, _)| name);

        assert_eq!(
            names,
            [
                "market_cap_by_available_supply",
                "price_btc",
                "price_usd",
                "volume_usd"
            ]
        );
    }
}
