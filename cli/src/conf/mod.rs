use crate::{command_title, display::json_output, notify_success, prelude::*};

#[derive(Args, Clone, Debug)]
pub(crate) struct ConfCommand {
    #[arg(
        long = "base-url",
        help = "Set the base URL of the global and ticker endpoints",
        value_name = "URL"
    )]
    base_url: Option<String>,
    #[arg(
        long = "graph-url",
        help = "Set the base URL of the graph endpoint",
        value_name = "URL"
    )]
    graph_url: Option<String>,
    #[arg(
        long = "timeout-secs",
        help = "Set the request deadline in seconds, 0 disables it",
        value_name = "SECS"
    )]
    timeout_secs: Option<u64>,
    /// Hidden argument used for testing to set the path of the configuration
    /// file.
    #[arg(
        long = "conf-path",
        hide = true,
        default_value = CLI_CONF_PATH,
        value_parser = ValueParser::from(expand_tilde)
    )]
    conf_path: PathBuf,
}

/// Handle the provided conf command. The [ConfCommand] instance is passed from
/// [crate::main].
pub(crate) async fn handle(
    ConfCommand {
        base_url,
        graph_url,
        timeout_secs,
        conf_path,
    }: ConfCommand,
) -> AnyResult<(), CmcCliError> {
    let mut conf = CliConf::load_from_path(&conf_path)
        .await
        .unwrap_or_else(|_| CliConf::default());

    // If all fields are None, we just want to display the current configuration.
    if base_url.is_none() && graph_url.is_none() && timeout_secs.is_none() {
        command_title!("Current CoinMarketCap CLI Configuration");

        if !JSON_MODE.load(Ordering::Relaxed) {
            println!("{:#?}", conf);
        }

        return json_output(&conf);
    }

    command_title!("Updating CoinMarketCap CLI Configuration");

    apply_updates(&mut conf, base_url, graph_url, timeout_secs);

    conf.save(&conf_path).await?;

    notify_success!(
        "Configuration saved to {path}",
        path = conf_path.display().to_string().truecolor(100, 100, 100)
    );

    json_output(&conf)
}

fn apply_updates(
    conf: &mut CliConf,
    base_url: Option<String>,
    graph_url: Option<String>,
    timeout_secs: Option<u64>,
) {
    conf.api.base_url = base_url.unwrap_or(conf.api.base_url.clone());
    conf.api.graph_url = graph_url.unwrap_or(conf.api.graph_url.clone());
    conf.api.timeout_secs = timeout_secs.unwrap_or(conf.api.timeout_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates_keeps_unset_fields() {
        let mut conf = CliConf::default();

        apply_updates(&mut conf, None, Some("http://graphs".to_string()), Some(0));

        assert_eq!(conf.api.base_url, coinmarketcap_sdk::COINMARKETCAP_API_URL);
        assert_eq!(conf.api.graph_url, "http://graphs");
        assert_eq!(conf.api.timeout_secs, 0);
    }

    #[tokio::test]
    async fn test_handle_writes_conf_file() {
        let dir = tempfile::tempdir().unwrap();
        let conf_path = dir.path().join("conf.toml");

        handle(ConfCommand {
            base_url: Some("http://localhost:8080/v1".to_string()),
            graph_url: None,
            timeout_secs: Some(3),
            conf_path: conf_path.clone(),
        })
        .await
        .unwrap();

        let conf = CliConf::load_from_path(&conf_path).await.unwrap();

        assert_eq!(conf.api.base_url, "http://localhost:8080/v1");
        assert_eq!(conf.api.timeout_secs, 3);
        assert_eq!(
            conf.api.graph_url,
            coinmarketcap_sdk::COINMARKETCAP_GRAPH_URL
        );
    }
}
