pub(crate) use {
    crate::error::CmcCliError,
    anyhow::{anyhow, Result as AnyResult},
    clap::{builder::ValueParser, Args, Parser, Subcommand},
    colored::Colorize,
    serde::{Deserialize, Serialize},
    std::{
        path::PathBuf,
        sync::atomic::{AtomicBool, Ordering},
    },
};

// Where to find config file.
pub(crate) const CLI_CONF_PATH: &str = "~/.cmc/conf.toml";

/// When set, commands print their result as JSON instead of a summary.
pub(crate) static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Struct holding the config structure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct CliConf {
    #[serde(default)]
    pub(crate) api: ApiConf,
}

impl CliConf {
    pub(crate) async fn load() -> AnyResult<Self> {
        let conf_path = expand_tilde(CLI_CONF_PATH)?;

        Self::load_from_path(&conf_path).await
    }

    pub(crate) async fn load_from_path(path: &PathBuf) -> AnyResult<Self> {
        let conf = tokio::fs::read_to_string(path).await?;

        Ok(toml::from_str(&conf)?)
    }

    pub(crate) async fn save(&self, path: &PathBuf) -> AnyResult<()> {
        let parent_folder = path
            .parent()
            .ok_or_else(|| anyhow!("Configuration path '{}' has no parent", path.display()))?;
        let conf = toml::to_string_pretty(&self)?;

        tokio::fs::create_dir_all(parent_folder).await?;
        tokio::fs::write(path, conf).await?;

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ApiConf {
    #[serde(default = "default_base_url")]
    pub(crate) base_url: String,
    #[serde(default = "default_graph_url")]
    pub(crate) graph_url: String,
    /// Request deadline in seconds, `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub(crate) timeout_secs: u64,
}

impl Default for ApiConf {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            graph_url: default_graph_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// == Used by clap ==

/// Expands `~/` to the user's home directory in path arguments.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

// == Used by serde ==

fn default_base_url() -> String {
    coinmarketcap_sdk::COINMARKETCAP_API_URL.to_string()
}

fn default_graph_url() -> String {
    coinmarketcap_sdk::COINMARKETCAP_GRAPH_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    coinmarketcap_sdk::DEFAULT_TIMEOUT.as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_conf_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("conf.toml");

        let conf = CliConf {
            api: ApiConf {
                base_url: "http://localhost:8080/v1".to_string(),
                graph_url: "http://localhost:8081".to_string(),
                timeout_secs: 5,
            },
        };

        conf.save(&path).await.unwrap();

        let loaded = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(loaded, conf);
    }

    #[tokio::test]
    async fn test_conf_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf.toml");

        tokio::fs::write(&path, "[api]\ntimeout_secs = 0\n")
            .await
            .unwrap();

        let loaded = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(loaded.api.timeout_secs, 0);
        assert_eq!(loaded.api.base_url, coinmarketcap_sdk::COINMARKETCAP_API_URL);
        assert_eq!(
            loaded.api.graph_url,
            coinmarketcap_sdk::COINMARKETCAP_GRAPH_URL
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(
            expand_tilde("/tmp/conf.toml").unwrap(),
            PathBuf::from("/tmp/conf.toml")
        );
    }
}
