use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tokio;
use toml;
use tracing::{Level, debug, instrument};

use crate::{db::mariadb::MariaDbConfig, server::HttpConfig};

// folio configuration
//
// this struct contains all of the configuration options used by the server and cli tools
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FolioConfig {
    pub db_backend: BackendKind,

    // core services
    pub http: HttpConfig,

    // backends
    pub mariadb: Option<MariaDbConfig>,
}

// backends
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum BackendKind {
    MariaDB,
    // rows are kept in memory and lost on restart, which is handy when
    // working on the web app without a database around
    Memory,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: FolioConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<FolioConfig> {
    // the toml error is not forwarded verbatim since it quotes the offending
    // line, which may well contain the database password
    let data: TomlConfigFile = toml::from_str(doc).map_err(|err| {
        anyhow::Error::msg(format!(
            "failed to parse config file: {}",
            err.message()
        ))
    })?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<FolioConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {filename:?}"))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}
