use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// folio server configuration subtables
//
// split out of config.rs to keep parity with the backend configs
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // location of the compiled web app, served for every non-api path
    pub doc_root: PathBuf,
}
