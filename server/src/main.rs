use std::path::PathBuf;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::{
    filter::FilterFn,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

mod db;
mod http;
mod service;

use common::{
    config::{BackendKind, read_config},
    db::{MariaDBBackend, MemoryBackend},
};
use service::{ESMRegistry, FolioService};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/folio/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let crate_filter = FilterFn::new(|metadata| {
        metadata.level() <= &Level::INFO
            && !metadata.target().starts_with("h2")
            && !metadata.target().starts_with("hyper")
    })
    .with_max_level_hint(Level::INFO);

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(crate_filter))
        .init();

    info!("folio server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("starting core services");

    let registry = ESMRegistry::new();

    // the db service is generic over its backend, so the choice is made here
    // rather than inside the service
    match config.db_backend {
        BackendKind::MariaDB => {
            let db_svc = db::svc::DbService::<MariaDBBackend>::create(config.clone(), &registry)?;
            db_svc.start(&registry).await?;
        }
        BackendKind::Memory => {
            let db_svc = db::svc::DbService::<MemoryBackend>::create(config.clone(), &registry)?;
            db_svc.start(&registry).await?;
        }
    }

    let http_svc = http::svc::HttpService::create(config.clone(), &registry)?;
    http_svc.start(&registry).await?;

    info!("startup complete!");

    tokio::signal::ctrl_c().await?;

    info!("shutting down");

    Ok(())
}
