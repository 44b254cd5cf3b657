use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    routing::get,
};
use tokio::net::TcpListener;
use tower::Service;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{Level, debug, info, instrument, warn};

use crate::http::api::{check_contact_db, submit_contact};
use crate::service::{ESMRegistry, ESMSender, FolioService, ServiceType};
use api::{api_route, contact::CONTACT_ENDPOINT};
use common::config::FolioConfig;

// handler state.  nothing messages the http service, it only talks outward
#[derive(Clone, Debug)]
pub struct HttpEndpoint {
    pub(super) db_svc_sender: ESMSender,
}

impl HttpEndpoint {
    pub fn new(registry: &ESMRegistry) -> anyhow::Result<Self> {
        Ok(HttpEndpoint {
            db_svc_sender: registry.get(&ServiceType::Db)?,
        })
    }
}

pub struct HttpService {
    config: Arc<FolioConfig>,
    handle: AsyncCell<tokio::task::JoinHandle<anyhow::Result<()>>>,
}

#[async_trait]
impl FolioService for HttpService {
    fn create(config: Arc<FolioConfig>, _registry: &ESMRegistry) -> anyhow::Result<Self> {
        Ok(HttpService {
            config: config.clone(),
            handle: AsyncCell::new(),
        })
    }

    #[instrument(level=Level::DEBUG, skip(self, registry))]
    async fn start(&self, registry: &ESMRegistry) -> anyhow::Result<()> {
        info!("starting http service");

        let state = Arc::new(HttpEndpoint::new(registry)?);

        let socket: SocketAddr = self
            .config
            .http
            .socket
            .parse()
            .with_context(|| format!("failed to parse http socket {}", self.config.http.socket))?;

        // for the moment, we just fail if the socket is in use
        let listener = TcpListener::bind(socket)
            .await
            .with_context(|| format!("failed to bind {socket}"))?;

        let router = router(state, &self.config.http.doc_root);

        self.handle.set(tokio::task::spawn(serve_http(listener, router)));

        debug!({ socket = %socket }, "started http service");

        Ok(())
    }
}

// everything that is not an api call is the web app and its assets.  the app
// does its own routing, so unknown paths get index.html rather than a 404
pub fn router(state: Arc<HttpEndpoint>, doc_root: &Path) -> Router {
    let app = ServeDir::new(doc_root).fallback(ServeFile::new(doc_root.join("index.html")));

    Router::new()
        .route(
            &api_route(CONTACT_ENDPOINT),
            get(check_contact_db).post(submit_contact),
        )
        .fallback_service(app)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn serve_http(listener: TcpListener, router: Router) -> anyhow::Result<()> {
    let service = hyper::service::service_fn(move |request: Request<hyper::body::Incoming>| {
        router.clone().call(request)
    });

    // the main http server loop
    loop {
        let (stream, peer) = listener.accept().await?;

        let service = service.clone();
        let io = hyper_util::rt::TokioIo::new(stream);

        tokio::task::spawn(async move {
            if let Err(err) =
                hyper_util::server::conn::auto::Builder::new(hyper_util::rt::TokioExecutor::new())
                    .serve_connection(io, service)
                    .await
            {
                warn!({ peer = %peer, error = %err }, "http connection failed");
            }
        });
    }
}
