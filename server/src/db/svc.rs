use std::sync::Arc;

use async_cell::sync::AsyncCell;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{Level, debug, error, info, instrument};

use crate::db::{ESDbService, msg::DbMsg};
use crate::service::{ESInner, ESM, ESMReceiver, ESMRegistry, FolioService, ServiceType};
use api::contact::{ContactForm, InsertOutcome};
use common::config::FolioConfig;
use common::db::{DbBackend, check_connection, insert_contact};

pub struct DbService<B: DbBackend> {
    backend: Arc<B>,
    receiver: Arc<Mutex<ESMReceiver>>,
    handle: AsyncCell<tokio::task::JoinHandle<anyhow::Result<()>>>,
}

impl<B: DbBackend> DbService<B> {
    // used when the backend is built somewhere other than from the config,
    // i.e. when the caller wants to keep a handle on it
    pub fn with_backend(backend: B, registry: &ESMRegistry) -> anyhow::Result<Self> {
        let (tx, rx) = tokio::sync::mpsc::channel::<ESM>(1024);

        registry.insert(ServiceType::Db, tx)?;

        Ok(DbService {
            backend: Arc::new(backend),
            receiver: Arc::new(Mutex::new(rx)),
            handle: AsyncCell::new(),
        })
    }
}

#[async_trait]
impl<B: DbBackend> FolioService for DbService<B> {
    fn create(config: Arc<FolioConfig>, registry: &ESMRegistry) -> anyhow::Result<Self> {
        Self::with_backend(B::new(config)?, registry)
    }

    // the sender went into the registry back in create()
    #[instrument(level=Level::DEBUG, skip_all)]
    async fn start(&self, _registry: &ESMRegistry) -> anyhow::Result<()> {
        info!("starting db service");

        let receiver = Arc::clone(&self.receiver);
        let state = Arc::new(DbRunner {
            backend: self.backend.clone(),
        });

        let serve = {
            async move {
                let mut receiver = receiver.lock().await;

                while let Some(msg) = receiver.recv().await {
                    let state = Arc::clone(&state);
                    tokio::task::spawn(async move {
                        match state.message_handler(msg).await {
                            Ok(()) => (),
                            Err(err) => {
                                error!({service = "db", channel = "esm", error = %err})
                            }
                        }
                    });
                }

                Err::<(), anyhow::Error>(anyhow::Error::msg("db service esm channel disconnected"))
            }
        };

        self.handle.set(tokio::task::spawn(serve));

        debug!("started db service");

        Ok(())
    }
}

struct DbRunner<B: DbBackend> {
    backend: Arc<B>,
}

#[async_trait]
impl<B: DbBackend> ESDbService for DbRunner<B> {
    async fn insert_contact(&self, form: ContactForm) -> anyhow::Result<InsertOutcome> {
        Ok(insert_contact(self.backend.as_ref(), form).await)
    }

    async fn check_connection(&self) -> anyhow::Result<()> {
        check_connection(self.backend.as_ref()).await
    }
}

#[async_trait]
impl<B: DbBackend> ESInner for DbRunner<B> {
    async fn message_handler(&self, esm: ESM) -> anyhow::Result<()> {
        match esm {
            ESM::Db(message) => match message {
                DbMsg::InsertContact { resp, form } => {
                    self.respond(resp, self.insert_contact(form)).await
                }
                DbMsg::CheckConnection { resp } => {
                    self.respond(resp, self.check_connection()).await
                }
            },
        }
    }
}
