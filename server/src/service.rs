use std::{future::Future, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use common::config::FolioConfig;

// these are the services that make up the folio server backend
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ServiceType {
    Db,
}

// Folio Service Messages
//
// without higher-kinded types, we use the normal enum-of-enums
// to enable general safe message passing between services
pub type ESMSender = tokio::sync::mpsc::Sender<ESM>;
pub type ESMReceiver = tokio::sync::mpsc::Receiver<ESM>;

// message responses are carried back via oneshot channels.  this
// type eliminates quite a bit of boilerplate in the responder logic.
pub type ESMResp<T> = tokio::sync::oneshot::Sender<Result<T>>;

#[derive(Debug)]
pub enum ESM {
    Db(crate::db::msg::DbMsg),
}

// service registry
//
// we assume that each service will be instantiated once, and that there
// should be one message namespace.  services that talk to each other clone
// the sender out of the registry when they start
#[derive(Clone, Debug)]
pub struct ESMRegistry(Arc<DashMap<ServiceType, ESMSender>>);

impl ESMRegistry {
    pub fn new() -> Self {
        ESMRegistry(Arc::new(DashMap::new()))
    }

    pub fn insert(&self, k: ServiceType, v: ESMSender) -> Result<()> {
        match self.0.insert(k.clone(), v) {
            None => Ok(()),
            Some(w) => {
                self.0.insert(k, w);
                Err(anyhow::Error::msg(
                    "internal error: a sender was added twice to the registry",
                ))
            }
        }
    }

    pub fn get(&self, k: &ServiceType) -> Result<ESMSender> {
        Ok(self
            .0
            .get(k)
            .ok_or_else(|| {
                anyhow::Error::msg(format!(
                    "internal error: a service was started without a necessary dependency ({:?})",
                    k
                ))
            })?
            .clone())
    }
}

// core service trait
//
// the outer part of a service holds the channel and task handles; everything
// interesting lives in the state that start() hands to its task
#[async_trait]
pub trait FolioService: Send + Sync + 'static {
    fn create(config: Arc<FolioConfig>, registry: &ESMRegistry) -> Result<Self>
    where
        Self: Sized;

    async fn start(&self, registry: &ESMRegistry) -> Result<()>;
}

// service message responder
//
// services respond to messages from each other through message_handler, and
// may respond to external requests on other channels (http) as well
#[async_trait]
pub trait ESInner: Sized + Send + Sync + 'static {
    async fn message_handler(&self, esm: ESM) -> Result<()>;

    // rather than have the inner service functions respond directly, we
    // define this helper for use in the message_handler loop
    async fn respond<T, Fut>(&self, resp: ESMResp<T>, fut: Fut) -> Result<()>
    where
        T: Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        resp.send(fut.await).map_err(|_| {
            anyhow::Error::msg(format!(
                "failed to respond to a {} message",
                std::any::type_name::<T>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_second_sender() {
        let registry = ESMRegistry::new();

        let (first, _rx1) = tokio::sync::mpsc::channel::<ESM>(1);
        let (second, _rx2) = tokio::sync::mpsc::channel::<ESM>(1);

        assert!(registry.insert(ServiceType::Db, first.clone()).is_ok());
        assert!(registry.insert(ServiceType::Db, second).is_err());

        // the first sender survives the failed insert
        assert!(registry.get(&ServiceType::Db).unwrap().same_channel(&first));
    }

    #[test]
    fn registry_reports_missing_dependency() {
        let registry = ESMRegistry::new();

        let err = registry.get(&ServiceType::Db).unwrap_err();

        assert!(err.to_string().contains("Db"));
    }
}
