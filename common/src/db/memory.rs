use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::{
    config::FolioConfig,
    db::{DbBackend, DbConn},
};

// in-memory database backend
//
// rows live in a shared vector for as long as the process does.  the backend can
// also be told to fail at one of the insert steps, which is how the failure
// paths of the contact form get exercised without a real server around
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FailAt {
    Connect,
    Prepare,
    Execute,
}

#[derive(Debug, Default)]
struct MemoryState {
    rows: Vec<(String, String)>,
    open_connections: usize,
    open_statements: usize,
    shut_down: bool,
}

#[derive(Clone, Debug)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
    failure: Option<(FailAt, String)>,
}

impl MemoryBackend {
    pub fn empty() -> Self {
        MemoryBackend {
            state: Arc::new(Mutex::new(MemoryState::default())),
            failure: None,
        }
    }

    pub fn failing(stage: FailAt, message: &str) -> Self {
        MemoryBackend {
            failure: Some((stage, message.to_owned())),
            ..Self::empty()
        }
    }

    pub fn rows(&self) -> Vec<(String, String)> {
        self.lock().rows.clone()
    }

    pub fn open_connections(&self) -> usize {
        self.lock().open_connections
    }

    pub fn open_statements(&self) -> usize {
        self.lock().open_statements
    }

    pub fn is_shut_down(&self) -> bool {
        self.lock().shut_down
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        lock_state(&self.state)
    }
}

// a panic while holding the lock leaves the counters in a usable state, so
// there is no reason to propagate the poison
fn lock_state(state: &Mutex<MemoryState>) -> MutexGuard<'_, MemoryState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_failure(failure: &Option<(FailAt, String)>, stage: FailAt) -> Result<()> {
    match failure {
        Some((at, message)) if *at == stage => Err(anyhow::Error::msg(message.clone())),
        _ => Ok(()),
    }
}

#[async_trait]
impl DbBackend for MemoryBackend {
    type Conn = MemoryConn;

    fn new(_config: Arc<FolioConfig>) -> Result<Self> {
        info!("creating in-memory database backend");

        Ok(Self::empty())
    }

    async fn connect(&self) -> Result<MemoryConn> {
        check_failure(&self.failure, FailAt::Connect)?;

        self.lock().open_connections += 1;

        Ok(MemoryConn {
            state: self.state.clone(),
            failure: self.failure.clone(),
        })
    }

    async fn shutdown(self) -> Result<()> {
        self.lock().shut_down = true;

        Ok(())
    }
}

pub struct MemoryConn {
    state: Arc<Mutex<MemoryState>>,
    failure: Option<(FailAt, String)>,
}

pub struct MemoryStatement {
    query: &'static str,
}

#[async_trait]
impl DbConn for MemoryConn {
    type Statement = MemoryStatement;

    async fn prepare(&mut self, query: &'static str) -> Result<MemoryStatement> {
        check_failure(&self.failure, FailAt::Prepare)?;

        lock_state(&self.state).open_statements += 1;

        Ok(MemoryStatement { query })
    }

    async fn execute(&mut self, stmt: &MemoryStatement, name: String, email: String) -> Result<()> {
        check_failure(&self.failure, FailAt::Execute)?;

        if !stmt.query.starts_with("INSERT") {
            return Err(anyhow::Error::msg(format!(
                "in-memory backend only supports inserts, got: {}",
                stmt.query
            )));
        }

        lock_state(&self.state).rows.push((name, email));

        Ok(())
    }

    async fn close(&mut self, _stmt: MemoryStatement) -> Result<()> {
        let mut state = lock_state(&self.state);
        state.open_statements = state.open_statements.saturating_sub(1);

        Ok(())
    }

    async fn disconnect(self) -> Result<()> {
        // the Drop impl does the bookkeeping
        Ok(())
    }
}

impl Drop for MemoryConn {
    fn drop(&mut self) {
        let mut state = lock_state(&self.state);
        state.open_connections = state.open_connections.saturating_sub(1);
    }
}
