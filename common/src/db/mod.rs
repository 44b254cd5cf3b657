use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use crate::config::FolioConfig;
use api::contact::{ContactForm, InsertOutcome};

pub mod mariadb;
pub use mariadb::MariaDBBackend;

pub mod memory;
pub use memory::MemoryBackend;

// the statement behind the contact form
//
// the table is fixed; the column order matches the order the values are bound in
pub const INSERT_CONTACT: &str = "INSERT INTO users (name, email) VALUES (?, ?)";

// these are the database calls that any backend must be able to process
//
// the insert is spelled out step by step (connect, prepare, execute, close) rather
// than as one call so that the caller can tell which step failed
#[async_trait]
pub trait DbBackend: Send + Sync + 'static {
    type Conn: DbConn;

    fn new(config: Arc<FolioConfig>) -> Result<Self>
    where
        Self: Sized;

    async fn connect(&self) -> Result<Self::Conn>;

    // release whatever the backend holds open between connections.  one-shot
    // callers (the cli) call this once they are done; the server never does
    async fn shutdown(self) -> Result<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
pub trait DbConn: Send + Sized + 'static {
    type Statement: Send + Sync + 'static;

    async fn prepare(&mut self, query: &'static str) -> Result<Self::Statement>;

    async fn execute(&mut self, stmt: &Self::Statement, name: String, email: String)
    -> Result<()>;

    async fn close(&mut self, stmt: Self::Statement) -> Result<()>;

    async fn disconnect(self) -> Result<()>;
}

// insert one contact form submission
//
// connection and prepare failures return straight away; an execution failure is
// reported only after the statement and connection have been closed.  errors while
// closing are logged but do not change the outcome
#[instrument(skip_all)]
pub async fn insert_contact<B: DbBackend>(backend: &B, form: ContactForm) -> InsertOutcome {
    debug!(
        { name = form.name.as_str(), email = form.email.as_str() },
        "inserting contact"
    );

    let mut conn = match backend.connect().await {
        Ok(conn) => conn,
        Err(err) => {
            error!({ stage = "connect", error = %err }, "contact insert failed");
            return InsertOutcome::ConnectionFailed(format!("{err:#}"));
        }
    };

    let stmt = match conn.prepare(INSERT_CONTACT).await {
        Ok(stmt) => stmt,
        Err(err) => {
            error!({ stage = "prepare", error = %err }, "contact insert failed");
            return InsertOutcome::PrepareFailed(format!("{err:#}"));
        }
    };

    let outcome = match conn.execute(&stmt, form.name, form.email).await {
        Ok(()) => InsertOutcome::Inserted,
        Err(err) => {
            error!({ stage = "execute", error = %err }, "contact insert failed");
            InsertOutcome::ExecutionFailed(format!("{err:#}"))
        }
    };

    if let Err(err) = conn.close(stmt).await {
        warn!({ error = %err }, "failed to close insert statement");
    }

    if let Err(err) = conn.disconnect().await {
        warn!({ error = %err }, "failed to close database connection");
    }

    outcome
}

// open and close a connection without touching any table, which is all that
// happens when the contact endpoint is hit with anything but a submission
#[instrument(skip_all)]
pub async fn check_connection<B: DbBackend>(backend: &B) -> Result<()> {
    let conn = backend.connect().await?;

    conn.disconnect().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::FailAt;

    fn alice() -> ContactForm {
        ContactForm {
            name: String::from("Alice"),
            email: String::from("alice@example.com"),
        }
    }

    #[tokio::test]
    async fn inserts_one_row() {
        let backend = MemoryBackend::empty();

        let outcome = insert_contact(&backend, alice()).await;

        assert_eq!(outcome, InsertOutcome::Inserted);
        assert_eq!(outcome.to_string(), "Data inserted successfully!");
        assert_eq!(
            backend.rows(),
            vec![(String::from("Alice"), String::from("alice@example.com"))]
        );
        assert_eq!(backend.open_connections(), 0);
    }

    #[tokio::test]
    async fn empty_fields_are_inserted_as_is() {
        let backend = MemoryBackend::empty();

        let outcome = insert_contact(&backend, ContactForm::default()).await;

        assert!(outcome.is_success());
        assert_eq!(backend.rows(), vec![(String::new(), String::new())]);
    }

    #[tokio::test]
    async fn duplicates_are_not_filtered() {
        let backend = MemoryBackend::empty();

        insert_contact(&backend, alice()).await;
        insert_contact(&backend, alice()).await;

        assert_eq!(backend.rows().len(), 2);
    }

    #[tokio::test]
    async fn unreachable_database_writes_nothing() {
        let backend = MemoryBackend::failing(FailAt::Connect, "Can't connect to server");

        let outcome = insert_contact(&backend, alice()).await;

        assert!(outcome.to_string().starts_with("Connection failed"));
        assert!(outcome.is_fatal());
        assert!(backend.rows().is_empty());
    }

    #[tokio::test]
    async fn prepare_failure_stops_before_execute() {
        let backend = MemoryBackend::failing(FailAt::Prepare, "Table 'users' doesn't exist");

        let outcome = insert_contact(&backend, alice()).await;

        assert_eq!(
            outcome,
            InsertOutcome::PrepareFailed(String::from("Table 'users' doesn't exist"))
        );
        assert!(backend.rows().is_empty());
    }

    #[tokio::test]
    async fn execute_failure_still_closes_connection() {
        let backend = MemoryBackend::failing(FailAt::Execute, "Data too long for column");

        let outcome = insert_contact(&backend, alice()).await;

        assert_eq!(
            outcome.to_string(),
            "Execution failed: Data too long for column"
        );
        assert!(!outcome.is_fatal());
        assert!(backend.rows().is_empty());
        assert_eq!(backend.open_connections(), 0);
        assert_eq!(backend.open_statements(), 0);
    }

    #[tokio::test]
    async fn shutdown_after_insert() {
        let backend = MemoryBackend::empty();
        let handle = backend.clone();

        insert_contact(&backend, alice()).await;
        backend.shutdown().await.unwrap();

        assert!(handle.is_shut_down());
        assert_eq!(handle.rows().len(), 1);
    }

    #[tokio::test]
    async fn connection_check() {
        assert!(check_connection(&MemoryBackend::empty()).await.is_ok());

        let backend = MemoryBackend::failing(FailAt::Connect, "refused");
        assert!(check_connection(&backend).await.is_err());
    }
}
