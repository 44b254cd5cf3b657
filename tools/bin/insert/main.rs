use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use tracing::{Level, debug, warn};

use api::contact::{ContactForm, InsertOutcome};
use common::{
    config::{BackendKind, read_config},
    db::{DbBackend, MariaDBBackend, MemoryBackend, insert_contact},
};

// one-shot contact insert
//
// runs the same procedure as the contact endpoint against the configured
// database and prints the outcome, which is handy for checking credentials
// and table layout without going through the web server
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// config file
    #[arg(short, long, default_value = "/etc/folio/config.toml")]
    config: String,

    /// value for the name column
    #[arg(short, long, default_value = "")]
    name: String,

    /// value for the email column
    #[arg(short, long, default_value = "")]
    email: String,

    /// log each step of the insert to stderr
    #[arg(short, long)]
    verbose: bool,
}

// the insert itself, followed by closing the pool so that the process does
// not exit with connections still open on the server side
async fn run<B: DbBackend>(backend: B, form: ContactForm) -> InsertOutcome {
    let outcome = insert_contact(&backend, form).await;

    if let Err(err) = backend.shutdown().await {
        warn!({ error = %err }, "failed to shut down database backend");
    }

    outcome
}

fn exit_code(outcome: &InsertOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = read_config(PathBuf::from(cli.config)).await?;

    let form = ContactForm {
        name: cli.name,
        email: cli.email,
    };

    debug!({ backend = ?config.db_backend }, "running insert");

    let outcome = match config.db_backend {
        BackendKind::MariaDB => run(MariaDBBackend::new(config.clone())?, form).await,
        BackendKind::Memory => run(MemoryBackend::new(config.clone())?, form).await,
    };

    println!("{outcome}");

    Ok(exit_code(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::db::memory::FailAt;

    fn alice() -> ContactForm {
        ContactForm {
            name: String::from("Alice"),
            email: String::from("alice@example.com"),
        }
    }

    #[tokio::test]
    async fn inserted_row_exits_cleanly() {
        let backend = MemoryBackend::empty();

        let outcome = run(backend.clone(), alice()).await;

        assert_eq!(outcome.to_string(), "Data inserted successfully!");
        assert_eq!(exit_code(&outcome), ExitCode::SUCCESS);
        assert_eq!(backend.rows().len(), 1);
        assert!(backend.is_shut_down());
    }

    #[tokio::test]
    async fn every_failure_exits_with_failure() {
        for stage in [FailAt::Connect, FailAt::Prepare, FailAt::Execute] {
            let backend = MemoryBackend::failing(stage, "boom");

            let outcome = run(backend.clone(), alice()).await;

            assert!(outcome.to_string().ends_with(": boom"), "{outcome}");
            assert_eq!(exit_code(&outcome), ExitCode::FAILURE, "{stage:?}");
            assert!(backend.rows().is_empty());
            assert!(backend.is_shut_down());
        }
    }

    #[test]
    fn fields_default_to_empty() {
        let cli = Cli::parse_from(["folio-insert", "--name", "Bob"]);

        assert_eq!(cli.name, "Bob");
        assert_eq!(cli.email, "");
        assert_eq!(cli.config, "/etc/folio/config.toml");
    }
}
