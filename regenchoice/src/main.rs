// regenchoice/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use regenchoice_core::RegenError;
use regenchoice_core::domain::DomainError;
use regenchoice_core::infrastructure::error::InfrastructureError;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug regenchoice list  to see the store and config details
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        report_error(&err);
        // Exit with error code for CI/CD
        std::process::exit(1);
    }

    Ok(())
}

fn report_error(err: &anyhow::Error) {
    let domain = err.downcast_ref::<DomainError>().or(match err.downcast_ref::<RegenError>() {
        Some(RegenError::Domain(e)) => Some(e),
        _ => None,
    });

    // Validation failures: one error per line, verbatim
    match domain {
        Some(DomainError::InvalidQuestion { id, errors }) => {
            eprintln!("❌ Question {} is invalid, nothing was saved:", id);
            for error in errors {
                eprintln!("   • {}", error);
            }
        }
        Some(DomainError::InvalidCollection(errors)) => {
            eprintln!("❌ The question list is invalid, nothing was saved:");
            for error in errors {
                eprintln!("   • {}", error);
            }
        }
        _ => {
            eprintln!("❌ {:#}", err);
            if let Some(help) = help_for(err) {
                eprintln!("👉 {}", help);
            }
        }
    }
}

fn help_for(err: &anyhow::Error) -> Option<String> {
    let help = if let Some(e) = err.downcast_ref::<RegenError>() {
        e.help()
    } else if let Some(e) = err.downcast_ref::<DomainError>() {
        e.help()
    } else if let Some(e) = err.downcast_ref::<InfrastructureError>() {
        e.help()
    } else {
        None
    };
    help.map(|h| h.to_string())
}
