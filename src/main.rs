//! deploy-instance - bootstrap secrets and configuration for a deployment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use deploy_instance::cli::output;
use deploy_instance::cli::{execute, Cli};
use deploy_instance::core::constants;
use deploy_instance::error::{Error, TemplateError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("deploy_instance=debug")
        } else {
            EnvFilter::new("deploy_instance=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Template(TemplateError::NotFound(_)) => {
                Some("pass --template <PATH> or set DEPLOY_INSTANCE_TEMPLATE")
            }
            Error::Validation(_) => Some("run: deploy-instance --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
