//! Command-line interface.

pub mod create;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants;

/// deploy-instance - generate secrets and configuration for a new deployment instance.
#[derive(Parser, Debug)]
#[command(
    name = "deploy-instance",
    about = "Generate secrets, stack.env and a docker-compose copy for a new deployment instance",
    version,
    after_help = "Instance options go last, as --key value or -key value pairs:\n  \
        --name <NAME>                  project name, appended to the directory name\n  \
        --stackName <NAME>             project stack description for the header\n  \
        --stackPrefix <PREFIX>         service hostname prefix (default: instance id)\n  \
        --postgresHost <HOST>          database host (default: <prefix>-postgres)\n  \
        --postgresPort <PORT>          database port (default: 5432)\n  \
        --hookSecretHeaderName <NAME>  hook secret header (default: x-hook-secret)\n\n\
        Everything after the first instance option is read as an instance option, so\n\
        --template, --output, --json, --dry-run and --verbose must come first."
)]
pub struct Cli {
    /// Orchestration template to copy into the instance
    #[arg(long, value_name = "PATH", env = "DEPLOY_INSTANCE_TEMPLATE", default_value = constants::DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Directory under which the instance directory is created
    #[arg(long, value_name = "DIR", env = "DEPLOY_INSTANCE_OUTPUT", default_value = constants::DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Print a JSON summary instead of the confirmation line
    #[arg(long)]
    pub json: bool,

    /// Generate everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Instance options (see below)
    #[arg(
        value_name = "OPTIONS",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    pub options: Vec<String>,
}

/// Run the CLI.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    create::execute(create::Request {
        template: cli.template,
        output: cli.output,
        json: cli.json,
        dry_run: cli.dry_run,
        options: cli.options,
    })
}
