//! Create command - generate and write one deployment instance.

use std::path::PathBuf;

use rand::rngs::OsRng;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::output;
use crate::core::args::ArgumentSource;
use crate::core::clock::SystemClock;
use crate::core::constants;
use crate::core::instance::{Instance, InstanceOptions};
use crate::core::materialize::read_template;
use crate::core::naming::ServiceNames;
use crate::error::Result;

/// Everything the create command needs from the command line.
#[derive(Debug)]
pub struct Request {
    pub template: PathBuf,
    pub output: PathBuf,
    pub json: bool,
    pub dry_run: bool,
    pub options: Vec<String>,
}

/// JSON summary printed with `--json`.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    id: &'a str,
    name: &'a str,
    path: String,
    files: [&'static str; 2],
    services: &'a ServiceNames,
    dry_run: bool,
}

/// Generate a new instance and write it under the output directory.
pub fn execute(request: Request) -> Result<()> {
    let args = ArgumentSource::parse(&request.options);
    debug!("Instance option keys: {:?}", args.keys().collect::<Vec<_>>());

    let options = InstanceOptions::from_args(&args)?;
    let template = read_template(&request.template)?;

    let instance = Instance::generate(&options, &mut OsRng, &SystemClock)?;
    info!("Generated instance {}", instance.name());

    let dir = if request.dry_run {
        request.output.join(instance.name())
    } else {
        instance.materialize(&request.output, &template)?
    };

    if request.json {
        let summary = Summary {
            id: instance.id().as_str(),
            name: instance.name(),
            path: dir.display().to_string(),
            files: [constants::ENV_FILE, constants::COMPOSE_FILE],
            services: instance.services(),
            dry_run: request.dry_run,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if request.dry_run {
        output::header("Dry run");
        output::kv("instance", instance.name());
        output::kv("path    ", dir.display());
        output::list_item(constants::ENV_FILE);
        output::list_item(constants::COMPOSE_FILE);
        output::dimmed("nothing written");
        return Ok(());
    }

    output::success(&format!(
        "created deployment instance \"{}\" at {}",
        instance.name(),
        output::path(&dir.display().to_string())
    ));

    Ok(())
}
