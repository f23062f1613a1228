//! Instance generation pipeline.
//!
//! Options are validated, then an identifier, secrets and hostnames are
//! generated and rendered in memory. Nothing touches the filesystem until
//! [`Instance::materialize`].

use std::path::{Path, PathBuf};

use rand::{CryptoRng, RngCore};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::args::{ArgValue, ArgumentSource};
use crate::core::clock::{format_timestamp, Clock};
use crate::core::identifier::{instance_name, InstanceId};
use crate::core::materialize;
use crate::core::naming::ServiceNames;
use crate::core::render::{render_env_file, render_header, EnvOverrides, ProjectMetadata};
use crate::core::secrets::SecretBundle;
use crate::core::validation;
use crate::error::Result;

/// Option keys read from the argument source.
pub mod keys {
    pub const NAME: &str = "name";
    pub const STACK_NAME: &str = "stackName";
    pub const STACK_PREFIX: &str = "stackPrefix";
    pub const POSTGRES_HOST: &str = "postgresHost";
    pub const POSTGRES_PORT: &str = "postgresPort";
    pub const HOOK_SECRET_HEADER_NAME: &str = "hookSecretHeaderName";

    pub const ALL: [&str; 6] = [
        NAME,
        STACK_NAME,
        STACK_PREFIX,
        POSTGRES_HOST,
        POSTGRES_PORT,
        HOOK_SECRET_HEADER_NAME,
    ];
}

/// Validated instance options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceOptions {
    pub project: ProjectMetadata,
    /// Explicit hostname prefix; the instance id is used when absent.
    pub stack_prefix: Option<String>,
    pub overrides: EnvOverrides,
}

impl InstanceOptions {
    /// Read and validate options.
    ///
    /// Empty values and bare flags count as absent. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for values that cannot be written safely.
    pub fn from_args(args: &ArgumentSource) -> Result<Self> {
        for key in keys::ALL {
            if args.get(key) == Some(&ArgValue::Flag) {
                warn!("Option --{} given without a value, ignoring", key);
            }
        }

        let owned = |key: &str| args.non_empty(key).map(str::to_string);

        let options = Self {
            project: ProjectMetadata {
                name: owned(keys::NAME),
                stack_name: owned(keys::STACK_NAME),
            },
            stack_prefix: owned(keys::STACK_PREFIX),
            overrides: EnvOverrides {
                postgres_host: owned(keys::POSTGRES_HOST),
                postgres_port: owned(keys::POSTGRES_PORT),
                hook_secret_header_name: owned(keys::HOOK_SECRET_HEADER_NAME),
            },
        };

        options.validate()?;
        Ok(options)
    }

    fn validate(&self) -> Result<()> {
        if let Some(name) = self.project.name() {
            validation::validate_project_name(name)?;
        }
        if let Some(stack) = self.project.stack_name() {
            validation::validate_quotable(keys::STACK_NAME, stack)?;
        }
        if let Some(prefix) = &self.stack_prefix {
            validation::validate_stack_prefix(prefix)?;
        }
        if let Some(host) = &self.overrides.postgres_host {
            validation::validate_host(keys::POSTGRES_HOST, host)?;
        }
        if let Some(port) = &self.overrides.postgres_port {
            validation::validate_port(port)?;
        }
        if let Some(header) = &self.overrides.hook_secret_header_name {
            validation::validate_quotable(keys::HOOK_SECRET_HEADER_NAME, header)?;
        }
        Ok(())
    }
}

/// A fully rendered instance, not yet written.
pub struct Instance {
    id: InstanceId,
    name: String,
    header: String,
    env_content: Zeroizing<String>,
    services: ServiceNames,
}

impl Instance {
    /// Generate identifier and secrets, resolve hostnames, render artifacts.
    ///
    /// # Errors
    ///
    /// Returns `EntropyError` if random or key generation fails.
    pub fn generate<R, C>(options: &InstanceOptions, rng: &mut R, clock: &C) -> Result<Self>
    where
        R: RngCore + CryptoRng,
        C: Clock + ?Sized,
    {
        let id = InstanceId::generate(rng)?;
        let timestamp = format_timestamp(clock.now());
        debug!("Generated instance id {} at {}", id, timestamp);

        let prefix = options.stack_prefix.as_deref().unwrap_or(id.as_str());
        let services = ServiceNames::resolve(prefix);

        let secrets = SecretBundle::generate(rng)?;

        let header = render_header(&timestamp, &id, &options.project);
        let env_content = Zeroizing::new(render_env_file(
            &header,
            &secrets,
            &services,
            &options.overrides,
        ));
        let name = instance_name(&id, options.project.name());

        Ok(Self {
            id,
            name,
            header,
            env_content,
            services,
        })
    }

    /// Write the instance directory under `root`.
    ///
    /// # Errors
    ///
    /// Returns `MaterializeError` if the directory or a file cannot be written.
    pub fn materialize(&self, root: &Path, template: &str) -> Result<PathBuf> {
        let dir = materialize::materialize(
            root,
            &self.name,
            &self.header,
            &self.env_content,
            template,
            self.services.substitutions(),
        )?;
        info!("Materialized instance {} at {}", self.name, dir.display());
        Ok(dir)
    }

    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    /// Directory name, `di-<id>[-<project>]`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Rendered stack.env, secrets included.
    pub fn env_content(&self) -> &str {
        &self.env_content
    }

    pub fn services(&self) -> &ServiceNames {
        &self.services
    }
}
