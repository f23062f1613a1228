//! Header and stack.env rendering.
//!
//! Values are inserted between double quotes as-is. Secrets are hex and the
//! PEM keys are already flattened, so only operator-supplied text could break
//! the quoting; [`crate::core::validation`] rejects that before rendering.

use crate::core::constants;
use crate::core::identifier::InstanceId;
use crate::core::naming::ServiceNames;
use crate::core::secrets::SecretBundle;

/// Descriptive project fields. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: Option<String>,
    pub stack_name: Option<String>,
}

impl ProjectMetadata {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn stack_name(&self) -> Option<&str> {
        self.stack_name.as_deref().filter(|s| !s.is_empty())
    }
}

/// Operator overrides for connection details in stack.env.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// Postgres host; defaults to the Postgres service hostname.
    pub postgres_host: Option<String>,
    /// Postgres port; defaults to 5432.
    pub postgres_port: Option<String>,
    /// Header carrying the hook secret; defaults to `x-hook-secret`.
    pub hook_secret_header_name: Option<String>,
}

/// Banner shared by stack.env and docker-compose.yaml.
///
/// ```text
/// # Auto Generated on 2024-01-04 12:00:00 | ID: abc1234567
/// # Project name: "Demo"
/// # ------------------------------------------------------------------------------
/// ```
pub fn render_header(timestamp: &str, id: &InstanceId, project: &ProjectMetadata) -> String {
    let mut header = format!("# Auto Generated on {} | ID: {}\n", timestamp, id);

    if let Some(name) = project.name() {
        header.push_str(&format!("# Project name: \"{}\"\n", name));
    }
    if let Some(stack) = project.stack_name() {
        header.push_str(&format!("# Project stack: \"{}\"\n", stack));
    }

    header.push_str(&format!("# {}\n", "-".repeat(constants::HEADER_WIDTH - 2)));
    header
}

/// Render stack.env: the header followed by the per-service assignments.
pub fn render_env_file(
    header: &str,
    secrets: &SecretBundle,
    names: &ServiceNames,
    overrides: &EnvOverrides,
) -> String {
    let postgres_host = overrides
        .postgres_host
        .as_deref()
        .unwrap_or(names.postgres.as_str());
    let postgres_port = overrides
        .postgres_port
        .as_deref()
        .unwrap_or(constants::DEFAULT_POSTGRES_PORT);
    let hook_header = overrides
        .hook_secret_header_name
        .as_deref()
        .unwrap_or(constants::DEFAULT_HOOK_SECRET_HEADER_NAME);

    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        constants::POSTGRES_USER,
        secrets.postgres_password(),
        postgres_host,
        postgres_port,
        constants::POSTGRES_DATABASE
    );

    let mut out = String::with_capacity(header.len() + 4096);
    out.push_str(header);

    out.push_str("\n# Postgres service\n");
    push_var(&mut out, "POSTGRES_PASSWORD", secrets.postgres_password());

    out.push_str("\n# Hasura service\n");
    push_var(&mut out, "HASURA_GRAPHQL_METADATA_DATABASE_URL", &database_url);
    push_var(&mut out, "HASURA_GRAPHQL_DATABASE_URL", &database_url);
    push_var(
        &mut out,
        "HASURA_GRAPHQL_ADMIN_SECRET",
        secrets.hasura_admin_secret(),
    );
    // JSON value, so single quotes outside.
    out.push_str(&format!(
        "HASURA_GRAPHQL_JWT_SECRET='{{\"claims_namespace_path\":\"$\", \"type\":\"RS256\", \"key\": \"{}\"}}'\n",
        secrets.public_pem()
    ));
    push_var(
        &mut out,
        "ACTION_BASE_URL",
        &format!("http://{}:{}", names.hlambda, constants::HLAMBDA_PORT),
    );
    push_var(&mut out, "HOOK_SECRET", secrets.hook_secret());
    push_var(&mut out, "HOOK_SECRET_HEADER_NAME", hook_header);

    out.push_str("\n# Hlambda service\n");
    push_var(
        &mut out,
        "HLAMBDA_ADMIN_SECRET",
        secrets.hlambda_admin_secret(),
    );
    push_var(
        &mut out,
        "HASURA_GRAPHQL_API_ENDPOINT",
        &format!("http://{}:{}/v1/graphql", names.hasura, constants::HASURA_PORT),
    );
    push_var(&mut out, "HLAMBDA_JWT_PRIVATE_KEY", secrets.private_pem());
    out.push('\n');

    out
}

fn push_var(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("{}=\"{}\"\n", key, value));
}
