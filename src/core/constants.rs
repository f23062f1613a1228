//! Constants used throughout deploy-instance.
//!
//! Centralizes file names, defaults, labels and placeholder tokens.

/// Prefix of every instance directory name.
pub const INSTANCE_PREFIX: &str = "di";

/// Environment file written into each instance directory.
pub const ENV_FILE: &str = "stack.env";

/// Orchestration file written into each instance directory.
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

/// Default location of the orchestration template.
pub const DEFAULT_TEMPLATE: &str = "./src/docker-compose.yaml";

/// Default root under which instance directories are created.
pub const DEFAULT_OUTPUT_DIR: &str = "./deployments";

/// Random bytes behind an instance identifier (10 hex characters).
pub const IDENTIFIER_BYTES: usize = 5;

/// Random bytes behind every scalar secret (32 hex characters).
pub const SECRET_BYTES: usize = 16;

/// RSA modulus size for the JWT signing keypair.
pub const RSA_BITS: usize = 2048;

/// Width of the header separator line, including the leading `# `.
pub const HEADER_WIDTH: usize = 80;

/// Readability labels prefixed to the generated secrets.
pub const POSTGRES_PASSWORD_LABEL: &str = "PG_";
pub const HASURA_ADMIN_SECRET_LABEL: &str = "HASURA_";
pub const HOOK_SECRET_LABEL: &str = "HOOK_SECRET_";
pub const HLAMBDA_ADMIN_SECRET_LABEL: &str = "HLAMBDA_";

/// Postgres connection defaults.
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_DATABASE: &str = "postgres";
pub const DEFAULT_POSTGRES_PORT: &str = "5432";

/// Header name Hasura uses to forward the hook secret.
pub const DEFAULT_HOOK_SECRET_HEADER_NAME: &str = "x-hook-secret";

/// Service ports referenced from stack.env.
pub const HASURA_PORT: u16 = 8080;
pub const HLAMBDA_PORT: u16 = 1331;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DEPLOY_INSTANCE_LOG";
