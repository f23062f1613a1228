//! Error types for deploy-instance.
//!
//! Every failure is fatal: the binary reports it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Random or key generation failures.
#[derive(Error, Debug)]
pub enum EntropyError {
    #[error("random source unavailable: {0}")]
    RandomUnavailable(#[from] rand::Error),

    #[error("rsa key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),

    #[error("failed to encode private key: {0}")]
    PrivateKeyEncoding(#[from] rsa::pkcs8::Error),

    #[error("failed to encode public key: {0}")]
    PublicKeyEncoding(#[from] rsa::pkcs8::spki::Error),
}

/// Orchestration template failures.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read template {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while writing the instance directory.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid invocation arguments.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid {option} {value:?}: {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
