//! Instance identifiers and names.

use std::fmt;

use rand::{CryptoRng, RngCore};

use crate::core::constants;
use crate::error::EntropyError;

/// Short random token naming one generated instance.
///
/// Ten lowercase hex characters, about 40 bits of entropy. Collisions between
/// separate invocations are not guarded against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstanceId(String);

impl InstanceId {
    /// Draw a fresh identifier from a cryptographically secure source.
    ///
    /// # Errors
    ///
    /// Returns `EntropyError` if the source cannot produce bytes.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, EntropyError> {
        let mut bytes = [0u8; constants::IDENTIFIER_BYTES];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(hex::encode(bytes)))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
impl InstanceId {
    /// Fixed identifier for exact-output tests.
    pub(crate) fn from_static(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Directory name for an instance: `di-<id>` or `di-<id>-<project>`.
///
/// The project name is used verbatim; callers validate it first.
pub fn instance_name(id: &InstanceId, project_name: Option<&str>) -> String {
    match project_name {
        Some(project) if !project.is_empty() => {
            format!("{}-{}-{}", constants::INSTANCE_PREFIX, id, project)
        }
        _ => format!("{}-{}", constants::INSTANCE_PREFIX, id),
    }
}
