//! Service hostnames.
//!
//! Hostnames are a pure function of the prefix and the service kind, so a
//! re-run with the same explicit prefix reproduces them exactly.

use serde::Serialize;

use crate::core::types::{Hostname, Placeholder};

/// Logical services in the deployment stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceKind {
    /// Database.
    Postgres,
    /// GraphQL and metadata gateway.
    Hasura,
    /// Function-execution tier.
    Hlambda,
}

impl ServiceKind {
    /// Every kind, in stack order.
    pub const ALL: [ServiceKind; 3] = [Self::Postgres, Self::Hasura, Self::Hlambda];

    /// Fixed hostname suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Hasura => "hasura",
            Self::Hlambda => "hlambda",
        }
    }

    /// Template token replaced with this service's hostname.
    pub fn placeholder(self) -> Placeholder {
        match self {
            Self::Postgres => "__CONST_SERVICE_NAME_POSTGRES",
            Self::Hasura => "__CONST_SERVICE_NAME_HASURA",
            Self::Hlambda => "__CONST_SERVICE_NAME_HLAMBDA",
        }
    }
}

/// Resolved hostnames for every service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceNames {
    pub postgres: Hostname,
    pub hasura: Hostname,
    pub hlambda: Hostname,
}

impl ServiceNames {
    /// `<prefix>-<suffix>` for each service.
    pub fn resolve(prefix: &str) -> Self {
        let host = |kind: ServiceKind| format!("{}-{}", prefix, kind.suffix());
        Self {
            postgres: host(ServiceKind::Postgres),
            hasura: host(ServiceKind::Hasura),
            hlambda: host(ServiceKind::Hlambda),
        }
    }

    /// Hostname for one kind.
    pub fn get(&self, kind: ServiceKind) -> &str {
        match kind {
            ServiceKind::Postgres => &self.postgres,
            ServiceKind::Hasura => &self.hasura,
            ServiceKind::Hlambda => &self.hlambda,
        }
    }

    /// Placeholder-to-hostname pairs for template substitution.
    pub fn substitutions(&self) -> Vec<(&str, &str)> {
        ServiceKind::ALL
            .iter()
            .map(|&kind| (kind.placeholder(), self.get(kind)))
            .collect()
    }
}
