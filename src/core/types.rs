//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use zeroize::Zeroizing;

/// A generated secret value, wiped from memory when dropped.
pub type SecretValue = Zeroizing<String>;

/// A PEM document flattened onto one line (newlines written as `\n`).
pub type EscapedPem = Zeroizing<String>;

/// A service hostname (e.g., `p-postgres`).
pub type Hostname = String;

/// A literal placeholder token inside the orchestration template.
pub type Placeholder = &'static str;
