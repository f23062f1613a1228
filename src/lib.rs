//! deploy-instance - bootstrap secrets and configuration for a deployment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # clap definition and dispatch
//! │   ├── create        # Generate and write one instance
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── args          # Loose --key value argument source
//!     ├── identifier    # Instance ids and directory names
//!     ├── secrets       # Hex secrets and the RSA keypair
//!     ├── naming        # Service hostnames and template placeholders
//!     ├── render        # Header and stack.env rendering
//!     ├── materialize   # Template substitution and file writes
//!     ├── instance      # Generation pipeline
//!     ├── validation    # Option validation
//!     └── clock         # Injectable time source
//! ```
//!
//! # Output
//!
//! Each run creates `<output>/di-<id>[-<name>]/` holding `stack.env` and a
//! `docker-compose.yaml` copy of the template with service placeholders
//! replaced, both starting with the same generated header.

pub mod cli;
pub mod core;
pub mod error;
