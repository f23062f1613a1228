//! Core library components.
//!
//! Identifier and secret generation, service naming, rendering and
//! materialization of a deployment instance. Randomness and time are passed
//! in, so everything except [`materialize`] is deterministic under a seeded
//! rng and a fixed clock.

pub mod args;
pub mod clock;
pub mod constants;
pub mod identifier;
pub mod instance;
pub mod materialize;
pub mod naming;
pub mod render;
pub mod secrets;
pub mod types;
pub mod validation;
