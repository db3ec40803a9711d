//! # Workflows Module
//!
//! The public entry points of the library. A workflow wires the engine pieces
//! together (sampler, objective, best tracking, progress reporting) and runs
//! a complete search from a validated configuration.

pub mod search;
