//! # Engine Module
//!
//! The search machinery: validated configuration, the uniform candidate
//! sampler, best-solution state tracking, progress reporting, and the engine
//! error type.
//!
//! The engine holds no global state. A search run is driven entirely by a
//! [`config::SearchConfig`] and an injectable random source, which keeps full
//! runs reproducible under a seeded generator.

pub mod config;
pub mod error;
pub mod progress;
pub mod sampler;
pub mod state;
