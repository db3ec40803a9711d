//! # Core Module
//!
//! Fundamental building blocks for the random search: the candidate data
//! model, the pure objective function, and the sampling-space definition.
//!
//! Everything in this module is stateless and free of randomness; the search
//! machinery that consumes these types lives in [`crate::engine`].

pub mod models;
pub mod objective;
pub mod sampling;
