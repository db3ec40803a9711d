//! # randsearch Core Library
//!
//! A small library implementing blind random-sampling search over bounded
//! integer vectors, minimizing the sum of squares of their components.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a clear separation of concerns,
//! keeping the search logic pure and testable.
//!
//! - **[`core`]: The Foundation.** Contains the stateless data model
//!   ([`core::models::candidate::Candidate`]), the pure objective function
//!   (`objective`), and the validated sampling-space definition (`sampling`).
//!
//! - **[`engine`]: The Logic Core.** This layer holds the search machinery:
//!   validated configuration, the uniform candidate sampler with an injectable
//!   random source, best-solution state tracking, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to execute a complete search run
//!   and is the entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
