//! Shared primitives for the startup explorer service.
//!
//! Holds the id type, the domain error and the pagination rules so the
//! database and HTTP crates agree on them.

pub mod error;
pub mod pagination;
pub mod types;
