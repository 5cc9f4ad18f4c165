//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate input, delegate to the matching repository in
//! `explorer_db` and map errors via [`AppError`](crate::error::AppError).

pub mod startup;
