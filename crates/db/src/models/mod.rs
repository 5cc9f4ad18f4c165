//! Row structs and request DTOs.

pub mod startup;
