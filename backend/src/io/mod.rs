//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic.
//!
//! Translates requests into domain commands, domain results into the DTOs
//! defined in the `shared` crate, and domain errors into structured HTTP
//! error responses.

pub mod rest;

pub use rest::*;
