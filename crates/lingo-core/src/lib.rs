//! # Lingo Core
//!
//! The domain layer of the translation relay.
//! This crate holds the request/result types and the ports the server talks
//! through, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
