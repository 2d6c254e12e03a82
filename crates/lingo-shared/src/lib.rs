//! # Lingo Shared
//!
//! Wire types shared between the relay and its web front-end, plus the
//! pure text helpers both sides use.

pub mod dto;
pub mod response;
pub mod transliterate;

pub use response::ErrorResponse;
pub use transliterate::transliterate;
