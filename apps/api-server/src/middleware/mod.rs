//! Request plumbing shared by the handlers: error mapping and client keys.

pub mod client_key;
pub mod error;
