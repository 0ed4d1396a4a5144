//! ICS 24: Host Requirements, restricted to the identifiers used by channels and packets.

pub mod error;
pub mod identifier;
pub mod validate;
