//! ICS 20: Fungible Token Transfer, restricted to what a middleware sitting on top of the
//! transfer module needs: the packet payload, denomination tracing and acknowledgements.

pub mod acknowledgement;
pub mod denom;
pub mod error;
pub mod primitives;
pub mod utils;

pub use denom::{canonical_denom, Denom, HashedDenom};
