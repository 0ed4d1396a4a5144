//! The IBC core pieces a middleware depends on.
//!
//! During packet transfers we call "chain A" the chain that runs `SendPacket` and
//! "chain B" the chain that runs `RecvPacket`. The middleware in this crate always runs on
//! chain B.

pub mod ics04_channel;
pub mod ics24_host;
pub mod ics26_routing;
