//! ICS 26: Routing, restricted to the callback interface applications expose to the core
//! handler.

pub mod context;
