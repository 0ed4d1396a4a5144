//! General message passing (GMP) over ICS-20.
//!
//! A gateway account on a remote chain sends an ordinary ICS-20 transfer whose memo holds a
//! JSON envelope describing a cross-chain message. [`middleware::GmpMiddleware`] sits between
//! the core channel handler and the transfer module: it lets the transfer module process the
//! packet first, then authenticates the sender, decodes the envelope with
//! [`message::GeneralMessage`] and hands it to the application's
//! [`handler::GeneralMessageHandler`].

pub mod config;
pub mod error;
pub mod handler;
pub mod message;
pub mod middleware;
