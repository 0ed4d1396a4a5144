#![no_std]
#![allow(clippy::large_enum_variant)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

//! This library implements an IBC middleware for general message passing (GMP) over ICS-20
//! token transfers.
//!
//! The middleware wraps a fungible token transfer module. Every inbound packet is first handed
//! to the wrapped module so the standard transfer accounting runs, then the transfer memo is
//! inspected for a general message envelope sent by an authorized gateway account. Recognized
//! messages are dispatched to an application supplied [`GeneralMessageHandler`], optionally
//! together with the transferred coin expressed in the receiving chain's denomination.
//!
//! Channel handshake, acknowledgement and timeout callbacks are forwarded untouched.
//!
//! The crate is organized the same way as the IBC specification:
//!
//! + [ICS 04 Channel](core::ics04_channel): packets and acknowledgements,
//! + [ICS 20 Fungible Token Transfer](applications::ics20_fungible_token_transfer): transfer
//!   payloads and denomination tracing,
//! + [ICS 24 Host Requirements](core::ics24_host): identifiers,
//! + [ICS 26 Routing](core::ics26_routing): the module callback interface,
//! + [GMP](applications::gmp): the middleware itself.
//!
//! [`GeneralMessageHandler`]: applications::gmp::handler::GeneralMessageHandler

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod prelude;

pub mod applications;
pub mod core;
pub mod serializers;
pub mod signer;

#[cfg(any(test, feature = "mocks"))]
pub mod mock;

#[cfg(any(test, feature = "mocks"))]
pub mod test_utils;
