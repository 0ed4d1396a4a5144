//! ICS 04: Channel, limited to the values exchanged between the core handler and an
//! application module: channel handshake parameters, packets and acknowledgements.

pub mod acknowledgement;
pub mod channel;
pub mod error;
pub mod packet;
