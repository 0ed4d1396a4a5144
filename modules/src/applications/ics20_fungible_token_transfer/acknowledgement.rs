use alloc::vec;

use crate::core::ics04_channel::acknowledgement::Acknowledgement;

/// Result bytes of a successful ICS-20 receive.
pub const ACK_SUCCESS_RESULT: u8 = 0x01;

/// Ics20 Acknowledgement. Failed receives are reported through
/// [`Acknowledgement::from_error`] directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ICS20Acknowledgement {
    /// Equivalent to b"AQ=="
    Success,
}

impl From<ICS20Acknowledgement> for Acknowledgement {
    fn from(ack: ICS20Acknowledgement) -> Self {
        match ack {
            ICS20Acknowledgement::Success => Acknowledgement::Success(vec![ACK_SUCCESS_RESULT]),
        }
    }
}
