use core::fmt::Display;

use crate::applications::ics20_fungible_token_transfer::primitives::Coin;

/// Application logic invoked for authenticated general messages.
///
/// The middleware only looks at whether a call succeeded; the display form of an error
/// becomes the cause of the error acknowledgement sent back to the source chain. State
/// written by a failing handler is not reverted by the middleware, that is left to the
/// transaction boundary the core handler runs in.
pub trait GeneralMessageHandler {
    type Error: Display;

    fn handle_general_message(
        &mut self,
        source_chain: &str,
        source_address: &str,
        dest_address: &str,
        payload: &[u8],
    ) -> Result<(), Self::Error>;

    /// `coin` is already expressed in the receiving chain's denomination.
    fn handle_general_message_with_token(
        &mut self,
        source_chain: &str,
        source_address: &str,
        dest_address: &str,
        payload: &[u8],
        coin: Coin,
    ) -> Result<(), Self::Error>;
}
