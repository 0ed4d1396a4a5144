use crate::applications::ics20_fungible_token_transfer::Denom;
use crate::core::ics24_host::identifier::{ChannelId, PortId};

/// Which end of a transfer is the monetary origin of the token being moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceChain {
    Sender,
    Receiver,
}

/// A token travelling over `source_port`/`source_channel` originates from the receiving chain
/// iff the sending chain prefixed it with that same port and channel when it first received it.
pub fn get_source_chain(
    source_port: &PortId,
    source_channel: &ChannelId,
    denom: &str,
) -> SourceChain {
    let voucher_prefix = Denom::get_denom_prefix(source_port, source_channel);
    if Denom::has_prefix(denom, voucher_prefix.as_str()) {
        SourceChain::Receiver
    } else {
        SourceChain::Sender
    }
}
