use core::str::FromStr;

use crate::applications::ics20_fungible_token_transfer::primitives::FungibleTokenPacketData;
use crate::applications::ics20_fungible_token_transfer::Denom;
use crate::core::ics04_channel::packet::{Packet, Sequence};
use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::prelude::*;
use crate::signer::Signer;

/// Address of the gateway account the test middlewares are configured with.
pub const DUMMY_GATEWAY: &str = "axelar1dv4u5k73pzqrxlzujxg3qp8kvc3pje7jtdvu72";

/// Address receiving the test transfers on the local chain.
pub const DUMMY_RECEIVER: &str = "cosmos1wxeyh7zgn4tctjzs0vtqpc6p5cxq5t2muzl7ng";

// Needed in mocks.
pub fn get_dummy_account_id() -> Signer {
    Signer::from_str("0CDA3F47EF3C4906693B170EF650EB968C5F4B2C")
        .unwrap_or_else(|_| unreachable!("dummy account id is not blank"))
}

/// A packet sent by the counterparty over `transfer/channel-0` and received on
/// `transfer/channel-1`.
pub fn get_dummy_packet(data: Vec<u8>) -> Packet {
    Packet {
        sequence: Sequence::from(1),
        source_port: PortId::transfer(),
        source_channel: ChannelId::new(0),
        destination_port: PortId::transfer(),
        destination_channel: ChannelId::new(1),
        data,
    }
}

/// JSON bytes of an ICS-20 payload sent to [`DUMMY_RECEIVER`].
pub fn get_dummy_transfer_data(sender: &str, denom: &str, amount: &str, memo: &str) -> Vec<u8> {
    FungibleTokenPacketData {
        denom: Denom(denom.to_string()),
        amount: amount.to_string(),
        sender: sender.to_string(),
        receiver: DUMMY_RECEIVER.to_string(),
        memo: memo.to_string(),
    }
    .get_bytes()
}
