use core::fmt;

use serde::{Deserialize, Serialize};
use subtle_encoding::hex;
use tracing::debug;

use crate::applications::ics20_fungible_token_transfer::primitives::DenomTrace;
use crate::applications::ics20_fungible_token_transfer::utils::{get_source_chain, SourceChain};
use crate::core::ics04_channel::packet::Packet;
use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Denom(pub String);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedDenom(pub Vec<u8>);

impl HashedDenom {
    /// Upper case hex form, as used in `ibc/{HASH}` denominations.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.0).into_iter().map(char::from).collect()
    }
}

impl Denom {
    pub fn derive_denom(port_id: &PortId, channel_id: &ChannelId, denom: &str) -> Denom {
        Self(format!("{}/{}/{}", port_id, channel_id, denom))
    }

    /// Returns true if `denom` starts with `prefix`
    pub fn has_prefix(denom: &str, prefix: &str) -> bool {
        denom.starts_with(prefix)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// get_denom_prefix returns the receiving denomination prefix
    pub fn get_denom_prefix(port_id: &PortId, channel_id: &ChannelId) -> String {
        format!("{}/{}/", port_id, channel_id)
    }
}

/// Converts the denomination carried by an inbound transfer packet into the denomination the
/// receiving chain holds the tokens under.
///
/// If the receiving chain is the origin of the token, the voucher prefix added by the sending
/// chain is removed; what remains is either a native denomination or, for tokens that came in
/// over another channel, a trace that is hashed into its `ibc/` form. Otherwise the receiving
/// chain's own port/channel prefix is prepended and the resulting trace is hashed.
///
/// A denomination that is not longer than the voucher prefix it matches is returned unchanged.
pub fn canonical_denom(packet: &Packet, denom: &str) -> Denom {
    debug!(sequence = %packet.sequence, denom, "translating packet denomination");

    match get_source_chain(&packet.source_port, &packet.source_channel, denom) {
        SourceChain::Receiver => {
            debug!(denom, "receiving chain is the source of the token");

            // Remove prefix added by sender chain
            let voucher_prefix =
                Denom::get_denom_prefix(&packet.source_port, &packet.source_channel);
            if denom.len() <= voucher_prefix.len() {
                debug!(
                    denom,
                    prefix = %voucher_prefix,
                    "denomination is not longer than its voucher prefix, keeping it as is"
                );
                return Denom(denom.to_string());
            }
            let unprefixed_denom = &denom[voucher_prefix.len()..];

            let trace = DenomTrace::parse(unprefixed_denom);
            if trace.is_native() {
                return Denom(unprefixed_denom.to_string());
            }
            let ibc_denom = trace.ibc_denom();
            debug!(trace = %trace, denom = %ibc_denom, "resolved non-native denomination");
            ibc_denom
        }
        SourceChain::Sender => {
            debug!(denom, "receiving chain is not the source of the token");

            // NOTE: the prefix contains the trailing "/"
            let mut prefixed_denom =
                Denom::get_denom_prefix(&packet.destination_port, &packet.destination_channel);
            prefixed_denom.push_str(denom);

            let ibc_denom = DenomTrace::parse(&prefixed_denom).ibc_denom();
            debug!(trace = %prefixed_denom, denom = %ibc_denom, "prefixed denomination with destination hop");
            ibc_denom
        }
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use crate::applications::ics20_fungible_token_transfer::primitives::DenomTrace;
    use crate::core::ics04_channel::packet::Packet;
    use crate::core::ics24_host::identifier::{ChannelId, PortId};
    use crate::prelude::*;
    use crate::test_utils::get_dummy_packet;
    use test_log::test;

    use super::{canonical_denom, Denom};

    /// The packet chain B receives from chain A when A sends on `channel_a` and B's end of the
    /// channel is `channel_b`.
    fn packet_between(channel_a: u64, channel_b: u64) -> Packet {
        packet_between_ports(PortId::transfer(), channel_a, PortId::transfer(), channel_b)
    }

    fn packet_between_ports(
        port_a: PortId,
        channel_a: u64,
        port_b: PortId,
        channel_b: u64,
    ) -> Packet {
        Packet {
            source_port: port_a,
            source_channel: ChannelId::new(channel_a),
            destination_port: port_b,
            destination_channel: ChannelId::new(channel_b),
            ..get_dummy_packet(Vec::new())
        }
    }

    fn reversed(packet: &Packet) -> Packet {
        Packet {
            source_port: packet.destination_port.clone(),
            source_channel: packet.destination_channel.clone(),
            destination_port: packet.source_port.clone(),
            destination_channel: packet.source_channel.clone(),
            ..packet.clone()
        }
    }

    #[test]
    fn returning_voucher_is_unwrapped_to_native_denom() {
        // chain A (source port/channel transfer/channel-0) sends back a voucher of our uusdc
        let packet = get_dummy_packet(Vec::new());
        let denom = canonical_denom(&packet, "transfer/channel-0/uusdc");
        assert_eq!(denom, Denom("uusdc".to_string()));
    }

    #[test]
    fn returning_multi_hop_voucher_is_hashed() {
        let packet = get_dummy_packet(Vec::new());
        let denom = canonical_denom(&packet, "transfer/channel-0/transfer/channel-7/uatom");
        assert_eq!(
            denom,
            DenomTrace::parse("transfer/channel-7/uatom").ibc_denom()
        );
        assert!(denom.as_str().starts_with("ibc/"));
    }

    #[test]
    fn denom_equal_to_voucher_prefix_is_kept() {
        let packet = get_dummy_packet(Vec::new());
        assert_eq!(
            canonical_denom(&packet, "transfer/channel-0/"),
            Denom("transfer/channel-0/".to_string())
        );
    }

    #[test]
    fn foreign_denom_gets_destination_prefix_and_hash() {
        // destination end of the dummy packet is transfer/channel-1
        let packet = get_dummy_packet(Vec::new());
        let denom = canonical_denom(&packet, "uatom");
        assert_eq!(
            denom,
            DenomTrace::parse("transfer/channel-1/uatom").ibc_denom()
        );
    }

    #[test]
    fn foreign_voucher_from_other_channel_is_wrapped_again() {
        let packet = packet_between(4, 0);
        let denom = canonical_denom(&packet, "transfer/channel-9/uatom");
        assert_eq!(
            denom,
            DenomTrace::parse("transfer/channel-0/transfer/channel-9/uatom").ibc_denom()
        );
    }

    #[test]
    fn known_hash_on_receiving_chain() {
        let packet = packet_between(141, 0);
        assert_eq!(
            canonical_denom(&packet, "uatom").as_str(),
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
        );
    }

    #[test]
    fn denom_round_trip_between_two_chains() {
        let transfer = PortId::transfer();
        let gmp = PortId::from_str("gmp-port").unwrap();
        let wasm = PortId::from_str("wasm.osmo1xyz").unwrap();
        let ends = [
            (transfer.clone(), 0, transfer.clone(), 0),
            (transfer.clone(), 0, transfer.clone(), 1),
            (transfer.clone(), 12, transfer.clone(), 3),
            (transfer.clone(), 300, transfer.clone(), 7),
            (gmp.clone(), 2, transfer.clone(), 5),
            (transfer, 4, gmp.clone(), 9),
            (gmp, 1, wasm, 1),
        ];

        for (port_a, channel_a, port_b, channel_b) in ends {
            for base in ["uatom", "uusdc", "wei", "gamm/pool/1"] {
                let a_to_b =
                    packet_between_ports(port_a.clone(), channel_a, port_b.clone(), channel_b);
                let on_b = canonical_denom(&a_to_b, base);
                assert!(on_b.as_str().starts_with("ibc/"));

                // B sends the voucher back by its full trace, as ICS-20 does
                let trace_on_b = Denom::derive_denom(
                    &a_to_b.destination_port,
                    &a_to_b.destination_channel,
                    base,
                );
                assert_eq!(DenomTrace::parse(trace_on_b.as_str()).ibc_denom(), on_b);

                let back_on_a = canonical_denom(&reversed(&a_to_b), trace_on_b.as_str());
                assert_eq!(back_on_a.as_str(), base);
            }
        }
    }
}
