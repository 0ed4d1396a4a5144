use core::fmt;

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::prelude::*;

/// The sequence number of a packet enforces ordering among packets from the same source.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
pub struct Sequence(u64);

/// An inbound packet as delivered by the core channel handler after proof verification.
#[derive(Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    #[serde(with = "crate::serializers::base64_bytes")]
    pub data: Vec<u8>,
}

struct PacketData<'a>(&'a [u8]);

impl<'a> fmt::Debug for PacketData<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(formatter, "{:?}", self.0)
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        // Remember: if you alter the definition of `Packet`,
        // 1. update the formatter debug struct builder calls (return object of
        //    this function)
        // 2. update this destructuring assignment accordingly
        let Packet {
            sequence: _,
            source_port: _,
            source_channel: _,
            destination_port: _,
            destination_channel: _,
            data,
        } = self;
        let data_wrapper = PacketData(data);

        f.debug_struct("Packet")
            .field("sequence", &self.sequence)
            .field("source_port", &self.source_port)
            .field("source_channel", &self.source_channel)
            .field("destination_port", &self.destination_port)
            .field("destination_channel", &self.destination_channel)
            .field("data", &data_wrapper)
            .finish()
    }
}

impl fmt::Display for Packet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            formatter,
            "seq:{}, path:{}/{}->{}/{}",
            self.sequence,
            self.source_channel,
            self.source_port,
            self.destination_channel,
            self.destination_port
        )
    }
}
