use crate::core::ics04_channel::acknowledgement::Acknowledgement;
use crate::core::ics04_channel::channel::{Counterparty, Order, Version};
use crate::core::ics04_channel::error::Error;
use crate::core::ics04_channel::packet::Packet;
use crate::core::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::signer::Signer;

/// Callbacks an application (or a middleware wrapping one) exposes to the core channel
/// handler. The handler invokes them after it has verified the corresponding datagram, so
/// implementations only deal with application semantics.
pub trait Module {
    #[allow(clippy::too_many_arguments)]
    fn on_chan_open_init(
        &mut self,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, Error>;

    #[allow(clippy::too_many_arguments)]
    fn on_chan_open_try(
        &mut self,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, Error>;

    fn on_chan_open_ack(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), Error>;

    fn on_chan_open_confirm(&mut self, port_id: &PortId, channel_id: &ChannelId)
        -> Result<(), Error>;

    fn on_chan_close_init(&mut self, port_id: &PortId, channel_id: &ChannelId)
        -> Result<(), Error>;

    fn on_chan_close_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), Error>;

    /// Processes an inbound packet. Failures are reported through an error acknowledgement,
    /// never through a panic, so the core handler can always write an acknowledgement.
    fn on_recv_packet(&mut self, packet: &Packet, relayer: &Signer) -> Acknowledgement;

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), Error>;

    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &Signer) -> Result<(), Error>;
}
