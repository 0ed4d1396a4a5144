use crate::applications::ics20_fungible_token_transfer::acknowledgement::ICS20Acknowledgement;
use crate::core::ics04_channel::acknowledgement::Acknowledgement;
use crate::core::ics04_channel::channel::{Counterparty, Order, Version};
use crate::core::ics04_channel::error::Error;
use crate::core::ics04_channel::packet::Packet;
use crate::core::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::core::ics26_routing::context::Module;
use crate::prelude::*;
use crate::signer::Signer;

/// A stand-in for the ICS-20 transfer module. It returns a fixed acknowledgement for every
/// inbound packet and records which callbacks were invoked.
#[derive(Clone, Debug)]
pub struct MockTransferModule {
    /// Acknowledgement returned by `on_recv_packet`.
    pub ack: Acknowledgement,
    /// When set, every lifecycle callback fails with this description.
    pub fail_with: Option<String>,
    /// Packets seen by `on_recv_packet`, in order.
    pub received: Vec<Packet>,
    /// Names of the callbacks invoked, in order.
    pub calls: Vec<&'static str>,
}

impl Default for MockTransferModule {
    fn default() -> Self {
        Self::with_ack(ICS20Acknowledgement::Success.into())
    }
}

impl MockTransferModule {
    pub fn with_ack(ack: Acknowledgement) -> Self {
        Self {
            ack,
            fail_with: None,
            received: Vec::new(),
            calls: Vec::new(),
        }
    }

    pub fn failing(description: &str) -> Self {
        Self {
            fail_with: Some(description.to_string()),
            ..Self::default()
        }
    }

    fn record(&mut self, callback: &'static str) -> Result<(), Error> {
        self.calls.push(callback);
        match &self.fail_with {
            Some(description) => Err(Error::app_module(description.clone())),
            None => Ok(()),
        }
    }
}

impl Module for MockTransferModule {
    fn on_chan_open_init(
        &mut self,
        _order: Order,
        _connection_hops: &[ConnectionId],
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, Error> {
        self.record("on_chan_open_init")?;
        Ok(version.clone())
    }

    fn on_chan_open_try(
        &mut self,
        _order: Order,
        _connection_hops: &[ConnectionId],
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _counterparty: &Counterparty,
        _counterparty_version: &Version,
    ) -> Result<Version, Error> {
        self.record("on_chan_open_try")?;
        Ok(Version::ics20())
    }

    fn on_chan_open_ack(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
        _counterparty_channel_id: &ChannelId,
        _counterparty_version: &Version,
    ) -> Result<(), Error> {
        self.record("on_chan_open_ack")
    }

    fn on_chan_open_confirm(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), Error> {
        self.record("on_chan_open_confirm")
    }

    fn on_chan_close_init(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), Error> {
        self.record("on_chan_close_init")
    }

    fn on_chan_close_confirm(
        &mut self,
        _port_id: &PortId,
        _channel_id: &ChannelId,
    ) -> Result<(), Error> {
        self.record("on_chan_close_confirm")
    }

    fn on_recv_packet(&mut self, packet: &Packet, _relayer: &Signer) -> Acknowledgement {
        self.calls.push("on_recv_packet");
        self.received.push(packet.clone());
        self.ack.clone()
    }

    fn on_acknowledgement_packet(
        &mut self,
        _packet: &Packet,
        _acknowledgement: &Acknowledgement,
        _relayer: &Signer,
    ) -> Result<(), Error> {
        self.record("on_acknowledgement_packet")
    }

    fn on_timeout_packet(&mut self, _packet: &Packet, _relayer: &Signer) -> Result<(), Error> {
        self.record("on_timeout_packet")
    }
}
