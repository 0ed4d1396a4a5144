use tracing::{debug, info, warn};

use crate::applications::gmp::config::{GmpConfig, UnauthorizedSenderPolicy};
use crate::applications::gmp::error::Error;
use crate::applications::gmp::handler::GeneralMessageHandler;
use crate::applications::gmp::message::{GeneralMessage, MessageType};
use crate::applications::ics20_fungible_token_transfer::canonical_denom;
use crate::applications::ics20_fungible_token_transfer::primitives::{
    Coin, FungibleTokenPacketData,
};
use crate::core::ics04_channel::acknowledgement::Acknowledgement;
use crate::core::ics04_channel::channel::{Counterparty, Order, Version};
use crate::core::ics04_channel::error::Error as ChannelError;
use crate::core::ics04_channel::packet::Packet;
use crate::core::ics24_host::identifier::{ChannelId, ConnectionId, PortId};
use crate::core::ics26_routing::context::Module;
use crate::prelude::*;
use crate::signer::Signer;

/// Wraps a transfer module `M` and routes general messages found in inbound transfer memos to
/// the handler `H`. Every callback other than `on_recv_packet` is forwarded to `M` untouched.
///
/// The middleware never rolls back what `M` did for a packet. When a general message fails
/// after the transfer succeeded, the error acknowledgement is all that is reported; whether
/// the transfer's own effects are reverted depends on how the core handler commits the
/// packet's state transition.
#[derive(Clone, Debug)]
pub struct GmpMiddleware<M, H> {
    app: M,
    handler: H,
    config: GmpConfig,
}

impl<M, H> GmpMiddleware<M, H>
where
    M: Module,
    H: GeneralMessageHandler,
{
    /// Fails if the configuration has no authorized sender.
    pub fn new(app: M, handler: H, config: GmpConfig) -> Result<Self, Error> {
        config.validate()?;
        info!(
            authorized_sender = %config.authorized_sender,
            policy = ?config.unauthorized_sender_policy,
            "initializing general message middleware"
        );
        Ok(Self {
            app,
            handler,
            config,
        })
    }

    pub fn app(&self) -> &M {
        &self.app
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn config(&self) -> &GmpConfig {
        &self.config
    }

    /// Inspects the transfer carried by `packet` once the wrapped module accepted it.
    /// `Ok` means the base acknowledgement stands.
    fn process_general_message(&mut self, packet: &Packet) -> Result<(), Error> {
        let data: FungibleTokenPacketData = serde_json::from_slice(&packet.data)
            .map_err(|e| Error::packet_data_decode(e.to_string()))?;

        if data.memo.is_empty() {
            debug!(sequence = %packet.sequence, "no memo, plain token transfer");
            return Ok(());
        }

        if !self.config.is_authorized(&data.sender) {
            warn!(
                sequence = %packet.sequence,
                sender = %data.sender,
                policy = ?self.config.unauthorized_sender_policy,
                "memo from unauthorized sender"
            );
            return match self.config.unauthorized_sender_policy {
                UnauthorizedSenderPolicy::Reject => Err(Error::unauthorized_sender(data.sender)),
                UnauthorizedSenderPolicy::PassThrough => Ok(()),
            };
        }

        let msg = GeneralMessage::decode(data.memo.as_bytes())?;
        debug!(
            sequence = %packet.sequence,
            message_type = %msg.message_type(),
            source_chain = msg.source_chain(),
            "dispatching general message"
        );

        let result = match msg.message_type() {
            MessageType::GeneralMessage => self.handler.handle_general_message(
                msg.source_chain(),
                msg.source_address(),
                &data.receiver,
                msg.payload(),
            ),
            MessageType::GeneralMessageWithToken => {
                let amount = data.parse_amount().map_err(Error::ics20)?;
                let denom = canonical_denom(packet, data.denom.as_str());
                let coin = Coin::new(denom, amount);
                debug!(sequence = %packet.sequence, coin = %coin, "general message carries tokens");

                self.handler.handle_general_message_with_token(
                    msg.source_chain(),
                    msg.source_address(),
                    &data.receiver,
                    msg.payload(),
                    coin,
                )
            }
            MessageType::Unrecognized(code) => return Err(Error::unrecognized_message_type(code)),
        };

        result.map_err(|e| Error::handler(e.to_string()))
    }
}

impl<M, H> Module for GmpMiddleware<M, H>
where
    M: Module,
    H: GeneralMessageHandler,
{
    fn on_chan_open_init(
        &mut self,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        version: &Version,
    ) -> Result<Version, ChannelError> {
        debug!(%port_id, %channel_id, "on_chan_open_init");
        self.app.on_chan_open_init(
            order,
            connection_hops,
            port_id,
            channel_id,
            counterparty,
            version,
        )
    }

    fn on_chan_open_try(
        &mut self,
        order: Order,
        connection_hops: &[ConnectionId],
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty: &Counterparty,
        counterparty_version: &Version,
    ) -> Result<Version, ChannelError> {
        debug!(%port_id, %channel_id, "on_chan_open_try");
        self.app.on_chan_open_try(
            order,
            connection_hops,
            port_id,
            channel_id,
            counterparty,
            counterparty_version,
        )
    }

    fn on_chan_open_ack(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
        counterparty_channel_id: &ChannelId,
        counterparty_version: &Version,
    ) -> Result<(), ChannelError> {
        debug!(%port_id, %channel_id, "on_chan_open_ack");
        self.app.on_chan_open_ack(
            port_id,
            channel_id,
            counterparty_channel_id,
            counterparty_version,
        )
    }

    fn on_chan_open_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        debug!(%port_id, %channel_id, "on_chan_open_confirm");
        self.app.on_chan_open_confirm(port_id, channel_id)
    }

    fn on_chan_close_init(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        debug!(%port_id, %channel_id, "on_chan_close_init");
        self.app.on_chan_close_init(port_id, channel_id)
    }

    fn on_chan_close_confirm(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), ChannelError> {
        debug!(%port_id, %channel_id, "on_chan_close_confirm");
        self.app.on_chan_close_confirm(port_id, channel_id)
    }

    fn on_recv_packet(&mut self, packet: &Packet, relayer: &Signer) -> Acknowledgement {
        debug!(sequence = %packet.sequence, %relayer, "on_recv_packet");

        let ack = self.app.on_recv_packet(packet, relayer);
        if !ack.is_successful() {
            warn!(sequence = %packet.sequence, ?ack, "transfer module rejected packet");
            return ack;
        }

        match self.process_general_message(packet) {
            Ok(()) => {
                info!(sequence = %packet.sequence, "packet processed");
                ack
            }
            Err(e) => {
                warn!(sequence = %packet.sequence, error = %e.detail(), "general message failed");
                Acknowledgement::from_error(e.detail())
            }
        }
    }

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<(), ChannelError> {
        debug!(sequence = %packet.sequence, "on_acknowledgement_packet");
        self.app
            .on_acknowledgement_packet(packet, acknowledgement, relayer)
    }

    fn on_timeout_packet(&mut self, packet: &Packet, relayer: &Signer) -> Result<(), ChannelError> {
        debug!(sequence = %packet.sequence, "on_timeout_packet");
        self.app.on_timeout_packet(packet, relayer)
    }
}
