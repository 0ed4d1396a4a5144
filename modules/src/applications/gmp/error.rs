use crate::applications::ics20_fungible_token_transfer::error::Error as Ics20Error;
use crate::prelude::*;
use flex_error::define_error;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        MissingAuthorizedSender
            | _ | { "authorized gateway sender must be configured" },

        PacketDataDecode
            { reason: String }
            | e | { format_args!("failed to unmarshal ICS-20 transfer packet data: {}", e.reason) },

        UnauthorizedSender
            { sender: String }
            | e | { format_args!("unauthorized sender: {}", e.sender) },

        MemoDecode
            { reason: String }
            | e | { format_args!("failed to unmarshal memo: {}", e.reason) },

        MissingSourceChain
            | _ | { "source_chain field is required" },

        MissingSourceAddress
            | _ | { "source_address field is required" },

        MissingPayload
            | _ | { "payload field is required" },

        UnrecognizedMessageType
            { message_type: i64 }
            | e | { format_args!("unrecognized message type: {}", e.message_type) },

        Ics20
            [ Ics20Error ]
            | e | { format_args!("{}", e.source) },

        Handler
            { reason: String }
            | e | { format_args!("{}", e.reason) },
    }
}
