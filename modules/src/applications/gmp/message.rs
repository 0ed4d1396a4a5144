use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::applications::gmp::error::Error;
use crate::prelude::*;

/// Kind of a general message, carried as the integer `type` field of the memo envelope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// Pure message, the accompanying transfer is not forwarded to the handler.
    GeneralMessage,
    /// Message that also hands the transferred coin to the handler.
    GeneralMessageWithToken,
    /// Any other value, including the zero value of a missing field.
    Unrecognized(i64),
}

impl MessageType {
    pub fn code(&self) -> i64 {
        match self {
            Self::GeneralMessage => 1,
            Self::GeneralMessageWithToken => 2,
            Self::Unrecognized(code) => *code,
        }
    }
}

impl From<i64> for MessageType {
    fn from(code: i64) -> Self {
        match code {
            1 => Self::GeneralMessage,
            2 => Self::GeneralMessageWithToken,
            other => Self::Unrecognized(other),
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneralMessage => write!(f, "GeneralMessage"),
            Self::GeneralMessageWithToken => write!(f, "GeneralMessageWithToken"),
            Self::Unrecognized(code) => write!(f, "Unrecognized({})", code),
        }
    }
}

/// The memo envelope exactly as it appears on the wire. Absent and `null` fields take their
/// zero value and are caught by validation rather than by the JSON decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGeneralMessage {
    #[serde(default, deserialize_with = "crate::serializers::null_as_default")]
    pub source_chain: String,
    #[serde(default, deserialize_with = "crate::serializers::null_as_default")]
    pub source_address: String,
    #[serde(default, with = "crate::serializers::base64_bytes")]
    pub payload: Vec<u8>,
    #[serde(
        default,
        rename = "type",
        deserialize_with = "crate::serializers::null_as_default"
    )]
    pub message_type: i64,
}

/// A general message sent by a contract on another chain, decoded from a transfer memo.
///
/// Values built through [`GeneralMessage::decode`] or [`TryFrom<RawGeneralMessage>`] have
/// passed [`GeneralMessage::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralMessage {
    source_chain: String,
    source_address: String,
    payload: Vec<u8>,
    message_type: MessageType,
}

impl GeneralMessage {
    /// Decodes a memo and validates it.
    pub fn decode(memo: &[u8]) -> Result<Self, Error> {
        let raw: RawGeneralMessage =
            serde_json::from_slice(memo).map_err(|e| Error::memo_decode(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Checks that every field is set and that the message type is one the middleware
    /// dispatches. Fields are checked in wire order and the first violation is reported.
    pub fn validate(&self) -> Result<(), Error> {
        if self.source_chain.is_empty() {
            return Err(Error::missing_source_chain());
        }
        if self.source_address.is_empty() {
            return Err(Error::missing_source_address());
        }
        if self.payload.is_empty() {
            return Err(Error::missing_payload());
        }
        if let MessageType::Unrecognized(code) = self.message_type {
            return Err(Error::unrecognized_message_type(code));
        }
        Ok(())
    }

    pub fn source_chain(&self) -> &str {
        &self.source_chain
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }
}

impl TryFrom<RawGeneralMessage> for GeneralMessage {
    type Error = Error;

    fn try_from(raw: RawGeneralMessage) -> Result<Self, Self::Error> {
        let msg = Self {
            source_chain: raw.source_chain,
            source_address: raw.source_address,
            payload: raw.payload,
            message_type: MessageType::from(raw.message_type),
        };
        msg.validate()?;
        debug!(
            source_chain = %msg.source_chain,
            source_address = %msg.source_address,
            message_type = %msg.message_type,
            "general message validated"
        );
        Ok(msg)
    }
}

impl From<GeneralMessage> for RawGeneralMessage {
    fn from(msg: GeneralMessage) -> Self {
        Self {
            source_chain: msg.source_chain,
            source_address: msg.source_address,
            payload: msg.payload,
            message_type: msg.message_type.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::applications::gmp::error::ErrorDetail;
    use crate::prelude::*;
    use test_log::test;

    use super::{GeneralMessage, MessageType, RawGeneralMessage};

    fn message(
        source_chain: &str,
        source_address: &str,
        payload: &[u8],
        code: i64,
    ) -> GeneralMessage {
        GeneralMessage {
            source_chain: source_chain.to_string(),
            source_address: source_address.to_string(),
            payload: payload.to_vec(),
            message_type: MessageType::from(code),
        }
    }

    #[test]
    fn decode_general_message() {
        let msg = GeneralMessage::decode(
            br#"{"source_chain":"ethereum","source_address":"0xAA","payload":"aGk=","type":1}"#,
        )
        .unwrap();
        assert_eq!(msg.source_chain(), "ethereum");
        assert_eq!(msg.source_address(), "0xAA");
        assert_eq!(msg.payload(), b"hi");
        assert_eq!(msg.message_type(), MessageType::GeneralMessage);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let msg = GeneralMessage::decode(
            br#"{"source_chain":"avalanche","source_address":"0xBB","payload":"AQI=","type":2,"fee":{"amount":"1"}}"#,
        )
        .unwrap();
        assert_eq!(msg.message_type(), MessageType::GeneralMessageWithToken);
        assert_eq!(msg.payload(), &[1, 2]);
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        for memo in [
            "not json",
            r#""a string""#,
            r#"{"payload":"!!"}"#,
            r#"{"payload":"aGk"}"#,
            r#"{"type":"1"}"#,
        ] {
            let err = GeneralMessage::decode(memo.as_bytes()).unwrap_err();
            assert!(
                matches!(err.detail(), ErrorDetail::MemoDecode(_)),
                "unexpected error {:?} for {:?}",
                err,
                memo
            );
        }
    }

    #[test]
    fn missing_fields_are_validation_errors() {
        let cases = [
            (
                r#"{"source_address":"0xAA","payload":"aGk=","type":1}"#,
                "source_chain field is required",
            ),
            (
                r#"{"source_chain":"ethereum","payload":"aGk=","type":1}"#,
                "source_address field is required",
            ),
            (
                r#"{"source_chain":"ethereum","source_address":"0xAA","payload":null,"type":1}"#,
                "payload field is required",
            ),
            (
                r#"{"source_chain":"ethereum","source_address":"0xAA","payload":"aGk="}"#,
                "unrecognized message type: 0",
            ),
        ];

        for (memo, expected) in cases {
            let err = GeneralMessage::decode(memo.as_bytes()).unwrap_err();
            assert_eq!(err.detail().to_string(), expected);
        }
    }

    #[test]
    fn null_fields_are_validation_errors() {
        let cases = [
            (
                r#"{"source_chain":null,"source_address":"0xAA","payload":"aGk=","type":1}"#,
                "source_chain field is required",
            ),
            (
                r#"{"source_chain":"ethereum","source_address":null,"payload":"aGk=","type":1}"#,
                "source_address field is required",
            ),
            (
                r#"{"source_chain":"ethereum","source_address":"0xAA","payload":"aGk=","type":null}"#,
                "unrecognized message type: 0",
            ),
        ];

        for (memo, expected) in cases {
            let err = GeneralMessage::decode(memo.as_bytes()).unwrap_err();
            assert_eq!(err.detail().to_string(), expected);
        }
    }

    #[test]
    fn unrecognized_type_names_the_value() {
        let err = message("ethereum", "0xAA", b"hi", 7).validate().unwrap_err();
        assert_eq!(err.detail().to_string(), "unrecognized message type: 7");
    }

    #[test]
    fn validation_is_idempotent() {
        let messages = [
            message("ethereum", "0xAA", b"hi", 1),
            message("ethereum", "0xAA", b"hi", 2),
            message("", "0xAA", b"hi", 1),
            message("ethereum", "", b"hi", 2),
            message("ethereum", "0xAA", b"", 1),
            message("ethereum", "0xAA", b"hi", -3),
            message("", "", b"", i64::MAX),
        ];

        for msg in messages {
            let first = msg.validate();
            let second = msg.validate();
            assert_eq!(first.is_ok(), second.is_ok());
            if let (Err(a), Err(b)) = (first, second) {
                assert_eq!(a.detail(), b.detail());
            }
        }
    }

    #[test]
    fn raw_message_re_encodes_payload_as_base64() {
        let raw = RawGeneralMessage::from(message("ethereum", "0xAA", b"hi", 1));
        assert_eq!(
            serde_json::to_string(&raw).unwrap(),
            r#"{"source_chain":"ethereum","source_address":"0xAA","payload":"aGk=","type":1}"#
        );
    }
}
