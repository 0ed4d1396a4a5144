use crate::applications::gmp::handler::GeneralMessageHandler;
use crate::applications::ics20_fungible_token_transfer::primitives::Coin;
use crate::prelude::*;

/// A handler invocation as recorded by [`MockGeneralMessageHandler`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerCall {
    Message {
        source_chain: String,
        source_address: String,
        dest_address: String,
        payload: Vec<u8>,
    },
    MessageWithToken {
        source_chain: String,
        source_address: String,
        dest_address: String,
        payload: Vec<u8>,
        coin: Coin,
    },
}

#[derive(Clone, Debug, Default)]
pub struct MockGeneralMessageHandler {
    pub calls: Vec<HandlerCall>,
    /// When set, every call is recorded and then fails with this reason.
    pub fail_with: Option<String>,
}

impl MockGeneralMessageHandler {
    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_with: Some(reason.to_string()),
        }
    }

    fn outcome(&self) -> Result<(), String> {
        match &self.fail_with {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}

impl GeneralMessageHandler for MockGeneralMessageHandler {
    type Error = String;

    fn handle_general_message(
        &mut self,
        source_chain: &str,
        source_address: &str,
        dest_address: &str,
        payload: &[u8],
    ) -> Result<(), Self::Error> {
        self.calls.push(HandlerCall::Message {
            source_chain: source_chain.to_string(),
            source_address: source_address.to_string(),
            dest_address: dest_address.to_string(),
            payload: payload.to_vec(),
        });
        self.outcome()
    }

    fn handle_general_message_with_token(
        &mut self,
        source_chain: &str,
        source_address: &str,
        dest_address: &str,
        payload: &[u8],
        coin: Coin,
    ) -> Result<(), Self::Error> {
        self.calls.push(HandlerCall::MessageWithToken {
            source_chain: source_chain.to_string(),
            source_address: source_address.to_string(),
            dest_address: dest_address.to_string(),
            payload: payload.to_vec(),
            coin,
        });
        self.outcome()
    }
}
