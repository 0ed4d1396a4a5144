use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::applications::gmp::error::Error;
use crate::signer::Signer;

/// What to do with a general message whose transfer was not sent by the authorized gateway.
///
/// Deployments disagree on this, so it has no default and must be chosen explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnauthorizedSenderPolicy {
    /// Replace the transfer's acknowledgement with an `unauthorized sender` error.
    Reject,
    /// Keep the transfer's successful acknowledgement and ignore the memo.
    PassThrough,
}

/// Settings the embedding application hands to the middleware at construction.
///
/// ```
/// # use ibc_gmp::applications::gmp::config::{GmpConfig, UnauthorizedSenderPolicy};
/// let config: GmpConfig = serde_json::from_str(
///     r#"{"authorized_sender":"axelar1gateway","unauthorized_sender_policy":"reject"}"#,
/// )
/// .unwrap();
/// assert_eq!(config.unauthorized_sender_policy, UnauthorizedSenderPolicy::Reject);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GmpConfig {
    /// Sender address the gateway uses on the counterparty chain.
    pub authorized_sender: Signer,
    pub unauthorized_sender_policy: UnauthorizedSenderPolicy,
}

impl GmpConfig {
    pub fn new(
        authorized_sender: &str,
        unauthorized_sender_policy: UnauthorizedSenderPolicy,
    ) -> Result<Self, Error> {
        let authorized_sender =
            Signer::from_str(authorized_sender).map_err(|_| Error::missing_authorized_sender())?;
        Ok(Self {
            authorized_sender,
            unauthorized_sender_policy,
        })
    }

    /// Configurations obtained through deserialization bypass [`GmpConfig::new`], so the
    /// middleware checks them again before use.
    pub fn validate(&self) -> Result<(), Error> {
        if self.authorized_sender.is_blank() {
            return Err(Error::missing_authorized_sender());
        }
        Ok(())
    }

    pub fn is_authorized(&self, sender: &str) -> bool {
        self.authorized_sender.as_str() == sender
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::{GmpConfig, UnauthorizedSenderPolicy};
    use crate::applications::gmp::error::ErrorDetail;

    #[test]
    fn blank_authorized_sender_fails_construction() {
        for sender in ["", "  "] {
            match GmpConfig::new(sender, UnauthorizedSenderPolicy::Reject) {
                Err(e) => assert!(matches!(e.detail(), ErrorDetail::MissingAuthorizedSender(_))),
                Ok(config) => panic!("accepted blank sender: {:?}", config),
            }
        }
    }

    #[test]
    fn deserialized_config_is_validated() {
        let config: GmpConfig = serde_json::from_str(
            r#"{"authorized_sender":"","unauthorized_sender_policy":"pass_through"}"#,
        )
        .unwrap();
        assert_eq!(
            config.unauthorized_sender_policy,
            UnauthorizedSenderPolicy::PassThrough
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn policy_is_required() {
        let res: Result<GmpConfig, _> =
            serde_json::from_str(r#"{"authorized_sender":"axelar1gateway"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn sender_match_is_exact() {
        let config = GmpConfig::new("axelar1gateway", UnauthorizedSenderPolicy::Reject).unwrap();
        assert!(config.is_authorized("axelar1gateway"));
        assert!(!config.is_authorized("axelar1gateway "));
        assert!(!config.is_authorized("AXELAR1GATEWAY"));
    }
}
