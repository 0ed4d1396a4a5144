use core::str::FromStr;

use crate::prelude::*;

use derive_more::Display;
use flex_error::define_error;
use serde::{Deserialize, Serialize};

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    SignerError {
        EmptySigner
            | _ | { "signer cannot be empty" },
    }
}

/// An account identifier on some chain, such as the relayer submitting a packet or the sender
/// recorded in a transfer payload. No address format is enforced beyond being non-blank.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub struct Signer(String);

impl Signer {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns true if the identifier is empty or only made of whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl FromStr for Signer {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_string();
        if s.trim().is_empty() {
            return Err(SignerError::empty_signer());
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for Signer {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;
    use test_log::test;

    use super::{Signer, SignerError, SignerErrorDetail};

    #[test]
    fn blank_signer_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            match Signer::from_str(raw) {
                Err(SignerError(SignerErrorDetail::EmptySigner(_), _)) => {}
                other => panic!("expected EmptySigner for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn signer_keeps_the_raw_address() {
        let signer = Signer::from_str("axelar1dv4u5k73pzqrxlzujxg3qp8kvc3pje7jtdvu72").unwrap();
        assert_eq!(
            signer.as_str(),
            "axelar1dv4u5k73pzqrxlzujxg3qp8kvc3pje7jtdvu72"
        );
        assert!(!signer.is_blank());
    }

    #[test]
    fn deserialized_blank_signer_is_detected() {
        let signer: Signer = serde_json::from_str("\"  \"").unwrap();
        assert!(signer.is_blank());
    }
}
