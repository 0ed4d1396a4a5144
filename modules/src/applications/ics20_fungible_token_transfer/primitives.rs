use core::fmt;

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::applications::ics20_fungible_token_transfer::error::Error;
use crate::applications::ics20_fungible_token_transfer::{Denom, HashedDenom};
use crate::core::ics24_host::identifier::ChannelId;
use crate::prelude::*;

#[derive(Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DenomTrace {
    /// path defines the chain of port/channel identifiers used for tracing the
    /// source of the fungible token.
    pub path: String,
    /// base denomination of the relayed fungible token.
    pub base_denom: String,
}

impl DenomTrace {
    /// Splits a full denomination path such as `transfer/channel-3/transfer/channel-9/uatom`
    /// into its port/channel hops and its base denomination.
    ///
    /// Only pairs whose second element is a `channel-{n}` identifier count as hops, and a lone
    /// `port/channel` pair is read as a base denomination. A base denomination may itself
    /// contain `/`, e.g. `gamm/pool/1`.
    pub fn parse(raw_denom: &str) -> Self {
        let items: Vec<&str> = raw_denom.split('/').collect();
        if items.len() == 1 {
            return Self {
                path: String::new(),
                base_denom: raw_denom.to_string(),
            };
        }

        let mut hops = Vec::new();
        let mut base_start = 0;
        while base_start + 1 < items.len()
            && items.len() > 2
            && ChannelId::is_valid_channel_id(items[base_start + 1])
        {
            hops.push(items[base_start]);
            hops.push(items[base_start + 1]);
            base_start += 2;
        }

        Self {
            path: hops.join("/"),
            base_denom: items[base_start..].join("/"),
        }
    }

    /// Returns true if the token has not left its origin chain.
    pub fn is_native(&self) -> bool {
        self.path.is_empty()
    }

    /// The `{path}/{base_denom}` form, or just the base denomination for native tokens.
    pub fn full_denom_path(&self) -> String {
        if self.is_native() {
            return self.base_denom.clone();
        }
        format!("{}/{}", self.path, self.base_denom)
    }

    /// SHA-256 of the full denomination path.
    pub fn hash(&self) -> HashedDenom {
        HashedDenom(Sha256::digest(self.full_denom_path().as_bytes()).to_vec())
    }

    /// Derive the transferred token denomination using
    /// <https://github.com/cosmos/ibc-go/blob/main/docs/architecture/adr-001-coin-source-tracing.md>
    ///
    /// Native tokens keep their base denomination, vouchers become `ibc/{HASH}` with the hash
    /// in upper case hex.
    pub fn ibc_denom(&self) -> Denom {
        if self.is_native() {
            return Denom(self.base_denom.clone());
        }
        Denom(format!("ibc/{}", self.hash().to_hex()))
    }
}

impl fmt::Display for DenomTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_denom_path())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coin {
    /// Denomination
    pub denom: Denom,
    /// Amount
    pub amount: U256,
}

impl Coin {
    pub fn new(denom: Denom, amount: U256) -> Self {
        Self { denom, amount }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom.as_str())
    }
}

/// The ICS-20 packet payload, as JSON encoded by the sending chain.
#[derive(Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FungibleTokenPacketData {
    /// Token denomination, as seen by the sending chain
    pub denom: Denom,
    /// Amount to be sent, as a decimal string
    pub amount: String,
    /// Sender account
    pub sender: String,
    /// Receiver account
    pub receiver: String,
    /// Optional free form memo
    #[serde(default)]
    pub memo: String,
}

impl FungibleTokenPacketData {
    /// Convert to json bytes
    pub fn get_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    /// Parses the decimal amount. Signs, separators and the empty string are rejected.
    pub fn parse_amount(&self) -> Result<U256, Error> {
        if self.amount.is_empty() {
            return Err(Error::invalid_amount(self.amount.clone()));
        }
        U256::from_dec_str(&self.amount).map_err(|_| Error::invalid_amount(self.amount.clone()))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use primitive_types::U256;
    use test_log::test;

    use super::{DenomTrace, FungibleTokenPacketData};

    #[test]
    fn parse_native_denom() {
        let trace = DenomTrace::parse("uatom");
        assert!(trace.is_native());
        assert_eq!(trace.base_denom, "uatom");
        assert_eq!(trace.ibc_denom().as_str(), "uatom");
    }

    #[test]
    fn parse_single_hop() {
        let trace = DenomTrace::parse("transfer/channel-0/uatom");
        assert_eq!(trace.path, "transfer/channel-0");
        assert_eq!(trace.base_denom, "uatom");
    }

    #[test]
    fn parse_multi_hop_with_slashed_base_denom() {
        let trace = DenomTrace::parse("transfer/channel-3/transfer/channel-9/gamm/pool/1");
        assert_eq!(trace.path, "transfer/channel-3/transfer/channel-9");
        assert_eq!(trace.base_denom, "gamm/pool/1");
    }

    #[test]
    fn parse_non_channel_pair_is_base_denom() {
        let trace = DenomTrace::parse("gamm/pool/1");
        assert!(trace.is_native());
        assert_eq!(trace.base_denom, "gamm/pool/1");

        // a lone port/channel pair is kept as the base denom
        let trace = DenomTrace::parse("transfer/channel-0");
        assert!(trace.is_native());
        assert_eq!(trace.base_denom, "transfer/channel-0");
    }

    #[test]
    fn ibc_denom_matches_known_hash() {
        // ATOM as received over channel-0
        let trace = DenomTrace::parse("transfer/channel-0/uatom");
        assert_eq!(
            trace.ibc_denom().as_str(),
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2"
        );
    }

    #[test]
    fn packet_data_memo_is_optional() {
        let data: FungibleTokenPacketData = serde_json::from_slice(
            br#"{"denom":"uatom","amount":"10","sender":"a","receiver":"b"}"#,
        )
        .unwrap();
        assert!(data.memo.is_empty());
        assert_eq!(data.parse_amount().unwrap(), U256::from(10u64));
    }

    #[test]
    fn malformed_amounts_are_rejected() {
        for amount in ["", "-1", "+1", "1.5", "1,000", "not-a-number"] {
            let data = FungibleTokenPacketData {
                amount: amount.to_string(),
                ..Default::default()
            };
            assert!(data.parse_amount().is_err(), "accepted {:?}", amount);
        }
    }
}
