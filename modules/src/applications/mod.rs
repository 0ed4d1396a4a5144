//! Various packet encoding semantics which underpin the various types of transactions.

pub mod gmp;
pub mod ics20_fungible_token_transfer;
