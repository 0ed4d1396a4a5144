use crate::prelude::*;
use flex_error::define_error;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidAmount
            { amount: String }
            | e | { format_args!("invalid transfer amount: {}", e.amount) },
    }
}
