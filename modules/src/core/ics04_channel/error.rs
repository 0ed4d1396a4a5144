use crate::prelude::*;
use flex_error::define_error;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        AppModule
            { description: String }
            | e | {
                format_args!("application module error: {0}",
                    e.description)
            },
    }
}
