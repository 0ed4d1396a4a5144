pub use core::prelude::v1::*;

// allow `unused_imports`, because some of the re-exports below are not used on every build
#[allow(unused_imports)]
pub use alloc::{
    borrow::ToOwned,
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

#[allow(unused_imports)]
pub use alloc::{format, vec};
