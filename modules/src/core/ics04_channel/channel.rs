use core::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ics24_host::identifier::{ChannelId, PortId};
use crate::prelude::*;

/// Ordering guarantee of a channel, as negotiated during the handshake.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    None = 0,
    Unordered = 1,
    Ordered = 2,
}

impl Default for Order {
    fn default() -> Self {
        Order::Unordered
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Order {
    /// Yields the Order as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "UNINITIALIZED",
            Self::Unordered => "ORDER_UNORDERED",
            Self::Ordered => "ORDER_ORDERED",
        }
    }
}

/// The port and (possibly not yet assigned) channel on the other end of a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counterparty {
    pub port_id: PortId,
    pub channel_id: Option<ChannelId>,
}

impl Counterparty {
    pub fn new(port_id: PortId, channel_id: Option<ChannelId>) -> Self {
        Self {
            port_id,
            channel_id,
        }
    }
}

/// The application version string negotiated for a channel, e.g. `ics20-1`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version(String);

impl Version {
    pub fn new(v: String) -> Self {
        Self(v)
    }

    pub fn ics20() -> Self {
        Self::new("ics20-1".to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::{Order, Version};
    use crate::prelude::*;

    #[test]
    fn order_and_version_display() {
        assert_eq!(Order::Unordered.to_string(), "ORDER_UNORDERED");
        assert_eq!(Order::default(), Order::Unordered);
        assert_eq!(Version::ics20().to_string(), "ics20-1");
    }
}
