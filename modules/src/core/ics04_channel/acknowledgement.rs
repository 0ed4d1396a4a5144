use core::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::ics04_channel::error::Error;
use crate::prelude::*;

/// The value returned to the core handler after an application processed an inbound packet.
///
/// Encodes to the standard channel acknowledgement envelope: `{"result":"<base64>"}` on
/// success and `{"error":"<cause>"}` on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acknowledgement {
    /// Opaque result bytes produced by the application.
    #[serde(rename = "result", with = "crate::serializers::base64_bytes")]
    Success(Vec<u8>),
    /// Human readable cause of the failure.
    #[serde(rename = "error")]
    Error(String),
}

impl Acknowledgement {
    pub fn success(result: Vec<u8>) -> Self {
        Self::Success(result)
    }

    /// Builds an error acknowledgement carrying the display form of `err` as cause.
    pub fn from_error(err: impl Display) -> Self {
        Self::Error(err.to_string())
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// JSON bytes written to the store and relayed back to the sending chain.
    pub fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(bytes).map_err(|e| Error::app_module(e.to_string()))
    }
}
