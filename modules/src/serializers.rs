//! Serde helpers for JSON payloads: byte fields that travel as base64 strings and fields
//! where an explicit `null` means the zero value.

use serde::{Deserialize, Deserializer};

/// An explicit JSON `null` decodes to `T::default()`, the same as an absent field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub mod base64_bytes {
    use crate::prelude::*;

    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use subtle_encoding::base64;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded = String::from_utf8(base64::encode(bytes)).map_err(S::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    /// Accepts standard padded base64 only. A JSON `null` decodes to an empty byte vector.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) if encoded.len() % 4 != 0 => Err(D::Error::custom(format_args!(
                "base64 string of length {} is not padded",
                encoded.len()
            ))),
            Some(encoded) => base64::decode(encoded.as_bytes()).map_err(D::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
