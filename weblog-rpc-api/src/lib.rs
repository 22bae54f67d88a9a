extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod medias;
pub mod pages;
pub mod posts;

/// Serializes raw bytes as a base64 string, the way they travel on the wire.
pub(crate) fn serialize_bits<S>(bits: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&base64::encode(bits))
}

pub(crate) fn deserialize_bits<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Deserialize, Error};

    let encoded = String::deserialize(deserializer)?;
    base64::decode(&encoded).map_err(D::Error::custom)
}
