/// Sent as `type` when the client did not give one.
pub const MIME_TYPE_NOT_SENT: &str = "notsent";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaObjectValue {
    pub name: String,
    pub mime_type: String,
    #[serde(
        serialize_with = "crate::serialize_bits",
        deserialize_with = "crate::deserialize_bits"
    )]
    pub bits: Vec<u8>,
}

impl MediaObjectValue {
    /// Whether the client actually told us what kind of file this is.
    pub fn has_mime_type(&self) -> bool {
        self.mime_type != MIME_TYPE_NOT_SENT
    }
}

impl Default for MediaObjectValue {
    fn default() -> Self {
        MediaObjectValue {
            name: String::new(),
            mime_type: MIME_TYPE_NOT_SENT.to_owned(),
            bits: Vec::new(),
        }
    }
}
