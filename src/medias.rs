use weblog_rpc_api::medias::{MediaObjectValue, MIME_TYPE_NOT_SENT};
use weblog_rpc_common::utils::decode_bits;

use crate::document::Element;
use crate::value::{FieldError, StructValue};

/// Reads the media struct of `metaWeblog.newMediaObject`.
///
/// Nothing is required here: a media object without bits is an empty file.
pub fn decode(param: &Element) -> Result<MediaObjectValue, FieldError> {
    let value = StructValue::from_param(param);
    let bits = value.get_optional("bits", "");

    Ok(MediaObjectValue {
        name: value.get_optional("name", ""),
        mime_type: value.get_optional("type", MIME_TYPE_NOT_SENT),
        bits: decode_bits(&bits).map_err(|e| FieldError::Invalid {
            field: "bits",
            reason: e.to_string(),
        })?,
    })
}
