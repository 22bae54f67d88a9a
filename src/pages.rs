use weblog_rpc_api::pages::PageValue;

use crate::document::Element;
use crate::fault::StructKind;
use crate::value::{FieldError, StructValue};

/// Reads the page struct of `wp.newPage` / `wp.editPage`.
pub fn decode(param: &Element) -> Result<PageValue, FieldError> {
    let value = StructValue::from_param(param);

    Ok(PageValue {
        title: value.get_required(StructKind::Page, "title")?,
        description: value.get_required(StructKind::Page, "description")?,
        link: value.get("link"),
        page_date: value.get_date("dateCreated"),
        keywords: value.get_optional("mt_keywords", ""),
        page_parent_id: value.get("wp_page_parent_id"),
    })
}
