//! Field access on XML-RPC `<struct>` parameters.

use chrono::{DateTime, Utc};
use tracing::debug;
use weblog_rpc_common::utils::parse_compact_date;

use crate::document::Element;
use crate::fault::StructKind;

/// A struct member that could not be read.
///
/// The request decoder turns this into a [`crate::Fault`] once it knows which
/// method and parameter the struct came from.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{kind} Struct Element, {field}, not Sent.")]
    Missing {
        kind: StructKind,
        field: &'static str,
    },
    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// The members of a `<param><value><struct>` node.
///
/// A parameter that holds no struct at all behaves like an empty struct:
/// every member is absent.
#[derive(Clone, Copy, Debug)]
pub struct StructValue<'a> {
    node: Option<&'a Element>,
}

impl<'a> StructValue<'a> {
    pub fn from_param(param: &'a Element) -> Self {
        StructValue {
            node: param.descend(&["value", "struct"]),
        }
    }

    /// The `<value>` of the first member called `name`.
    pub fn member(&self, name: &str) -> Option<&'a Element> {
        self.node?
            .children_named("member")
            .find(|member| {
                member
                    .child("name")
                    .map_or(false, |member_name| member_name.text() == name)
            })
            .and_then(|member| member.child("value"))
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.member(name).map(Element::text)
    }

    pub fn get_required(&self, kind: StructKind, field: &'static str) -> Result<String, FieldError> {
        self.get(field).ok_or(FieldError::Missing { kind, field })
    }

    pub fn get_optional(&self, field: &str, default: &str) -> String {
        self.get(field).unwrap_or_else(|| default.to_owned())
    }

    /// A timestamp member. Absent and unreadable dates both give `None`: a bad
    /// date never stops the rest of the struct from being used.
    pub fn get_date(&self, field: &str) -> Option<DateTime<Utc>> {
        let text = self.get(field)?;
        let date = parse_compact_date(&text);
        if date.is_none() {
            debug!("ignoring unreadable {}: {:?}", field, text);
        }
        date
    }

    /// Texts of the values in an array member, in order. An absent member or
    /// one that is not an array gives an empty list.
    pub fn get_array(&self, field: &str) -> Vec<String> {
        self.member(field)
            .and_then(|value| value.descend(&["array", "data"]))
            .map(|data| data.children_named("value").map(Element::text).collect())
            .unwrap_or_default()
    }
}
