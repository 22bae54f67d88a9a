use std::fmt;

/// The struct a required member was missing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructKind {
    Post,
    Page,
}

impl fmt::Display for StructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructKind::Post => f.write_str("Post"),
            StructKind::Page => f.write_str("Page"),
        }
    }
}

/// Why a request could not be turned into a command.
///
/// The first fault met aborts the decode, and nothing partially decoded is
/// ever returned with it. Each variant maps to a stable code that clients
/// already know (see [`Fault::code`]).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error("Invalid XMLRPC Request. ({0})")]
    MalformedPayload(String),
    #[error("Unknown Method. ({0})")]
    UnknownMethod(String),
    #[error("Parameter {index} of {method} not sent.")]
    MissingParameter { method: String, index: usize },
    #[error("Parameter {index} of {method} is invalid: {reason}")]
    InvalidParameter {
        method: String,
        index: usize,
        reason: String,
    },
    #[error("{kind} Struct Element, {field}, not Sent.")]
    MissingRequiredField {
        kind: StructKind,
        field: &'static str,
    },
}

impl Fault {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Fault::MalformedPayload(msg.into())
    }

    /// Wire code of this fault, as sent back in the `faultCode` member.
    pub fn code(&self) -> &'static str {
        match self {
            Fault::MalformedPayload(_) => "01",
            Fault::UnknownMethod(_) => "02",
            Fault::MissingParameter { .. } => "03",
            Fault::InvalidParameter { .. } => "04",
            Fault::MissingRequiredField {
                kind: StructKind::Post,
                ..
            } => "05",
            Fault::MissingRequiredField {
                kind: StructKind::Page,
                ..
            } => "06",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let tests = vec![
            (Fault::malformed("eof"), "01"),
            (Fault::UnknownMethod("x.y".to_owned()), "02"),
            (
                Fault::MissingParameter {
                    method: "wp.getPage".to_owned(),
                    index: 3,
                },
                "03",
            ),
            (
                Fault::InvalidParameter {
                    method: "metaWeblog.getRecentPosts".to_owned(),
                    index: 3,
                    reason: "not a number".to_owned(),
                },
                "04",
            ),
            (
                Fault::MissingRequiredField {
                    kind: StructKind::Post,
                    field: "title",
                },
                "05",
            ),
            (
                Fault::MissingRequiredField {
                    kind: StructKind::Page,
                    field: "description",
                },
                "06",
            ),
        ];

        for (fault, code) in tests {
            assert_eq!(fault.code(), code, "{}", fault);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Fault::UnknownMethod("blogger.nope".to_owned()).to_string(),
            "Unknown Method. (blogger.nope)"
        );
        assert_eq!(
            Fault::MissingRequiredField {
                kind: StructKind::Page,
                field: "title"
            }
            .to_string(),
            "Page Struct Element, title, not Sent."
        );
    }
}
