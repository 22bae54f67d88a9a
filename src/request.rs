use tracing::{debug, warn};
use weblog_rpc_api::{medias::MediaObjectValue, pages::PageValue, posts::PostValue};

use crate::config::Config;
use crate::document::{Document, Element};
use crate::fault::Fault;
use crate::methods::{Method, Slot};
use crate::value::FieldError;
use crate::{medias, pages, posts};

/// A decoded call, ready for an executor.
///
/// Only the fields the method's schema declares are `Some`; everything else
/// stays `None` so it cannot be mistaken for something the client sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RpcCommand {
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_posts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<PostValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_object: Option<MediaObjectValue>,
}

impl RpcCommand {
    fn new(method: Method) -> Self {
        RpcCommand {
            method,
            app_key: None,
            blog_id: None,
            post_id: None,
            page_id: None,
            user_name: None,
            password: None,
            number_of_posts: None,
            publish: None,
            post: None,
            page: None,
            media_object: None,
        }
    }

    fn read(&mut self, slot: Slot, param: &Element) -> Result<(), FieldError> {
        match slot {
            Slot::AppKey => self.app_key = Some(param.text()),
            Slot::BlogId => self.blog_id = Some(param.text()),
            Slot::PostId => self.post_id = Some(param.text()),
            Slot::PageId => self.page_id = Some(param.text()),
            Slot::UserName => self.user_name = Some(param.text()),
            Slot::Password => self.password = Some(param.text()),
            Slot::Post => self.post = Some(posts::decode(param)?),
            Slot::Page => self.page = Some(pages::decode(param)?),
            Slot::MediaObject => self.media_object = Some(medias::decode(param)?),
            Slot::Publish => self.publish = Some(parse_publish(&param.text())),
            Slot::Count => {
                let count = param.text().trim().parse::<i32>().map_err(|e| FieldError::Invalid {
                    field: slot.label(),
                    reason: e.to_string(),
                })?;
                self.number_of_posts = Some(count);
            }
        }
        Ok(())
    }
}

/// Anything but `0` and `false` publishes, including an empty value.
fn parse_publish(text: &str) -> bool {
    text != "0" && text != "false"
}

/// Decodes a request with the default [`Config`].
pub fn decode(payload: &[u8]) -> Result<RpcCommand, Fault> {
    decode_with(&Config::default(), payload)
}

pub fn decode_with(config: &Config, payload: &[u8]) -> Result<RpcCommand, Fault> {
    let result = decode_call(config, payload);
    match &result {
        Ok(command) => debug!("decoded {} call", command.method),
        Err(fault) => warn!("rejected XML-RPC request with fault {}: {}", fault.code(), fault),
    }
    result
}

fn decode_call(config: &Config, payload: &[u8]) -> Result<RpcCommand, Fault> {
    if payload.len() > config.max_payload_size {
        return Err(Fault::malformed(format!(
            "payload of {} bytes is over the {} bytes limit",
            payload.len(),
            config.max_payload_size
        )));
    }
    let text = std::str::from_utf8(payload).map_err(|e| Fault::malformed(e.to_string()))?;
    let document = Document::parse(skip_prolog_garbage(text)?)?;
    let call = document.root();

    let name = call.first_element().map(Element::text).unwrap_or_default();
    let method = Method::from_name(&name).ok_or_else(|| Fault::UnknownMethod(name.clone()))?;

    let params: Vec<&Element> = match call.child("params") {
        Some(params) if call.name() == "methodCall" => params.children_named("param").collect(),
        _ => Vec::new(),
    };

    let mut command = RpcCommand::new(method);
    for (index, slot) in method.schema().iter().enumerate() {
        let param = params.get(index).ok_or_else(|| Fault::MissingParameter {
            method: name.clone(),
            index,
        })?;
        command
            .read(*slot, param)
            .map_err(|e| into_fault(&name, index, e))?;
    }
    Ok(command)
}

/// Some clients put junk (a stray BOM, HTTP leftovers) before the XML
/// declaration. Anything in front of `<?xml` is dropped unless the payload
/// already starts like an XML-RPC document.
fn skip_prolog_garbage(payload: &str) -> Result<&str, Fault> {
    let payload = payload.trim_start_matches(|c: char| c == '\u{feff}' || c.is_whitespace());
    if payload.starts_with("<?xml") || payload.starts_with("<method") {
        return Ok(payload);
    }
    payload
        .find("<?xml")
        .map(|start| &payload[start..])
        .ok_or_else(|| Fault::malformed("no XML declaration found"))
}

fn into_fault(method: &str, index: usize, err: FieldError) -> Fault {
    match err {
        FieldError::Missing { kind, field } => Fault::MissingRequiredField { kind, field },
        FieldError::Invalid { field, reason } => Fault::InvalidParameter {
            method: method.to_owned(),
            index,
            reason: format!("{}: {}", field, reason),
        },
    }
}
