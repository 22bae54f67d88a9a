//! A small element tree for XML-RPC payloads.
//!
//! Only what the decoders need is kept: element names, child order and text.
//! Attributes are checked for well-formedness and dropped. Document type
//! declarations are refused, so no entity is ever resolved beyond the five
//! predefined ones and character references.
//!
//! The payload must be XML from its first byte; recovering from junk in
//! front of the declaration is up to the caller.

use quick_xml::events::{attributes::AttrError, BytesStart, Event};
use quick_xml::Reader;
use std::str::Utf8Error;

use crate::fault::Fault;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    Attribute(#[from] AttrError),
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
    #[error("{0}")]
    Structure(&'static str),
}

impl From<ParseError> for Fault {
    fn from(err: ParseError) -> Self {
        Fault::malformed(err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    name: String,
    children: Vec<Node>,
}

impl Element {
    fn new(name: String) -> Self {
        Element {
            name,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |element| element.name == name)
    }

    /// First child element called `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    /// Follows a chain of child names, taking the first match at every step.
    pub fn descend(&self, path: &[&str]) -> Option<&Element> {
        path.iter()
            .try_fold(self, |element, name| element.child(name))
    }

    pub fn first_element(&self) -> Option<&Element> {
        self.elements().next()
    }

    /// Concatenated text of all descendants.
    pub fn text(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(payload: &str) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(payload);
        let mut open: Vec<Element> = Vec::new();
        let mut root = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if root.is_some() && open.is_empty() {
                        return Err(ParseError::Structure("more than one root element"));
                    }
                    open.push(Element::new(element_name(&start)?));
                }
                Event::Empty(start) => {
                    let element = Element::new(element_name(&start)?);
                    close(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open
                        .pop()
                        .ok_or(ParseError::Structure("closing tag without opening tag"))?;
                    close(&mut open, &mut root, element)?;
                }
                Event::Text(text) => push_text(&mut open, text.unescape()?.into_owned())?,
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data)?.to_owned();
                    push_text(&mut open, text)?;
                }
                Event::DocType(_) => {
                    return Err(ParseError::Structure(
                        "document type declarations are not accepted",
                    ))
                }
                Event::Eof => break,
                Event::Decl(_) | Event::PI(_) | Event::Comment(_) => {}
            }
        }

        if !open.is_empty() {
            return Err(ParseError::Structure("unexpected end of document"));
        }
        root.map(|root| Document { root })
            .ok_or(ParseError::Structure("no root element"))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn element_name(start: &BytesStart<'_>) -> Result<String, ParseError> {
    for attribute in start.attributes() {
        attribute?;
    }
    Ok(std::str::from_utf8(start.name().as_ref())?.to_owned())
}

fn close(
    open: &mut Vec<Element>,
    root: &mut Option<Element>,
    mut element: Element,
) -> Result<(), ParseError> {
    // whitespace between child elements is layout, inside a leaf it is content
    if element.first_element().is_some() {
        element.children.retain(|node| match node {
            Node::Text(text) => !is_blank(text),
            Node::Element(_) => true,
        });
    }
    match open.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(ParseError::Structure("more than one root element")),
    }
    Ok(())
}

fn push_text(open: &mut Vec<Element>, text: String) -> Result<(), ParseError> {
    match open.last_mut() {
        Some(parent) => parent.children.push(Node::Text(text)),
        None if is_blank(&text) => {}
        None => return Err(ParseError::Structure("text outside of the root element")),
    }
    Ok(())
}

fn is_blank(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Element {
        Document::parse(xml).expect("well formed").root().clone()
    }

    #[test]
    fn test_tree_and_text() {
        let root = parse(
            "<?xml version=\"1.0\"?>\n<methodCall>\n  <methodName>wp.getTags</methodName>\n  <params>\n    <param><value><string>a &amp; b</string></value></param>\n    <param><value><![CDATA[<raw>]]></value></param>\n  </params>\n</methodCall>",
        );
        assert_eq!(root.name(), "methodCall");
        assert_eq!(root.first_element().map(Element::text).as_deref(), Some("wp.getTags"));

        let params: Vec<String> = root
            .child("params")
            .unwrap()
            .children_named("param")
            .map(Element::text)
            .collect();
        assert_eq!(params, vec!["a & b", "<raw>"]);
    }

    #[test]
    fn test_significant_whitespace_is_kept() {
        let tests = vec![
            ("<value><string> padded </string></value>", " padded "),
            ("<value><string>   </string></value>", "   "),
            ("<value>  </value>", "  "),
            ("<value>a <![CDATA[b]]> </value>", "a b "),
            ("<value>\n  <string>x</string>\n</value>", "x"),
            ("<struct>\n  <member><name>n</name></member>\n  <member> </member>\n</struct>", "n "),
        ];

        for (xml, text) in tests {
            assert_eq!(parse(xml).text(), text, "{:?}", xml);
        }
    }

    #[test]
    fn test_descend() {
        let root = parse("<param><value><struct><member/></struct></value></param>");
        assert_eq!(
            root.descend(&["value", "struct"]).map(Element::name),
            Some("struct")
        );
        assert!(root.descend(&["value", "array"]).is_none());
        assert!(root.descend(&[]).is_some());
    }

    #[test]
    fn test_malformed() {
        let tests = vec![
            "",
            "no xml here",
            "garbage<?xml version=\"1.0\"?><methodCall/>",
            "<?xml version=\"1.0\"?>",
            "<methodCall><methodName>x</methodCall>",
            "<methodCall>",
            "<methodCall/><methodCall/>",
            "<methodCall/>trailing",
            "<methodCall><value>&bogus;</value></methodCall>",
            "<methodCall attr=unquoted><methodName/></methodCall>",
        ];

        for xml in tests {
            assert!(Document::parse(xml).is_err(), "{:?}", xml);
        }
    }

    #[test]
    fn test_entities_are_never_declared() {
        let xml = "<?xml version=\"1.0\"?>\n<!DOCTYPE methodCall [<!ENTITY xxe SYSTEM \"file:///etc/passwd\">]>\n<methodCall><methodName>&xxe;</methodName></methodCall>";
        let err = Document::parse(xml).unwrap_err();
        assert!(err.to_string().contains("document type"), "{}", err);
    }
}
