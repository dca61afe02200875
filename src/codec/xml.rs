//! row/FL XML encoding and generic response decoding

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::codec::node::XmlNode;
use crate::error::{Error, Result};
use crate::record::RecordSet;
use crate::scope::Scope;

/// Encode a batch of records into the vendor's row/FL schema.
///
/// The root element is named after the scope. Rows are numbered 1-based
/// in input order; whatever numbering the input carries is ignored.
/// Field order within a row follows the record's own key order.
pub fn encode(scope: Scope, records: &RecordSet) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    write_event(&mut writer, Event::Start(BytesStart::new(scope.as_str())))?;
    for (index, record) in records.records().iter().enumerate() {
        let row_no = (index + 1).to_string();
        let mut row = BytesStart::new("row");
        row.push_attribute(("no", row_no.as_str()));
        write_event(&mut writer, Event::Start(row))?;

        for (name, value) in record.fields() {
            let mut field = BytesStart::new("FL");
            field.push_attribute(("val", name));
            write_event(&mut writer, Event::Start(field))?;
            write_event(&mut writer, Event::Text(BytesText::new(value)))?;
            write_event(&mut writer, Event::End(BytesEnd::new("FL")))?;
        }

        write_event(&mut writer, Event::End(BytesEnd::new("row")))?;
    }
    write_event(&mut writer, Event::End(BytesEnd::new(scope.as_str())))?;

    String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Xml(e.to_string()))
}

/// Decode a vendor XML body into a generic nested mapping.
///
/// Returns a virtual document node whose children hold the top-level
/// elements, so callers look up e.g. `decoded.child("response")`.
pub fn decode(body: &str) -> Result<XmlNode> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    // (element name, node under construction); index 0 is the document
    let mut stack: Vec<(String, XmlNode)> = vec![(String::new(), XmlNode::default())];

    loop {
        match reader.read_event().map_err(|e| Error::Xml(e.to_string()))? {
            Event::Start(start) => {
                stack.push((element_name(start.name().as_ref()), element_node(&start)?));
            }
            Event::Empty(start) => {
                let name = element_name(start.name().as_ref());
                let node = element_node(&start)?;
                push_child(&mut stack, name, node);
            }
            Event::End(_) => {
                let (name, node) = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced end tag".into()))?;
                push_child(&mut stack, name, node);
            }
            Event::Text(text) => {
                let content = text.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                append_text(&mut stack, &content);
            }
            Event::CData(data) => {
                let content = String::from_utf8_lossy(&data).into_owned();
                append_text(&mut stack, &content);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() != 1 {
        return Err(Error::Xml("unclosed element in response body".into()));
    }
    let (_, document) = stack.pop().unwrap_or_default();
    Ok(document)
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn element_node(start: &BytesStart<'_>) -> Result<XmlNode> {
    let mut node = XmlNode::default();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| Error::Xml(e.to_string()))?;
        let value = attribute
            .unescape_value()
            .map_err(|e| Error::Xml(e.to_string()))?;
        node.attributes
            .push((element_name(attribute.key.as_ref()), value.into_owned()));
    }
    Ok(node)
}

fn push_child(stack: &mut Vec<(String, XmlNode)>, name: String, node: XmlNode) {
    if let Some((_, parent)) = stack.last_mut() {
        parent.children.push((name, node));
    }
}

fn append_text(stack: &mut [(String, XmlNode)], content: &str) {
    if content.is_empty() {
        return;
    }
    if let Some((_, node)) = stack.last_mut() {
        node.text.get_or_insert_with(String::new).push_str(content);
    }
}
