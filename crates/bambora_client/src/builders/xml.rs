//! XML request bodies for the `/scripts` reporting endpoints.
//!
//! The gateway wraps every report query under a single `<request>` element
//! with camelCase tag names. Arrays serialize as repeated sibling elements
//! and nested mappings as nested elements.

use quick_xml::{
    events::{BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use serde_json::{Map, Value};

use crate::{
    consts::XML_DECLARATION,
    errors::{ClientError, CustomResult},
    transform::to_camel_key,
};

const ROOT_TAG: &str = "request";

/// Builds an XML body from a mapping.
///
/// Document mode prepends the XML declaration; fragment mode emits only
/// the inner `<request>` element for callers embedding it elsewhere.
#[derive(Debug, Clone)]
pub struct XmlRequestBody {
    body: Map<String, Value>,
    declaration: bool,
}

impl XmlRequestBody {
    /// A full document body, declaration included.
    pub fn document(body: Map<String, Value>) -> Self {
        Self {
            body,
            declaration: true,
        }
    }

    /// A bare `<request>` fragment without the declaration.
    pub fn fragment(body: Map<String, Value>) -> Self {
        Self {
            body,
            declaration: false,
        }
    }

    /// Merges a response format into the mapping under `rpt_format` before
    /// serializing.
    pub fn response_format(mut self, format: impl Into<String>) -> Self {
        self.body
            .insert("rpt_format".to_string(), Value::String(format.into()));
        self
    }

    pub fn build(&self) -> CustomResult<String, ClientError> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, ROOT_TAG, &Value::Object(self.body.clone()))?;
        let inner = String::from_utf8(writer.into_inner())
            .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))?;

        Ok(if self.declaration {
            format!("{XML_DECLARATION}{inner}")
        } else {
            inner
        })
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    tag: &str,
    value: &Value,
) -> CustomResult<(), ClientError> {
    match value {
        // Arrays repeat the parent tag once per item, Gyoku-style.
        Value::Array(items) => {
            for item in items {
                write_element(writer, tag, item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            write_event(writer, Event::Start(BytesStart::new(tag)))?;
            for (key, value) in map {
                write_element(writer, &to_camel_key(key), value)?;
            }
            write_event(writer, Event::End(BytesEnd::new(tag)))
        }
        scalar => {
            let text = scalar_text(scalar);
            write_event(writer, Event::Start(BytesStart::new(tag)))?;
            write_event(writer, Event::Text(BytesText::new(&text)))?;
            write_event(writer, Event::End(BytesEnd::new(tag)))
        }
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> CustomResult<(), ClientError> {
    writer
        .write_event(event)
        .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixtures are objects"),
        }
    }

    #[test]
    fn builds_a_document_with_declaration_and_repeated_array_tags() {
        let body = XmlRequestBody::document(map(json!({
            "podlings": ["hup", "kotha", "ydra"],
        })));
        assert_eq!(
            body.build().expect("buildable"),
            "<?xml version='1.0' encoding='utf-8'?>\
             <request><podlings>hup</podlings><podlings>kotha</podlings>\
             <podlings>ydra</podlings></request>"
        );
    }

    #[test]
    fn fragment_mode_omits_the_declaration() {
        let body = XmlRequestBody::fragment(map(json!({"batch_id": 1})));
        assert_eq!(
            body.build().expect("buildable"),
            "<request><batchId>1</batchId></request>"
        );
    }

    #[test]
    fn camelizes_tag_names_and_nests_mappings() {
        let body = XmlRequestBody::document(map(json!({
            "merchant_id": 1,
            "pass_code": "fakekey",
            "rpt_filter_by_1": "batch_id",
        })));
        assert_eq!(
            body.build().expect("buildable"),
            "<?xml version='1.0' encoding='utf-8'?>\
             <request><merchantId>1</merchantId><passCode>fakekey</passCode>\
             <rptFilterBy1>batch_id</rptFilterBy1></request>"
        );
    }

    #[test]
    fn merges_response_format_as_rpt_format() {
        let body =
            XmlRequestBody::document(map(json!({"service_name": "BatchPaymentsETF"})))
                .response_format("JSON");
        assert_eq!(
            body.build().expect("buildable"),
            "<?xml version='1.0' encoding='utf-8'?>\
             <request><serviceName>BatchPaymentsETF</serviceName>\
             <rptFormat>JSON</rptFormat></request>"
        );
    }

    #[test]
    fn tag_names_never_gain_the_contact_field_prefix() {
        let body = XmlRequestBody::fragment(map(json!({
            "name": "Hup Podling",
            "postal_code": "H0H 0H0",
        })));
        assert_eq!(
            body.build().expect("buildable"),
            "<request><name>Hup Podling</name>\
             <postalCode>H0H 0H0</postalCode></request>"
        );
    }

    #[test]
    fn escapes_reserved_characters() {
        let body = XmlRequestBody::fragment(map(json!({"note": "a<b&c"})));
        assert_eq!(
            body.build().expect("buildable"),
            "<request><note>a&lt;b&amp;c</note></request>"
        );
    }
}
