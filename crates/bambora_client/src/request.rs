//! Outgoing request envelope and per-format body content.

use serde::{Deserialize, Serialize};

use crate::{
    builders::{multipart::MultipartMixedRequest, www_form, xml::XmlRequestBody},
    consts::APPLICATION_XML,
    errors::{ClientError, CustomResult},
};

#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request body together with the encoding the gateway expects for it.
pub enum RequestContent {
    /// JSON body for the `/v1` APIs.
    Json(serde_json::Value),
    /// Url-encoded form body; empty-valued pairs are dropped on encode.
    FormUrlEncoded(serde_json::Map<String, serde_json::Value>),
    /// Pre-assembled XML document or fragment.
    Xml(XmlRequestBody),
    /// Two-part batch upload body (criteria JSON + file contents).
    MultipartMixed(MultipartMixedRequest),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
            Self::Xml(_) => "XmlRequestBody",
            Self::MultipartMixed(_) => "MultipartMixedRequestBody",
        })
    }
}

impl RequestContent {
    /// The `Content-Type` value matching this body.
    pub fn content_type(&self) -> String {
        match self {
            Self::Json(_) => mime::APPLICATION_JSON.essence_str().to_string(),
            Self::FormUrlEncoded(_) => {
                mime::APPLICATION_WWW_FORM_URLENCODED.essence_str().to_string()
            }
            Self::Xml(_) => APPLICATION_XML.to_string(),
            Self::MultipartMixed(multipart) => multipart.content_type(),
        }
    }

    /// Serializes the body to its wire form.
    pub fn encode(&self) -> CustomResult<String, ClientError> {
        match self {
            Self::Json(value) => serde_json::to_string(value)
                .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed)),
            Self::FormUrlEncoded(map) => www_form::encode(map),
            Self::Xml(body) => body.build(),
            Self::MultipartMixed(multipart) => Ok(multipart.body()),
        }
    }
}

/// One fully assembled outgoing request. Constructed fresh per call, never
/// reused.
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestContent>,
}

#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<RequestContent>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            path: String::new(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn set_body(mut self, body: RequestContent) -> Self {
        self.body.replace(body);
        self
    }

    pub fn build(self) -> Request {
        Request {
            method: self.method,
            path: self.path,
            query: self.query,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
