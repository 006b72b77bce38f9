//! Blocking REST transport.
//!
//! One `RestClient` per base URL. Every public method performs exactly one
//! outbound HTTP call, captures the raw envelope, and runs adapter
//! dispatch on the result. No retries, no timeout contract beyond the
//! transport defaults, no claims about concurrent reuse.

use error_stack::ResultExt;
use serde_json::{Map, Value};

use crate::{
    adapters,
    auth::{Credentials, Headers},
    builders::{multipart::MultipartMixedRequest, xml::XmlRequestBody},
    consts::{headers, APPLICATION_XML},
    errors::{ClientError, CustomResult},
    request::{Method, Request, RequestBuilder, RequestContent},
    response::{ApiResponse, Response},
};

#[derive(Debug)]
pub struct RestClient {
    base_url: url::Url,
    merchant_id: String,
    sub_merchant_id: Option<String>,
    http: reqwest::blocking::Client,
}

impl RestClient {
    pub fn new(
        base_url: &str,
        merchant_id: impl Into<String>,
        sub_merchant_id: Option<String>,
    ) -> CustomResult<Self, ClientError> {
        let base_url = url::Url::parse(base_url)
            .change_context(ClientError::UrlConstruction)
            .attach_printable_lazy(|| format!("base url: {base_url}"))?;
        Ok(Self {
            base_url,
            merchant_id: merchant_id.into(),
            sub_merchant_id,
            http: reqwest::blocking::Client::new(),
        })
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn sub_merchant_id(&self) -> Option<&str> {
        self.sub_merchant_id.as_deref()
    }

    pub(crate) fn credentials(&self, api_key: crate::secret::Secret<String>) -> Credentials {
        Credentials {
            merchant_id: self.merchant_id.clone(),
            sub_merchant_id: self.sub_merchant_id.clone(),
            api_key,
        }
    }

    /// GET with JSON response handling.
    pub fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
        credentials: &Credentials,
    ) -> CustomResult<ApiResponse, ClientError> {
        let request = RequestBuilder::new()
            .method(Method::Get)
            .path(path)
            .query(query)
            .headers(
                Headers::new(credentials)
                    .content_type(mime::APPLICATION_JSON.essence_str())
                    .build(),
            )
            .build();
        self.round_trip(request)
    }

    /// POST/PUT a JSON body.
    pub fn send_json(
        &self,
        method: Method,
        path: &str,
        body: Value,
        credentials: &Credentials,
    ) -> CustomResult<ApiResponse, ClientError> {
        let request = RequestBuilder::new()
            .method(method)
            .path(path)
            .headers(
                Headers::new(credentials)
                    .content_type(mime::APPLICATION_JSON.essence_str())
                    .build(),
            )
            .set_body(RequestContent::Json(body))
            .build();
        self.round_trip(request)
    }

    /// DELETE with JSON response handling.
    pub fn delete(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> CustomResult<ApiResponse, ClientError> {
        let request = RequestBuilder::new()
            .method(Method::Delete)
            .path(path)
            .headers(Headers::new(credentials).build())
            .build();
        self.round_trip(request)
    }

    /// POST a url-encoded form body. The legacy form endpoints
    /// authenticate through a `pass_code` field in the body, so no
    /// `Authorization` header is attached.
    pub fn post_form(
        &self,
        path: &str,
        body: Map<String, Value>,
    ) -> CustomResult<ApiResponse, ClientError> {
        let body = RequestContent::FormUrlEncoded(body);
        let request = RequestBuilder::new()
            .method(Method::Post)
            .path(path)
            .headers(vec![(
                headers::CONTENT_TYPE.to_string(),
                body.content_type(),
            )])
            .set_body(body)
            .build();
        self.round_trip(request)
    }

    /// POST an XML document body. Authentication travels in the body here
    /// as well (`passCode` element).
    pub fn post_xml(
        &self,
        path: &str,
        body: XmlRequestBody,
    ) -> CustomResult<ApiResponse, ClientError> {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .path(path)
            .headers(vec![(
                headers::CONTENT_TYPE.to_string(),
                APPLICATION_XML.to_string(),
            )])
            .set_body(RequestContent::Xml(body))
            .build();
        self.round_trip(request)
    }

    /// POST the batch payment multipart upload.
    pub fn post_multipart(
        &self,
        path: &str,
        payload: MultipartMixedRequest,
        credentials: &Credentials,
    ) -> CustomResult<ApiResponse, ClientError> {
        let content_type = payload.content_type();
        let request = RequestBuilder::new()
            .method(Method::Post)
            .path(path)
            .headers(Headers::new(credentials).content_type(content_type).build())
            .set_body(RequestContent::MultipartMixed(payload))
            .build();
        self.round_trip(request)
    }

    fn round_trip(&self, request: Request) -> CustomResult<ApiResponse, ClientError> {
        let response = self.execute(request)?;
        adapters::parse(&response)
    }

    fn execute(&self, request: Request) -> CustomResult<Response, ClientError> {
        let mut url = self
            .base_url
            .join(&request.path)
            .change_context(ClientError::UrlConstruction)
            .attach_printable_lazy(|| format!("path: {}", request.path))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        tracing::debug!(method = %request.method, url = %url, "dispatching request");

        let mut builder = self.http.request(method, url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let request_body = match &request.body {
            Some(content) => Some(content.encode()?),
            None => None,
        };
        if let Some(body) = request_body.clone() {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .change_context(ClientError::RequestFailed)
            .attach_printable_lazy(|| format!("url: {url}"))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        let body = response
            .text()
            .change_context(ClientError::RequestFailed)?;

        tracing::debug!(status, ?content_type, "received response");

        Ok(Response {
            status,
            content_type,
            body,
            request_body,
        })
    }
}
