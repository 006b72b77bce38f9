//! Multipart bodies for the batch payment file upload.
//!
//! Exactly two parts under one boundary: a `criteria` part carrying the
//! request parameters as JSON, and a `data` part carrying the CSV file
//! contents. The gateway matches the file to the sub-merchant through the
//! `merchant_<sub_merchant_id>.txt` filename pattern.

use rand::{distributions::Alphanumeric, Rng};
use serde_json::Value;

use crate::errors::{ClientError, CustomResult};

const CRITERIA_CONTENT_TYPE: &str = "application/json";
const FILE_CONTENT_TYPE: &str = "text/plain";

#[derive(Debug, Clone)]
pub struct MultipartMixedRequest {
    boundary: String,
    criteria: String,
    filename: String,
    file_contents: String,
}

impl MultipartMixedRequest {
    /// Assembles the payload from the criteria mapping and file contents.
    pub fn new(
        criteria: &Value,
        filename: impl Into<String>,
        file_contents: impl Into<String>,
    ) -> CustomResult<Self, ClientError> {
        let criteria = serde_json::to_string(criteria)
            .map_err(|_| error_stack::report!(ClientError::RequestEncodingFailed))?;
        Ok(Self {
            boundary: generate_boundary(),
            criteria,
            filename: filename.into(),
            file_contents: file_contents.into(),
        })
    }

    /// The `Content-Type` header value, boundary included.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// The fully serialized, CRLF-terminated body.
    pub fn body(&self) -> String {
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"criteria\"\r\n\
             Content-Type: {criteria_type}\r\n\
             \r\n\
             {criteria}\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"data\"; filename=\"{filename}\"\r\n\
             Content-Type: {file_type}\r\n\
             Content-Transfer-Encoding: binary\r\n\
             \r\n\
             {file_contents}\r\n\
             --{boundary}--\r\n",
            boundary = self.boundary,
            criteria_type = CRITERIA_CONTENT_TYPE,
            criteria = self.criteria,
            filename = self.filename,
            file_type = FILE_CONTENT_TYPE,
            file_contents = self.file_contents,
        )
    }
}

fn generate_boundary() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();
    format!("bambora-boundary-{suffix}")
}
