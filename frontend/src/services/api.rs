//! HTTP client for the conversion server.
//!
//! Two calls, always in this order: `POST /upload` (multipart) then
//! `POST /process` (JSON). Both answer with a JSON envelope that carries
//! either a payload or an `error` field; error statuses still carry the
//! envelope, so the body is decoded regardless of the HTTP status.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::error::{AppError, AppResult};
use crate::types::{ProcessRequest, ProcessResponse, UploadResponse};

/// The two server operations the submission flow depends on.
///
/// Implementations only report transport failures as `Err`; an `error`
/// field in the envelope is left for the caller to interpret.
#[allow(async_fn_in_trait)]
pub trait ConversionApi {
    /// File handle type accepted by [`ConversionApi::upload`].
    type File;

    async fn upload(&self, files: &[Self::File]) -> AppResult<UploadResponse>;

    async fn process(&self, request: &ProcessRequest) -> AppResult<ProcessResponse>;
}

/// Browser implementation on top of `fetch`.
#[derive(Clone, Debug)]
pub struct HttpConversionApi {
    base_url: String,
}

impl HttpConversionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ConversionApi for HttpConversionApi {
    type File = File;

    async fn upload(&self, files: &[File]) -> AppResult<UploadResponse> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Transport(format!("Failed to create FormData: {:?}", e)))?;

        for file in files {
            form_data
                .append_with_blob(UPLOAD_FIELD, file)
                .map_err(|e| AppError::Transport(format!("Failed to append file: {:?}", e)))?;
        }

        let request = Request::post(&self.endpoint("/upload"))
            .body(form_data)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

        log::debug!("POST /upload with {} file(s)", files.len());
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        read_envelope(response).await
    }

    async fn process(&self, request: &ProcessRequest) -> AppResult<ProcessResponse> {
        let request = Request::post(&self.endpoint("/process"))
            .json(request)
            .map_err(|e| AppError::Transport(format!("Failed to build request: {}", e)))?;

        log::debug!("POST /process");
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;
    decode_envelope(status, &body)
}

/// Decode a response body into its envelope.
///
/// A body that is not a valid envelope is a transport error; for error
/// statuses the raw body is more useful than the parser message.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> AppResult<T> {
    serde_json::from_str(body).map_err(|e| {
        if (200..300).contains(&status) {
            AppError::Transport(format!("Failed to parse response: {}", e))
        } else {
            AppError::Transport(format!("Server error ({}): {}", status, body.trim()))
        }
    })
}
