//! Zone.ee HTTP request methods
//!
//! One authenticated round trip per call, no retries. HTTP 404 is mapped
//! to `Ok(None)`: for this API an absent zone or an empty record
//! collection is a normal state, so callers see absence in the type
//! instead of an error branch.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, ZoneError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::ZoneeuProvider;

impl ZoneeuProvider {
    /// Perform a GET request, parsing the JSON body. `Ok(None)` on 404.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        match self.execute(Method::GET, path, None::<&()>).await? {
            Some(body) => Ok(Some(parse_json(&body)?)),
            None => Ok(None),
        }
    }

    /// Perform a POST request with a JSON body.
    pub(crate) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(Method::POST, path, Some(body)).await.map(drop)
    }

    /// Perform a PUT request with a JSON body.
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.execute(Method::PUT, path, Some(body)).await.map(drop)
    }

    /// Perform a DELETE request. A 404 means the record is already gone.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, None::<&()>).await.map(drop)
    }

    /// Execute one round trip and return the response body, `None` on 404.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<String>> {
        let url = format!("{}{}", self.api_base, path);
        log::debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .header(
                "Authorization",
                format!("Basic {}", self.credentials.basic_token()),
            )
            .header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ZoneError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ZoneError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("Response Status: {status}");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ZoneError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        if !status.is_success() {
            let err = map_status_error(status.as_u16(), response_text);
            if err.is_expected() {
                log::warn!("{err}");
            } else {
                log::error!("{err}");
            }
            return Err(err);
        }

        log::debug!("Response Body: {}", truncate_for_log(&response_text));
        Ok(Some(response_text))
    }
}

/// Map a non-success, non-404 status to its error variant.
fn map_status_error(status: u16, raw_message: String) -> ZoneError {
    match status {
        401 | 403 => ZoneError::InvalidCredentials {
            raw_message: Some(raw_message),
        },
        _ => ZoneError::ApiError {
            status,
            raw_message,
        },
    }
}

/// Parse a JSON response body.
fn parse_json<T: DeserializeOwned>(response_text: &str) -> Result<T> {
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(response_text));
        ZoneError::ParseError {
            detail: e.to_string(),
        }
    })
}
