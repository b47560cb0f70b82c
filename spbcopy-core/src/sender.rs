//! Delivery of clipboard content to the remote service.

use reqwest::header::{HeaderValue, ACCEPT_ENCODING};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::{SpbcopyError, SpbcopyResult};

/// Posts content to a clipboard service. One request per call, no retries.
#[derive(Debug, Clone, Default)]
pub struct Sender {
    client: Client,
}

impl Sender {
    pub fn new() -> Self {
        Sender {
            client: Client::new(),
        }
    }

    /// Sends `body` as a POST to `url` and returns the 2xx status.
    ///
    /// The response is requested with identity encoding and its body is never
    /// read. Any status outside 200..=299 becomes `SpbcopyError::Status`.
    pub async fn send(&self, url: &str, body: Vec<u8>) -> SpbcopyResult<StatusCode> {
        let bytes = body.len();
        let response = self
            .client
            .post(url)
            .header(ACCEPT_ENCODING, HeaderValue::from_static("identity"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "Clipboard service rejected request");
            return Err(SpbcopyError::Status(status.as_u16()));
        }

        debug!(url = %url, bytes, status = status.as_u16(), "Content delivered");
        Ok(status)
    }
}
