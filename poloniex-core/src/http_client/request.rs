use crate::error::{Error, Result, TransportError};
use crate::transport::{HttpMethod, RequestEnvelope, Transport};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument};

use super::builder::HttpTransport;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[async_trait]
impl Transport for HttpTransport {
    /// Performs a single attempt; failures are returned, never retried.
    #[instrument(
        name = "http_send",
        skip(self, envelope),
        fields(
            method = %envelope.method,
            url = %envelope.url,
            timeout_ms = %self.config().timeout.as_millis()
        )
    )]
    async fn send(&self, envelope: RequestEnvelope) -> Result<Value> {
        let url = envelope.url.clone();
        let request = match envelope.method {
            HttpMethod::Get => {
                let full_url = envelope.full_url();
                if self.config().verbose {
                    debug!(url = %full_url, "HTTP GET");
                }
                self.client().get(full_url).headers(envelope.headers)
            }
            HttpMethod::Post => {
                let body = envelope.body();
                if self.config().verbose {
                    debug!(body_length = body.len(), "HTTP POST with form body");
                }
                self.client()
                    .post(&envelope.url)
                    .headers(envelope.headers)
                    .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
                    .body(body)
            }
        };

        let response = request.send().await.map_err(|e| {
            debug!(error = %e, "HTTP request send failed");
            Error::from(TransportError::from_reqwest(e))
        })?;

        self.process_response_with_limit(response, &url).await
    }
}
