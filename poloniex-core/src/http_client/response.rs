use crate::error::{Error, Result, TransportError};
use reqwest::Response;
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};

use super::builder::HttpTransport;

const BODY_PREVIEW_SIZE: usize = 200;

impl HttpTransport {
    #[instrument(
        name = "http_process_response_with_limit",
        skip(self, response),
        fields(status, url = %url)
    )]
    pub(crate) async fn process_response_with_limit(
        &self,
        response: Response,
        url: &str,
    ) -> Result<Value> {
        let status = response.status();
        let max_size = self.config().max_response_size;

        tracing::Span::current().record("status", status.as_u16());

        if let Some(content_length) = response.content_length()
            && content_length > max_size as u64
        {
            warn!(
                url = %url,
                content_length = content_length,
                max_size = max_size,
                "Response exceeds size limit (Content-Length check)"
            );
            return Err(TransportError::ResponseTooLarge {
                size: content_length,
                limit: max_size as u64,
            }
            .into());
        }

        let body_bytes = Self::stream_response_with_limit(response, url, max_size).await?;
        let body_preview = preview(&body_bytes);

        debug!(
            status = %status,
            body_length = body_bytes.len(),
            body_preview = %body_preview,
            "HTTP response received"
        );

        if !status.is_success() {
            debug!(
                status = status.as_u16(),
                body_preview = %body_preview,
                "HTTP error response"
            );
            let message = if body_bytes.is_empty() {
                status.canonical_reason().unwrap_or("").to_string()
            } else {
                String::from_utf8_lossy(&body_bytes).into_owned()
            };
            return Err(Error::request_failed(status.as_u16(), message));
        }

        parse_body(&body_bytes)
    }

    async fn stream_response_with_limit(
        response: Response,
        url: &str,
        max_size: usize,
    ) -> Result<Vec<u8>> {
        use futures_util::StreamExt;

        #[allow(clippy::cast_possible_truncation)]
        let initial_capacity = response
            .content_length()
            .map_or(64 * 1024, |len| std::cmp::min(len as usize, max_size));

        let mut stream = response.bytes_stream();
        let mut body = Vec::with_capacity(initial_capacity);
        let mut accumulated_size: usize = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| {
                trace!(error = %e, "Failed to read response chunk");
                Error::from(TransportError::from_reqwest(e))
            })?;

            accumulated_size = accumulated_size.saturating_add(chunk.len());

            if accumulated_size > max_size {
                warn!(
                    url = %url,
                    accumulated_size = accumulated_size,
                    max_size = max_size,
                    "Response exceeds size limit during streaming"
                );
                return Err(TransportError::ResponseTooLarge {
                    size: accumulated_size as u64,
                    limit: max_size as u64,
                }
                .into());
            }

            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

/// Parses a successful body. Whitespace-only bodies become `Value::Null`.
pub(crate) fn parse_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| {
        Error::from(TransportError::Decode(format!(
            "{e} (body starts with: {})",
            preview(bytes)
        )))
    })
}

fn preview(bytes: &[u8]) -> String {
    let end = bytes.len().min(BODY_PREVIEW_SIZE);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
