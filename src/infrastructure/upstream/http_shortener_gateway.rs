//! HTTP implementation of the shortener gateway.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::domain::gateways::ShortenerGateway;
use crate::domain::shortened_link::ShortenedLink;
use crate::error::{AppError, ErrorBody, SHORTEN_FAILED};

#[derive(Serialize)]
struct ShortenPayload<'a> {
    url: &'a str,
}

/// Posts `{"url": ...}` to a shortening endpoint.
///
/// Works against the external shortening API and against this service's
/// own `/api/shorten` proxy.
pub struct HttpShortenerGateway {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpShortenerGateway {
    pub fn new(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ShortenerGateway for HttpShortenerGateway {
    async fn shorten(&self, url: &str) -> Result<ShortenedLink, AppError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ShortenPayload { url })
            .send()
            .await?;

        let status = response.status();
        debug!("Shortening API answered {}", status);

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| SHORTEN_FAILED.to_string());

            return Err(AppError::upstream(message, Some(status)));
        }

        response.json::<ShortenedLink>().await.map_err(|e| {
            AppError::upstream(format!("Malformed upstream response: {}", e), Some(status))
        })
    }
}
