//! HTTP implementation of the redirect gateway.

use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode, header::LOCATION};
use tracing::debug;
use url::Url;

use crate::domain::gateways::RedirectGateway;
use crate::domain::redirect::{RedirectLookup, RedirectStatus};
use crate::domain::short_code::ShortCode;

/// Calls `GET {base_url}/{code}` on the external redirect API.
///
/// The client must not follow redirects (see
/// [`crate::infrastructure::upstream::build_http_client`]).
pub struct HttpRedirectGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRedirectGateway {
    pub fn new(client: reqwest::Client, base_url: &Url) -> Self {
        Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self, code: &ShortCode) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[async_trait]
impl RedirectGateway for HttpRedirectGateway {
    async fn lookup(&self, code: &ShortCode) -> RedirectLookup {
        let url = self.lookup_url(code);

        match self.client.get(&url).send().await {
            Ok(response) => {
                debug!("Redirect API answered {} for {}", response.status(), code);
                interpret_lookup_response(response.status(), response.headers())
            }
            Err(e) => RedirectLookup::Error(format!("request to {} failed: {}", url, e)),
        }
    }
}

/// Maps a redirect API response onto a [`RedirectLookup`].
///
/// - 301/302 with an absolute http(s) `Location` → `Found`
/// - 301/302 with a missing or unusable `Location` → `Error`
/// - 404 → `NotFound`
/// - anything else → `Error`
pub fn interpret_lookup_response(status: StatusCode, headers: &HeaderMap) -> RedirectLookup {
    if let Some(redirect) = RedirectStatus::from_status(status) {
        return match headers.get(LOCATION).map(|v| v.to_str()) {
            None => RedirectLookup::Error(format!("{} without Location header", status)),
            Some(Err(_)) => RedirectLookup::Error("Location header is not visible ASCII".into()),
            Some(Ok(location)) => match Url::parse(location) {
                Ok(target) if matches!(target.scheme(), "http" | "https") => {
                    RedirectLookup::Found {
                        location: location.to_string(),
                        status: redirect,
                    }
                }
                _ => RedirectLookup::Error(format!("unusable Location header: {}", location)),
            },
        };
    }

    if status == StatusCode::NOT_FOUND {
        return RedirectLookup::NotFound;
    }

    RedirectLookup::Error(format!("unexpected upstream status {}", status))
}
