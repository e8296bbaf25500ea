//! Origin extraction from the incoming request.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Reconstructs the origin (`scheme://host[:port]`) the client used.
///
/// The scheme comes from the first `X-Forwarded-Proto` value when it is
/// `http` or `https`, then from the request URI, otherwise `http`. The host,
/// port included, comes from the `Host` header, or from the URI authority
/// (HTTP/2 carries it there as `:authority`).
///
/// # Errors
///
/// Returns [`AppError::Validation`] if neither the `Host` header nor the URI
/// names a host, or the header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "me.dev".parse().unwrap());
/// headers.insert("x-forwarded-proto", "https".parse().unwrap());
///
/// let uri: Uri = "/url-shortner".parse().unwrap();
/// assert_eq!(origin_from_request(&headers, &uri).unwrap(), "https://me.dev");
/// ```
pub fn origin_from_request(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::validation("Invalid Host header"))?
            .trim(),
        None => uri.authority().map(|a| a.as_str()).unwrap_or_default(),
    };

    if host.is_empty() {
        return Err(AppError::validation("Missing Host header"));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .or_else(|| uri.scheme_str().map(str::to_ascii_lowercase))
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host))
}
