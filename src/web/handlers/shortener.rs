//! Shortening form page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, Uri},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::domain::form::{COPIED_FLASH, ShortenForm};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::origin_from_request;

/// Template for the shortening page.
///
/// Renders `templates/shortener.html` with:
/// - URL input (kept across submissions)
/// - Error message, when the last submission failed
/// - Short link with copy button, when it succeeded
#[derive(Template, WebTemplate)]
#[template(path = "shortener.html")]
pub struct ShortenerTemplate {
    pub url: String,
    pub short_url: Option<String>,
    pub error: Option<String>,
    pub copied_flash_ms: u128,
}

impl ShortenerTemplate {
    pub fn from_form(form: &ShortenForm) -> Self {
        Self {
            url: form.url().to_string(),
            short_url: form.short_url().map(str::to_string),
            error: form.error().map(str::to_string),
            copied_flash_ms: COPIED_FLASH.as_millis(),
        }
    }
}

/// Urlencoded body posted by the page's form.
#[derive(Debug, Deserialize)]
pub struct ShortenFormInput {
    #[serde(default)]
    pub url: String,
}

/// Renders an empty form.
///
/// # Endpoint
///
/// `GET /url-shortner`
pub async fn shortener_page() -> impl IntoResponse {
    ShortenerTemplate::from_form(&ShortenForm::default())
}

/// Submits the form and renders the outcome.
///
/// # Endpoint
///
/// `POST /url-shortner`
///
/// # Flow
///
/// 1. Validate locally (non-empty, `http://` or `https://`); failures render
///    without any upstream call
/// 2. Shorten through [`crate::application::services::ShortenService`]
/// 3. Render `<origin>/<shortCode>` or the error message
///
/// The origin is `PUBLIC_ORIGIN` when configured, otherwise rebuilt from
/// the `Host` and `X-Forwarded-Proto` headers or the request URI. It is only
/// resolved once the URL passes local validation.
///
/// # Errors
///
/// Returns 400 Bad Request if a valid URL was submitted but no origin is
/// configured and the request names no host.
pub async fn shortener_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Form(input): Form<ShortenFormInput>,
) -> Result<impl IntoResponse, AppError> {
    let public_origin = state.public_origin.clone();
    let origin = move || match public_origin {
        Some(origin) => Ok(origin),
        None => origin_from_request(&headers, &uri),
    };

    let mut form = ShortenForm::new(input.url);
    state.shorten_service.submit_form(&mut form, origin).await?;

    Ok(ShortenerTemplate::from_form(&form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shortened_link::ShortenedLink;

    #[test]
    fn test_renders_idle_form() {
        let html = ShortenerTemplate::from_form(&ShortenForm::default())
            .render()
            .unwrap();

        assert!(html.contains("name=\"url\""));
        assert!(!html.contains("Your shortened URL"));
    }

    #[test]
    fn test_renders_short_link_and_copy_flash() {
        let mut form = ShortenForm::new("https://example.com");
        form.submit().unwrap();
        form.complete("https://me.dev", &ShortenedLink::new("abc123"));

        let html = ShortenerTemplate::from_form(&form).render().unwrap();

        assert!(html.contains("https://me.dev/abc123"));
        assert!(html.contains("data-copied-flash-ms=\"2000\""));
    }

    #[test]
    fn test_error_is_escaped() {
        let mut form = ShortenForm::new("https://example.com");
        form.submit().unwrap();
        form.fail(Some("<b>nope</b>"));

        let html = ShortenerTemplate::from_form(&form).render().unwrap();

        assert!(!html.contains("<b>nope</b>"));
        assert!(html.contains("&#60;b&#62;nope&#60;/b&#62;"));
    }
}
