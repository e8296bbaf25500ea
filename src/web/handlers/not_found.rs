//! Fallback page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};

/// Template for unknown paths, including short codes the redirect API
/// did not recognize.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    path: String,
}

/// Renders the 404 page.
///
/// Router fallback; every path no route claims ends here.
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}
