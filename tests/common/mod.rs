#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Json, Router,
    extract::{ConnectInfo, Path},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use shortlink_edge::application::services::{RedirectService, ShortenService};
use shortlink_edge::domain::gateways::{RedirectGateway, ShortenerGateway};
use shortlink_edge::domain::path_rules::PathRules;
use shortlink_edge::domain::redirect::{RedirectLookup, RedirectStatus};
use shortlink_edge::domain::short_code::ShortCode;
use shortlink_edge::domain::shortened_link::ShortenedLink;
use shortlink_edge::error::AppError;
use shortlink_edge::routes::app_router;
use shortlink_edge::state::AppState;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tower::Layer;

/// In-memory redirect API recording every code it is asked about.
#[derive(Default)]
pub struct FakeRedirectGateway {
    answers: HashMap<String, RedirectLookup>,
    calls: Mutex<Vec<String>>,
}

impl FakeRedirectGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: &str, lookup: RedirectLookup) -> Self {
        self.answers.insert(code.to_string(), lookup);
        self
    }

    pub fn redirecting(self, code: &str, location: &str, status: RedirectStatus) -> Self {
        self.with(
            code,
            RedirectLookup::Found {
                location: location.to_string(),
                status,
            },
        )
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RedirectGateway for FakeRedirectGateway {
    async fn lookup(&self, code: &ShortCode) -> RedirectLookup {
        self.calls.lock().unwrap().push(code.to_string());
        self.answers
            .get(code.as_str())
            .cloned()
            .unwrap_or(RedirectLookup::NotFound)
    }
}

/// Canned answer for [`FakeShortenerGateway`].
#[derive(Clone)]
pub enum ShortenReply {
    Link(ShortenedLink),
    Upstream(String, StatusCode),
    Unreachable,
}

/// In-memory shortening API recording every URL it receives.
pub struct FakeShortenerGateway {
    reply: ShortenReply,
    calls: Mutex<Vec<String>>,
}

impl FakeShortenerGateway {
    pub fn new(reply: ShortenReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(code: &str) -> Self {
        Self::new(ShortenReply::Link(ShortenedLink::new(code)))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortenerGateway for FakeShortenerGateway {
    async fn shorten(&self, url: &str) -> Result<ShortenedLink, AppError> {
        self.calls.lock().unwrap().push(url.to_string());
        match &self.reply {
            ShortenReply::Link(link) => Ok(link.clone()),
            ShortenReply::Upstream(message, status) => {
                Err(AppError::upstream(message.clone(), Some(*status)))
            }
            ShortenReply::Unreachable => Err(AppError::network("connection refused")),
        }
    }
}

pub fn create_test_state(
    redirect: Arc<FakeRedirectGateway>,
    shortener: Arc<FakeShortenerGateway>,
    public_origin: Option<&str>,
) -> AppState {
    create_test_state_with_rules(redirect, shortener, public_origin, PathRules::default())
}

pub fn create_test_state_with_rules(
    redirect: Arc<FakeRedirectGateway>,
    shortener: Arc<FakeShortenerGateway>,
    public_origin: Option<&str>,
    rules: PathRules,
) -> AppState {
    let redirect: Arc<dyn RedirectGateway> = redirect;
    let shortener: Arc<dyn ShortenerGateway> = shortener;

    AppState::new(
        RedirectService::new(rules, redirect),
        ShortenService::new(shortener),
        public_origin.map(str::to_string),
    )
}

/// Injects a fixed peer address, as `into_make_service_with_connect_info` would.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// Stand-in for the external redirect and shortening APIs.
///
/// `GET /{code}`:
/// - `perm01` → 301 to `https://example.com/permanent`
/// - `temp01` → 302 to `https://example.com/temporary`
/// - `reloc1` → 302 with a relative `Location`
/// - `noloc1` → 302 without `Location`
/// - `boom01` → 500
/// - anything else → 404
///
/// `POST /shorten`:
/// - URL containing `fail` → 500 `{"error": "Database unavailable"}`
/// - URL containing `garbage` → 200 with a non-JSON body
/// - URL containing `silent` → 500 with an empty body
/// - otherwise → 200 `{"shortCode": "abc123", "longUrl": <url>}`
pub async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/{code}", get(upstream_lookup))
        .route("/shorten", post(upstream_shorten));

    serve(app).await
}

async fn upstream_lookup(Path(code): Path<String>) -> Response {
    match code.as_str() {
        "perm01" => (
            StatusCode::MOVED_PERMANENTLY,
            [(LOCATION, "https://example.com/permanent")],
        )
            .into_response(),
        "temp01" => (StatusCode::FOUND, [(LOCATION, "https://example.com/temporary")])
            .into_response(),
        "reloc1" => (StatusCode::FOUND, [(LOCATION, "/somewhere")]).into_response(),
        "noloc1" => StatusCode::FOUND.into_response(),
        "boom01" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn upstream_shorten(Json(body): Json<Value>) -> Response {
    let url = body["url"].as_str().unwrap_or_default().to_string();

    if url.contains("fail") {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Database unavailable" })),
        )
            .into_response()
    } else if url.contains("garbage") {
        (StatusCode::OK, "definitely not json").into_response()
    } else if url.contains("silent") {
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    } else {
        Json(json!({ "shortCode": "abc123", "longUrl": url })).into_response()
    }
}

/// Runs the full application router on an ephemeral port.
pub async fn spawn_app(state: AppState, behind_proxy: bool) -> String {
    let app = app_router(state, behind_proxy);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            axum::ServiceExt::<axum::extract::Request>::into_make_service_with_connect_info::<
                SocketAddr,
            >(app),
        )
        .await
        .unwrap();
    });

    format!("http://{}", addr)
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", addr)
}

/// Client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
