//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::{RedirectService, ShortenService};
use crate::domain::gateways::{RedirectGateway, ShortenerGateway};

#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<dyn RedirectGateway>>,
    pub shorten_service: Arc<ShortenService<dyn ShortenerGateway>>,
    /// Origin used for rendered short links. Derived per request when unset.
    pub public_origin: Option<String>,
}

impl AppState {
    pub fn new(
        redirect_service: RedirectService<dyn RedirectGateway>,
        shorten_service: ShortenService<dyn ShortenerGateway>,
        public_origin: Option<String>,
    ) -> Self {
        Self {
            redirect_service: Arc::new(redirect_service),
            shorten_service: Arc::new(shorten_service),
            public_origin,
        }
    }
}
