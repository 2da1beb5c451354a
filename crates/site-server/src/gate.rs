//! Route Gate
//!
//! Only known pages, the API and static assets are served. Any other path is
//! redirected to the homepage instead of rendering a 404.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;

/// Pages the frontend renders
pub const PAGE_PATHS: [&str; 4] = ["/", "/contato", "/politica-de-privacidade", "/termos-de-uso"];

const PASS_PREFIXES: [&str; 3] = ["/api/", "/pkg/", "/assets/"];

const ASSET_EXTENSIONS: [&str; 17] = [
    "png", "jpg", "jpeg", "gif", "svg", "ico", "webp", "avif", "css", "js", "wasm", "map", "txt",
    "xml", "json", "woff", "woff2",
];

/// Outcome of checking a request path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    RedirectHome,
}

#[derive(Clone, Debug)]
pub struct RouteGate {
    exact: Vec<String>,
    prefixes: Vec<String>,
    extensions: Vec<String>,
}

impl Default for RouteGate {
    fn default() -> Self {
        let mut exact: Vec<String> = PAGE_PATHS.iter().map(|p| p.to_string()).collect();
        exact.push("/health".into());

        Self {
            exact,
            prefixes: PASS_PREFIXES.iter().map(|p| p.to_string()).collect(),
            extensions: ASSET_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl RouteGate {
    pub fn decide(&self, path: &str) -> GateDecision {
        if self.exact.iter().any(|p| p == path)
            || self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
            || self.is_asset(path)
        {
            GateDecision::Pass
        } else {
            GateDecision::RedirectHome
        }
    }

    fn is_asset(&self, path: &str) -> bool {
        let file = path.rsplit('/').next().unwrap_or_default();
        match file.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            }
            _ => false,
        }
    }
}

/// Middleware applying the gate to every request
pub async fn route_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    match state.gate.decide(request.uri().path()) {
        GateDecision::Pass => next.run(request).await,
        GateDecision::RedirectHome => {
            tracing::debug!(path = %request.uri().path(), "unknown route, redirecting home");
            Redirect::temporary("/").into_response()
        }
    }
}
